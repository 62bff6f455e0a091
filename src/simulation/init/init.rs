use crate::core::SandboxResult;
use crate::domain::SandboxConfig;
use crate::grid::Grid;
use crate::systems::steppers::{BuilderRules, FlowDirection, StepReport, StepperRegistry};

use super::random::seed_state;
use super::render::RenderBuffers;
use super::{Counters, SandboxCore, TickScheduler};

pub(super) fn create_core(config: SandboxConfig) -> SandboxResult<SandboxCore> {
    config.validate()?;

    let grid = Grid::new(config.rows, config.cols);
    let render = RenderBuffers::new(grid.size());
    let mut core = SandboxCore {
        rules: BuilderRules::from(&config),
        grid,
        steppers: StepperRegistry::new(),
        scheduler: TickScheduler::new(config.speed),
        flow: FlowDirection::default(),
        counters: Counters::default(),
        tick: 0,
        rng_state: seed_state(config.seed),
        render,
        sink: None,
        last_report: StepReport::default(),
        last_tick_ms: 0.0,
        config,
    };
    super::render::publish(&mut core);

    console_log!(
        "sandbox {}x{} ready ({:?} builders, {} pattern)",
        core.config.rows,
        core.config.cols,
        core.config.builder_mode,
        core.config.pattern.name()
    );
    Ok(core)
}
