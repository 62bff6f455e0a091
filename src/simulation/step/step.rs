use crate::systems::steppers::{StepContext, StepKind, StepReport};

use super::commands;
use super::render;
use super::{SandboxCore, TickTimer};

/// One whole tick: stepper pass into scratch, commit, then counters and
/// rendering see the finished grid.
pub(super) fn tick(world: &mut SandboxCore, kind: StepKind) -> StepReport {
    let timer = TickTimer::start();

    let mut ctx = StepContext {
        grid: &mut world.grid,
        rules: &world.rules,
        flow: &mut world.flow,
    };
    let report = world.steppers.step(kind, &mut ctx);
    world.grid.commit();

    world.tick += 1;
    if kind == StepKind::Life {
        world.counters.generation += 1;
    }
    world.last_report = report;
    world.last_tick_ms = timer.elapsed_ms();

    render::publish(world);
    report
}

/// Host animation-frame hook. Runs at most one tick; returns whether it did.
pub(super) fn frame(world: &mut SandboxCore, now_ms: f64) -> bool {
    let Some(kind) = world.scheduler.poll(now_ms) else {
        return false;
    };
    tick(world, kind);
    world.scheduler.mark_ticked(now_ms);
    true
}

/// Manual single life tick. Whatever was running stops first.
pub(super) fn step_once(world: &mut SandboxCore) -> StepReport {
    commands::stop_all(world);
    tick(world, StepKind::Life)
}
