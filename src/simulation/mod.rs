//! Sandbox - the simulation driver
//!
//! `SandboxCore` owns the grid and everything around it: which mode runs,
//! when the next tick is due, the counters and the render buffers. It only
//! orchestrates; the tick algorithms live in `systems::steppers`.
//!
//! Life and gravity are mutually exclusive. Starting one stops the other,
//! a single step stops both, and edits (toggle, clear, randomize) never
//! change the mode.

use crate::core::SandboxResult;
use crate::domain::{Cell, CellState, SandboxConfig};
use crate::grid::Grid;
use crate::systems::steppers::{BuilderRules, FlowDirection, StepReport, StepperRegistry};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/stats.rs"]
mod stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "schedule/scheduler.rs"]
mod scheduler;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render;
mod facade;

pub use facade::World;
pub use render::{FrameView, RenderSink};
pub use scheduler::{RunToken, SimMode};
pub use stats::{Counters, EngineStats};

use perf_timer::TickTimer;
use render::RenderBuffers;
use scheduler::TickScheduler;

pub struct SandboxCore {
    config: SandboxConfig,
    rules: BuilderRules,
    grid: Grid,
    steppers: StepperRegistry,
    scheduler: TickScheduler,

    // Shared water bias, survives across gravity ticks
    flow: FlowDirection,

    counters: Counters,
    tick: u64,
    rng_state: u32,

    render: RenderBuffers,
    sink: Option<Box<dyn RenderSink>>,

    last_report: StepReport,
    last_tick_ms: f64,
}

impl SandboxCore {
    /// Default settings at the given size
    pub fn new(rows: u32, cols: u32) -> SandboxResult<Self> {
        init::create_core(SandboxConfig::with_size(rows, cols))
    }

    pub fn with_config(config: SandboxConfig) -> SandboxResult<Self> {
        init::create_core(config)
    }

    pub fn from_json(json: &str) -> SandboxResult<Self> {
        init::create_core(SandboxConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SandboxConfig { &self.config }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn counters(&self) -> Counters { self.counters }

    pub fn generation(&self) -> u64 { self.counters.generation }

    pub fn alive_count(&self) -> u32 { self.counters.alive }

    pub fn trapper_count(&self) -> u32 { self.counters.trappers }

    /// Ticks of either kind since the last clear
    pub fn tick_count(&self) -> u64 { self.tick }

    pub fn mode(&self) -> SimMode { self.scheduler.mode() }

    pub fn speed(&self) -> u8 { self.scheduler.speed() }

    pub fn delay_ms(&self) -> u32 { self.scheduler.delay_ms() }

    pub fn flow(&self) -> FlowDirection { self.flow }

    pub fn last_report(&self) -> StepReport { self.last_report }

    pub fn get_cell(&self, row: i64, col: i64) -> SandboxResult<CellState> {
        self.grid.get(row, col)
    }

    pub fn cell(&self, row: i64, col: i64) -> SandboxResult<Cell> {
        self.grid.cell(row, col)
    }

    // === EDITS ===

    /// Paint or erase one cell; returns the state it ended up with
    pub fn toggle_cell(&mut self, row: i64, col: i64, desired: CellState) -> SandboxResult<CellState> {
        commands::toggle_cell(self, row, col, desired)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Clear, then scatter alive, trapper and voyager cells; a larger `max`
    /// gives a sparser board
    pub fn randomize(&mut self, max: u32) -> usize {
        commands::randomize(self, max)
    }

    // === MODES ===

    pub fn start_life(&mut self) -> RunToken {
        commands::start(self, SimMode::LifeRunning)
    }

    pub fn stop_life(&mut self) -> bool {
        commands::stop(self, SimMode::LifeRunning)
    }

    pub fn start_gravity(&mut self) -> RunToken {
        commands::start(self, SimMode::GravityRunning)
    }

    pub fn stop_gravity(&mut self) -> bool {
        commands::stop(self, SimMode::GravityRunning)
    }

    /// Stop whichever mode is running
    pub fn stop(&mut self) -> bool {
        commands::stop_all(self)
    }

    pub fn is_run_active(&self, token: RunToken) -> bool {
        self.scheduler.is_active(token)
    }

    // === TICKS ===

    /// Stop any running mode and advance one life generation
    pub fn step_once(&mut self) -> StepReport {
        step::step_once(self)
    }

    /// Drive the running mode from the host clock; true when a tick ran
    pub fn frame(&mut self, now_ms: f64) -> bool {
        step::frame(self, now_ms)
    }

    // === SPEED ===

    pub fn increase_speed(&mut self) -> bool {
        settings::increase_speed(self)
    }

    pub fn decrease_speed(&mut self) -> bool {
        settings::decrease_speed(self)
    }

    pub fn set_speed(&mut self, speed: u8) -> bool {
        settings::set_speed(self, speed)
    }

    // === RENDERING ===

    pub fn set_render_sink(&mut self, sink: Box<dyn RenderSink>) {
        settings::set_render_sink(self, sink)
    }

    pub fn clear_render_sink(&mut self) {
        settings::clear_render_sink(self)
    }

    pub fn states(&self) -> &[u8] { &self.render.states }

    pub fn colors(&self) -> &[u32] { &self.render.colors }

    /// Pointer to the state bytes (for JS rendering)
    pub fn states_ptr(&self) -> *const u8 { self.render.states.as_ptr() }

    /// Pointer to the ABGR colours (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 { self.render.colors.as_ptr() }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            tick: self.tick,
            generation: self.counters.generation,
            alive: self.counters.alive,
            trappers: self.counters.trappers,
            mode: self.scheduler.mode(),
            speed: self.scheduler.speed(),
            delay_ms: self.scheduler.delay_ms(),
            flow: self.flow,
            last_tick_ms: self.last_tick_ms,
            last_report: self.last_report,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
