//! Render extraction
//!
//! After every commit (and every edit) the core flattens the grid into two
//! host-readable buffers, one state byte and one ABGR colour per cell, and
//! hands a borrowed view to the registered sink. The engine never draws.

use crate::domain::Cell;

use super::{Counters, SandboxCore, SimMode};

/// Read-only view of a finished tick
pub struct FrameView<'a> {
    pub rows: u32,
    pub cols: u32,
    pub tick: u64,
    pub mode: SimMode,
    pub counters: Counters,
    pub cells: &'a [Cell],
    pub states: &'a [u8],
    pub colors: &'a [u32],
}

impl FrameView<'_> {
    #[inline]
    pub fn state_at(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.states.get((row * self.cols + col) as usize).copied()
    }
}

/// Receives every finished frame
pub trait RenderSink {
    fn present(&mut self, frame: &FrameView<'_>);
}

impl<F> RenderSink for F
where
    F: FnMut(&FrameView<'_>),
{
    fn present(&mut self, frame: &FrameView<'_>) {
        self(frame)
    }
}

pub(crate) struct RenderBuffers {
    pub(crate) states: Vec<u8>,
    pub(crate) colors: Vec<u32>,
}

impl RenderBuffers {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            states: vec![0; size],
            colors: vec![Cell::DEAD.state.color(); size],
        }
    }
}

/// Recount, refill the buffers, notify the sink
pub(super) fn publish(world: &mut SandboxCore) {
    world.counters.reset_population();

    let cells = world.grid.cells();
    for (i, cell) in cells.iter().enumerate() {
        world.render.states[i] = cell.state.as_u8();
        world.render.colors[i] = cell.state.color();
        world.counters.tally(cell.state);
    }

    let Some(sink) = world.sink.as_mut() else {
        return;
    };
    let frame = FrameView {
        rows: world.grid.rows(),
        cols: world.grid.cols(),
        tick: world.tick,
        mode: world.scheduler.mode(),
        counters: world.counters,
        cells,
        states: &world.render.states,
        colors: &world.render.colors,
    };
    sink.present(&frame);
}
