//! LifeStepper - Conway rules plus trappers, voyagers and builders
//!
//! Row-major walk. Every decision reads the committed grid; every result goes
//! to scratch. A cell can therefore be written twice in one pass (a voyager
//! arriving, a stamp landing, then the cell's own rule) and the last write
//! wins. Dead cells that stay dead write nothing, so whatever arrived there
//! earlier in the pass survives.

use crate::domain::{BuilderMode, Cell, CellState};
use crate::grid::NeighborCounts;
use crate::systems::stamper;

use super::{BuilderRules, StepContext, StepReport, Stepper};

pub struct LifeStepper;

impl LifeStepper {
    pub fn new() -> Self {
        Self
    }

    /// Birth on 3, survival on 2 or 3
    #[inline]
    fn next_alive(alive_neighbors: u8) -> CellState {
        if alive_neighbors > 1 && alive_neighbors < 4 {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    fn update_builder(
        ctx: &mut StepContext,
        row: u32,
        col: u32,
        cell: Cell,
        counts: NeighborCounts,
        report: &mut StepReport,
    ) {
        let (r, c) = (row as i32, col as i32);

        // Crowded builders turn into plain life
        if counts.alive == 3 {
            ctx.grid.write_state(r, c, CellState::Alive);
            return;
        }

        let mut cooldown = cell.cooldown;
        if cooldown == Some(0) {
            stamper::stamp(ctx.grid, row, col, ctx.rules.pattern);
            report.stamps += 1;
            cooldown = Self::rearm(ctx.rules);
        }

        ctx.grid.write(r, c, Cell::builder(cooldown.map(|n| n.saturating_sub(1))));
    }

    #[inline]
    fn rearm(rules: &BuilderRules) -> Option<u32> {
        match rules.mode {
            BuilderMode::SingleShot => None,
            BuilderMode::Repeating => Some(rules.default_cooldown),
        }
    }
}

impl Stepper for LifeStepper {
    fn step(&self, ctx: &mut StepContext) -> StepReport {
        let mut report = StepReport::default();
        ctx.grid.begin_pass();

        let counts = ctx.grid.all_neighbor_counts();
        let (rows, cols) = (ctx.grid.rows(), ctx.grid.cols());

        for row in 0..rows {
            for col in 0..cols {
                let idx = ctx.grid.index(row, col);
                let cell = ctx.grid.current_idx(idx);
                let n = counts[idx];
                let (r, c) = (row as i32, col as i32);

                match cell.state {
                    CellState::Builder => {
                        Self::update_builder(ctx, row, col, cell, n, &mut report);
                    }
                    CellState::Alive | CellState::Voyager if n.trappers > 0 => {
                        ctx.grid.write_state(r, c, CellState::Trapper);
                    }
                    CellState::Voyager => {
                        // Ignores life rules and drifts right; at the last
                        // column it leaves the board.
                        ctx.grid.write_state(r, c, CellState::Dead);
                        if ctx.grid.write_state(r, c + 1, CellState::Voyager) {
                            report.moves += 1;
                        }
                    }
                    CellState::Alive => {
                        ctx.grid.write_state(r, c, Self::next_alive(n.alive));
                    }
                    CellState::Dead => {
                        if n.alive == 3 {
                            ctx.grid.write_state(r, c, CellState::Alive);
                        }
                    }
                    CellState::Trapper => {
                        ctx.grid.write_state(r, c, CellState::Trapper);
                    }
                }
            }
        }

        report
    }
}
