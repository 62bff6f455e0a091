//! GravityStepper - falling sand and spreading water
//!
//! In gravity mode the life states are read as materials: Alive is sand,
//! Trapper is water, Voyager and Builder are fixed walls.
//!
//! Rows are walked from the second-to-last up to the top so a particle falls
//! at most one cell per tick; the bottom row never moves. A particle's own
//! kind comes from the committed grid, but destination checks read scratch:
//! a cell already claimed this pass is occupied, a cell not touched yet still
//! holds its committed value.

mod sand;
mod water;

use crate::domain::CellState;

use super::{StepContext, StepReport, Stepper};

pub struct GravityStepper;

impl GravityStepper {
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for GravityStepper {
    fn step(&self, ctx: &mut StepContext) -> StepReport {
        let mut report = StepReport::default();
        ctx.grid.begin_pass();

        let (rows, cols) = (ctx.grid.rows(), ctx.grid.cols());
        if rows < 2 {
            return report;
        }

        for row in (0..rows - 1).rev() {
            for col in 0..cols {
                let cell = ctx.grid.current_idx(ctx.grid.index(row, col));
                let (r, c) = (row as i32, col as i32);

                match cell.state {
                    CellState::Dead => {}
                    CellState::Alive => sand::update(ctx, r, c, &mut report),
                    CellState::Trapper => water::update(ctx, r, c, &mut report),
                    CellState::Voyager | CellState::Builder => {
                        ctx.grid.write(r, c, cell);
                    }
                }
            }
        }

        report
    }
}
