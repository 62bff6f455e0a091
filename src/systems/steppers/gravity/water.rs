use crate::domain::CellState;

use super::super::{StepContext, StepReport};

#[inline]
fn is_free(ctx: &StepContext, row: i32, col: i32) -> bool {
    ctx.grid.scratch_state_at(row, col) == Some(CellState::Dead)
}

/// Move one water cell: fall if possible, otherwise spread along the shared
/// flow bias. A blocked cell reverses the bias for everyone and stays put.
pub(super) fn update(ctx: &mut StepContext, row: i32, col: i32, report: &mut StepReport) {
    if is_free(ctx, row + 1, col) {
        ctx.grid.swap_scratch((row, col), (row + 1, col));
        report.moves += 1;
        return;
    }

    let side = col + ctx.flow.col_delta();
    if is_free(ctx, row, side) {
        ctx.grid.swap_scratch((row, col), (row, side));
        report.moves += 1;
        return;
    }

    *ctx.flow = ctx.flow.flipped();
    report.flips += 1;
    ctx.grid.write_state(row, col, CellState::WATER);
}
