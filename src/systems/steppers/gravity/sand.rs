use crate::domain::CellState;

use super::super::{StepContext, StepReport};

/// Down, then down-right, then down-left
const FALL_ORDER: [(i32, i32); 3] = [(1, 0), (1, 1), (1, -1)];

/// Sand falls into empty space and sinks through water
#[inline]
fn can_displace(state: CellState) -> bool {
    matches!(state, CellState::Dead | CellState::WATER)
}

/// Move one sand grain. The displaced void or water takes the grain's old
/// slot, so nothing is created or lost.
pub(super) fn update(ctx: &mut StepContext, row: i32, col: i32, report: &mut StepReport) {
    for (dr, dc) in FALL_ORDER {
        let (tr, tc) = (row + dr, col + dc);
        let Some(target) = ctx.grid.scratch_state_at(tr, tc) else {
            continue;
        };
        if can_displace(target) && ctx.grid.swap_scratch((row, col), (tr, tc)) {
            report.moves += 1;
            return;
        }
    }

    ctx.grid.write_state(row, col, CellState::SAND);
}
