//! Pattern stamper - drops a builder's pattern into the scratch grid

use crate::domain::{Cell, PatternKind};
use crate::grid::Grid;

/// Stamp `pattern` relative to (row, col). Off-board cells are skipped.
/// Returns how many cells were written.
pub fn stamp(grid: &mut Grid, row: u32, col: u32, pattern: PatternKind) -> usize {
    let (r, c) = (row as i32, col as i32);
    let mut written = 0;
    for &(dr, dc, state) in pattern.cells() {
        if grid.write(r + dr, c + dc, Cell::new(state)) {
            written += 1;
        }
    }
    written
}
