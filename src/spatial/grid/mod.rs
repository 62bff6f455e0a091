//! Grid - current + scratch cell buffers
//!
//! Every tick reads the committed (`current`) buffer and writes the
//! `scratch` buffer; `commit` swaps them. Both are flat row-major arrays so a
//! pass walks memory linearly and the host can read states without copies.
//!
//! Coordinates are (row, col). Public accessors return `SandboxError` for
//! off-board positions; the `*_at(i32, i32)` variants used by the steppers
//! return `None`/`false` instead so a tick never fails.

use crate::domain::Cell;

mod indexing;
mod accessors;
mod passes;
mod neighborhood;

pub use neighborhood::{NeighborCounts, NEIGHBOR_OFFSETS, ORTHOGONAL_NEIGHBORS};

pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,

    /// Committed state - what the host sees and every rule reads
    current: Vec<Cell>,
    /// Next-tick state under construction
    scratch: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            size,
            current: vec![Cell::DEAD; size],
            scratch: vec![Cell::DEAD; size],
        }
    }
}
