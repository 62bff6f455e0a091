use crate::core::{SandboxError, SandboxResult};

use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((idx / cols) as u32, (idx % cols) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as i64) < self.rows as i64 && col >= 0 && (col as i64) < self.cols as i64
    }

    /// Index for a signed position, `None` when it falls off the board
    #[inline]
    pub fn index_at(&self, row: i32, col: i32) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some(self.index(row as u32, col as u32))
        } else {
            None
        }
    }

    /// Index for a host-supplied position
    pub fn checked_index(&self, row: i64, col: i64) -> SandboxResult<usize> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return Err(SandboxError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(row as u32, col as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_are_row_major_inverses() {
        let grid = Grid::new(4, 7);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 0), 7);
        assert_eq!(grid.index(3, 6), 27);
        for idx in 0..grid.size() {
            let (row, col) = grid.coords(idx);
            assert_eq!(grid.index(row, col), idx);
        }
    }

    #[test]
    fn bounds_reject_negative_and_past_the_edge() {
        let grid = Grid::new(3, 5);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 4));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(0, 5));
        assert_eq!(grid.index_at(2, 5), None);
        assert!(matches!(
            grid.checked_index(3, 0),
            Err(SandboxError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 5 })
        ));
    }
}
