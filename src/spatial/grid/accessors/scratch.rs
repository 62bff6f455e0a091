use crate::domain::CellState;

use super::super::*;

impl Grid {
    /// Scratch state at a signed position, `None` off the board.
    ///
    /// Cells not written yet this pass still hold their committed value.
    #[inline]
    pub fn scratch_state_at(&self, row: i32, col: i32) -> Option<CellState> {
        self.index_at(row, col).map(|idx| self.scratch[idx].state)
    }

    #[inline]
    pub fn scratch_at(&self, row: i32, col: i32) -> Option<Cell> {
        self.index_at(row, col).map(|idx| self.scratch[idx])
    }

    /// Write into scratch; off-board writes are dropped and return `false`
    #[inline]
    pub fn write(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index_at(row, col) {
            Some(idx) => {
                self.scratch[idx] = cell;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn write_state(&mut self, row: i32, col: i32, state: CellState) -> bool {
        self.write(row, col, Cell::new(state))
    }

    /// Exchange two scratch cells. Both positions must be on the board.
    #[inline]
    pub fn swap_scratch(&mut self, a: (i32, i32), b: (i32, i32)) -> bool {
        match (self.index_at(a.0, a.1), self.index_at(b.0, b.1)) {
            (Some(ia), Some(ib)) => {
                self.scratch.swap(ia, ib);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_writes_are_dropped() {
        let mut grid = Grid::new(2, 2);
        grid.begin_pass();
        assert!(!grid.write_state(2, 0, CellState::Alive));
        assert!(!grid.write_state(0, -1, CellState::Alive));
        assert!(grid.write_state(1, 1, CellState::Alive));
        grid.commit();
        assert_eq!(grid.count(CellState::Alive), 1);
    }

    #[test]
    fn scratch_writes_are_invisible_until_commit() {
        let mut grid = Grid::new(2, 2);
        grid.begin_pass();
        grid.write_state(0, 0, CellState::Trapper);
        assert_eq!(grid.state_at(0, 0), Some(CellState::Dead));
        assert_eq!(grid.scratch_state_at(0, 0), Some(CellState::Trapper));
        grid.commit();
        assert_eq!(grid.state_at(0, 0), Some(CellState::Trapper));
    }

    #[test]
    fn swap_scratch_exchanges_cells() {
        let mut grid = Grid::new(2, 1);
        grid.set(0, 0, CellState::Alive).unwrap();
        grid.begin_pass();
        assert!(grid.swap_scratch((0, 0), (1, 0)));
        assert!(!grid.swap_scratch((0, 0), (2, 0)));
        grid.commit();
        assert_eq!(grid.state_at(0, 0), Some(CellState::Dead));
        assert_eq!(grid.state_at(1, 0), Some(CellState::Alive));
    }
}
