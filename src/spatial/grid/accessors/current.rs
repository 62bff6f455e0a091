use crate::core::SandboxResult;
use crate::domain::CellState;

use super::super::*;

impl Grid {
    // === Checked access (host edits) ===
    pub fn get(&self, row: i64, col: i64) -> SandboxResult<CellState> {
        let idx = self.checked_index(row, col)?;
        Ok(self.current[idx].state)
    }

    /// Overwrite a committed cell. Builders keep whatever cooldown they had;
    /// every other state drops it.
    pub fn set(&mut self, row: i64, col: i64, state: CellState) -> SandboxResult<()> {
        let idx = self.checked_index(row, col)?;
        let cell = &mut self.current[idx];
        cell.state = state;
        if state != CellState::Builder {
            cell.cooldown = None;
        }
        Ok(())
    }

    pub fn cell(&self, row: i64, col: i64) -> SandboxResult<Cell> {
        let idx = self.checked_index(row, col)?;
        Ok(self.current[idx])
    }

    pub fn set_cell(&mut self, row: i64, col: i64, cell: Cell) -> SandboxResult<()> {
        let idx = self.checked_index(row, col)?;
        self.current[idx] = cell;
        Ok(())
    }

    pub fn cooldown(&self, row: i64, col: i64) -> SandboxResult<Option<u32>> {
        let idx = self.checked_index(row, col)?;
        Ok(self.current[idx].cooldown)
    }

    pub fn set_cooldown(&mut self, row: i64, col: i64, cooldown: Option<u32>) -> SandboxResult<()> {
        let idx = self.checked_index(row, col)?;
        self.current[idx].cooldown = cooldown;
        Ok(())
    }

    // === Unchecked-by-result access (stepper reads) ===
    /// Committed state at a signed position, `None` off the board
    #[inline]
    pub fn state_at(&self, row: i32, col: i32) -> Option<CellState> {
        self.index_at(row, col).map(|idx| self.current[idx].state)
    }

    #[inline]
    pub fn current_idx(&self, idx: usize) -> Cell {
        self.current[idx]
    }

    /// Committed cells, row-major
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// Number of committed cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.current.iter().filter(|c| c.state == state).count()
    }
}
