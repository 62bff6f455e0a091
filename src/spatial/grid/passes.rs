use super::*;

impl Grid {
    /// Seed scratch with the committed grid.
    ///
    /// Every stepper calls this first: a cell no rule writes this tick keeps
    /// its state through the commit.
    #[inline]
    pub fn begin_pass(&mut self) {
        self.scratch.copy_from_slice(&self.current);
    }

    /// Publish scratch as the new committed grid.
    ///
    /// A buffer swap, so the host never observes a half-written tick. The old
    /// committed buffer becomes scratch and is re-seeded by the next
    /// `begin_pass`.
    #[inline]
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Every cell Dead, every cooldown cleared, in both buffers
    pub fn clear(&mut self) {
        self.current.fill(Cell::DEAD);
        self.scratch.fill(Cell::DEAD);
    }
}
