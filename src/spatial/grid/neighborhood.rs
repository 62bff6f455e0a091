//! Neighbour counting
//!
//! Life counts use the full Moore neighbourhood (8 cells); trap detection
//! only looks at the four orthogonal cells. Both walk the same offset table:
//! the first `ORTHOGONAL_NEIGHBORS` entries are the orthogonal ones.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::CellState;

use super::*;

/// (drow, dcol); orthogonal entries first
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

pub const ORTHOGONAL_NEIGHBORS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    /// Alive, Voyager or Builder cells among the 8 neighbours
    pub alive: u8,
    /// Trapper cells among the 4 orthogonal neighbours
    pub trappers: u8,
}

impl Grid {
    /// Counts for one cell, read from the committed grid
    pub fn neighbor_counts(&self, row: u32, col: u32) -> NeighborCounts {
        let mut counts = NeighborCounts::default();
        let (r, c) = (row as i32, col as i32);

        for (i, (dr, dc)) in NEIGHBOR_OFFSETS.iter().enumerate() {
            // Off-board neighbours are skipped, never queried
            let Some(state) = self.state_at(r + dr, c + dc) else {
                continue;
            };
            if state.is_alive_type() {
                counts.alive += 1;
            } else if state == CellState::Trapper && i < ORTHOGONAL_NEIGHBORS {
                counts.trappers += 1;
            }
        }

        counts
    }

    /// Counts for every cell, row-major.
    ///
    /// Reads only the committed grid, so rows are independent and fan out
    /// over rayon when the `parallel` feature is on.
    pub fn all_neighbor_counts(&self) -> Vec<NeighborCounts> {
        #[cfg(feature = "parallel")]
        {
            (0..self.size)
                .into_par_iter()
                .map(|idx| {
                    let (row, col) = self.coords(idx);
                    self.neighbor_counts(row, col)
                })
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.size)
                .map(|idx| {
                    let (row, col) = self.coords(idx);
                    self.neighbor_counts(row, col)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: u32, cols: u32, cells: &[(i64, i64, CellState)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(r, c, s) in cells {
            grid.set(r, c, s).unwrap();
        }
        grid
    }

    #[test]
    fn every_alive_type_counts_in_all_eight_directions() {
        let grid = grid_with(
            3,
            3,
            &[
                (0, 0, CellState::Alive),
                (0, 1, CellState::Voyager),
                (0, 2, CellState::Builder),
                (1, 0, CellState::Alive),
                (1, 2, CellState::Alive),
                (2, 0, CellState::Alive),
                (2, 1, CellState::Alive),
                (2, 2, CellState::Alive),
            ],
        );
        assert_eq!(grid.neighbor_counts(1, 1), NeighborCounts { alive: 8, trappers: 0 });
    }

    #[test]
    fn diagonal_trappers_do_not_count() {
        let grid = grid_with(
            3,
            3,
            &[
                (0, 0, CellState::Trapper),
                (0, 2, CellState::Trapper),
                (2, 0, CellState::Trapper),
                (2, 2, CellState::Trapper),
            ],
        );
        assert_eq!(grid.neighbor_counts(1, 1), NeighborCounts { alive: 0, trappers: 0 });

        let grid = grid_with(3, 3, &[(0, 1, CellState::Trapper), (1, 2, CellState::Trapper)]);
        assert_eq!(grid.neighbor_counts(1, 1), NeighborCounts { alive: 0, trappers: 2 });
    }

    #[test]
    fn corner_cells_only_see_in_bounds_neighbours() {
        let grid = grid_with(
            2,
            2,
            &[(0, 1, CellState::Alive), (1, 0, CellState::Trapper), (1, 1, CellState::Alive)],
        );
        assert_eq!(grid.neighbor_counts(0, 0), NeighborCounts { alive: 2, trappers: 1 });
    }

    #[test]
    fn whole_grid_counts_match_single_cell_counts() {
        let grid = grid_with(
            4,
            5,
            &[
                (0, 0, CellState::Alive),
                (1, 1, CellState::Trapper),
                (2, 3, CellState::Voyager),
                (3, 4, CellState::Builder),
            ],
        );
        let all = grid.all_neighbor_counts();
        assert_eq!(all.len(), grid.size());
        for (idx, counts) in all.iter().enumerate() {
            let (row, col) = grid.coords(idx);
            assert_eq!(*counts, grid.neighbor_counts(row, col));
        }
    }
}
