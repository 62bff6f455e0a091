//! Spatial storage: the double-buffered cell grid and neighbour queries.

pub mod grid;
