//! Domain types: cell states, spawn patterns and world configuration.

pub mod cell;
pub mod config;
pub mod patterns;

pub use cell::{Cell, CellState};
pub use config::{BuilderMode, SandboxConfig};
pub use patterns::PatternKind;
