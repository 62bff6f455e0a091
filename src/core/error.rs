//! Error types for the engine.
//!
//! Ticks never produce errors: every stepper filters off-board positions
//! before touching the grid. Errors only come back from edits issued by the
//! host and from configuration loading.

/// Errors returned by fallible engine operations.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// A coordinate outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Grid height.
        rows: u32,
        /// Grid width.
        cols: u32,
    },

    /// A configuration value outside its accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A raw state value that does not name a cell state.
    #[error("unknown cell state {0}")]
    UnknownState(u8),
}

/// Result alias used across the engine.
pub type SandboxResult<T> = Result<T, SandboxError>;
