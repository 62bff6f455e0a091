//! Core plumbing shared by every layer: errors and console logging.

#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod logging;
}

pub mod error;

pub use error::{SandboxError, SandboxResult};
