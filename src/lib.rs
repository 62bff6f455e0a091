//! Lifesand Engine - cellular automaton sandbox in WASM
//!
//! Two mutually exclusive modes over one grid: an extended Game of Life
//! (trappers, voyagers, builders) and a falling-sand gravity pass that reads
//! the same states as sand, water and walls.
//!
//! Architecture:
//! - core/          - Errors and console logging
//! - domain/        - Cell states, spawn patterns, configuration
//! - spatial/       - Double-buffered grid and neighbour queries
//! - systems/       - Life and gravity steppers, pattern stamper
//! - simulation/    - Orchestration: modes, scheduling, edits, rendering, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use spatial::grid;
pub use systems::steppers;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Lifesand engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{SandboxError, SandboxResult};
pub use domain::{BuilderMode, Cell, CellState, PatternKind, SandboxConfig};
pub use simulation::{EngineStats, FrameView, RenderSink, SandboxCore, SimMode, World};

// Export state constants for JS
#[wasm_bindgen]
pub fn state_dead() -> u8 { CellState::Dead.as_u8() }
#[wasm_bindgen]
pub fn state_alive() -> u8 { CellState::Alive.as_u8() }
#[wasm_bindgen]
pub fn state_trapper() -> u8 { CellState::Trapper.as_u8() }
#[wasm_bindgen]
pub fn state_voyager() -> u8 { CellState::Voyager.as_u8() }
#[wasm_bindgen]
pub fn state_builder() -> u8 { CellState::Builder.as_u8() }

/// ABGR colour for a state byte (dead colour for unknown bytes)
#[wasm_bindgen]
pub fn state_color(state: u8) -> u32 {
    CellState::from_u8(state).unwrap_or_default().color()
}
