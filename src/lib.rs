//! Gridlife Engine - Conway's Game of Life simulation in WASM
//!
//! Architecture:
//! - core/        - Field model: cells, two-phase stepping, spells, resize
//! - domain/      - Content: RLE decoding and the pattern library
//! - simulation/  - Orchestration and the wasm-bindgen facade
//!
//! The presentation layer (canvas, widgets, input) lives entirely on the
//! JS side. It feeds discrete commands into `Game` and reads back linear
//! cell/color buffers once per frame.

// Utils with the safety macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

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

    web_sys::console::log_1(&"Gridlife WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::cell::CellSnapshot;
pub use crate::core::grid::{Grid, GridStats, Spell, SPELL_RADIUS};
pub use domain::patterns::PatternLibrary;
pub use domain::rle::Pattern;
pub use simulation::{Game, GameCore, PerfStats};

/// Effect radius of the positional spells, in cells (for JS cursor previews)
#[wasm_bindgen]
pub fn spell_radius() -> u32 {
    SPELL_RADIUS
}

/// Default alive probability used by `randomize()`
#[wasm_bindgen]
pub fn default_alive_probability() -> f32 {
    simulation::DEFAULT_ALIVE_PROBABILITY
}
