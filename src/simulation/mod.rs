//! GameCore - simulation orchestration
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: GameCore only orchestrates, delegates to the
//!   grid for field mutation and to the pattern library for content
//! - Open/Closed: new spells/patterns plug in without modifying this file
//!
//! Field mutation lives in core/grid; pattern content in domain/. The
//! wasm boundary is facade.rs - everything else in this module is plain
//! Rust and runs natively under `cargo test`.

use std::sync::Arc;

use crate::core::cell::CellSnapshot;
use crate::core::grid::{Grid, GridStats, Spell};
use crate::domain::patterns::PatternLibrary;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{AbiLayout, FieldStats, Game};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Seeding probability used when the caller does not supply one
/// (the classic "random" button bias toward dead cells)
pub const DEFAULT_ALIVE_PROBABILITY: f32 = 0.3;

pub(crate) struct RenderBuffers {
    pub(crate) colors: Vec<u32>,
}

pub(crate) struct AbiLayoutData {
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
    pub(crate) alive_ptr: *const u8,
    pub(crate) frozen_ptr: *const u8,
    pub(crate) staleness_ptr: *const u32,
    pub(crate) cells_len_elements: usize,
    pub(crate) staleness_len_bytes: usize,
}

/// The simulation controller
pub struct GameCore {
    patterns: Arc<PatternLibrary>,
    grid: Grid,

    // State machine: Idle (not advancing) <-> Running (advance per tick)
    running: bool,
    generation: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl GameCore {
    /// Create a controller over an all-dead field
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        init::create_game_core(width, height, cell_size)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn cell_size(&self) -> u32 { self.grid.cell_size() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn pattern_count(&self) -> usize { self.patterns.len() }

    /// Read-only view of the field
    pub fn grid(&self) -> &Grid { &self.grid }

    // === State machine ===

    pub fn is_running(&self) -> bool { self.running }

    pub fn set_running(&mut self, running: bool) {
        settings::set_running(self, running);
    }

    /// Start/stop toggle; returns the new state
    pub fn toggle_running(&mut self) -> bool {
        settings::toggle_running(self)
    }

    // === Settings ===

    pub fn set_cell_size(&mut self, cell_size: u32) {
        settings::set_cell_size(self, cell_size);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Stepping ===

    /// Advance exactly one generation
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance one generation if Running; the external frame pump calls
    /// this once per frame
    pub fn tick(&mut self) {
        step::tick(self);
    }

    // === Commands ===

    /// Flip one cell; out-of-range coordinates are ignored
    pub fn toggle_cell(&mut self, x: u32, y: u32) {
        commands::toggle_cell(self, x, y);
    }

    pub fn apply_spell(&mut self, spell: Spell) {
        commands::apply_spell(self, spell);
    }

    /// Stamp a named pattern from the active library, centered
    pub fn apply_pattern(&mut self, key: &str) -> Result<(), String> {
        commands::apply_pattern(self, key)
    }

    /// Replace the active pattern library from a JSON bundle
    pub fn load_pattern_bundle(&mut self, json: &str) -> Result<(), String> {
        commands::load_pattern_bundle(self, json)
    }

    pub fn pattern_manifest_json(&self) -> String {
        self.patterns.manifest_json()
    }

    /// Back to the terminal "ready" state: all dead, generation 0, Idle
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Independent per-cell random seeding
    pub fn randomize(&mut self, alive_probability: f32) {
        commands::randomize(self, alive_probability);
    }

    /// Re-tile the square field to `new_size` x `new_size`
    pub fn resize(&mut self, new_size: u32) -> Result<(), String> {
        commands::resize(self, new_size)
    }

    /// Zoom: update the cell size and re-tile to fit the viewport
    pub fn set_zoom(&mut self, cell_size: u32, viewport_px: u32) -> Result<(), String> {
        commands::set_zoom(self, cell_size, viewport_px)
    }

    // === Read-back ===

    pub fn stats(&self) -> GridStats {
        self.grid.stats()
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<CellSnapshot> {
        self.grid.cell(x, y)
    }

    /// Recompute the ABGR color buffer from the committed field
    pub fn extract_colors(&mut self) -> *const u32 {
        render_extract::extract_colors(self)
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            colors_ptr: self.render.colors.as_ptr(),
            colors_len_elements: self.render.colors.len(),
            colors_len_bytes: self.render.colors.len() * std::mem::size_of::<u32>(),
            alive_ptr: self.grid.alive_ptr(),
            frozen_ptr: self.grid.frozen_ptr(),
            staleness_ptr: self.grid.staleness_ptr(),
            cells_len_elements: self.grid.size(),
            staleness_len_bytes: self.grid.size() * std::mem::size_of::<u32>(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
