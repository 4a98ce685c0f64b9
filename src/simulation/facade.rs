use wasm_bindgen::prelude::*;

use crate::core::grid::Spell;

use super::perf_stats::PerfStats;
use super::{GameCore, DEFAULT_ALIVE_PROBABILITY};

/// Aggregate field counters, recomputed per call (never stale)
#[wasm_bindgen]
pub struct FieldStats {
    alive: u32,
    dead: u32,
    newly_alive: u32,
    newly_dead: u32,
}

#[wasm_bindgen]
impl FieldStats {
    #[wasm_bindgen(getter)]
    pub fn alive(&self) -> u32 { self.alive }
    #[wasm_bindgen(getter)]
    pub fn dead(&self) -> u32 { self.dead }
    #[wasm_bindgen(getter)]
    pub fn newly_alive(&self) -> u32 { self.newly_alive }
    #[wasm_bindgen(getter)]
    pub fn newly_dead(&self) -> u32 { self.newly_dead }
}

/// One-call pointer/length bundle for JS-side buffer setup.
/// Re-query after any resize: the buffers are reallocated.
#[wasm_bindgen]
pub struct AbiLayout {
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    alive_ptr: u32,
    frozen_ptr: u32,
    staleness_ptr: u32,
    cells_len_elements: u32,
    staleness_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn alive_ptr(&self) -> u32 { self.alive_ptr }
    #[wasm_bindgen(getter)]
    pub fn frozen_ptr(&self) -> u32 { self.frozen_ptr }
    #[wasm_bindgen(getter)]
    pub fn staleness_ptr(&self) -> u32 { self.staleness_ptr }

    #[wasm_bindgen(getter)]
    pub fn cells_len_elements(&self) -> u32 { self.cells_len_elements }
    #[wasm_bindgen(getter)]
    pub fn staleness_len_bytes(&self) -> u32 { self.staleness_len_bytes }
}

#[wasm_bindgen]
pub struct Game {
    core: GameCore,
}

#[wasm_bindgen]
impl Game {
    /// Create a new game over an all-dead field
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            core: GameCore::new(width, height, cell_size),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.core.cell_size() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn pattern_count(&self) -> usize { self.core.pattern_count() }

    pub fn set_cell_size(&mut self, cell_size: u32) {
        self.core.set_cell_size(cell_size);
    }

    /// Start/stop the Idle <-> Running machine
    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    /// Toggle start/stop; returns the new state
    pub fn toggle_running(&mut self) -> bool {
        self.core.toggle_running()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance one generation only while running (call once per frame)
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Flip one cell between alive and dead; out-of-range is ignored
    pub fn toggle_cell(&mut self, x: u32, y: u32) {
        self.core.toggle_cell(x, y);
    }

    // === SPELLS ===

    pub fn cast_lightning(&mut self, cx: i32, cy: i32) {
        self.core.apply_spell(Spell::Lightning { cx, cy });
    }

    pub fn cast_earthquake(&mut self) {
        self.core.apply_spell(Spell::Earthquake);
    }

    pub fn cast_freeze(&mut self, cx: i32, cy: i32) {
        self.core.apply_spell(Spell::Freeze { cx, cy });
    }

    pub fn cast_unfreeze(&mut self) {
        self.core.apply_spell(Spell::Unfreeze);
    }

    // === PATTERNS ===

    /// Stamp a named pattern from the active library, centered on the field
    pub fn apply_pattern(&mut self, key: &str) -> Result<(), JsValue> {
        self.core.apply_pattern(key).map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_pattern_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_pattern_bundle(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_pattern_manifest_json(&self) -> String {
        self.core.pattern_manifest_json()
    }

    // === LIFECYCLE ===

    /// All cells dead, generation 0, stopped
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Random seeding with the default alive probability
    pub fn randomize(&mut self) {
        self.core.randomize(DEFAULT_ALIVE_PROBABILITY);
    }

    /// Random seeding: each cell alive with the given probability
    pub fn randomize_with(&mut self, alive_probability: f32) {
        self.core.randomize(alive_probability);
    }

    /// Re-tile the square field to `new_size` x `new_size`, preserving the
    /// centered window of current state
    pub fn resize(&mut self, new_size: u32) -> Result<(), JsValue> {
        self.core.resize(new_size).map_err(|e| JsValue::from_str(&e))
    }

    /// Zoom-slider entry point: set the cell size and re-tile to fit the
    /// viewport
    pub fn set_zoom(&mut self, cell_size: u32, viewport_px: u32) -> Result<(), JsValue> {
        self.core
            .set_zoom(cell_size, viewport_px)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === READ-BACK ===

    pub fn get_stats(&self) -> FieldStats {
        let stats = self.core.stats();
        FieldStats {
            alive: stats.alive,
            dead: stats.dead,
            newly_alive: stats.newly_alive,
            newly_dead: stats.newly_dead,
        }
    }

    /// Per-cell probes; out-of-bounds reads as dead/unfrozen/zero
    pub fn cell_alive(&self, x: u32, y: u32) -> bool {
        self.core.cell(x, y).map(|c| c.alive).unwrap_or(false)
    }

    pub fn cell_frozen(&self, x: u32, y: u32) -> bool {
        self.core.cell(x, y).map(|c| c.frozen).unwrap_or(false)
    }

    pub fn cell_staleness(&self, x: u32, y: u32) -> u32 {
        self.core.cell(x, y).map(|c| c.staleness).unwrap_or(0)
    }

    /// Recompute the ABGR color buffer and return its pointer
    pub fn extract_colors(&mut self) -> *const u32 {
        self.core.extract_colors()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
            alive_ptr: data.alive_ptr as u32,
            frozen_ptr: data.frozen_ptr as u32,
            staleness_ptr: data.staleness_ptr as u32,
            cells_len_elements: data.cells_len_elements as u32,
            staleness_len_bytes: data.staleness_len_bytes as u32,
        }
    }
}
