use wasm_bindgen::prelude::*;

/// Last-step perf snapshot; all zeros while metrics are disabled
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) determine_ms: f64,
    pub(super) commit_ms: f64,
    pub(super) generation: u64,
    pub(super) alive_cells: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn determine_ms(&self) -> f64 { self.determine_ms }
    #[wasm_bindgen(getter)]
    pub fn commit_ms(&self) -> f64 { self.commit_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn alive_cells(&self) -> u32 { self.alive_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
