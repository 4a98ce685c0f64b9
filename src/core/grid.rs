//! Grid - Structure of Arrays (SoA) for cache-friendly cell storage
//!
//! Instead of: Vec<Option<Cell>>          // Bad: pointer soup, poor cache
//! We have:    alive[], frozen[], ...     // Good: linear memory, trivially copyable
//!
//! All field mutation lives here: two-phase generation advance (step),
//! region spells, pattern stamping, re-tiling on resize. The grid never
//! touches wasm types; the facade reads it through accessors and raw
//! buffer pointers.

mod accessors;
mod indexing;
mod resize;
mod spells;
mod stamp;
mod stats;
mod step;

pub use spells::{Spell, SPELL_RADIUS};
pub use stats::GridStats;

/// SoA field - each cell property in its own contiguous array
///
/// Row-major layout: `idx = y * width + x`. Alive/pending/frozen are u8
/// (0/1) so the facade can expose them to JS as plain byte buffers.
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    /// Presentation scalar (pixels per cell); resize is keyed off it
    cell_size: u32,

    pub alive: Vec<u8>,     // Committed state
    pub pending: Vec<u8>,   // Next state, valid only between the two phases
    pub frozen: Vec<u8>,    // Frozen cells never commit
    pub staleness: Vec<u32>, // Generations since the last state change
}

impl Grid {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            size,
            cell_size,
            alive: vec![0; size],
            pending: vec![0; size],
            frozen: vec![0; size],
            staleness: vec![0; size],
        }
    }

    /// All cells dead, unfrozen, staleness zero; dimensions kept
    pub fn clear(&mut self) {
        self.alive.fill(0);
        self.pending.fill(0);
        self.frozen.fill(0);
        self.staleness.fill(0);
    }
}
