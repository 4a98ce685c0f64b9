use crate::core::cell::CellSnapshot;

use super::*;

impl Grid {
    #[inline]
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.alive[self.index(x, y)] != 0
    }

    #[inline]
    pub fn is_frozen(&self, x: u32, y: u32) -> bool {
        self.frozen[self.index(x, y)] != 0
    }

    #[inline]
    pub fn staleness_at(&self, x: u32, y: u32) -> u32 {
        self.staleness[self.index(x, y)]
    }

    /// Read-only per-cell view; None when out of bounds
    pub fn cell(&self, x: u32, y: u32) -> Option<CellSnapshot> {
        if !self.in_bounds(x as i32, y as i32) {
            return None;
        }
        let idx = self.index(x, y);
        Some(CellSnapshot {
            alive: self.alive[idx] != 0,
            frozen: self.frozen[idx] != 0,
            staleness: self.staleness[idx],
        })
    }

    /// Flip a single cell between alive and dead.
    ///
    /// Out-of-range coordinates are silently ignored so the presentation
    /// layer can forward raw mouse positions. The flip is a state change,
    /// so staleness restarts at zero.
    pub fn toggle_cell(&mut self, x: u32, y: u32) {
        if !self.in_bounds(x as i32, y as i32) {
            return;
        }
        let idx = self.index(x, y);
        self.alive[idx] ^= 1;
        self.staleness[idx] = 0;
    }

    // === Raw buffers (for JS rendering) ===

    pub fn alive_ptr(&self) -> *const u8 {
        self.alive.as_ptr()
    }

    pub fn frozen_ptr(&self) -> *const u8 {
        self.frozen.as_ptr()
    }

    pub fn staleness_ptr(&self) -> *const u32 {
        self.staleness.as_ptr()
    }
}
