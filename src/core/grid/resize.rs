//! Re-tiling on zoom: the field is always kept square, and a resize
//! allocates a fresh field and copies the spatially-centered window of the
//! old state into it.

use super::*;

impl Grid {
    /// Resize the square field to `new_size` x `new_size`.
    ///
    /// Margins are split symmetrically: `top = difference / 2`
    /// (truncating, so the grow and shrink shifts are exact inverses) and
    /// `bottom = difference - top`; the grid is square, so the same pair
    /// serves as left/right. Old state is copied for every new coordinate
    /// strictly inside the window `margin - 1 < i < new_size - margin' - 1`;
    /// the rest of the new field stays default (dead, unfrozen, staleness
    /// zero). All four replacement arrays are built before anything is
    /// swapped, so a failed allocation leaves the old field intact.
    pub fn resize(&mut self, new_size: u32) -> Result<(), String> {
        if new_size == 0 {
            return Err("grid size must be positive".to_string());
        }

        let old_size = self.width as i32;
        let difference = new_size as i32 - old_size;
        if difference == 0 {
            return Ok(());
        }

        let top = difference / 2;
        let bottom = difference - top;
        let left = top;
        let right = bottom;

        let new_len = (new_size * new_size) as usize;
        let mut alive = vec![0u8; new_len];
        let mut pending = vec![0u8; new_len];
        let mut frozen = vec![0u8; new_len];
        let mut staleness = vec![0u32; new_len];

        let n = new_size as i32;
        for y in 0..n {
            if y <= top - 1 || y >= n - bottom - 1 {
                continue;
            }
            for x in 0..n {
                if x <= left - 1 || x >= n - right - 1 {
                    continue;
                }
                let ox = x - left;
                let oy = y - top;
                if !self.in_bounds(ox, oy) {
                    continue;
                }
                let old_idx = self.index(ox as u32, oy as u32);
                let new_idx = (y * n + x) as usize;
                alive[new_idx] = self.alive[old_idx];
                pending[new_idx] = self.pending[old_idx];
                frozen[new_idx] = self.frozen[old_idx];
                staleness[new_idx] = self.staleness[old_idx];
            }
        }

        self.width = new_size;
        self.height = new_size;
        self.size = new_len;
        self.alive = alive;
        self.pending = pending;
        self.frozen = frozen;
        self.staleness = staleness;

        Ok(())
    }
}
