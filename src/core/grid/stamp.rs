//! Pattern stamping: overwrite the centered region of the field with a
//! decoded pattern's alive/dead values.

use crate::domain::rle::Pattern;

use super::*;

impl Grid {
    /// Stamp (not merge) a decoded pattern, centered on the field.
    ///
    /// Offsets may be negative when the pattern is larger than the grid;
    /// cells mapping out of bounds are silently dropped. Overwritten cells
    /// restart their staleness count.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        let offset_x = (self.width as i32 - pattern.width() as i32) / 2;
        let offset_y = (self.height as i32 - pattern.height() as i32) / 2;

        for py in 0..pattern.height() {
            for px in 0..pattern.width() {
                let x = px as i32 + offset_x;
                let y = py as i32 + offset_y;
                if !self.in_bounds(x, y) {
                    continue;
                }
                let idx = self.index(x as u32, y as u32);
                self.alive[idx] = pattern.is_alive(px, py) as u8;
                self.staleness[idx] = 0;
            }
        }
    }
}
