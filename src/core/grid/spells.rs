//! Region spells: immediately-committed effects outside the normal
//! generation cycle.
//!
//! Positional spells affect the Euclidean disk of radius `SPELL_RADIUS`
//! around their center; centers outside the field simply clip against the
//! bounds check and may no-op entirely.

use super::*;

/// Effect radius of the positional spells, in cells
pub const SPELL_RADIUS: u32 = 10;

/// A named field effect. Variants carry exactly the arguments they use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spell {
    /// Toggle alive/dead inside the disk around (cx, cy)
    Lightning { cx: i32, cy: i32 },
    /// Toggle alive/dead for the entire field
    Earthquake,
    /// Freeze every cell inside the disk around (cx, cy)
    Freeze { cx: i32, cy: i32 },
    /// Clear the frozen flag on the entire field
    Unfreeze,
}

impl Grid {
    pub fn apply_spell(&mut self, spell: Spell) {
        match spell {
            Spell::Lightning { cx, cy } => self.apply_lightning(cx, cy),
            Spell::Earthquake => self.apply_earthquake(),
            Spell::Freeze { cx, cy } => self.apply_freeze(cx, cy),
            Spell::Unfreeze => self.apply_unfreeze(),
        }
    }

    /// Toggle every cell within the spell radius of (cx, cy).
    ///
    /// Commits synchronously: both `alive` and `pending` take the flipped
    /// value, bypassing the two-phase buffer, and staleness restarts.
    pub fn apply_lightning(&mut self, cx: i32, cy: i32) {
        let radius = SPELL_RADIUS as i32;
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if !self.in_bounds(x, y) {
                    continue;
                }
                let idx = self.index(x as u32, y as u32);
                self.toggle_committed(idx);
            }
        }
    }

    /// Lightning with no center and no distance filter: flip the world
    pub fn apply_earthquake(&mut self) {
        for idx in 0..self.size {
            self.toggle_committed(idx);
        }
    }

    /// Freeze every cell within the spell radius of (cx, cy).
    /// Alive state and staleness are left as they are.
    pub fn apply_freeze(&mut self, cx: i32, cy: i32) {
        let radius = SPELL_RADIUS as i32;
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if !self.in_bounds(x, y) {
                    continue;
                }
                let idx = self.index(x as u32, y as u32);
                self.frozen[idx] = 1;
            }
        }
    }

    /// Global thaw: clears the frozen flag everywhere
    pub fn apply_unfreeze(&mut self) {
        self.frozen.fill(0);
    }

    #[inline]
    fn toggle_committed(&mut self, idx: usize) {
        let flipped = self.alive[idx] ^ 1;
        self.alive[idx] = flipped;
        self.pending[idx] = flipped;
        self.staleness[idx] = 0;
    }
}
