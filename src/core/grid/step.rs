//! Two-phase generation advance.
//!
//! Phase 1 (determine): for every cell, count the committed alive
//! neighbors and write the rule outcome into `pending`. Phase 2 (commit):
//! copy `pending` into `alive` for every non-frozen cell. Neighbor counts
//! must only ever see the previous generation, so phase 1 runs over the
//! entire field before phase 2 starts.

use super::*;

/// Staleness resets whenever the computed next state differs from the
/// committed state, even for frozen cells that will never commit the flip.
/// This matches the long-observed simulator behavior; flipping it to false
/// would make frozen cells age while their neighborhood churns.
pub(crate) const STALENESS_RESETS_WHEN_FROZEN_FLIPS: bool = true;

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Grid {
    /// Advance the whole field by one generation
    pub fn advance_generation(&mut self) {
        self.determine_next_states();
        self.commit_next_states();
    }

    /// Phase 1: rule evaluation against the committed field + staleness
    /// bookkeeping. Does not modify `alive`.
    pub(crate) fn determine_next_states(&mut self) {
        let width = self.width as i32;
        let height = self.height as i32;

        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) as usize;

                let mut alive_neighbors = 0u8;
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let nx = x + dx;
                    let ny = y + dy;
                    // Hard edges: out-of-bounds offsets are skipped, no wraparound
                    if nx < 0 || nx >= width || ny < 0 || ny >= height {
                        continue;
                    }
                    alive_neighbors += *fast!(self.alive, [(ny * width + nx) as usize]);
                }

                let alive = *fast!(self.alive, [idx]) != 0;
                let next = if alive {
                    alive_neighbors == 2 || alive_neighbors == 3
                } else {
                    alive_neighbors == 3
                };
                fast!(self.pending, [idx] = next as u8);

                let frozen = *fast!(self.frozen, [idx]) != 0;
                if alive == next {
                    if !frozen {
                        let s = *fast!(self.staleness, [idx]);
                        fast!(self.staleness, [idx] = s + 1);
                    }
                } else if !frozen || STALENESS_RESETS_WHEN_FROZEN_FLIPS {
                    fast!(self.staleness, [idx] = 0);
                }
            }
        }
    }

    /// Phase 2: commit `pending` for every non-frozen cell
    pub(crate) fn commit_next_states(&mut self) {
        for idx in 0..self.size {
            if self.frozen[idx] == 0 {
                self.alive[idx] = self.pending[idx];
            }
        }
    }
}
