use super::*;

/// Aggregate counters over the committed field.
///
/// "Newly" means staleness zero: the cell reached its current value this
/// generation (or through an effect that restarts the count).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub alive: u32,
    pub dead: u32,
    pub newly_alive: u32,
    pub newly_dead: u32,
}

impl Grid {
    /// Recomputed from scratch on every call, so the counters can never
    /// drift from the committed field.
    pub fn stats(&self) -> GridStats {
        let mut stats = GridStats::default();
        for idx in 0..self.size {
            if self.alive[idx] != 0 {
                stats.alive += 1;
                if self.staleness[idx] == 0 {
                    stats.newly_alive += 1;
                }
            } else {
                stats.dead += 1;
                if self.staleness[idx] == 0 {
                    stats.newly_dead += 1;
                }
            }
        }
        stats
    }
}
