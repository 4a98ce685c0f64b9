//! Read-only per-cell view handed to the presentation layer.
//!
//! The field itself is stored as Structure of Arrays (see `core::grid`);
//! this snapshot is only materialized for point queries.

/// Committed state of a single cell at the time of the query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSnapshot {
    /// Committed alive/dead value
    pub alive: bool,
    /// Frozen cells are skipped by the commit phase
    pub frozen: bool,
    /// Consecutive generations without a state change
    pub staleness: u32,
}
