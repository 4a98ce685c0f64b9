use std::sync::Arc;

use crate::core::grid::Grid;
use crate::domain::patterns::PatternLibrary;

use super::perf_stats::PerfStats;
use super::{GameCore, RenderBuffers};

pub(super) fn create_game_core(width: u32, height: u32, cell_size: u32) -> GameCore {
    let size = (width * height) as usize;
    GameCore {
        patterns: Arc::new(PatternLibrary::builtin()),
        grid: Grid::new(width, height, cell_size),
        running: false,
        generation: 0,
        rng_state: 12345,
        render: RenderBuffers {
            colors: vec![0u32; size],
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
