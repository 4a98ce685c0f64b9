use super::perf_stats::PerfStats;
use super::GameCore;

pub(super) fn set_running(world: &mut GameCore, running: bool) {
    world.running = running;
}

pub(super) fn toggle_running(world: &mut GameCore) -> bool {
    world.running = !world.running;
    world.running
}

pub(super) fn set_cell_size(world: &mut GameCore, cell_size: u32) {
    world.grid.set_cell_size(cell_size);
}

pub(super) fn enable_perf_metrics(world: &mut GameCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &GameCore) -> PerfStats {
    world.perf_stats.clone()
}
