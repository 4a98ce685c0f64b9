use super::{GameCore, PerfTimer};

pub(super) fn step(world: &mut GameCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.grid.size() as u32;
        // SoA estimate (bytes): alive(1) + pending(1) + frozen(1) + staleness(4)
        world.perf_stats.memory_bytes = (world.grid.size() as u32).saturating_mul(7);
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Both phases run over the whole field; neighbor counts only ever see
    // the previous generation's committed values.
    if perf_on {
        let t0 = PerfTimer::start();
        world.grid.determine_next_states();
        world.perf_stats.determine_ms = t0.elapsed_ms();

        let t0 = PerfTimer::start();
        world.grid.commit_next_states();
        world.perf_stats.commit_ms = t0.elapsed_ms();
    } else {
        world.grid.advance_generation();
    }

    world.generation += 1;

    if perf_on {
        world.perf_stats.generation = world.generation;
        world.perf_stats.alive_cells = world.grid.stats().alive;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}

pub(super) fn tick(world: &mut GameCore) {
    if world.running {
        step(world);
    }
}
