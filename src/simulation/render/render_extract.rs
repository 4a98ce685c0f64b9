//! Per-cell color extraction for JS canvas rendering.
//!
//! The engine fills one linear ABGR buffer per call; the presentation
//! layer copies it straight out of wasm memory. Colors encode the cell's
//! visual age: live cells fade red -> green as staleness grows, dead
//! cells fade white -> black, frozen cells get a blue-shifted tint of the
//! same ramp.

use super::GameCore;

// All ramps saturate by staleness 510 (the 0.5-per-step blue fade is the
// slowest), so higher counts can share one clamped value.
const RAMP_SATURATION: u32 = 512;

pub(super) fn extract_colors(world: &mut GameCore) -> *const u32 {
    let size = world.grid.size();
    // Resize-on-demand: the grid may have been re-tiled since last frame
    if world.render.colors.len() != size {
        world.render.colors.resize(size, 0);
    }

    for idx in 0..size {
        let alive = world.grid.alive[idx] != 0;
        let frozen = world.grid.frozen[idx] != 0;
        let staleness = world.grid.staleness[idx];
        world.render.colors[idx] = cell_color(alive, frozen, staleness);
    }

    world.render.colors.as_ptr()
}

fn cell_color(alive: bool, frozen: bool, staleness: u32) -> u32 {
    let s = staleness.min(RAMP_SATURATION) as i32;

    let (mut r, mut g, mut b) = if alive {
        (
            (255 - 2 * s).max(0),
            s.min(255),
            (255.0 - 0.5 * s as f32).max(0.0) as i32,
        )
    } else {
        let v = (255 - s).max(0);
        (v, v, v)
    };

    if frozen {
        r = (r as f32 * 0.8) as i32;
        g = (g as f32 * 0.9) as i32;
        b = (b as f32 + (255.0 - b as f32) * 0.2) as i32;
    }

    pack_abgr(r as u32, g as u32, b as u32)
}

// ABGR packed for direct Canvas copy (little-endian bytes [RR,GG,BB,AA])
#[inline]
fn pack_abgr(r: u32, g: u32, b: u32) -> u32 {
    0xFF00_0000 | (b << 16) | (g << 8) | r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_live_cell_is_full_red_and_blue() {
        // staleness 0, alive: (255, 0, 255)
        assert_eq!(cell_color(true, false, 0), 0xFFFF_00FF);
    }

    #[test]
    fn fresh_dead_cell_is_white() {
        assert_eq!(cell_color(false, false, 0), 0xFFFF_FFFF);
    }

    #[test]
    fn stale_dead_cell_fades_to_black() {
        assert_eq!(cell_color(false, false, 255), 0xFF00_0000);
        assert_eq!(cell_color(false, false, 100_000), 0xFF00_0000);
    }

    #[test]
    fn frozen_tint_shifts_blue() {
        let plain = cell_color(false, false, 0);
        let frozen = cell_color(false, true, 0);
        assert_ne!(plain, frozen);
        // Blue channel survives the tint at full strength (255 stays 255)
        assert_eq!((frozen >> 16) & 0xFF, 255);
        // Red is dimmed by 20%
        assert_eq!(frozen & 0xFF, 204);
    }
}
