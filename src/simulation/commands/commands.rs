use std::sync::Arc;

use crate::core::grid::Spell;
use crate::domain::patterns::PatternLibrary;

use super::{random, GameCore};

pub(super) fn toggle_cell(world: &mut GameCore, x: u32, y: u32) {
    world.grid.toggle_cell(x, y);
}

pub(super) fn apply_spell(world: &mut GameCore, spell: Spell) {
    world.grid.apply_spell(spell);
}

pub(super) fn apply_pattern(world: &mut GameCore, key: &str) -> Result<(), String> {
    let patterns = Arc::clone(&world.patterns);
    let pattern = patterns
        .get(key)
        .ok_or_else(|| format!("unknown pattern key: {}", key))?;
    world.grid.apply_pattern(pattern);
    Ok(())
}

pub(super) fn load_pattern_bundle(world: &mut GameCore, json: &str) -> Result<(), String> {
    let library = PatternLibrary::from_bundle_json(json)?;
    world.patterns = Arc::new(library);
    Ok(())
}

pub(super) fn reset(world: &mut GameCore) {
    world.grid.clear();
    world.running = false;
    world.generation = 0;
}

pub(super) fn randomize(world: &mut GameCore, alive_probability: f32) {
    for idx in 0..world.grid.size() {
        let alive = random::next_f32(&mut world.rng_state) < alive_probability;
        world.grid.alive[idx] = alive as u8;
        world.grid.staleness[idx] = 0;
    }
    world.generation = 0;
}

pub(super) fn resize(world: &mut GameCore, new_size: u32) -> Result<(), String> {
    world.grid.resize(new_size)
}

pub(super) fn set_zoom(world: &mut GameCore, cell_size: u32, viewport_px: u32) -> Result<(), String> {
    if cell_size == 0 {
        return Err("cell size must be positive".to_string());
    }
    let new_size = viewport_px / cell_size;
    if new_size == 0 {
        // Reject before mutating: an error must leave the zoom untouched
        return Err("viewport does not fit a single cell at this zoom".to_string());
    }
    world.grid.resize(new_size)?;
    world.grid.set_cell_size(cell_size);
    Ok(())
}
