use gridlife_engine::Game;

#[test]
fn perf_smoke_step() {
    let mut game = Game::new(64, 64, 10);
    game.enable_perf_metrics(true);
    game.randomize();

    game.step();

    let stats = game.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.determine_ms() >= 0.0);
    assert!(stats.commit_ms() >= 0.0);
    assert_eq!(stats.generation(), 1);
    assert_eq!(stats.grid_size(), 64 * 64);
}

#[test]
fn facade_smoke_full_session() {
    let mut game = Game::new(32, 32, 10);
    assert_eq!(game.generation(), 0);
    assert!(!game.running());
    assert!(game.pattern_count() > 0);

    game.apply_pattern("glider").expect("builtin glider should stamp");
    let stats = game.get_stats();
    assert_eq!(stats.alive(), 5);
    assert_eq!(stats.alive() + stats.dead(), 32 * 32);

    game.set_running(true);
    game.tick();
    assert_eq!(game.generation(), 1);

    game.cast_lightning(16, 16);
    game.cast_earthquake();
    game.cast_freeze(16, 16);
    game.cast_unfreeze();

    game.set_zoom(8, 256).expect("zoom should re-tile");
    assert_eq!(game.width(), 32);
    assert_eq!(game.cell_size(), 8);

    let ptr = game.extract_colors();
    assert!(!ptr.is_null());
    assert_eq!(game.colors_len(), 32 * 32);

    let layout = game.abi_layout();
    assert_eq!(layout.colors_len_elements(), 32 * 32);
    assert_eq!(layout.cells_len_elements(), 32 * 32);

    game.reset();
    assert_eq!(game.get_stats().alive(), 0);
    assert_eq!(game.generation(), 0);
    assert!(!game.running());
}
