#![cfg(target_arch = "wasm32")]

use gridlife_engine::Game;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn engine_runs_a_session_in_the_browser() {
    let mut game = Game::new(16, 16, 10);
    game.enable_perf_metrics(true);
    game.apply_pattern("glider").expect("builtin glider should stamp");
    assert_eq!(game.get_stats().alive(), 5);

    game.step();
    assert_eq!(game.generation(), 1);

    let ptr = game.extract_colors();
    assert!(!ptr.is_null());
    assert_eq!(game.colors_len(), 16 * 16);

    let stats = game.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
}
