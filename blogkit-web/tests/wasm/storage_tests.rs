//! Browser-side storage checks; run with `wasm-pack test --headless`.

use blogkit_core::{CommentBoard, prepare_comment};
use blogkit_web::storage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset() {
    let storage = blogkit_web::dom::local_storage().expect("browser storage");
    storage.clear().expect("clear storage");
}

#[wasm_bindgen_test]
fn board_round_trips_through_local_storage() {
    reset();
    let mut board = CommentBoard::new();
    board.push(prepare_comment("Ann", "Hello world", 1_700_000_000_000).unwrap());
    storage::save_board(&board);

    let reloaded = storage::load_board();
    assert_eq!(reloaded, board);
}

#[wasm_bindgen_test]
fn corrupt_payload_loads_as_empty() {
    reset();
    let raw = blogkit_web::dom::local_storage().expect("browser storage");
    raw.set_item("blog_comments_v1", "{not json").unwrap();
    assert!(storage::load_board().is_empty());
}

#[wasm_bindgen_test]
fn theme_preference_round_trips() {
    reset();
    assert!(!storage::load_bw_pref());
    storage::save_bw_pref(true);
    assert!(storage::load_bw_pref());
    storage::save_bw_pref(false);
    assert!(!storage::load_bw_pref());
}
