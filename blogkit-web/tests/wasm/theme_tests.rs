//! Browser-side theme state checks; run with `wasm-pack test --headless`.

use blogkit_web::theme;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn apply_sets_and_clears_the_root_marker() {
    theme::apply_bw(true, false);
    assert!(theme::is_bw());
    theme::apply_bw(false, false);
    assert!(!theme::is_bw());
}

#[wasm_bindgen_test]
fn toggling_twice_restores_both_class_and_preference() {
    theme::apply_bw(false, true);
    let before_class = theme::is_bw();
    let before_pref = blogkit_web::storage::load_bw_pref();

    theme::toggle_bw();
    theme::toggle_bw();

    assert_eq!(theme::is_bw(), before_class);
    assert_eq!(blogkit_web::storage::load_bw_pref(), before_pref);
}
