//! The `window.__blogUI` handle other page scripts use to drive the widget.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::components::comments::COMMENT_BODY_ID;
use crate::{dom, storage, theme};

/// Property name of the global API object.
pub const API_GLOBAL: &str = "__blogUI";

/// Attach the page API to the window. The closures back globals for the
/// lifetime of the page, so they are intentionally leaked.
pub fn install_page_api() {
    let Some(window) = dom::window() else {
        return;
    };
    let api = Object::new();

    let set_bw = Closure::<dyn Fn(JsValue)>::new(|value: JsValue| {
        theme::apply_bw(value.is_truthy(), true);
    });
    let is_bw = Closure::<dyn Fn() -> JsValue>::new(|| JsValue::from_bool(theme::is_bw()));
    let scroll_to_top = Closure::<dyn Fn()>::new(dom::scroll_to_top);
    let focus_comment = Closure::<dyn Fn()>::new(|| dom::focus_element(COMMENT_BODY_ID));
    // Re-reads storage instead of the rendered board, so writes made by
    // other scripts or tabs are visible here even before a reload.
    let get_comments = Closure::<dyn Fn() -> JsValue>::new(|| {
        let board = storage::load_board();
        serde_wasm_bindgen::to_value(board.entries()).unwrap_or(JsValue::NULL)
    });

    let _ = Reflect::set(&api, &JsValue::from_str("setBW"), set_bw.as_ref());
    let _ = Reflect::set(&api, &JsValue::from_str("isBW"), is_bw.as_ref());
    let _ = Reflect::set(&api, &JsValue::from_str("scrollToTop"), scroll_to_top.as_ref());
    let _ = Reflect::set(&api, &JsValue::from_str("focusComment"), focus_comment.as_ref());
    let _ = Reflect::set(&api, &JsValue::from_str("getComments"), get_comments.as_ref());
    let _ = Reflect::set(&window, &JsValue::from_str(API_GLOBAL), &api);

    set_bw.forget();
    is_bw.forget();
    scroll_to_top.forget();
    focus_comment.forget();
    get_comments.forget();
}
