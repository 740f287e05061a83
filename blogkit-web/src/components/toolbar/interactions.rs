#[cfg(target_arch = "wasm32")]
use blogkit_core::{Shortcut, back_to_top_visible, is_text_entry_target, shortcut_for_key};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::theme;

pub fn toggle_theme_handler() -> Callback<MouseEvent> {
    Callback::from(|_e: MouseEvent| theme::toggle_bw())
}

pub fn back_to_top_handler() -> Callback<MouseEvent> {
    Callback::from(|_e: MouseEvent| dom::scroll_to_top())
}

/// Window-level keyboard shortcuts for the whole widget: `b` toggles the
/// theme, `t` scrolls to top, `c` focuses the comment field. Suppressed while
/// a text entry surface has focus.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_global_shortcuts() {
    use_effect_with((), |()| {
        let keydown =
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(|e: web_sys::KeyboardEvent| {
                handle_global_key(&e);
            });
        let listener = dom::window().map(|win| {
            let _ =
                win.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            win
        });
        move || {
            if let Some(win) = listener {
                let _ = win
                    .remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_global_shortcuts() {}

/// Keep the back-to-top button's visibility in step with the scroll offset.
/// Runs once at mount to establish the initial state, then on every scroll
/// event; the listener is registered passive so it never blocks scrolling.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_scroll_observer() {
    use_effect_with((), |()| {
        sync_back_to_top();
        let on_scroll =
            Closure::<dyn FnMut(web_sys::Event)>::new(|_e: web_sys::Event| sync_back_to_top());
        let listener = dom::window().map(|win| {
            let opts = web_sys::AddEventListenerOptions::new();
            opts.set_passive(true);
            let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
                &opts,
            );
            win
        });
        move || {
            if let Some(win) = listener {
                let _ = win
                    .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_scroll_observer() {}

#[cfg(target_arch = "wasm32")]
fn handle_global_key(e: &web_sys::KeyboardEvent) {
    if typing_target(e) {
        return;
    }
    let Some(shortcut) = shortcut_for_key(&e.key()) else {
        return;
    };
    e.prevent_default();
    match shortcut {
        Shortcut::ToggleTheme => theme::toggle_bw(),
        Shortcut::ScrollTop => dom::scroll_to_top(),
        Shortcut::FocusComment => {
            dom::focus_element(crate::components::comments::COMMENT_BODY_ID);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn typing_target(e: &web_sys::KeyboardEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| {
            let editable = el
                .dyn_ref::<web_sys::HtmlElement>()
                .is_some_and(web_sys::HtmlElement::is_content_editable);
            is_text_entry_target(&el.tag_name(), editable)
        })
}

#[cfg(target_arch = "wasm32")]
fn sync_back_to_top() {
    let visible = back_to_top_visible(dom::scroll_y());
    let Some(btn) = dom::document().and_then(|doc| doc.get_element_by_id(super::BACK_TO_TOP_ID))
    else {
        return;
    };
    let _ = if visible {
        btn.class_list().remove_1("hidden")
    } else {
        btn.class_list().add_1("hidden")
    };
}
