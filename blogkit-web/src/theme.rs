//! BW (light) mode: a `bw` marker class on the document root mirrored into a
//! persisted preference and into the toolbar toggle button's pressed state.

use blogkit_core::BW_CLASS;

use crate::storage;

/// Id of the toolbar's theme toggle button.
pub const TOGGLE_BTN_ID: &str = "bw-toggle";

/// Mutually exclusive visual-state classes on the toggle button.
pub const BTN_ON_CLASS: &str = "bw-toggle-btn-on";
pub const BTN_OFF_CLASS: &str = "bw-toggle-btn-off";

/// Whether BW mode is currently active, read from the root marker class.
///
/// The marker class is the single source of truth for the live state; the
/// stored preference is only consulted at startup.
#[must_use]
pub fn is_bw() -> bool {
    crate::dom::document()
        .and_then(|doc| doc.document_element())
        .is_some_and(|root| root.class_list().contains(BW_CLASS))
}

/// Apply the requested theme state everywhere it is reflected: the root
/// marker class, the toggle button's `aria-pressed` and visual-state
/// classes, and — when `persist` is set — the stored preference.
///
/// Every state change routes through here (startup restore, button click,
/// keyboard shortcut, the page API), so the reflections cannot drift apart.
pub fn apply_bw(enabled: bool, persist: bool) {
    let Some(doc) = crate::dom::document() else {
        return;
    };

    if let Some(root) = doc.document_element() {
        let _ = if enabled {
            root.class_list().add_1(BW_CLASS)
        } else {
            root.class_list().remove_1(BW_CLASS)
        };
    }

    if let Some(btn) = doc.get_element_by_id(TOGGLE_BTN_ID) {
        let _ = btn.set_attribute("aria-pressed", if enabled { "true" } else { "false" });
        let (add, remove) = if enabled {
            (BTN_ON_CLASS, BTN_OFF_CLASS)
        } else {
            (BTN_OFF_CLASS, BTN_ON_CLASS)
        };
        let _ = btn.class_list().remove_1(remove);
        let _ = btn.class_list().add_1(add);
    }

    if persist {
        storage::save_bw_pref(enabled);
    }
}

/// Flip the current state, persisting the result.
pub fn toggle_bw() {
    apply_bw(!is_bw(), true);
}

/// Startup restore: apply the stored preference without writing it back.
pub fn restore_saved_bw() {
    apply_bw(storage::load_bw_pref(), false);
}
