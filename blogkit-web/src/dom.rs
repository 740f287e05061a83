use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

/// Retrieve the global `window` object, absent outside a browser context.
///
/// The non-wasm arm exists so component code that consults live DOM state
/// stays inert under native test runs instead of reaching into wasm imports.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn window() -> Option<Window> {
    None
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or
/// `localStorage` is unavailable (disabled by policy, for instance).
#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current vertical scroll offset, zero when unavailable.
#[must_use]
pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_default()
}

/// Smoothly scroll the viewport back to the top of the page.
pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Move keyboard focus to the element with the given id, if present.
pub fn focus_element(id: &str) {
    let focusable = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = focusable {
        let _ = el.focus();
    }
}
