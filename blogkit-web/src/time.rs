//! Clock access and timestamp display.
//!
//! Browsers format through `js_sys::Date` so the reader sees their own
//! locale; the native path backs the server-side render tests with a fixed
//! `chrono` format.

/// Current time in epoch milliseconds.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn now_ms() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        js_sys::Date::now() as i64
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Render an epoch-milliseconds timestamp for the comment metadata line.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn format_timestamp(ts: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts as f64));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ts)
        .map(|dt| dt.format("%m/%d/%Y, %H:%M:%S").to_string())
        .unwrap_or_default()
}
