//! The storage boundary: the only module that touches `localStorage`.
//!
//! Primitives return explicit errors; the policy wrappers used by the rest of
//! the crate fall back to defaults on read failure and log write failures,
//! so no storage problem ever surfaces past this module.

use blogkit_core::{BW_MODE_KEY, COMMENTS_KEY, CommentBoard, decode_bw, encode_bw};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

/// Read a raw value.
///
/// # Errors
/// Fails when storage cannot be accessed or the read itself throws
/// (storage disabled, security error).
#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    let storage = crate::dom::local_storage()
        .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))?;
    storage.get_item(key).map_err(|err| StorageError::Read {
        key: key.to_string(),
        message: crate::dom::js_error_message(&err),
    })
}

/// Write a raw value.
///
/// # Errors
/// Fails when storage cannot be accessed or the write throws (quota
/// exceeded, storage disabled).
#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = crate::dom::local_storage()
        .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))?;
    storage
        .set_item(key, value)
        .map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: crate::dom::js_error_message(&err),
        })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    let _ = key;
    Err(StorageError::Unavailable(String::from(
        "no browser storage outside wasm",
    )))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    let _ = (key, value);
    Err(StorageError::Unavailable(String::from(
        "no browser storage outside wasm",
    )))
}

/// Load the persisted comment board, falling back to an empty one.
#[must_use]
pub fn load_board() -> CommentBoard {
    match get_item(COMMENTS_KEY) {
        Ok(Some(raw)) => CommentBoard::from_json(&raw),
        Ok(None) => CommentBoard::new(),
        Err(err) => {
            log::warn!("comment load failed, starting empty: {err}");
            CommentBoard::new()
        }
    }
}

/// Persist the comment board. Best-effort: failures are logged and dropped.
pub fn save_board(board: &CommentBoard) {
    if let Err(err) = set_item(COMMENTS_KEY, &board.to_json()) {
        log::warn!("comment save failed: {err}");
    }
}

/// Load the persisted theme preference; anything but a stored `"1"` is off.
#[must_use]
pub fn load_bw_pref() -> bool {
    match get_item(BW_MODE_KEY) {
        Ok(raw) => decode_bw(raw.as_deref()),
        Err(err) => {
            log::warn!("theme preference load failed, defaulting to off: {err}");
            false
        }
    }
}

/// Persist the theme preference. Best-effort, like [`save_board`].
pub fn save_bw_pref(enabled: bool) {
    if let Err(err) = set_item(BW_MODE_KEY, encode_bw(enabled)) {
        log::warn!("theme preference save failed: {err}");
    }
}
