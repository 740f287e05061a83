//! Blogkit widget model
//!
//! Platform-agnostic logic for the blogkit page enhancement: the comment
//! board and its persistence codec, theme-preference encoding, keyboard
//! shortcut classification, and the back-to-top visibility rule. This crate
//! carries no browser dependencies and is exercised by native `cargo test`.

pub mod board;
pub mod input;
pub mod scroll;
pub mod theme;

// Re-export commonly used types
pub use board::{
    BODY_MAX_CHARS, COMMENTS_KEY, Comment, CommentBoard, MAX_COMMENTS, MIN_BODY_CHARS,
    NAME_MAX_CHARS, SubmitError, prepare_comment,
};
pub use input::{Shortcut, is_text_entry_target, shortcut_for_key};
pub use scroll::{SCROLL_SHOW_PX, back_to_top_visible};
pub use theme::{BW_CLASS, BW_MODE_KEY, decode_bw, encode_bw};
