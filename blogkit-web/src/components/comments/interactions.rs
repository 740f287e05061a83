use blogkit_core::{CommentBoard, prepare_comment};
use web_sys::{MouseEvent, SubmitEvent};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::storage;

/// Confirmation shown before a bulk clear; blocking by design of the
/// underlying browser dialog.
pub const CLEAR_PROMPT: &str = "Clear all saved comments? This cannot be undone.";

/// Validate a submission against a board and produce the successor board.
/// `None` means the submission was rejected and nothing changes.
#[must_use]
pub fn submit_comment(
    board: &CommentBoard,
    name: &str,
    body: &str,
    ts: i64,
) -> Option<CommentBoard> {
    let comment = prepare_comment(name, body, ts).ok()?;
    let mut next = board.clone();
    next.push(comment);
    Some(next)
}

#[cfg(target_arch = "wasm32")]
pub fn submit_handler(
    board: UseStateHandle<CommentBoard>,
    name_ref: NodeRef,
    body_ref: NodeRef,
) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        let name_input = name_ref.cast::<web_sys::HtmlInputElement>();
        let body_input = body_ref.cast::<web_sys::HtmlTextAreaElement>();
        let name = name_input
            .as_ref()
            .map(web_sys::HtmlInputElement::value)
            .unwrap_or_default();
        let body = body_input
            .as_ref()
            .map(web_sys::HtmlTextAreaElement::value)
            .unwrap_or_default();

        match submit_comment(&board, &name, &body, crate::time::now_ms()) {
            Some(next) => {
                storage::save_board(&next);
                board.set(next);
                if let Some(input) = name_input.as_ref() {
                    input.set_value("");
                }
                if let Some(area) = body_input.as_ref() {
                    area.set_value("");
                    // Refocus for rapid successive posting.
                    let _ = area.focus();
                }
            }
            // Rejected: refocus the body field, nothing else changes.
            None => {
                if let Some(area) = body_input.as_ref() {
                    let _ = area.focus();
                }
            }
        }
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn submit_handler(
    board: UseStateHandle<CommentBoard>,
    name_ref: NodeRef,
    body_ref: NodeRef,
) -> Callback<SubmitEvent> {
    let _ = (board, name_ref, body_ref);
    Callback::from(|_e: SubmitEvent| {})
}

#[cfg(target_arch = "wasm32")]
pub fn clear_handler(board: UseStateHandle<CommentBoard>) -> Callback<MouseEvent> {
    Callback::from(move |_e: MouseEvent| {
        // Already empty: no dialog, no write.
        if board.is_empty() {
            return;
        }
        let confirmed = crate::dom::window()
            .and_then(|win| win.confirm_with_message(CLEAR_PROMPT).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let mut next = (*board).clone();
        next.clear();
        storage::save_board(&next);
        board.set(next);
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_handler(board: UseStateHandle<CommentBoard>) -> Callback<MouseEvent> {
    let _ = board;
    Callback::from(|_e: MouseEvent| {})
}

/// After every render, keep the list scrolled to its bottom so the newest
/// comment stays visible.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_pin_to_latest(list_ref: NodeRef, len: usize) {
    use_effect_with(len, move |_len| {
        if let Some(list) = list_ref.cast::<web_sys::Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_pin_to_latest(list_ref: NodeRef, len: usize) {
    let _ = (list_ref, len);
}

#[cfg(test)]
mod tests {
    use super::submit_comment;
    use blogkit_core::CommentBoard;

    #[test]
    fn accepted_submission_produces_successor_board() {
        let board = CommentBoard::new();
        let next = submit_comment(&board, " Ann ", " Hello world ", 42).expect("accepted");
        assert_eq!(next.len(), 1);
        assert_eq!(next.entries()[0].name, "Ann");
        assert_eq!(next.entries()[0].body, "Hello world");
        assert_eq!(next.entries()[0].ts, 42);
        // The input board is untouched; the handler swaps in the successor.
        assert!(board.is_empty());
    }

    #[test]
    fn short_body_is_rejected() {
        let board = CommentBoard::new();
        assert!(submit_comment(&board, "Ann", "", 1).is_none());
        assert!(submit_comment(&board, "Ann", "x", 1).is_none());
        assert!(submit_comment(&board, "Ann", "  x  ", 1).is_none());
    }

    #[test]
    fn anonymous_submission_keeps_empty_name() {
        let board = CommentBoard::new();
        let next = submit_comment(&board, "   ", "Hello world", 1).expect("accepted");
        assert_eq!(next.entries()[0].name, "");
        assert_eq!(next.entries()[0].display_name(), "Anonymous");
    }
}
