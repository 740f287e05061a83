use blogkit_core::{BODY_MAX_CHARS, Comment, CommentBoard, NAME_MAX_CHARS};
use yew::prelude::*;

use super::interactions::{clear_handler, submit_handler, use_pin_to_latest};
use super::{COMMENT_BODY_ID, COMMENT_NAME_ID, COMMENTS_LIST_ID};
use crate::storage;
use crate::time;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct CommentsPanelProps {
    /// Initial board; defaults to loading the persisted one.
    #[prop_or_default]
    pub board: Option<CommentBoard>,
}

/// The comment board panel: rendered list, submission form, bulk clear.
///
/// The board state is the owned copy for this page load; every mutation is
/// persisted before the re-render it triggers. Name, timestamp, and body all
/// render as text nodes, so stored markup stays inert.
#[function_component(CommentsPanel)]
pub fn comments_panel(p: &CommentsPanelProps) -> Html {
    let board = {
        let initial = p.board.clone();
        use_state(move || initial.unwrap_or_else(storage::load_board))
    };
    let name_ref = use_node_ref();
    let body_ref = use_node_ref();
    let list_ref = use_node_ref();

    use_pin_to_latest(list_ref.clone(), board.len());

    let on_submit = submit_handler(board.clone(), name_ref.clone(), body_ref.clone());
    let on_clear = clear_handler(board.clone());

    let entries = if board.is_empty() {
        html! {
            <div id="comments-empty" class="comment empty text-sm text-gray-600">
                { "No comments yet. Be the first to write one!" }
            </div>
        }
    } else {
        board.entries().iter().map(render_entry).collect::<Html>()
    };

    html! {
      <section
          class="max-w-3xl mx-auto my-10 p-5 rounded-lg border bg-white text-black border-gray-200 shadow-lg font-sans"
          aria-label="Comments"
      >
        <h3 id="comments-title" class="text-xs uppercase tracking-wider font-semibold mb-2">
            { "Comments" }
        </h3>
        <div
            id={COMMENTS_LIST_ID}
            class="comments-list space-y-2 max-h-72 overflow-auto pr-2"
            role="list"
            aria-labelledby="comments-title"
            ref={list_ref}
        >
            { entries }
        </div>

        <form
            id="comment-form"
            class="comment-form mt-4 grid gap-3 sm:grid-cols-[1fr_auto]"
            aria-describedby="comments-title"
            onsubmit={on_submit}
        >
          <div class="left space-y-2">
            <label class="sr-only" for={COMMENT_NAME_ID}>{ "Name (optional)" }</label>
            <input
                type="text"
                id={COMMENT_NAME_ID}
                name="name"
                placeholder="Your name (optional)"
                maxlength={NAME_MAX_CHARS.to_string()}
                class="w-full p-2 rounded border bg-gray-50 text-black border-gray-200 placeholder-gray-500"
                ref={name_ref}
            />
            <label class="sr-only" for={COMMENT_BODY_ID}>{ "Comment" }</label>
            <textarea
                id={COMMENT_BODY_ID}
                name="body"
                placeholder="Write a comment..."
                required={true}
                maxlength={BODY_MAX_CHARS.to_string()}
                aria-required="true"
                class="w-full p-2 rounded border bg-gray-50 text-black border-gray-200 placeholder-gray-500 min-h-[88px] resize-vertical"
                ref={body_ref}
            />
          </div>
          <div class="comment-actions flex flex-col gap-2 items-end">
            <button
                type="submit"
                id="comment-submit"
                class="px-3 py-2 rounded bg-white text-black border border-gray-200 hover:bg-gray-100"
            >
                { "Post" }
            </button>
            <button
                type="button"
                id="comment-clear"
                onclick={on_clear}
                class="px-3 py-2 rounded border border-gray-200 text-gray-700 bg-transparent"
            >
                { "Clear all" }
            </button>
          </div>
        </form>
      </section>
    }
}

fn render_entry(comment: &Comment) -> Html {
    html! {
      <div class="comment p-3 rounded bg-gray-50 border border-gray-100 text-sm">
        <div class="text-xs text-gray-600 mb-1">
          <strong class="font-medium text-gray-900">{ comment.display_name().to_string() }</strong>
          { " · " }
          <span class="opacity-75">{ time::format_timestamp(comment.ts) }</span>
        </div>
        <div class="body text-gray-900 whitespace-pre-wrap">{ comment.body.clone() }</div>
      </div>
    }
}
