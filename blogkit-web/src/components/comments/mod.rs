mod interactions;
mod view;


pub use interactions::{CLEAR_PROMPT, submit_comment};
pub use view::{CommentsPanel, CommentsPanelProps};

/// Ids shared with the keyboard shortcuts and the page API.
pub const COMMENT_BODY_ID: &str = "comment-body";
pub const COMMENT_NAME_ID: &str = "comment-name";
pub const COMMENTS_LIST_ID: &str = "comments-list";
