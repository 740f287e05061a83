mod interactions;
mod view;

#[cfg(test)]
mod tests;

pub use view::{Toolbar, ToolbarProps};

/// Id of the back-to-top button; the scroll observer toggles its `hidden`
/// class through this handle.
pub const BACK_TO_TOP_ID: &str = "back-to-top";
