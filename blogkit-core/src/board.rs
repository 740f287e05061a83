use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the persisted comment list.
pub const COMMENTS_KEY: &str = "blog_comments_v1";

/// Hard cap on stored comments; oldest entries are dropped beyond this.
pub const MAX_COMMENTS: usize = 200;

/// Minimum trimmed body length accepted on submission.
pub const MIN_BODY_CHARS: usize = 2;

/// Field limits matching the form controls (`maxlength`).
pub const NAME_MAX_CHARS: usize = 60;
pub const BODY_MAX_CHARS: usize = 2000;

/// A single persisted comment record.
///
/// Serialized as `{"name": ..., "body": ..., "ts": ...}` with `ts` in epoch
/// milliseconds. `name` may be empty; display falls back to "Anonymous".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub ts: i64,
}

impl Comment {
    /// Name shown in the rendered list; empty names read as "Anonymous".
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("comment body is shorter than {MIN_BODY_CHARS} characters after trimming")]
    BodyTooShort,
}

/// Validate and normalize a submission into a record ready to append.
///
/// Both fields are trimmed; an empty name is allowed, a body shorter than
/// [`MIN_BODY_CHARS`] after trimming is rejected.
///
/// # Errors
/// Returns [`SubmitError::BodyTooShort`] when the trimmed body is too short.
pub fn prepare_comment(name: &str, body: &str, ts: i64) -> Result<Comment, SubmitError> {
    let body = body.trim();
    if body.chars().count() < MIN_BODY_CHARS {
        return Err(SubmitError::BodyTooShort);
    }
    Ok(Comment {
        name: name.trim().to_string(),
        body: body.to_string(),
        ts,
    })
}

/// The ordered comment list with its mutation operations.
///
/// Owns the only in-memory copy of the list for a page load; the web crate
/// serializes it back to storage after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBoard {
    entries: Vec<Comment>,
}

impl CommentBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored JSON payload.
    ///
    /// Absent callers pass an empty string; malformed JSON or a non-array
    /// payload yields an empty board. Records that survive decoding are
    /// clamped to the form field limits and records whose trimmed body is
    /// shorter than [`MIN_BODY_CHARS`] are dropped, so a storage payload
    /// written by another party cannot break the board invariants.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let Ok(decoded) = serde_json::from_str::<Vec<Comment>>(raw) else {
            return Self::new();
        };
        let mut entries: Vec<Comment> = decoded
            .into_iter()
            .filter(|c| c.body.trim().chars().count() >= MIN_BODY_CHARS)
            .map(|c| Comment {
                name: clamp_chars(c.name, NAME_MAX_CHARS),
                body: clamp_chars(c.body, BODY_MAX_CHARS),
                ts: c.ts,
            })
            .collect();
        if entries.len() > MAX_COMMENTS {
            entries.drain(..entries.len() - MAX_COMMENTS);
        }
        Self { entries }
    }

    /// Serialize for storage. Encoding a plain record list cannot fail in
    /// practice; the empty-array fallback keeps the signature infallible.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| String::from("[]"))
    }

    #[must_use]
    pub fn entries(&self) -> &[Comment] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a record, dropping the oldest entries once the board exceeds
    /// [`MAX_COMMENTS`]. Insertion order of the survivors is preserved.
    pub fn push(&mut self, comment: Comment) {
        self.entries.push(comment);
        if self.entries.len() > MAX_COMMENTS {
            let excess = self.entries.len() - MAX_COMMENTS;
            self.entries.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn clamp_chars(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        value
    } else {
        value.chars().take(max).collect()
    }
}
