//! Acceptance checks for the comment board against the behavior the widget
//! promises: append semantics, rejection rules, truncation, and tolerance of
//! storage payloads written by other parties.

use blogkit_core::{Comment, CommentBoard, MAX_COMMENTS, prepare_comment};

#[test]
fn valid_submission_appends_exactly_one_entry() {
    let mut board = CommentBoard::from_json(r#"[{"name":"old","body":"earlier","ts":1}]"#);
    let before = board.entries().to_vec();

    let entry = prepare_comment("Ann", "Hello world", 1_700_000_000_000).expect("valid");
    board.push(entry);

    assert_eq!(board.len(), before.len() + 1);
    assert_eq!(board.entries()[..before.len()], before[..]);
    let newest = board.entries().last().expect("non-empty");
    assert_eq!(newest.name, "Ann");
    assert_eq!(newest.body, "Hello world");
    assert_eq!(newest.ts, 1_700_000_000_000);
}

#[test]
fn rejected_submission_leaves_no_trace() {
    let board = CommentBoard::from_json(r#"[{"name":"old","body":"earlier","ts":1}]"#);
    let encoded = board.to_json();

    for body in ["", " ", "x", " y "] {
        assert!(prepare_comment("Ann", body, 2).is_err(), "{body:?} accepted");
    }
    // Nothing was pushed, so the persisted form is unchanged.
    assert_eq!(board.to_json(), encoded);
}

#[test]
fn board_never_exceeds_cap_and_drops_oldest_first() {
    let mut board = CommentBoard::new();
    for i in 0..500_i64 {
        board.push(Comment {
            name: String::new(),
            body: format!("comment {i}"),
            ts: i,
        });
    }
    assert_eq!(board.len(), MAX_COMMENTS);
    assert_eq!(board.entries().first().map(|c| c.ts), Some(300));
    assert_eq!(board.entries().last().map(|c| c.ts), Some(499));
}

#[test]
fn oversized_stored_payload_is_truncated_on_load() {
    let records: Vec<Comment> = (0..(MAX_COMMENTS as i64 + 30))
        .map(|i| Comment {
            name: String::new(),
            body: "persisted".to_string(),
            ts: i,
        })
        .collect();
    let raw = serde_json::to_string(&records).expect("encode fixture");

    let board = CommentBoard::from_json(&raw);
    assert_eq!(board.len(), MAX_COMMENTS);
    assert_eq!(board.entries().first().map(|c| c.ts), Some(30));
}

#[test]
fn stored_markup_survives_as_plain_text() {
    let board = CommentBoard::from_json(
        r#"[{"name":"<b>Mallory</b>","body":"<script>alert(1)</script> & more","ts":1}]"#,
    );
    // The model stores the text verbatim; escaping is the renderer's job and
    // is asserted against rendered markup in the web crate.
    assert_eq!(board.entries()[0].body, "<script>alert(1)</script> & more");
    assert_eq!(board.entries()[0].name, "<b>Mallory</b>");
}
