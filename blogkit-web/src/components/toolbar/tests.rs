use super::{Toolbar, ToolbarProps};
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn render(props: ToolbarProps) -> String {
    block_on(LocalServerRenderer::<Toolbar>::with_props(props).render())
}

#[test]
fn renders_dark_default_with_top_button_hidden() {
    let html = render(ToolbarProps {
        initial_bw: Some(false),
        initial_scroll_y: Some(0.0),
    });
    assert!(
        html.contains("aria-pressed=\"false\""),
        "toggle should start unpressed: {html}"
    );
    assert!(html.contains("bw-toggle-btn-off"), "missing off state: {html}");
    assert!(!html.contains("bw-toggle-btn-on"), "on state leaked in: {html}");
    assert!(
        html.contains("transition-transform hidden"),
        "back-to-top should start hidden at the top of the page: {html}"
    );
}

#[test]
fn renders_pressed_state_when_bw_restored() {
    let html = render(ToolbarProps {
        initial_bw: Some(true),
        initial_scroll_y: Some(0.0),
    });
    assert!(html.contains("aria-pressed=\"true\""), "{html}");
    assert!(html.contains("bw-toggle-btn-on"), "{html}");
    assert!(!html.contains("bw-toggle-btn-off"), "{html}");
}

#[test]
fn back_to_top_visibility_boundary_is_exact() {
    let at_threshold = render(ToolbarProps {
        initial_bw: Some(false),
        initial_scroll_y: Some(300.0),
    });
    assert!(
        at_threshold.contains("transition-transform hidden"),
        "300px is still hidden: {at_threshold}"
    );

    let past_threshold = render(ToolbarProps {
        initial_bw: Some(false),
        initial_scroll_y: Some(301.0),
    });
    assert!(
        !past_threshold.contains("transition-transform hidden"),
        "301px should show the control: {past_threshold}"
    );
}

#[test]
fn both_buttons_carry_shortcut_hints_and_sr_labels() {
    let html = render(ToolbarProps {
        initial_bw: None,
        initial_scroll_y: None,
    });
    assert!(html.contains("Toggle theme (press &quot;b&quot;)") || html.contains("Toggle theme"));
    assert!(html.contains("Back to top"));
    assert!(html.contains("sr-only"));
    assert!(html.contains("id=\"bw-toggle\""));
    assert!(html.contains("id=\"back-to-top\""));
}
