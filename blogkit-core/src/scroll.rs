/// Vertical scroll offset beyond which the back-to-top control appears.
pub const SCROLL_SHOW_PX: f64 = 300.0;

/// Visibility rule for the back-to-top control. The boundary is exact:
/// an offset of 300 keeps the control hidden, 301 shows it.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_SHOW_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_exact() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(299.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
        assert!(back_to_top_visible(10_000.0));
    }
}
