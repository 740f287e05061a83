/// Storage key for the persisted theme preference.
pub const BW_MODE_KEY: &str = "blog_bw_mode_v1";

/// Marker class toggled on the document root element when BW mode is active.
pub const BW_CLASS: &str = "bw";

/// Serialize the BW-mode flag for storage.
#[must_use]
pub const fn encode_bw(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// Decode a stored preference. Only the exact string `"1"` enables BW mode;
/// anything else, including an absent or corrupt value, decodes to off.
#[must_use]
pub fn decode_bw(raw: Option<&str>) -> bool {
    raw == Some("1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_one_or_zero() {
        assert_eq!(encode_bw(true), "1");
        assert_eq!(encode_bw(false), "0");
    }

    #[test]
    fn only_exact_one_enables() {
        assert!(decode_bw(Some("1")));
        assert!(!decode_bw(Some("0")));
        assert!(!decode_bw(Some("true")));
        assert!(!decode_bw(Some("01")));
        assert!(!decode_bw(Some(" 1")));
        assert!(!decode_bw(None));
    }

    #[test]
    fn round_trip_restores_state() {
        for enabled in [true, false] {
            assert_eq!(decode_bw(Some(encode_bw(enabled))), enabled);
        }
    }
}
