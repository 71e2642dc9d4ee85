//! Numeric field encodings
//!
//! Temperatures travel as fixed-point x10 integers: the panel divides by
//! ten on its side. The conversion truncates toward zero rather than
//! rounding - the panel firmware was calibrated against that behaviour,
//! so 18.25 encodes as 182, not 183.

/// Parse a backend attribute as `f32`, falling back on malformed input
///
/// Attribute values are always strings; absent or unparseable numerics
/// degrade to a caller-chosen default instead of failing the render.
pub fn parse_f32_or(raw: &str, default: f32) -> f32 {
    raw.trim().parse().unwrap_or(default)
}

/// Encode a value as a fixed-point x10 integer, truncating toward zero
pub fn scale_x10(value: f32) -> i32 {
    (value * 10.0) as i32
}

/// Parse and encode in one step, with a fallback for malformed input
pub fn scale_x10_str(raw: &str, default: f32) -> i32 {
    scale_x10(parse_f32_or(raw, default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scale_exact_values() {
        assert_eq!(scale_x10(21.5), 215);
        assert_eq!(scale_x10(24.0), 240);
        assert_eq!(scale_x10(18.0), 180);
        assert_eq!(scale_x10(0.0), 0);
        assert_eq!(scale_x10(0.5), 5);
    }

    #[test]
    fn test_scale_truncates_toward_zero() {
        // 18.25 and 182.5 are exactly representable; truncation keeps 182
        // where round-half-up would produce 183.
        assert_eq!(scale_x10(18.25), 182);
        assert_eq!(scale_x10(-18.25), -182);
    }

    #[test]
    fn test_parse_fallback() {
        assert_eq!(parse_f32_or("21.5", 0.0), 21.5);
        assert_eq!(parse_f32_or(" 21.5 ", 0.0), 21.5);
        assert_eq!(parse_f32_or("abc", 0.0), 0.0);
        assert_eq!(parse_f32_or("", 7.0), 7.0);
    }

    #[test]
    fn test_scale_str() {
        assert_eq!(scale_x10_str("24", 0.0), 240);
        assert_eq!(scale_x10_str("", 0.5), 5);
        assert_eq!(scale_x10_str("garbage", 0.0), 0);
    }

    proptest! {
        #[test]
        fn prop_whole_degrees_scale_exactly(deg in -500i32..=500) {
            prop_assert_eq!(scale_x10(deg as f32), deg * 10);
        }

        #[test]
        fn prop_quarter_degrees_truncate(deg in 0i32..=500) {
            // x.25 scales to 10x + 2 (the .5 tenth is dropped)
            prop_assert_eq!(scale_x10(deg as f32 + 0.25), deg * 10 + 2);
        }
    }
}
