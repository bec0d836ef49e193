//! Coercion of raw form values into the shapes the store accepts.

use blockparty_types::common::MAX_TOTAL_SCORE;

/// Turns an optional raw value into a trimmed string. Absent becomes empty.
pub fn normalize(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Parses a raw score and clamps it to `0..=MAX_TOTAL_SCORE`.
///
/// Empty or unparseable input resolves to 0. Decimal input is truncated
/// toward zero, so `"12.9"` becomes 12. Overflowing input is capped.
pub fn resolve_score(raw: Option<&str>) -> i64 {
    let raw = normalize(raw);
    if raw.is_empty() {
        return 0;
    }

    let parsed = raw
        .parse::<i64>()
        .ok()
        .or_else(|| {
            // `as` saturates: infinities land on the i64 bounds, NaN on 0.
            raw.parse::<f64>().ok().map(|value| value.trunc() as i64)
        })
        .unwrap_or(0);

    parsed.clamp(0, MAX_TOTAL_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_defaults() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("  p1 \t")), "p1");
        assert_eq!(normalize(Some("Jane Doe")), "Jane Doe");
    }

    #[test]
    fn test_resolve_score_caps_upper_bound() {
        assert_eq!(resolve_score(Some("1000000")), MAX_TOTAL_SCORE);
        assert_eq!(resolve_score(Some("999999")), 999_999);
        assert_eq!(resolve_score(Some("1e12")), MAX_TOTAL_SCORE);
        assert_eq!(resolve_score(Some("1e400")), MAX_TOTAL_SCORE);
        assert_eq!(resolve_score(Some("Infinity")), MAX_TOTAL_SCORE);
        assert_eq!(resolve_score(Some("-1e400")), 0);
    }

    #[test]
    fn test_resolve_score_defaults_to_zero() {
        assert_eq!(resolve_score(Some("abc")), 0);
        assert_eq!(resolve_score(Some("")), 0);
        assert_eq!(resolve_score(Some("   ")), 0);
        assert_eq!(resolve_score(Some("NaN")), 0);
        assert_eq!(resolve_score(None), 0);
    }

    #[test]
    fn test_resolve_score_parses_numbers() {
        assert_eq!(resolve_score(Some(" 42 ")), 42);
        assert_eq!(resolve_score(Some("12.9")), 12);
        assert_eq!(resolve_score(Some("0")), 0);
    }

    #[test]
    fn test_resolve_score_clamps_negatives_to_zero() {
        assert_eq!(resolve_score(Some("-5")), 0);
        assert_eq!(resolve_score(Some("-0.5")), 0);
    }

    #[test]
    fn test_resolve_score_is_idempotent() {
        for raw in ["abc", "1000000", "-3", "17", "12.5", "", "999999"] {
            let once = resolve_score(Some(raw));
            let twice = resolve_score(Some(&once.to_string()));
            assert_eq!(once, twice, "resolve_score should be idempotent for {raw:?}");
        }
    }
}
