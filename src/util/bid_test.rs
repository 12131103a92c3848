use super::*;

// =============================================================
// parse_amount
// =============================================================

#[test]
fn parse_amount_accepts_decimals_and_trims() {
    assert_eq!(parse_amount("3.5"), Some(3.5));
    assert_eq!(parse_amount("  2 "), Some(2.0));
    assert_eq!(parse_amount("0.001"), Some(0.001));
}

#[test]
fn parse_amount_rejects_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("3.5 eth"), None);
    assert_eq!(parse_amount("1,5"), None);
}

#[test]
fn parse_amount_rejects_non_finite() {
    assert_eq!(parse_amount("inf"), None);
    assert_eq!(parse_amount("NaN"), None);
}

// =============================================================
// bid_allowed
// =============================================================

#[test]
fn bid_must_strictly_exceed_current() {
    assert!(bid_allowed("3.3", "3.2"));
    assert!(!bid_allowed("3.2", "3.2"));
    assert!(!bid_allowed("3.1", "3.2"));
}

#[test]
fn non_numeric_bid_is_rejected() {
    assert!(!bid_allowed("", "3.2"));
    assert!(!bid_allowed("lots", "3.2"));
}

#[test]
fn unparsable_current_bid_rejects_everything() {
    assert!(!bid_allowed("99", "n/a"));
    assert!(!bid_allowed("99", ""));
}

#[test]
fn negative_amounts_still_compare_numerically() {
    assert!(bid_allowed("0", "-1"));
    assert!(!bid_allowed("-2", "-1"));
}
