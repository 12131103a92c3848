//! Bid validation — the rule gating the auction submit button.

#[cfg(test)]
#[path = "bid_test.rs"]
mod bid_test;

/// Parse a user-entered ETH amount. Rejects anything that is not a finite
/// number.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// A bid goes through only when it parses and strictly exceeds the current
/// bid. An unparsable current bid rejects everything rather than letting a
/// bad record accept arbitrary amounts.
#[must_use]
pub fn bid_allowed(amount: &str, current_bid: &str) -> bool {
    match (parse_amount(amount), parse_amount(current_bid)) {
        (Some(amount), Some(current)) => amount > current,
        _ => false,
    }
}
