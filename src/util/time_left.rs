//! Auction countdown urgency — maps a human countdown label onto a display
//! tier.
//!
//! Countdown labels are display strings like `"2h 34m"` or `"1d 12h"`, not
//! timestamps. A label counted in hours escalates as the hour figure drops;
//! anything counted in days, or not parseable, renders calm.

#[cfg(test)]
#[path = "time_left_test.rs"]
mod time_left_test;

/// How urgently an auction countdown should read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Urgency {
    /// Under three hours left.
    Critical,
    /// Under twelve hours left.
    Warning,
    /// Days remaining, or no readable hour figure.
    #[default]
    Calm,
}

impl Urgency {
    /// CSS modifier class for the countdown badge.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Critical => "timer--critical",
            Self::Warning => "timer--warning",
            Self::Calm => "timer--calm",
        }
    }
}

/// Classify a countdown label.
#[must_use]
pub fn urgency(time_left: &str) -> Urgency {
    if time_left.contains('h') && !time_left.contains('d') {
        if let Some(hours) = leading_number(time_left) {
            if hours < 3 {
                return Urgency::Critical;
            }
            if hours < 12 {
                return Urgency::Warning;
            }
        }
    }
    Urgency::Calm
}

/// The integer the label starts with, if any.
fn leading_number(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
