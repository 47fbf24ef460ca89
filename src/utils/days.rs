//! Elapsed-day arithmetic
//!
//! Dates come from a remote store and device clocks, so skew and garbage
//! happen. Every day count used by the tracker passes through these helpers,
//! which clamp instead of failing.

use chrono::{DateTime, Utc};

/// Whole days from `since` to `now`, floored and clamped to >= 0
///
/// A `since` in the future (clock skew) yields 0.
pub fn elapsed_days(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    // num_days truncates toward zero, which equals floor for non-negative spans
    now.signed_duration_since(since).num_days().max(0)
}

/// Clamp a stored day figure to a usable non-negative finite value
pub fn clamp_day_count(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// "1 day" / "3 days"
pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
