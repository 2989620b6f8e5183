//! Days-left calculation and alert level tiers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::warn;

/// Severity tier derived from days until expiry.
///
/// Boundaries are inclusive on the lower tier: exactly 5 days is
/// `Critical`, exactly 30 is `Warning`. Already-expired tokens
/// (negative day counts) are `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Critical,
    Warning,
    Alert,
    Info,
    Unknown,
}

impl AlertLevel {
    pub fn from_days_left(days_left: Option<i64>) -> Self {
        match days_left {
            None => AlertLevel::Unknown,
            Some(d) if d <= 5 => AlertLevel::Critical,
            Some(d) if d <= 30 => AlertLevel::Warning,
            Some(d) if d <= 60 => AlertLevel::Alert,
            Some(_) => AlertLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            AlertLevel::Critical => "CRITICAL",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Alert => "ALERT",
            AlertLevel::Info => "INFO",
            AlertLevel::Unknown => "UNKNOWN",
        }
    }
}

/// Whole days between now (UTC) and the expiry date, truncated.
///
/// `expires_at` is expected in `YYYY-MM-DD` form. Unparseable values
/// are logged and mapped to `None`; they never fail a refresh cycle.
pub fn days_left(expires_at: &str) -> Option<i64> {
    days_left_at(expires_at, Utc::now().naive_utc())
}

pub fn days_left_at(expires_at: &str, now: NaiveDateTime) -> Option<i64> {
    let trimmed = expires_at.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some((date.and_time(NaiveTime::MIN) - now).num_days()),
        Err(err) => {
            warn!("date parsing failed: '{}' ({})", trimmed, err);
            None
        }
    }
}
