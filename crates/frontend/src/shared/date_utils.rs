//! Utilities for date and time formatting
//!
//! Timestamps from the API arrive as UTC and are shown as UTC.

use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY-MM-DD HH:MM`
/// Example: 2024-03-15T14:02:26Z -> "2024-03-15 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Like [`format_datetime`], with `-` for a missing value
pub fn format_optional(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "-".to_string())
}
