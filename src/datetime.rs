//! Date/time utilities for QBoard.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Format a datetime string (stored as UTC) in the specified timezone.
///
/// Accepts RFC3339 or the SQLite `datetime('now')` format
/// (YYYY-MM-DD HH:MM:SS). Returns the original string if parsing
/// fails, so an odd row never breaks a listing.
pub fn format_datetime(datetime_str: &str, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return datetime_str.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.with_timezone(&Utc).with_timezone(&tz).format(format).to_string();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        return naive.and_utc().with_timezone(&tz).format(format).to_string();
    }

    datetime_str.to_string()
}

/// Format a stored timestamp the way answer lists display it,
/// e.g. "09:41 PM · Jan 15, 2024".
pub fn display_timestamp(datetime_str: &str, timezone: &str) -> String {
    format_datetime(datetime_str, timezone, "%I:%M %p · %b %d, %Y")
}
