//! Time utilities: epoch-millis conversion and display formatting.

use chrono::{DateTime, Local, Utc};

/// Render an instant for the roster, local time, `M/D/YYYY, HH:MM` (24h).
pub fn format_instant(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%-m/%-d/%Y, %H:%M").to_string()
}

/// Render an optional instant, using the configured placeholder when absent.
pub fn format_optional(dt: Option<&DateTime<Utc>>, placeholder: &str) -> String {
    match dt {
        Some(t) => format_instant(t),
        None => placeholder.to_string(),
    }
}

pub fn millis_to_instant(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

pub fn instant_to_millis(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}
