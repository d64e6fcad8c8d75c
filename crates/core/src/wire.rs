//! Rules for rendering stored values in their JSON wire form.
//!
//! Rows come out of PostgreSQL with typed ids, timestamps and nullable
//! text columns. Clients see string identifiers, ISO-8601 text and fixed
//! defaults in place of nulls.

use chrono::SecondsFormat;

use crate::types::{CalendarDate, DbId, Timestamp};

/// Color reported for a category whose `color` column is null.
pub const DEFAULT_CATEGORY_COLOR: &str = "#cccccc";

/// Priority reported (and stored on create) when none is given.
pub const DEFAULT_PRIORITY: &str = "Low";

/// Render a database id as the string identifier clients use.
pub fn id_to_wire(id: DbId) -> String {
    id.to_string()
}

/// Parse a client-supplied identifier.
///
/// Returns `None` for anything that is not a valid id, such as an empty
/// string, a UUID, or a number that overflows `i64`.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok()
}

/// Render a timestamp as ISO-8601 (`2024-05-01T09:30:00.123456+00:00`).
///
/// The fraction is always six digits, or absent on a whole second.
pub fn timestamp_to_wire(ts: Option<&Timestamp>) -> Option<String> {
    ts.map(|t| {
        let format = if t.timestamp_subsec_micros() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        t.to_rfc3339_opts(format, false)
    })
}

/// Render a calendar date as ISO-8601 (`2024-05-01`).
pub fn date_to_wire(date: Option<&CalendarDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Null text columns become the empty string.
pub fn text_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Null or empty text columns become `default`.
pub fn text_or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}
