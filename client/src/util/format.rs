//! Display formatting for wire values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Render an RFC 3339 timestamp as a calendar date (`2024-04-01`).
///
/// Unparseable input is shown as-is rather than hidden.
pub fn display_date(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Caption for an image card; falls back when the uploader left it blank.
pub fn caption(description: Option<&str>) -> &str {
    match description.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => "Untitled image",
    }
}
