//! Date helper functions

use chrono::NaiveDate;

use crate::error::{Result, SiteError};

/// Format a date with a chrono format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "%B %-d, %Y") // -> "January 5, 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Format a date in ISO 8601 form for `datetime` attributes
pub fn date_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `publishedAt` value
///
/// Accepts a plain date (`2024-01-05`) or a date with a time part
/// (`2024-01-05T10:00:00`, `2024-01-05 10:00`); the time is dropped.
pub fn parse_published(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    let date_part = s
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();

    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .ok_or_else(|| SiteError::InvalidDate(s.to_string()))
}
