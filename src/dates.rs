//! Date-or-text union formatting
//!
//! A date arrives either already parsed or as text; both arms render to the
//! same UTC string for the same instant. Text that cannot be parsed is an
//! `InvalidShape` error, never a sentinel string.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{DispatchError, DispatchResult};

/// A date that is either already parsed or still textual
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// An already-parsed UTC instant
    Timestamp(DateTime<Utc>),
    /// A textual date, parsed at dispatch time
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(ts: DateTime<Utc>) -> Self {
        DateInput::Timestamp(ts)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

// toUTCString 风格："Mon, 01 Jan 2024 00:00:00 GMT"
const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Render either arm of the union to the same UTC string
pub fn format_date(date: &DateInput) -> DispatchResult<String> {
    match date {
        DateInput::Timestamp(ts) => Ok(ts.format(UTC_FORMAT).to_string()),
        DateInput::Text(text) => {
            let ts = parse_date_text(text)?;
            Ok(ts.format(UTC_FORMAT).to_string())
        }
    }
}

/// Accepts RFC 3339, RFC 2822, or a bare `YYYY-MM-DD` (midnight UTC)
fn parse_date_text(text: &str) -> DispatchResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(DispatchError::invalid_shape(
        "a parseable date string",
        text.to_string(),
    ))
}
