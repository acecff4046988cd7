//! Timestamp formatting helpers

use anyhow::{Context, Result};
use chrono::DateTime;

/// Shorten an ISO-8601 timestamp to `YYYY-MM-DD`
///
/// The date is taken as written in the timestamp; no timezone conversion
/// is applied.
pub fn short_date(timestamp: &str) -> Result<String> {
    let date = DateTime::parse_from_rfc3339(timestamp)
        .with_context(|| format!("Invalid timestamp '{}'", timestamp))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
