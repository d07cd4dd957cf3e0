//! Display formatting and URL building shared by the mappers.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::error::ModelError;

/// Allowed characters of a dataset id, edition or version in a page URL.
static PATH_SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

const SIZE_UNITS: [&str; 4] = ["kB", "MB", "GB", "TB"];

fn checked_segment(segment: &str) -> Result<&str, ModelError> {
    if PATH_SEGMENT_REGEX.is_match(segment) {
        Ok(segment)
    } else {
        Err(ModelError::InvalidPathSegment {
            segment: segment.to_string(),
        })
    }
}

/// Builds `/datasets/{id}/editions/{edition}/versions/{version}`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidPathSegment`] if any part is empty or holds
/// characters outside `[A-Za-z0-9_-]`.
pub fn version_url(dataset_id: &str, edition: &str, version: &str) -> Result<String, ModelError> {
    Ok(format!(
        "{}/{}",
        versions_url(dataset_id, edition)?,
        checked_segment(version)?
    ))
}

/// Builds `/datasets/{id}/editions/{edition}/versions`.
pub fn versions_url(dataset_id: &str, edition: &str) -> Result<String, ModelError> {
    Ok(format!(
        "/datasets/{}/editions/{}/versions",
        checked_segment(dataset_id)?,
        checked_segment(edition)?
    ))
}

/// Formats a backend timestamp as `2 January 2006`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Anything else
/// (free text such as "To be announced") is returned unchanged.
pub fn format_release_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%-d %B %Y").to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-d %B %Y").to_string();
    }

    tracing::debug!(raw, "Release date is not a timestamp, keeping it verbatim");
    raw.to_string()
}

/// Formats a byte count with SI units and one decimal, e.g. `438.3 kB`.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    // Compare against the rounded value so 999.95 kB prints as 1.0 MB.
    while (value * 10.0).round() >= 10_000.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{value:.1} {}", SIZE_UNITS[unit])
}
