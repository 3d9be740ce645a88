//! RFC3339 time stamp validation.
//!
//! Accepted shape: `YYYY-MM-DDTHH:MM:SS[.f{1,3}](Z|±HH:MM)`, with the `T` and
//! `Z` markers matched case-insensitively. The shape check does not look at
//! the calendar; [`parse_rfc3339`] does.

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidateError, ValidateResult};

static RFC3339_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]{1,3})?(?:[+-][0-9]{2}:[0-9]{2}|Z)$",
    )
    .expect("RFC3339 pattern compiles")
});

/// Returns `true` if `text` has the RFC3339 time stamp shape.
pub fn is_rfc3339(text: &str) -> bool {
    RFC3339_PATTERN.is_match(text)
}

/// [`is_rfc3339`] as a `Result`.
pub fn validate_rfc3339(text: &str) -> ValidateResult<()> {
    if is_rfc3339(text) {
        Ok(())
    } else {
        Err(ValidateError::NotRfc3339(text.to_string()))
    }
}

/// Check the shape, then parse into a real instant.
///
/// Rejects well-shaped stamps that name no date, such as month 13.
pub fn parse_rfc3339(text: &str) -> ValidateResult<DateTime<FixedOffset>> {
    validate_rfc3339(text)?;
    DateTime::parse_from_rfc3339(&text.to_ascii_uppercase()).map_err(|e| {
        ValidateError::InvalidTimestamp {
            stamp: text.to_string(),
            reason: e.to_string(),
        }
    })
}
