//! Field-level validation primitives shared by the form workflows.
//!
//! Validation failures accumulate instead of short-circuiting so a rejected
//! submission reports every broken field at once, alongside the submitter's
//! original input.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Date format accepted by every date input in the application.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accumulated per-field validation errors, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a named field, replacing any earlier message.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validate that a required field is non-blank after trimming.
///
/// Records `{label} is required` on failure and returns the trimmed value on
/// success.
pub fn require_non_blank<'a>(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &'a str,
) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, format!("{label} is required"));
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| "date must use the YYYY-MM-DD format".to_owned())
}

/// Parse an optional date field, recording a field error on bad input.
///
/// Blank input is not an error; it simply yields `None`.
pub fn parse_optional_date(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_date(trimmed) {
        Ok(date) => Some(date),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

/// Trim an optional field, mapping blank input to `None`.
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
