//! Form Input Rules
//!
//! Conversions applied to raw text form input before it is placed in a
//! request body. These are shared by every page that submits a form.
//!
//! - Comma-separated free text (tags, skills) becomes a trimmed list.
//! - Numeric amounts never reach a request body as NaN: blank or
//!   non-numeric text falls back to a default (or is omitted).
//! - Required fields are checked locally before any request is issued.

use thiserror::Error;

/// Split a comma-separated input into a trimmed list
///
/// Pieces that are empty after trimming are dropped, so `""` yields `[]`
/// rather than `[""]`.
///
/// ## Examples
/// ```rust
/// use kernel::input::split_list;
///
/// assert!(split_list("").is_empty());
/// assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a credit/duration amount, falling back to `0`
pub fn parse_amount(raw: &str) -> u32 {
    parse_amount_or(raw, 0)
}

/// Parse a credit/duration amount, falling back to `default`
///
/// Accepts integral text and finite decimal text (truncated toward zero).
/// Negative, blank or non-numeric input yields `default`.
pub fn parse_amount_or(raw: &str, default: u32) -> u32 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 => value as u32,
        _ => default,
    }
}

/// Parse an optional profile number (e.g. passing year)
///
/// Blank or non-numeric input yields `None` so the field is omitted from
/// the request body.
pub fn parse_optional_number(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Keep text only when it is not blank
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| raw.to_string())
}

/// Required form fields left blank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields ({})", .fields.join(", "))]
pub struct MissingFields {
    fields: Vec<&'static str>,
}

impl MissingFields {
    pub fn new(fields: Vec<&'static str>) -> Self {
        Self { fields }
    }

    /// Names of the blank fields, in form order
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

/// Check that every `(name, value)` pair has non-blank text
///
/// ## Examples
/// ```rust
/// use kernel::input::require_filled;
///
/// assert!(require_filled(&[("title", "Hi"), ("content", "Body")]).is_ok());
/// let err = require_filled(&[("title", " "), ("content", "Body")]).unwrap_err();
/// assert_eq!(err.fields(), &["title"]);
/// ```
pub fn require_filled(fields: &[(&'static str, &str)]) -> Result<(), MissingFields> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields::new(missing))
    }
}
