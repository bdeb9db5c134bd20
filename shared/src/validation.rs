//! Form-field parsing and validation
//!
//! HTML forms submit every field as a string. These helpers turn raw field
//! values into typed inputs and report the first offending field.

use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

/// A single invalid form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for FieldError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by_key(|(name, _)| **name);

        match fields.first() {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                FieldError::new(**field, message)
            }
            None => FieldError::new("form", "is invalid"),
        }
    }
}

/// Parse a required integer field (ids and quantities)
pub fn parse_int(field: &str, raw: &str) -> Result<i32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    raw.parse::<i32>()
        .map_err(|_| FieldError::new(field, format!("'{}' is not a whole number", raw)))
}

/// Parse an optional `YYYY-MM-DD` date field; empty means no date
pub fn parse_optional_date(field: &str, raw: &str) -> Result<Option<NaiveDate>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FieldError::new(field, format!("'{}' is not a date (YYYY-MM-DD)", raw)))
}
