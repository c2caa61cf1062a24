//! Error types for the roster crate.
//!
//! This module defines the centralized error type [`RosterError`], the
//! field-level [`ValidationError`] shared by the form boundary and the store,
//! and a [`Result`] alias used throughout the crate. All errors are
//! implemented using the `thiserror` crate.

use super::employee::{EmployeeId, Field};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single field was rejected.
///
/// Each kind maps to a dotted translation key so the form can render the
/// message in the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorKind {
    /// Field is empty (after trimming, for text fields).
    Required,
    /// Date field does not hold a `YYYY-MM-DD` calendar date.
    InvalidDate,
    /// Date of birth puts the employee below 18 by year subtraction.
    Underage,
    /// Phone does not match `+90 DDD DDD DD DD`.
    InvalidPhone,
    /// Email does not match `local@domain.tld`.
    InvalidEmail,
    /// Department or position is not one of the enumerated values.
    InvalidOption,
    /// Another employee already uses this email.
    DuplicateEmail,
}

impl FieldErrorKind {
    /// Returns the translation key for this error's message.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Required => "validation.required",
            Self::InvalidDate => "validation.date",
            Self::Underage => "validation.underage",
            Self::InvalidPhone => "validation.phone",
            Self::InvalidEmail => "validation.email",
            Self::InvalidOption => "validation.option",
            Self::DuplicateEmail => "validation.uniqueEmail",
        }
    }
}

/// A rejected field together with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field} is invalid: {kind:?}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// The main error type for roster operations.
///
/// Store mutations fail with [`RosterError::Validation`] or
/// [`RosterError::NotFound`]; the remaining variants cover configuration,
/// theme, locale and I/O failures from the ambient layers.
///
/// # Examples
///
/// ```
/// use roster::domain::{EmployeeId, RosterError};
///
/// let err = RosterError::NotFound(EmployeeId(42));
/// assert_eq!(err.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A field failed validation, either at the form or in the store.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Update target does not exist.
    ///
    /// The UI never offers stale ids, so this indicates the displayed data
    /// and the store have drifted apart.
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Locale table parsing failed.
    #[error("Locale error: {0}")]
    Locale(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host bridge payload could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    /// Returns the validation detail if this is a validation failure.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

/// A specialized `Result` type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: RosterError = ValidationError::new(Field::Email, FieldErrorKind::DuplicateEmail).into();
        let detail = err.as_validation().unwrap();
        assert_eq!(detail.field, Field::Email);
        assert_eq!(detail.kind.translation_key(), "validation.uniqueEmail");
    }

    #[test]
    fn test_not_found_has_no_validation_detail() {
        assert!(RosterError::NotFound(EmployeeId(3)).as_validation().is_none());
    }
}
