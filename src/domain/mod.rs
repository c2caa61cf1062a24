//! Domain layer for the roster crate.
//!
//! This module contains the core domain types and rules, independent of the
//! store, the UI layer and any host concerns.
//!
//! # Organization
//!
//! - [`employee`]: Employee record, typed payload, raw draft, enumerations
//! - [`error`]: Error types and result aliases
//! - [`validation`]: Form-boundary validation rules and phone formatting
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use roster::domain::{EmployeeDraft, Field};
//!
//! let mut draft = EmployeeDraft::default();
//! draft.set(Field::FirstName, "Ece".to_string());
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let errors = draft.validate(today).unwrap_err();
//! assert!(!errors.contains_key(&Field::FirstName));
//! ```

pub mod employee;
pub mod error;
pub mod validation;

pub use employee::{Department, Employee, EmployeeData, EmployeeDraft, EmployeeId, Field, Position};
pub use error::{FieldErrorKind, Result, RosterError, ValidationError};
pub use validation::{format_phone, FieldErrors};
