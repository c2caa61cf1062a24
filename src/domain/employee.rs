//! Employee domain model.
//!
//! This module defines the [`Employee`] record held by the store, the typed
//! [`EmployeeData`] payload accepted by store mutations, and the raw
//! [`EmployeeDraft`] a form edits before validation. Departments and
//! positions are closed enumerations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Store-assigned employee identifier.
///
/// Immutable once assigned. Ids come from a monotonic counter and are never
/// reused after deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Department {
    Analytics,
    Tech,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

/// Editable employee fields, in form order.
///
/// The camelCase string form doubles as the HTML input name and the
/// translation key segment (`employeeForm.fields.<field>.label`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
}

/// A validated employee payload, without identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

/// An employee record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
    /// Set when the record is edited; `None` for untouched records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    #[must_use]
    pub fn from_data(id: EmployeeId, data: EmployeeData) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            date_of_employment: data.date_of_employment,
            date_of_birth: data.date_of_birth,
            phone: data.phone,
            email: data.email,
            department: data.department,
            position: data.position,
            updated_at: None,
        }
    }

    /// Replaces every editable field, keeping the id, and stamps `updated_at`.
    pub fn apply(&mut self, data: EmployeeData, now: DateTime<Utc>) {
        self.first_name = data.first_name;
        self.last_name = data.last_name;
        self.date_of_employment = data.date_of_employment;
        self.date_of_birth = data.date_of_birth;
        self.phone = data.phone;
        self.email = data.email;
        self.department = data.department;
        self.position = data.position;
        self.updated_at = Some(now);
    }

    /// Returns `"first last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against first name, last name and
    /// the full name. `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.full_name().to_lowercase().contains(needle)
    }
}

/// Raw form state for one employee, exactly as typed.
///
/// Nothing is parsed until `EmployeeDraft::validate` runs at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    /// Pre-populates a draft from an existing record for editing.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            date_of_employment: employee.date_of_employment.to_string(),
            date_of_birth: employee.date_of_birth.to_string(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            department: employee.department.to_string(),
            position: employee.position.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfEmployment => &self.date_of_employment,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Department => &self.department,
            Field::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::DateOfEmployment => &mut self.date_of_employment,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Department => &mut self.department,
            Field::Position => &mut self.position,
        };
        *slot = value;
    }
}
