//! Create/edit form modal state.
//!
//! A [`FormModal`] owns a raw [`EmployeeDraft`] that is independent of the
//! store until commit. Submitting validates the draft; edits additionally
//! pass through a [`Confirmation`] before the commit is handed to the host.
//!
//! # Commit Sequence
//!
//! ```text
//! submit ──invalid──▶ field errors, stays open
//!    │
//!    ├─create──▶ submitting ──host Commit event──▶ add_employee
//!    │
//!    └─edit──▶ Staged ──confirm──▶ submitting ──host Commit event──▶ update_employee
//! ```
//!
//! While submitting, further submissions are ignored and the submit button
//! shows a processing label.

use super::confirm::{Confirmation, Prompt};
use crate::domain::error::{Result, RosterError};
use crate::domain::{format_phone, Employee, EmployeeData, EmployeeDraft, EmployeeId, Field, FieldErrors};
use crate::storage::EmployeeStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one open form modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(pub u32);

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the given record; the id is the update target.
    Edit(Employee),
}

/// What a submit attempt led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft failed validation; errors are recorded on the modal.
    Invalid,
    /// Edit is staged and waiting for the update confirmation.
    AwaitingConfirmation,
    /// Commit is ready; the host must deliver the commit event.
    Submitting,
    /// A commit is already in flight.
    Ignored,
}

/// What a commit attempt led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Store accepted the record; the modal should close.
    Saved(EmployeeId),
    /// Store rejected the email; the modal stays open with the error shown.
    Rejected,
    /// No commit was pending.
    Nothing,
}

#[derive(Debug, Clone)]
pub struct FormModal {
    id: ModalId,
    mode: FormMode,
    draft: EmployeeDraft,
    errors: FieldErrors,
    pending: Option<EmployeeData>,
    confirmation: Confirmation<EmployeeData>,
}

impl FormModal {
    /// Opens an empty form for a new employee.
    #[must_use]
    pub fn create(id: ModalId) -> Self {
        Self::with_mode(id, FormMode::Create, EmployeeDraft::default())
    }

    /// Opens a form pre-populated from `employee`.
    #[must_use]
    pub fn edit(id: ModalId, employee: Employee) -> Self {
        let draft = EmployeeDraft::from_employee(&employee);
        Self::with_mode(id, FormMode::Edit(employee), draft)
    }

    fn with_mode(id: ModalId, mode: FormMode, draft: EmployeeDraft) -> Self {
        Self {
            id,
            mode,
            draft,
            errors: FieldErrors::new(),
            pending: None,
            confirmation: Confirmation::new(),
        }
    }

    /// Records typed input for `field` and clears that field's error.
    ///
    /// Phone input is reformatted into the `+90 DDD DDD DD DD` template.
    pub fn input(&mut self, field: Field, value: String) {
        let value = if field == Field::Phone {
            format_phone(&value)
        } else {
            value
        };
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Validates the draft and advances the commit sequence.
    ///
    /// `update_prompt` is used only when an edit needs confirmation.
    pub fn submit(&mut self, today: NaiveDate, update_prompt: Prompt) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!(modal = %self.id, "submit ignored while submitting");
            return SubmitOutcome::Ignored;
        }

        let data = match self.draft.validate(today) {
            Ok(data) => data,
            Err(errors) => {
                tracing::debug!(modal = %self.id, fields = errors.len(), "form validation failed");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors.clear();

        match self.mode {
            FormMode::Create => {
                self.pending = Some(data);
                SubmitOutcome::Submitting
            }
            FormMode::Edit(_) => {
                self.confirmation.stage(data, update_prompt);
                SubmitOutcome::AwaitingConfirmation
            }
        }
    }

    /// Confirms a staged update. Returns `true` when a commit is now pending.
    pub fn confirm_update(&mut self) -> bool {
        self.confirmation.confirm()
    }

    /// Dismisses the update confirmation without committing.
    pub fn cancel_update(&mut self) {
        self.confirmation.cancel();
    }

    /// Writes the pending payload to the store.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if the record being edited no longer
    /// exists. Duplicate emails are not errors here; they become the email
    /// field's message and yield [`CommitOutcome::Rejected`].
    pub fn commit(&mut self, store: &mut EmployeeStore) -> Result<CommitOutcome> {
        let data = match self.mode {
            FormMode::Create => self.pending.take(),
            FormMode::Edit(_) => self.confirmation.take_confirmed(),
        };
        let Some(data) = data else {
            return Ok(CommitOutcome::Nothing);
        };

        let result = match &self.mode {
            FormMode::Create => store.add_employee(data),
            FormMode::Edit(employee) => store.update_employee(employee.id, data).map(|()| employee.id),
        };

        match result {
            Ok(id) => {
                tracing::debug!(modal = %self.id, employee_id = %id, "form committed");
                self.reset();
                Ok(CommitOutcome::Saved(id))
            }
            Err(RosterError::Validation(err)) => {
                tracing::debug!(modal = %self.id, field = %err.field, "store rejected form");
                self.errors.insert(err.field, err.kind);
                Ok(CommitOutcome::Rejected)
            }
            Err(other) => Err(other),
        }
    }

    /// Clears the draft, errors and any pending commit.
    pub fn reset(&mut self) {
        self.draft = EmployeeDraft::default();
        self.errors.clear();
        self.pending = None;
        self.confirmation.reset();
    }

    #[must_use]
    pub const fn id(&self) -> ModalId {
        self.id
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    #[must_use]
    pub const fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn confirmation(&self) -> &Confirmation<EmployeeData> {
        &self.confirmation
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.pending.is_some() || self.confirmation.is_submitting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldErrorKind;
    use crate::storage::store::fixtures::employee;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn fill(modal: &mut FormModal, email: &str) {
        modal.input(Field::FirstName, "Fatma".to_string());
        modal.input(Field::LastName, "Çelik".to_string());
        modal.input(Field::DateOfEmployment, "2023-04-03".to_string());
        modal.input(Field::DateOfBirth, "1992-11-20".to_string());
        modal.input(Field::Phone, "905321234567".to_string());
        modal.input(Field::Email, email.to_string());
        modal.input(Field::Department, "Tech".to_string());
        modal.input(Field::Position, "Senior".to_string());
    }

    fn store() -> EmployeeStore {
        let mut taken = employee(1, "Ali", "Kaya");
        taken.email = "x@y.com".to_string();
        EmployeeStore::new(vec![taken], 12)
    }

    #[test]
    fn test_phone_input_is_formatted() {
        let mut modal = FormModal::create(ModalId(1));
        modal.input(Field::Phone, "90555".to_string());
        assert_eq!(modal.draft().phone, "+90 555");
    }

    #[test]
    fn test_input_clears_only_that_fields_error() {
        let mut modal = FormModal::create(ModalId(1));
        assert_eq!(modal.submit(today(), Prompt::default()), SubmitOutcome::Invalid);
        assert_eq!(modal.errors().len(), 8);

        modal.input(Field::FirstName, "E".to_string());
        assert!(!modal.errors().contains_key(&Field::FirstName));
        assert_eq!(modal.errors().len(), 7);
    }

    #[test]
    fn test_create_commits_and_resets() {
        let mut store = store();
        let mut modal = FormModal::create(ModalId(1));
        fill(&mut modal, "fatma@celik.org");

        assert_eq!(modal.submit(today(), Prompt::default()), SubmitOutcome::Submitting);
        assert!(modal.is_submitting());
        assert_eq!(modal.submit(today(), Prompt::default()), SubmitOutcome::Ignored);

        let outcome = modal.commit(&mut store).unwrap();
        assert_eq!(outcome, CommitOutcome::Saved(EmployeeId(2)));
        assert_eq!(store.get(EmployeeId(2)).unwrap().phone, "+90 532 123 45 67");
        assert_eq!(modal.draft(), &EmployeeDraft::default());
        assert!(!modal.is_submitting());
    }

    #[test]
    fn test_duplicate_email_becomes_field_error() {
        let mut store = store();
        let mut modal = FormModal::create(ModalId(1));
        fill(&mut modal, "x@y.com");
        modal.submit(today(), Prompt::default());

        assert_eq!(modal.commit(&mut store).unwrap(), CommitOutcome::Rejected);
        assert_eq!(modal.errors().get(&Field::Email), Some(&FieldErrorKind::DuplicateEmail));
        assert_eq!(modal.draft().email, "x@y.com");
        assert!(!modal.is_submitting());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_requires_confirmation() {
        let mut store = store();
        let target = store.get(EmployeeId(1)).unwrap().clone();
        let mut modal = FormModal::edit(ModalId(2), target);
        assert_eq!(modal.draft().first_name, "Ali");

        modal.input(Field::LastName, "Aydın".to_string());
        let prompt = Prompt::new("Sure?", "Update Employee");
        assert_eq!(modal.submit(today(), prompt), SubmitOutcome::AwaitingConfirmation);
        assert!(modal.confirmation().is_open());
        assert_eq!(modal.commit(&mut store).unwrap(), CommitOutcome::Nothing);

        assert!(modal.confirm_update());
        assert!(modal.is_submitting());
        assert_eq!(modal.commit(&mut store).unwrap(), CommitOutcome::Saved(EmployeeId(1)));
        assert_eq!(store.get(EmployeeId(1)).unwrap().last_name, "Aydın");
        assert!(!modal.confirmation().is_open());
    }

    #[test]
    fn test_cancelled_update_leaves_store() {
        let mut store = store();
        let target = store.get(EmployeeId(1)).unwrap().clone();
        let mut modal = FormModal::edit(ModalId(2), target);
        modal.input(Field::FirstName, "Berk".to_string());
        modal.submit(today(), Prompt::default());
        modal.cancel_update();

        assert_eq!(modal.commit(&mut store).unwrap(), CommitOutcome::Nothing);
        assert_eq!(store.get(EmployeeId(1)).unwrap().first_name, "Ali");
        assert_eq!(modal.draft().first_name, "Berk");
    }

    #[test]
    fn test_edit_of_deleted_record_is_not_found() {
        let mut store = store();
        let target = store.get(EmployeeId(1)).unwrap().clone();
        let mut modal = FormModal::edit(ModalId(2), target);
        modal.submit(today(), Prompt::default());
        modal.confirm_update();
        store.delete_employee(EmployeeId(1));

        let err = modal.commit(&mut store).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(EmployeeId(1))));
    }
}
