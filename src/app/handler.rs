//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input
//! forwarded by the host, translating it into store calls, component state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The host maps a DOM interaction to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Store mutations notify subscribers synchronously
//! 4. Actions are collected and returned for the host to execute
//!
//! # Event Types
//!
//! - **Routing**: `Navigate`, `Login`, `LoginProceed`
//! - **Header**: `ToggleLanguagePopup`, `ChooseLanguage`, `OutsideClick`, `AddNew`
//! - **List**: `SearchInput`, `ClearSearch`, `SetViewType`, `ChangePage`,
//!   `SelectAll`, `ToggleSelection`, `EditEmployee`
//! - **Delete confirmation**: `RequestDelete`, `RequestBulkDelete`,
//!   `ConfirmDelete`, `CancelDelete`
//! - **Form modal**: `FormInput`, `FormSubmit`, `FormConfirmUpdate`,
//!   `FormCancelUpdate`, `CloseModal`, `Commit`
//!
//! # Example
//!
//! ```
//! use roster::app::{handle_event, Action, AppState, Event};
//! use roster::i18n::{I18n, Locale};
//! use roster::storage::EmployeeStore;
//! use roster::ui::Theme;
//!
//! let mut state = AppState::new(EmployeeStore::new(vec![], 12), I18n::new(Locale::En), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Navigate { path: "/".into() })?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::Navigate { path: "/login-page".into() }]);
//! # Ok::<(), roster::domain::RosterError>(())
//! ```

use super::form::{CommitOutcome, FormModal, ModalId, SubmitOutcome};
use super::router::{EMPLOYEES_PATH, LOGIN_PATH};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{EmployeeId, Field};
use crate::i18n::Locale;
use crate::storage::ViewType;
use serde::Deserialize;

/// Events forwarded by the host, deserialized from a `type`-tagged JSON
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    /// Browser location changed (initial load, link click or history pop).
    Navigate { path: String },
    /// Header login button.
    Login,
    /// Login form "proceed"; there is no authentication.
    LoginProceed,

    /// Opens or closes the language popup.
    ToggleLanguagePopup,
    ChooseLanguage { lang: Locale },
    /// A click landed outside the language selector.
    OutsideClick,
    /// Header "add new" button.
    AddNew,

    /// One keystroke in the search box; carries the whole query.
    SearchInput { query: String },
    ClearSearch,
    SetViewType { view: ViewType },
    ChangePage { page: usize },
    /// Header checkbox of the table.
    SelectAll { checked: bool },
    ToggleSelection { id: EmployeeId },
    EditEmployee { id: EmployeeId },

    RequestDelete { id: EmployeeId },
    RequestBulkDelete,
    ConfirmDelete,
    CancelDelete,

    FormInput { modal: ModalId, field: Field, value: String },
    FormSubmit { modal: ModalId },
    FormConfirmUpdate { modal: ModalId },
    FormCancelUpdate { modal: ModalId },
    /// Cancel button or overlay click.
    CloseModal { modal: ModalId },
    /// Second half of a submission, delivered after [`Action::Commit`].
    Commit { modal: ModalId },
}

fn navigate(state: &mut AppState, path: &str) -> (bool, Vec<Action>) {
    let canonical = state.navigate(path);
    (true, vec![Action::Navigate { path: canonical }])
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`. The render flag is `false` when the event
/// left every visible piece of state untouched.
///
/// # Errors
///
/// Returns [`RosterError::NotFound`](crate::domain::RosterError::NotFound)
/// when a commit targets an employee that no longer exists. Every other
/// store failure is absorbed into the form as an inline message.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate { path } => Ok(navigate(state, path)),
        Event::Login => Ok(navigate(state, LOGIN_PATH)),
        Event::LoginProceed => Ok(navigate(state, EMPLOYEES_PATH)),

        Event::ToggleLanguagePopup => {
            state.header.toggle_language_popup();
            Ok((true, vec![]))
        }
        Event::ChooseLanguage { lang } => {
            let lang = state.header.choose_language(*lang);
            state.set_locale(lang);
            Ok((true, vec![Action::SetDocumentLanguage { lang }]))
        }
        Event::OutsideClick => Ok((state.header.close_language_popup(), vec![])),
        Event::AddNew => {
            if state.route.is_login() {
                tracing::debug!("add new ignored on login page");
                return Ok((false, vec![]));
            }
            state.open_create_modal();
            Ok((true, vec![]))
        }

        Event::SearchInput { query } => {
            tracing::trace!(query = %query, "search query updated");
            state.list.search(&mut state.store, query.clone());
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.list.clear_search(&mut state.store);
            Ok((true, vec![]))
        }
        Event::SetViewType { view } => {
            state.list.set_view_type(&mut state.store, *view);
            Ok((true, vec![]))
        }
        Event::ChangePage { page } => Ok((state.list.change_page(&mut state.store, *page), vec![])),
        Event::SelectAll { checked } => Ok((state.list.select_all(&mut state.store, *checked), vec![])),
        Event::ToggleSelection { id } => Ok((state.list.toggle_selection(&mut state.store, *id), vec![])),
        Event::EditEmployee { id } => {
            let opened = state.open_edit_modal(*id).is_some();
            if !opened {
                tracing::debug!(employee_id = %id, "edit requested for unknown employee");
            }
            Ok((opened, vec![]))
        }

        Event::RequestDelete { id } => {
            let Some(employee) = state.store.get(*id) else {
                tracing::debug!(employee_id = %id, "delete requested for unknown employee");
                return Ok((false, vec![]));
            };
            let prompt = state.delete_prompt(employee);
            let name = employee.full_name();
            state.list.request_delete(*id, name, prompt);
            Ok((true, vec![]))
        }
        Event::RequestBulkDelete => {
            let count = state.store.selected().len();
            let prompt = state.bulk_delete_prompt(count);
            Ok((state.list.request_bulk_delete(count, prompt), vec![]))
        }
        Event::ConfirmDelete => {
            let removed = state.list.confirm_delete(&mut state.store);
            tracing::debug!(removed = ?removed, "delete confirmation resolved");
            Ok((removed.is_some(), vec![]))
        }
        Event::CancelDelete => {
            state.list.cancel_delete();
            Ok((true, vec![]))
        }

        Event::FormInput { modal, field, value } => {
            let Some(form) = state.modal_mut(*modal) else {
                return Ok((false, vec![]));
            };
            form.input(*field, value.clone());
            Ok((true, vec![]))
        }
        Event::FormSubmit { modal } => {
            let today = state.today();
            let prompt = state.update_prompt();
            let Some(form) = state.modal_mut(*modal) else {
                return Ok((false, vec![]));
            };
            match form.submit(today, prompt) {
                SubmitOutcome::Submitting => Ok((true, vec![Action::Commit { modal: *modal }])),
                SubmitOutcome::Invalid | SubmitOutcome::AwaitingConfirmation => Ok((true, vec![])),
                SubmitOutcome::Ignored => Ok((false, vec![])),
            }
        }
        Event::FormConfirmUpdate { modal } => {
            let Some(form) = state.modal_mut(*modal) else {
                return Ok((false, vec![]));
            };
            if form.confirm_update() {
                Ok((true, vec![Action::Commit { modal: *modal }]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::FormCancelUpdate { modal } => {
            let Some(form) = state.modal_mut(*modal) else {
                return Ok((false, vec![]));
            };
            form.cancel_update();
            Ok((true, vec![]))
        }
        Event::CloseModal { modal } => {
            if state.modal(*modal).is_some_and(FormModal::is_submitting) {
                tracing::debug!(modal = %modal, "close ignored while submitting");
                return Ok((false, vec![]));
            }
            Ok((state.close_modal(*modal), vec![]))
        }
        Event::Commit { modal } => {
            let AppState { store, modals, .. } = state;
            let Some(form) = modals.iter_mut().find(|m| m.id() == *modal) else {
                tracing::debug!(modal = %modal, "commit for closed modal dropped");
                return Ok((false, vec![]));
            };
            match form.commit(store)? {
                CommitOutcome::Saved(_) => {
                    state.close_modal(*modal);
                    Ok((true, vec![]))
                }
                CommitOutcome::Rejected => Ok((true, vec![])),
                CommitOutcome::Nothing => Ok((false, vec![])),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldErrorKind;
    use crate::i18n::I18n;
    use crate::storage::store::fixtures::numbered;
    use crate::storage::EmployeeStore;
    use crate::ui::Theme;

    fn state(count: u32) -> AppState {
        let mut state =
            AppState::new(EmployeeStore::new(numbered(count), 12), I18n::new(Locale::En), Theme::default());
        handle_event(&mut state, &Event::Navigate { path: "/employees".into() }).unwrap();
        state
    }

    fn fill(state: &mut AppState, modal: ModalId, email: &str) {
        let values = [
            (Field::FirstName, "Zeynep"),
            (Field::LastName, "Öztürk"),
            (Field::DateOfEmployment, "2024-02-01"),
            (Field::DateOfBirth, "1988-03-15"),
            (Field::Phone, "905001112233"),
            (Field::Email, email),
            (Field::Department, "Analytics"),
            (Field::Position, "Medior"),
        ];
        for (field, value) in values {
            handle_event(state, &Event::FormInput { modal, field, value: value.to_string() }).unwrap();
        }
    }

    #[test]
    fn test_root_redirect_emits_login_path() {
        let mut state = state(0);
        let (_, actions) = handle_event(&mut state, &Event::Navigate { path: "/".into() }).unwrap();
        assert_eq!(actions, vec![Action::Navigate { path: "/login-page".into() }]);
        assert!(state.route.is_login());
    }

    #[test]
    fn test_add_new_ignored_on_login() {
        let mut state = state(0);
        handle_event(&mut state, &Event::Login).unwrap();
        let (render, _) = handle_event(&mut state, &Event::AddNew).unwrap();
        assert!(!render);
        assert!(state.modals.is_empty());
    }

    #[test]
    fn test_create_flow_commits_via_host_round_trip() {
        let mut state = state(2);
        handle_event(&mut state, &Event::AddNew).unwrap();
        let modal = state.modals[0].id();
        fill(&mut state, modal, "zeynep@ozturk.org");

        let (_, actions) = handle_event(&mut state, &Event::FormSubmit { modal }).unwrap();
        assert_eq!(actions, vec![Action::Commit { modal }]);
        assert_eq!(state.store.len(), 2);

        let (again, _) = handle_event(&mut state, &Event::FormSubmit { modal }).unwrap();
        assert!(!again);

        handle_event(&mut state, &Event::Commit { modal }).unwrap();
        assert_eq!(state.store.len(), 3);
        assert!(state.modals.is_empty());
        assert_eq!(state.list.snapshot().total, 3);
    }

    #[test]
    fn test_close_ignored_while_commit_pending() {
        let mut state = state(2);
        handle_event(&mut state, &Event::AddNew).unwrap();
        let modal = state.modals[0].id();
        fill(&mut state, modal, "zeynep@ozturk.org");
        handle_event(&mut state, &Event::FormSubmit { modal }).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::CloseModal { modal }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.modals.len(), 1);

        handle_event(&mut state, &Event::Commit { modal }).unwrap();
        assert_eq!(state.store.len(), 3);
        assert!(state.modals.is_empty());
    }

    #[test]
    fn test_close_allowed_before_submit() {
        let mut state = state(0);
        handle_event(&mut state, &Event::AddNew).unwrap();
        let modal = state.modals[0].id();
        let (render, _) = handle_event(&mut state, &Event::CloseModal { modal }).unwrap();
        assert!(render);
        assert!(state.modals.is_empty());
    }

    #[test]
    fn test_duplicate_email_keeps_modal_open() {
        let mut state = state(1);
        let email = state.store.employees()[0].email.clone();
        handle_event(&mut state, &Event::AddNew).unwrap();
        let modal = state.modals[0].id();
        fill(&mut state, modal, &email);
        handle_event(&mut state, &Event::FormSubmit { modal }).unwrap();
        handle_event(&mut state, &Event::Commit { modal }).unwrap();

        assert_eq!(state.modals.len(), 1);
        assert_eq!(
            state.modals[0].errors().get(&Field::Email),
            Some(&FieldErrorKind::DuplicateEmail)
        );
    }

    #[test]
    fn test_edit_flow_needs_confirmation() {
        let mut state = state(3);
        handle_event(&mut state, &Event::EditEmployee { id: EmployeeId(2) }).unwrap();
        let modal = state.modals[0].id();
        handle_event(
            &mut state,
            &Event::FormInput { modal, field: Field::FirstName, value: "Ece".into() },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::FormSubmit { modal }).unwrap();
        assert!(actions.is_empty());
        assert!(state.modals[0].confirmation().is_open());

        let (_, actions) = handle_event(&mut state, &Event::FormConfirmUpdate { modal }).unwrap();
        assert_eq!(actions, vec![Action::Commit { modal }]);
        handle_event(&mut state, &Event::Commit { modal }).unwrap();

        assert_eq!(state.store.get(EmployeeId(2)).unwrap().first_name, "Ece");
        assert!(state.modals.is_empty());
    }

    #[test]
    fn test_commit_after_delete_propagates_not_found() {
        let mut state = state(3);
        handle_event(&mut state, &Event::EditEmployee { id: EmployeeId(1) }).unwrap();
        let modal = state.modals[0].id();
        handle_event(&mut state, &Event::FormSubmit { modal }).unwrap();
        handle_event(&mut state, &Event::FormConfirmUpdate { modal }).unwrap();

        state.store.delete_employee(EmployeeId(1));
        assert!(handle_event(&mut state, &Event::Commit { modal }).is_err());
    }

    #[test]
    fn test_delete_through_confirmation() {
        let mut state = state(13);
        handle_event(&mut state, &Event::ChangePage { page: 2 }).unwrap();
        handle_event(&mut state, &Event::RequestDelete { id: EmployeeId(13) }).unwrap();
        assert!(state.list.delete_confirmation().prompt().message.contains("Person13 Family13"));

        handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert_eq!(state.store.len(), 12);
        assert_eq!(state.store.current_page(), 1);
    }

    #[test]
    fn test_language_choice_sets_document_lang() {
        let mut state = state(0);
        handle_event(&mut state, &Event::ToggleLanguagePopup).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ChooseLanguage { lang: Locale::Tr }).unwrap();
        assert_eq!(actions, vec![Action::SetDocumentLanguage { lang: Locale::Tr }]);
        assert_eq!(state.i18n.locale(), Locale::Tr);
        assert!(!state.header.language_popup_open);
    }

    #[test]
    fn test_outside_click_renders_only_when_popup_was_open() {
        let mut state = state(0);
        assert!(!handle_event(&mut state, &Event::OutsideClick).unwrap().0);
        handle_event(&mut state, &Event::ToggleLanguagePopup).unwrap();
        assert!(handle_event(&mut state, &Event::OutsideClick).unwrap().0);
    }

    #[test]
    fn test_event_json_shape() {
        let event: Event = serde_json::from_str(
            r#"{"type":"formInput","modal":3,"field":"dateOfBirth","value":"1990-01-01"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            Event::FormInput { modal: ModalId(3), field: Field::DateOfBirth, value: "1990-01-01".into() }
        );
        let event: Event = serde_json::from_str(r#"{"type":"setViewType","view":"grid"}"#).unwrap();
        assert_eq!(event, Event::SetViewType { view: ViewType::Grid });
    }
}
