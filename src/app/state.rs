//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the container the host owns for the
//! lifetime of the page. It holds the employee store, the active route, the
//! header and list component states, every open form modal, the translator
//! and the theme.
//!
//! # Architecture
//!
//! The store is the single source of truth for employee data and list view
//! state. Components keep only their own transient state (popup open, staged
//! confirmations, form drafts). View models are computed on demand from a
//! state snapshot.
//!
//! # Example
//!
//! ```
//! use roster::app::AppState;
//! use roster::i18n::{I18n, Locale};
//! use roster::storage::EmployeeStore;
//! use roster::ui::Theme;
//!
//! let mut state = AppState::new(EmployeeStore::new(vec![], 12), I18n::new(Locale::En), Theme::default());
//! let path = state.navigate("/");
//! assert_eq!(path, "/login-page");
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.header.add_new_label.is_none());
//! ```

use super::form::{FormModal, ModalId};
use super::header::HeaderState;
use super::list::EmployeeListView;
use super::pagination::PaginationWindow;
use super::router::{Route, EMPLOYEES_PATH};
use crate::app::confirm::{Confirmation, Prompt};
use crate::domain::{Employee, EmployeeId, Field};
use crate::i18n::{I18n, Locale};
use crate::storage::EmployeeStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmationInfo, DisplayItem, EmptyState, FormFieldInfo, FormModalInfo, HeaderInfo, InputKind,
    LanguageOption, ListInfo, LoginInfo, NotFoundInfo, PageView, PaginationInfo, SearchBarInfo,
    UIViewModel,
};
use chrono::NaiveDate;
use strum::IntoEnumIterator;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Employee collection and list view state.
    pub store: EmployeeStore,

    /// Currently routed page.
    pub route: Route,

    /// Language popup state.
    pub header: HeaderState,

    /// List component; mounted only while the list route is active.
    pub list: EmployeeListView,

    /// Open form modals, oldest first. Each is an independent instance.
    pub modals: Vec<FormModal>,

    /// Translator for the active locale.
    pub i18n: I18n,

    /// Palette emitted with every render.
    pub theme: Theme,

    next_modal: u32,
}

impl AppState {
    /// Creates the state on the login route with nothing mounted.
    #[must_use]
    pub fn new(store: EmployeeStore, i18n: I18n, theme: Theme) -> Self {
        Self {
            store,
            route: Route::default(),
            header: HeaderState::default(),
            list: EmployeeListView::new(),
            modals: Vec::new(),
            i18n,
            theme,
            next_modal: 1,
        }
    }

    /// Routes to `path`, mounting or unmounting the list as needed.
    ///
    /// Closes the language popup. Returns the canonical path after
    /// redirects.
    pub fn navigate(&mut self, path: &str) -> String {
        let (route, canonical) = Route::resolve(path);
        tracing::debug!(requested = %path, canonical = %canonical, "navigating");

        if route == Route::EmployeeList {
            self.list.mount(&mut self.store);
        } else {
            self.list.unmount(&mut self.store);
        }

        self.route = route;
        self.header.close_language_popup();
        canonical
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.i18n.set_locale(locale);
    }

    fn allocate_modal(&mut self) -> ModalId {
        let id = ModalId(self.next_modal);
        self.next_modal += 1;
        id
    }

    /// Opens a fresh create form.
    pub fn open_create_modal(&mut self) -> ModalId {
        let id = self.allocate_modal();
        self.modals.push(FormModal::create(id));
        tracing::debug!(modal = %id, "create modal opened");
        id
    }

    /// Opens an edit form for `employee_id`, or `None` if it is not loaded.
    pub fn open_edit_modal(&mut self, employee_id: EmployeeId) -> Option<ModalId> {
        let employee = self.store.get(employee_id)?.clone();
        let id = self.allocate_modal();
        self.modals.push(FormModal::edit(id, employee));
        tracing::debug!(modal = %id, employee_id = %employee_id, "edit modal opened");
        Some(id)
    }

    #[must_use]
    pub fn modal(&self, id: ModalId) -> Option<&FormModal> {
        self.modals.iter().find(|m| m.id() == id)
    }

    pub fn modal_mut(&mut self, id: ModalId) -> Option<&mut FormModal> {
        self.modals.iter_mut().find(|m| m.id() == id)
    }

    /// Removes a modal. Returns `false` if it was not open.
    pub fn close_modal(&mut self, id: ModalId) -> bool {
        let before = self.modals.len();
        self.modals.retain(|m| m.id() != id);
        before != self.modals.len()
    }

    /// Date used for the age rule.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Prompt for confirming an edit.
    #[must_use]
    pub fn update_prompt(&self) -> Prompt {
        Prompt::new(
            self.i18n.t("common.messages.confirmUpdate", &[]),
            self.i18n.t("common.actions.updateEmployee", &[]),
        )
    }

    /// Prompt for deleting one employee.
    #[must_use]
    pub fn delete_prompt(&self, employee: &Employee) -> Prompt {
        let name = employee.full_name();
        Prompt::new(
            self.i18n.t("common.messages.confirmDelete", &[("name", &name)]),
            self.i18n.t("common.actions.delete", &[]),
        )
    }

    /// Prompt for deleting every selected employee.
    #[must_use]
    pub fn bulk_delete_prompt(&self, count: usize) -> Prompt {
        let count = count.to_string();
        Prompt::new(
            self.i18n.t("common.messages.confirmDeleteSelected", &[("count", &count)]),
            self.i18n.t("common.actions.delete", &[]),
        )
    }

    /// Computes the view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let page = match &self.route {
            Route::EmployeeList => PageView::List(self.list_info()),
            Route::Login => PageView::Login(self.login_info()),
            Route::NotFound(path) => PageView::NotFound(self.not_found_info(path)),
        };

        UIViewModel {
            lang: self.i18n.locale(),
            header: self.header_info(),
            page,
            modals: self.modals.iter().map(|m| self.modal_info(m)).collect(),
        }
    }

    fn header_info(&self) -> HeaderInfo {
        let t = |key: &str| self.i18n.t(key, &[]);
        let current = self.i18n.locale();
        HeaderInfo {
            employees_label: t("header.employees"),
            employees_href: EMPLOYEES_PATH.to_string(),
            add_new_label: (!self.route.is_login()).then(|| t("header.addNew")),
            login_label: t("header.login"),
            language_label: t("header.language"),
            current_language: current,
            language_popup_open: self.header.language_popup_open,
            languages: Locale::iter()
                .map(|locale| LanguageOption {
                    locale,
                    name: locale.native_name().to_string(),
                    active: locale == current,
                })
                .collect(),
        }
    }

    fn list_info(&self) -> ListInfo {
        let t = |key: &str| self.i18n.t(key, &[]);
        let snapshot = self.list.snapshot();

        let columns = Field::iter()
            .map(|field| t(&format!("employeeList.columns.{field}")))
            .chain(std::iter::once(t("employeeList.columns.actions")))
            .collect();

        let display_items: Vec<DisplayItem> = snapshot
            .items
            .iter()
            .map(|e| DisplayItem {
                id: e.id,
                first_name: e.first_name.clone(),
                last_name: e.last_name.clone(),
                full_name: e.full_name(),
                date_of_employment: e.date_of_employment.to_string(),
                date_of_birth: e.date_of_birth.to_string(),
                phone: e.phone.clone(),
                email: e.email.clone(),
                department: t(&format!("departments.{}", e.department.as_ref().to_lowercase())),
                position: t(&format!("positions.{}", e.position.as_ref().to_lowercase())),
                is_selected: snapshot.is_selected(e.id),
            })
            .collect();

        let empty_state = display_items.is_empty().then(|| EmptyState {
            message: t("employeeList.noResults"),
            subtitle: t("employeeList.description"),
        });

        let pagination = (!display_items.is_empty()).then(|| {
            let start = snapshot.current_page.saturating_sub(1) * snapshot.items_per_page + 1;
            let end = start + display_items.len() - 1;
            let (start, end, total) = (start.to_string(), end.to_string(), snapshot.total.to_string());
            PaginationInfo {
                window: PaginationWindow::compute(snapshot.current_page, snapshot.total_pages),
                previous_label: t("employeeList.pagination.previous"),
                next_label: t("employeeList.pagination.next"),
                summary: self.i18n.t(
                    "employeeList.pagination.showing",
                    &[("start", &start), ("end", &end), ("total", &total)],
                ),
            }
        });

        let selected = snapshot.selected.len();
        let bulk_delete_label = (selected > 0).then(|| {
            self.i18n
                .t("common.actions.deleteSelected", &[("count", &selected.to_string())])
        });

        ListInfo {
            title: t("employeeList.title"),
            search_bar: SearchBarInfo {
                query: snapshot.search_query.clone(),
                placeholder: t("employeeList.search"),
                clear_label: (!snapshot.search_query.is_empty()).then(|| t("employeeList.clearSearch")),
            },
            view_type: snapshot.view_type,
            table_view_label: t("employeeList.viewMode.table"),
            grid_view_label: t("employeeList.viewMode.grid"),
            columns,
            display_items,
            select_all_label: t("employeeList.selectAll"),
            page_fully_selected: snapshot.page_fully_selected(),
            bulk_delete_label,
            edit_label: t("common.actions.edit"),
            delete_label: t("common.actions.delete"),
            empty_state,
            pagination,
            delete_confirmation: self.confirmation_info(self.list.delete_confirmation()),
        }
    }

    fn confirmation_info<T>(&self, confirmation: &Confirmation<T>) -> Option<ConfirmationInfo> {
        if !confirmation.is_open() {
            return None;
        }
        let prompt = confirmation.prompt();
        let submitting = confirmation.is_submitting();
        Some(ConfirmationInfo {
            title: self.i18n.t("common.messages.areYouSure", &[]),
            message: prompt.message.clone(),
            confirm_label: if submitting {
                self.i18n.t("common.messages.processing", &[])
            } else {
                prompt.confirm_label.clone()
            },
            cancel_label: self.i18n.t("common.actions.cancel", &[]),
            close_label: self.i18n.t("common.actions.close", &[]),
            submitting,
        })
    }

    fn modal_info(&self, modal: &FormModal) -> FormModalInfo {
        let t = |key: &str| self.i18n.t(key, &[]);
        let draft = modal.draft();
        let errors = modal.errors();

        let fields = Field::iter()
            .map(|field| {
                let options = match field {
                    Field::Department => crate::domain::Department::iter()
                        .map(|d| (d.to_string(), t(&format!("departments.{}", d.as_ref().to_lowercase()))))
                        .collect(),
                    Field::Position => crate::domain::Position::iter()
                        .map(|p| (p.to_string(), t(&format!("positions.{}", p.as_ref().to_lowercase()))))
                        .collect(),
                    _ => Vec::new(),
                };
                FormFieldInfo {
                    field,
                    kind: InputKind::for_field(field),
                    label: t(&format!("employeeForm.fields.{field}.label")),
                    placeholder: t(&format!("employeeForm.fields.{field}.placeholder")),
                    value: draft.get(field).to_string(),
                    error: errors.get(&field).map(|kind| t(kind.translation_key())),
                    options,
                }
            })
            .collect();

        let submitting = modal.is_submitting();
        let (title, submit_label) = match (modal.is_edit(), submitting) {
            (true, false) => ("employeeForm.titles.edit", "common.actions.updateEmployee"),
            (true, true) => ("employeeForm.titles.edit", "common.actions.updating"),
            (false, false) => ("employeeForm.titles.create", "common.actions.addEmployee"),
            (false, true) => ("employeeForm.titles.create", "common.actions.adding"),
        };

        FormModalInfo {
            id: modal.id(),
            title: t(title),
            fields,
            submit_label: t(submit_label),
            cancel_label: t("common.actions.cancel"),
            submitting,
            confirmation: self.confirmation_info(modal.confirmation()),
        }
    }

    fn login_info(&self) -> LoginInfo {
        let t = |key: &str| self.i18n.t(key, &[]);
        LoginInfo {
            title: t("login.title"),
            username_label: t("login.username"),
            username_placeholder: t("login.usernamePlaceholder"),
            password_label: t("login.password"),
            password_placeholder: t("login.passwordPlaceholder"),
            proceed_label: t("common.actions.proceed"),
        }
    }

    fn not_found_info(&self, path: &str) -> NotFoundInfo {
        let t = |key: &str| self.i18n.t(key, &[]);
        NotFoundInfo {
            title: t("notFound.title"),
            description: t("notFound.description"),
            path: path.to_string(),
            back_label: t("notFound.backToList"),
            back_href: EMPLOYEES_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::store::fixtures::numbered;

    fn state(count: u32) -> AppState {
        AppState::new(EmployeeStore::new(numbered(count), 12), I18n::new(Locale::En), Theme::default())
    }

    #[test]
    fn test_navigate_mounts_and_unmounts_list() {
        let mut state = state(3);
        assert_eq!(state.navigate("/employees"), "/employees");
        assert!(state.list.is_mounted());
        assert_eq!(state.list.snapshot().total, 3);

        state.navigate("/nowhere");
        assert!(!state.list.is_mounted());
        assert_eq!(state.route, Route::NotFound("/nowhere".to_string()));
    }

    #[test]
    fn test_navigate_closes_language_popup() {
        let mut state = state(0);
        state.header.toggle_language_popup();
        state.navigate("/employees");
        assert!(!state.header.language_popup_open);
    }

    #[test]
    fn test_modals_are_independent() {
        let mut state = state(2);
        let a = state.open_create_modal();
        let b = state.open_edit_modal(EmployeeId(2)).unwrap();
        assert_ne!(a, b);
        assert!(state.open_edit_modal(EmployeeId(9)).is_none());

        state.modal_mut(a).unwrap().input(Field::FirstName, "Deniz".to_string());
        assert_eq!(state.modal(b).unwrap().draft().first_name, "Person2");
        assert!(state.close_modal(a));
        assert!(!state.close_modal(a));
        assert_eq!(state.modals.len(), 1);
    }

    #[test]
    fn test_viewmodel_list_summary_and_labels() {
        let mut state = state(25);
        state.navigate("/employees");
        state.list.change_page(&mut state.store, 3);

        let PageView::List(list) = state.compute_viewmodel().page else {
            panic!("expected list view");
        };
        assert_eq!(list.display_items.len(), 1);
        assert_eq!(list.columns.len(), 9);
        assert_eq!(list.columns[0], "First Name");
        assert_eq!(list.pagination.unwrap().summary, "Showing 25 to 25 of 25 entries");
        assert!(list.empty_state.is_none());
        assert!(list.bulk_delete_label.is_none());
    }

    #[test]
    fn test_viewmodel_localizes_departments() {
        let mut state = state(1);
        state.set_locale(Locale::Tr);
        state.navigate("/employees");
        let PageView::List(list) = state.compute_viewmodel().page else {
            panic!("expected list view");
        };
        assert_eq!(list.display_items[0].department, "Teknoloji");
        assert_eq!(list.title, "Çalışan Listesi");
    }

    #[test]
    fn test_modal_viewmodel_shows_translated_errors() {
        let mut state = state(0);
        let id = state.open_create_modal();
        let today = state.today();
        state.modal_mut(id).unwrap().submit(today, Prompt::default());

        let vm = state.compute_viewmodel();
        let modal = &vm.modals[0];
        assert_eq!(modal.title, "Add New Employee");
        assert!(modal.fields.iter().all(|f| f.error.as_deref() == Some("This field is required")));
        let department = modal.fields.iter().find(|f| f.field == Field::Department).unwrap();
        assert_eq!(department.options.len(), 2);
    }
}
