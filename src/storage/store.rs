//! In-memory employee store with derived list view state.
//!
//! [`EmployeeStore`] is the single source of truth for the employee
//! collection and for the list's view state: search query, current page,
//! view type and the selection set. Every mutation notifies subscribers
//! synchronously, in subscription order, before returning.
//!
//! # Filtering and Pagination
//!
//! [`EmployeeStore::filtered_employees`] matches the search query
//! case-insensitively against first name, last name and `"first last"`,
//! then slices the filtered sequence to the current page. A page past the
//! end yields an empty slice; callers derive the page count from the total
//! and keep the current page in range.
//!
//! # Selection
//!
//! The selection set is a subset of the loaded ids. It is cleared of an id
//! when that employee is deleted, but a search that hides a selected row
//! leaves the row selected.
//!
//! # Example
//!
//! ```
//! use roster::storage::EmployeeStore;
//!
//! let mut store = EmployeeStore::new(vec![], 12);
//! store.set_search_query("ay".to_string());
//! let page = store.filtered_employees();
//! assert_eq!(page.total, 0);
//! ```

use crate::domain::error::{FieldErrorKind, Result, RosterError, ValidationError};
use crate::domain::{Employee, EmployeeData, EmployeeId, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum::{Display, EnumString};

/// Default number of employees per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// How the list presents its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewType {
    #[default]
    Table,
    Grid,
}

/// Handle returned by [`EmployeeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&EmployeeStore)>;

/// One page of the filtered employee sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredPage {
    /// Employees on the current page, in filtered order.
    pub items: Vec<Employee>,
    /// Number of employees matching the search query across all pages.
    pub total: usize,
}

/// Everything the list view needs to render, pulled in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    pub items: Vec<Employee>,
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub view_type: ViewType,
    pub search_query: String,
    pub selected: BTreeSet<EmployeeId>,
}

impl ListSnapshot {
    #[must_use]
    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }

    /// Whether every employee on the current page is selected.
    #[must_use]
    pub fn page_fully_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|e| self.selected.contains(&e.id))
    }
}

/// In-memory employee collection plus list view state.
pub struct EmployeeStore {
    employees: Vec<Employee>,
    next_id: u32,
    current_page: usize,
    items_per_page: usize,
    view_type: ViewType,
    search_query: String,
    selected: BTreeSet<EmployeeId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for EmployeeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeStore")
            .field("employees", &self.employees.len())
            .field("next_id", &self.next_id)
            .field("current_page", &self.current_page)
            .field("items_per_page", &self.items_per_page)
            .field("view_type", &self.view_type)
            .field("search_query", &self.search_query)
            .field("selected", &self.selected)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl EmployeeStore {
    /// Creates a store over an initial collection.
    ///
    /// Ids for new employees continue after the highest id present.
    /// `items_per_page` is fixed for the store's lifetime; zero is raised
    /// to one.
    #[must_use]
    pub fn new(employees: Vec<Employee>, items_per_page: usize) -> Self {
        let next_id = employees.iter().map(|e| e.id.0).max().map_or(1, |max| max + 1);
        Self {
            employees,
            next_id,
            current_page: 1,
            items_per_page: items_per_page.max(1),
            view_type: ViewType::default(),
            search_query: String::new(),
            selected: BTreeSet::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Registers a callback invoked after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Self) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        tracing::debug!(subscribers = self.subscribers.len(), "store subscriber added");
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        before != self.subscribers.len()
    }

    fn notify(&mut self) {
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for (_, callback) in &mut subscribers {
            callback(self);
        }
        subscribers.append(&mut self.subscribers);
        self.subscribers = subscribers;
    }

    fn email_taken(&self, email: &str, except: Option<EmployeeId>) -> bool {
        self.employees
            .iter()
            .any(|e| Some(e.id) != except && e.email == email)
    }

    /// Appends a new employee with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns a validation error on the email field if another employee
    /// already uses the email. The collection is left unchanged.
    pub fn add_employee(&mut self, data: EmployeeData) -> Result<EmployeeId> {
        if self.email_taken(&data.email, None) {
            tracing::debug!(email = %data.email, "rejecting duplicate email on add");
            return Err(ValidationError::new(Field::Email, FieldErrorKind::DuplicateEmail).into());
        }

        let id = EmployeeId(self.next_id);
        self.next_id += 1;
        self.employees.push(Employee::from_data(id, data));

        tracing::debug!(employee_id = %id, total = self.employees.len(), "employee added");
        self.notify();
        Ok(id)
    }

    /// Replaces all editable fields of an employee in place.
    ///
    /// The id and position in the sequence are preserved and `updated_at`
    /// is set to the current time. Keeping the record's own email is
    /// allowed.
    ///
    /// # Errors
    ///
    /// - [`RosterError::NotFound`] if no employee has `id`
    /// - a validation error on the email field if a different employee
    ///   already uses the email
    pub fn update_employee(&mut self, id: EmployeeId, data: EmployeeData) -> Result<()> {
        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return Err(RosterError::NotFound(id));
        };

        if self.email_taken(&data.email, Some(id)) {
            tracing::debug!(employee_id = %id, email = %data.email, "rejecting duplicate email on update");
            return Err(ValidationError::new(Field::Email, FieldErrorKind::DuplicateEmail).into());
        }

        self.employees[index].apply(data, chrono::Utc::now());

        tracing::debug!(employee_id = %id, "employee updated");
        self.notify();
        Ok(())
    }

    /// Removes an employee and drops it from the selection.
    ///
    /// Deleting an absent id changes nothing and notifies no one.
    pub fn delete_employee(&mut self, id: EmployeeId) {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let was_selected = self.selected.remove(&id);

        if before == self.employees.len() && !was_selected {
            tracing::debug!(employee_id = %id, "delete of absent employee ignored");
            return;
        }

        tracing::debug!(employee_id = %id, total = self.employees.len(), "employee deleted");
        self.notify();
    }

    /// Removes every selected employee and clears the selection.
    ///
    /// Returns the number of employees removed.
    pub fn delete_selected_employees(&mut self) -> usize {
        let before = self.employees.len();
        let selected = std::mem::take(&mut self.selected);
        self.employees.retain(|e| !selected.contains(&e.id));
        let removed = before - self.employees.len();

        tracing::debug!(removed, total = self.employees.len(), "selected employees deleted");
        self.notify();
        removed
    }

    /// Adds `id` to the selection if absent, removes it if present.
    ///
    /// Ids that are not loaded are ignored so the selection stays a subset
    /// of the collection.
    pub fn toggle_employee_selection(&mut self, id: EmployeeId) {
        if !self.employees.iter().any(|e| e.id == id) {
            tracing::debug!(employee_id = %id, "ignoring selection toggle for unknown employee");
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.notify();
    }

    /// Replaces the selection with the given ids (unknown ids are dropped).
    pub fn select_only<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EmployeeId>,
    {
        let wanted: BTreeSet<EmployeeId> = ids.into_iter().collect();
        self.selected = self
            .employees
            .iter()
            .map(|e| e.id)
            .filter(|id| wanted.contains(id))
            .collect();
        self.notify();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.notify();
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        self.view_type = view_type;
        self.notify();
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.notify();
    }

    /// Sets the current page without bounds checking.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.notify();
    }

    /// Returns the current page of employees matching the search query.
    #[must_use]
    pub fn filtered_employees(&self) -> FilteredPage {
        let _span = tracing::debug_span!(
            "filtered_employees",
            total_employees = self.employees.len(),
            query_len = self.search_query.len(),
            current_page = self.current_page
        )
        .entered();

        let needle = self.search_query.to_lowercase();
        let matching: Vec<&Employee> = self.employees.iter().filter(|e| e.matches(&needle)).collect();
        let total = matching.len();

        let start = self.current_page.saturating_sub(1).saturating_mul(self.items_per_page);
        let items: Vec<Employee> = matching
            .into_iter()
            .skip(start)
            .take(self.items_per_page)
            .cloned()
            .collect();

        tracing::debug!(filtered_count = total, page_count = items.len(), "search filter applied");

        FilteredPage { items, total }
    }

    /// Number of pages for `total` filtered employees.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page)
    }

    /// Number of pages the current search spans.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.page_count(self.filtered_employees().total)
    }

    /// Pulls a full render snapshot for the list view.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        let FilteredPage { items, total } = self.filtered_employees();
        ListSnapshot {
            items,
            total,
            current_page: self.current_page,
            total_pages: self.page_count(total),
            items_per_page: self.items_per_page,
            view_type: self.view_type,
            search_query: self.search_query.clone(),
            selected: self.selected.clone(),
        }
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        self.view_type
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<EmployeeId> {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{Department, Employee, EmployeeData, EmployeeId, Position};
    use chrono::NaiveDate;

    pub fn data(first: &str, last: &str, email: &str) -> EmployeeData {
        EmployeeData {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_employment: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            phone: "+90 555 123 45 67".to_string(),
            email: email.to_string(),
            department: Department::Tech,
            position: Position::Junior,
        }
    }

    pub fn employee(id: u32, first: &str, last: &str) -> Employee {
        let email = format!("{}.{}.{id}@example.com", first.to_lowercase(), last.to_lowercase());
        Employee::from_data(EmployeeId(id), data(first, last, &email))
    }

    /// `count` employees named `Person{n} Family{n}`, ids starting at 1.
    pub fn numbered(count: u32) -> Vec<Employee> {
        (1..=count)
            .map(|n| employee(n, &format!("Person{n}"), &format!("Family{n}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{data, employee, numbered};
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn two_employee_store() -> EmployeeStore {
        let mut a = employee(1, "Ali", "Kaya");
        a.email = "x@y.com".to_string();
        let mut b = employee(2, "Zeynep", "Demir");
        b.email = "z@w.com".to_string();
        EmployeeStore::new(vec![a, b], DEFAULT_ITEMS_PER_PAGE)
    }

    #[test]
    fn test_add_duplicate_email_fails_and_leaves_collection() {
        let mut store = two_employee_store();
        let err = store.add_employee(data("New", "Person", "x@y.com")).unwrap_err();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::new(Field::Email, FieldErrorKind::DuplicateEmail))
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut store = two_employee_store();
        let id = store.add_employee(data("Can", "Şahin", "can@sahin.org")).unwrap();
        assert_eq!(id, EmployeeId(3));
        assert_eq!(store.employees().last().unwrap().id, id);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = two_employee_store();
        store.delete_employee(EmployeeId(1));
        let id = store.add_employee(data("Ece", "Doğan", "ece@dogan.org")).unwrap();
        assert_eq!(id, EmployeeId(3));
        let ids: Vec<_> = store.employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EmployeeId(2), EmployeeId(3)]);
    }

    #[test]
    fn test_update_to_other_email_fails() {
        let mut store = two_employee_store();
        let err = store
            .update_employee(EmployeeId(1), data("Ali", "Kaya", "z@w.com"))
            .unwrap_err();
        assert!(err.as_validation().is_some());
        assert_eq!(store.get(EmployeeId(1)).unwrap().email, "x@y.com");
    }

    #[test]
    fn test_update_keeping_own_email_succeeds() {
        let mut store = two_employee_store();
        store
            .update_employee(EmployeeId(2), data("Zeynep", "Yıldız", "z@w.com"))
            .unwrap();
        let updated = store.get(EmployeeId(2)).unwrap();
        assert_eq!(updated.last_name, "Yıldız");
        assert!(updated.updated_at.is_some());
        assert_eq!(store.employees()[1].id, EmployeeId(2));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = two_employee_store();
        let err = store
            .update_employee(EmployeeId(99), data("No", "One", "no@one.org"))
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound(EmployeeId(99))));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = two_employee_store();
        store.toggle_employee_selection(EmployeeId(1));
        store.delete_employee(EmployeeId(42));
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected().len(), 1);
    }

    #[test]
    fn test_delete_removes_from_selection() {
        let mut store = two_employee_store();
        store.toggle_employee_selection(EmployeeId(1));
        store.toggle_employee_selection(EmployeeId(2));
        store.delete_employee(EmployeeId(1));
        assert_eq!(store.selected().iter().copied().collect::<Vec<_>>(), vec![EmployeeId(2)]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut store = two_employee_store();
        store.toggle_employee_selection(EmployeeId(2));
        let before = store.selected().clone();
        store.toggle_employee_selection(EmployeeId(1));
        store.toggle_employee_selection(EmployeeId(1));
        assert_eq!(store.selected(), &before);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut store = EmployeeStore::new(numbered(5), 12);
        store.toggle_employee_selection(EmployeeId(2));
        store.toggle_employee_selection(EmployeeId(4));
        assert_eq!(store.delete_selected_employees(), 2);
        assert!(store.selected().is_empty());
        assert_eq!(store.len(), 3);
        assert!(store.get(EmployeeId(4)).is_none());
    }

    #[test]
    fn test_pagination_scenario_twenty_five_by_twelve() {
        let mut store = EmployeeStore::new(numbered(25), 12);
        let page = store.filtered_employees();
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.total, 25);

        store.set_current_page(3);
        let page = store.filtered_employees();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, EmployeeId(25));
        assert_eq!(store.total_pages(), 3);
    }

    #[test]
    fn test_page_slices_are_contiguous_and_sized() {
        let mut store = EmployeeStore::new(numbered(30), 7);
        let total = 30;
        let pages = store.page_count(total);
        let mut seen = Vec::new();
        for p in 1..=pages {
            store.set_current_page(p);
            let page = store.filtered_employees();
            assert_eq!(page.items.len(), 7.min(total - (p - 1) * 7));
            seen.extend(page.items.into_iter().map(|e| e.id));
        }
        let all: Vec<_> = store.employees().iter().map(|e| e.id).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut store = EmployeeStore::new(numbered(5), 12);
        store.set_current_page(4);
        let page = store.filtered_employees();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_search_matches_names_case_insensitively() {
        let employees = vec![
            employee(1, "Ahmet", "Yılmaz"),
            employee(2, "Mehmet", "Kaya"),
            employee(3, "Ayşe", "Ahmetoğlu"),
            employee(4, "Berk", "Demir"),
        ];
        let mut store = EmployeeStore::new(employees, 12);

        store.set_search_query("AHMET".to_string());
        let ids: Vec<_> = store.filtered_employees().items.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3]);

        store.set_search_query("mehmet k".to_string());
        let ids: Vec<_> = store.filtered_employees().items.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2]);

        store.set_search_query(String::new());
        assert_eq!(store.filtered_employees().total, 4);
    }

    #[test]
    fn test_search_does_not_prune_selection() {
        let mut store = EmployeeStore::new(vec![employee(1, "Ali", "Kaya"), employee(2, "Can", "Demir")], 12);
        store.toggle_employee_selection(EmployeeId(1));
        store.set_search_query("can".to_string());
        assert!(store.is_selected(EmployeeId(1)));
        assert_eq!(store.filtered_employees().total, 1);
    }

    #[test]
    fn test_select_only_drops_unknown_ids() {
        let mut store = EmployeeStore::new(numbered(3), 12);
        store.select_only([EmployeeId(1), EmployeeId(77)]);
        assert_eq!(store.selected().iter().copied().collect::<Vec<_>>(), vec![EmployeeId(1)]);
    }

    #[test]
    fn test_subscribers_notified_until_unsubscribed() {
        let mut store = EmployeeStore::new(numbered(2), 12);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let id = store.subscribe(move |_| seen.set(seen.get() + 1));

        store.set_view_type(ViewType::Grid);
        store.set_search_query("x".to_string());
        assert_eq!(calls.get(), 2);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_current_page(2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_subscriber_sees_post_mutation_state() {
        let mut store = EmployeeStore::new(numbered(2), 12);
        let observed = Rc::new(Cell::new(0usize));
        let sink = Rc::clone(&observed);
        store.subscribe(move |s| sink.set(s.len()));
        store.delete_employee(EmployeeId(1));
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn test_snapshot_reports_page_metadata() {
        let mut store = EmployeeStore::new(numbered(13), 12);
        store.set_current_page(2);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.total_pages, 2);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.current_page, 2);
        assert!(!snapshot.page_fully_selected());
    }
}
