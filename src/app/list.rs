//! Employee list component state.
//!
//! The list keeps no filtering logic of its own. It subscribes to the store
//! on mount; every notification writes a fresh [`ListSnapshot`] into a
//! shared cell the renderer reads from. Unmounting drops the subscription.

use super::confirm::{Confirmation, Prompt};
use super::pagination::is_valid_page;
use crate::domain::EmployeeId;
use crate::storage::{EmployeeStore, ListSnapshot, SubscriptionId, ViewType};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// What a pending delete confirmation will remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A single row.
    One { id: EmployeeId, name: String },
    /// Every selected row. The selection is frozen while this is staged.
    Selected { count: usize },
}

#[derive(Debug, Default)]
pub struct EmployeeListView {
    snapshot: Rc<RefCell<ListSnapshot>>,
    subscription: Option<SubscriptionId>,
    delete: Confirmation<DeleteTarget>,
}

impl EmployeeListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to `store` and pulls the initial snapshot.
    ///
    /// Mounting an already mounted list is a no-op.
    pub fn mount(&mut self, store: &mut EmployeeStore) {
        if self.subscription.is_some() {
            return;
        }
        let sink = Rc::clone(&self.snapshot);
        self.subscription = Some(store.subscribe(move |store| {
            *sink.borrow_mut() = store.snapshot();
        }));
        *self.snapshot.borrow_mut() = store.snapshot();
        tracing::debug!("employee list mounted");
    }

    pub fn unmount(&mut self, store: &mut EmployeeStore) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
            self.delete.reset();
            tracing::debug!("employee list unmounted");
        }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last snapshot received from the store.
    #[must_use]
    pub fn snapshot(&self) -> Ref<'_, ListSnapshot> {
        self.snapshot.borrow()
    }

    /// Moves to `page` if it lies within `1..=total_pages`.
    pub fn change_page(&self, store: &mut EmployeeStore, page: usize) -> bool {
        let total_pages = self.snapshot.borrow().total_pages;
        if !is_valid_page(page, total_pages) {
            tracing::debug!(page, total_pages, "ignoring out-of-range page change");
            return false;
        }
        store.set_current_page(page);
        true
    }

    /// Applies the header checkbox.
    ///
    /// Checking replaces the selection with exactly the current page's rows;
    /// unchecking clears the whole selection, including rows on other pages.
    /// Checking an empty page does nothing.
    ///
    /// Returns `false` without touching the store while a delete is staged.
    pub fn select_all(&self, store: &mut EmployeeStore, checked: bool) -> bool {
        if self.selection_frozen() {
            return false;
        }
        if checked {
            let ids: Vec<EmployeeId> = self.snapshot.borrow().items.iter().map(|e| e.id).collect();
            if ids.is_empty() {
                return false;
            }
            store.select_only(ids);
        } else {
            store.clear_selection();
        }
        true
    }

    /// Flips one row's checkbox. Ignored while a delete is staged.
    pub fn toggle_selection(&self, store: &mut EmployeeStore, id: EmployeeId) -> bool {
        if self.selection_frozen() {
            return false;
        }
        store.toggle_employee_selection(id);
        true
    }

    fn selection_frozen(&self) -> bool {
        if self.delete.is_open() {
            tracing::debug!("selection change ignored while delete is staged");
            return true;
        }
        false
    }

    /// Applies a search keystroke and returns to the first page.
    pub fn search(&self, store: &mut EmployeeStore, query: String) {
        store.set_search_query(query);
        store.set_current_page(1);
    }

    pub fn clear_search(&self, store: &mut EmployeeStore) {
        self.search(store, String::new());
    }

    pub fn set_view_type(&self, store: &mut EmployeeStore, view_type: ViewType) {
        store.set_view_type(view_type);
    }

    /// Stages a single row for deletion.
    pub fn request_delete(&mut self, id: EmployeeId, name: String, prompt: Prompt) {
        self.delete.stage(DeleteTarget::One { id, name }, prompt);
    }

    /// Stages every selected row for deletion. Does nothing when the
    /// selection is empty.
    pub fn request_bulk_delete(&mut self, count: usize, prompt: Prompt) -> bool {
        if count == 0 {
            return false;
        }
        self.delete.stage(DeleteTarget::Selected { count }, prompt);
        true
    }

    /// Performs the staged delete, then keeps the current page in range.
    ///
    /// Returns the number of employees removed, or `None` if nothing was
    /// staged.
    pub fn confirm_delete(&mut self, store: &mut EmployeeStore) -> Option<usize> {
        if !self.delete.confirm() {
            return None;
        }
        let target = self.delete.take_confirmed()?;

        let removed = match target {
            DeleteTarget::One { id, .. } => {
                let before = store.len();
                store.delete_employee(id);
                before - store.len()
            }
            DeleteTarget::Selected { .. } => store.delete_selected_employees(),
        };

        let total_pages = store.total_pages().max(1);
        if store.current_page() > total_pages {
            store.set_current_page(total_pages);
        }
        Some(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    #[must_use]
    pub const fn delete_confirmation(&self) -> &Confirmation<DeleteTarget> {
        &self.delete
    }
}
