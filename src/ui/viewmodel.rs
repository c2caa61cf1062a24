//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. Every string in them is already translated into the
//! active locale; they contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```
//! use roster::ui::viewmodel::EmptyState;
//!
//! let empty = EmptyState {
//!     message: "No employees found".to_string(),
//!     subtitle: "Try adjusting your search criteria".to_string(),
//! };
//! assert!(!empty.message.is_empty());
//! ```

use crate::app::pagination::PaginationWindow;
use crate::app::form::ModalId;
use crate::domain::{EmployeeId, Field};
use crate::i18n::Locale;
use crate::storage::ViewType;
use serde::Serialize;

/// Complete UI view model for one render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UIViewModel {
    pub lang: Locale,
    pub header: HeaderInfo,
    pub page: PageView,
    /// Open form modals, oldest first.
    pub modals: Vec<FormModalInfo>,
}

/// Navigation bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    pub employees_label: String,
    pub employees_href: String,
    /// `None` on the login page.
    pub add_new_label: Option<String>,
    pub login_label: String,
    pub language_label: String,
    pub current_language: Locale,
    pub language_popup_open: bool,
    pub languages: Vec<LanguageOption>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub locale: Locale,
    pub name: String,
    pub active: bool,
}

/// The routed page below the header.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum PageView {
    List(ListInfo),
    Login(LoginInfo),
    NotFound(NotFoundInfo),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInfo {
    pub title: String,
    pub search_bar: SearchBarInfo,
    pub view_type: ViewType,
    pub table_view_label: String,
    pub grid_view_label: String,
    /// Column headings in table order, actions column last.
    pub columns: Vec<String>,
    /// Rows of the current page.
    pub display_items: Vec<DisplayItem>,
    pub select_all_label: String,
    /// Header checkbox state: every row on the page is selected.
    pub page_fully_selected: bool,
    /// Label for the delete-selected control, present when rows are selected.
    pub bulk_delete_label: Option<String>,
    pub edit_label: String,
    pub delete_label: String,
    pub empty_state: Option<EmptyState>,
    pub pagination: Option<PaginationInfo>,
    pub delete_confirmation: Option<ConfirmationInfo>,
}

/// One employee row or card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub is_selected: bool,
}

/// Search input and its clear control.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
    /// Present only when the query is non-empty.
    pub clear_label: Option<String>,
}

/// Shown when the current page has no rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub window: PaginationWindow,
    pub previous_label: String,
    pub next_label: String,
    /// "Showing 1 to 12 of 100 entries".
    pub summary: String,
}

/// A two-phase confirmation dialog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationInfo {
    pub title: String,
    pub message: String,
    /// Shows the processing label while submitting.
    pub confirm_label: String,
    pub cancel_label: String,
    pub close_label: String,
    pub submitting: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModalInfo {
    pub id: ModalId,
    pub title: String,
    pub fields: Vec<FormFieldInfo>,
    /// Shows the adding/updating label while submitting.
    pub submit_label: String,
    pub cancel_label: String,
    pub submitting: bool,
    pub confirmation: Option<ConfirmationInfo>,
}

/// How a form field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Text,
    Date,
    Tel,
    Email,
    Select,
}

impl InputKind {
    #[must_use]
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::FirstName | Field::LastName => Self::Text,
            Field::DateOfEmployment | Field::DateOfBirth => Self::Date,
            Field::Phone => Self::Tel,
            Field::Email => Self::Email,
            Field::Department | Field::Position => Self::Select,
        }
    }

    /// Value of the `type` attribute; `None` for selects.
    #[must_use]
    pub const fn html_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Date => Some("date"),
            Self::Tel => Some("tel"),
            Self::Email => Some("email"),
            Self::Select => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldInfo {
    pub field: Field,
    pub kind: InputKind,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Translated inline error.
    pub error: Option<String>,
    /// Select options as `(value, label)`; empty for inputs.
    pub options: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
    pub title: String,
    pub username_label: String,
    pub username_placeholder: String,
    pub password_label: String,
    pub password_placeholder: String,
    pub proceed_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundInfo {
    pub title: String,
    pub description: String,
    pub path: String,
    pub back_label: String,
    pub back_href: String,
}
