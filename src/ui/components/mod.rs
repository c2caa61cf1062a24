//! Composable UI component renderers.
//!
//! Each component appends its markup to a shared `String` and reads only
//! its slice of the view model.
//!
//! # Components
//!
//! - [`header`]: Navigation bar with language selector
//! - [`search`]: List toolbar (search box, bulk delete, view toggle)
//! - [`table`]: Table and grid layouts of the current page
//! - [`empty`]: Empty state message for no rows
//! - [`pagination`]: Summary line and page buttons
//! - [`confirmation`]: Two-button confirmation dialog
//! - [`form_modal`]: Create/edit employee form
//! - [`pages`]: Login and not-found pages
//!
//! # Layout
//!
//! [`render_list`] composes the list page:
//!
//! ```text
//! [Title]
//! [Toolbar]
//! [Table | Grid | Empty state]
//! [Pagination]
//! [Delete confirmation]
//! ```

pub mod confirmation;
pub mod empty;
pub mod form_modal;
pub mod header;
pub mod pages;
pub mod pagination;
pub mod search;
pub mod table;

pub use confirmation::render_confirmation;
pub use empty::render_empty_state;
pub use form_modal::render_form_modal;
pub use header::render_header;
pub use pages::{render_login, render_not_found};
pub use pagination::render_pagination;
pub use search::render_toolbar;
pub use table::{render_grid, render_table};

use crate::storage::ViewType;
use crate::ui::helpers::escape;
use crate::ui::viewmodel::ListInfo;
use serde_json::json;
use std::fmt::Write as _;

/// Renders the list page.
pub fn render_list(out: &mut String, list: &ListInfo) {
    let _ = write!(out, r#"<section class="employee-list"><h1 class="page-title">{}</h1>"#, escape(&list.title));
    render_toolbar(out, list);

    if let Some(empty) = &list.empty_state {
        render_empty_state(out, empty);
    } else {
        match list.view_type {
            ViewType::Table => render_table(out, list),
            ViewType::Grid => render_grid(out, list),
        }
    }

    if let Some(pagination) = &list.pagination {
        render_pagination(out, pagination);
    }
    if let Some(confirmation) = &list.delete_confirmation {
        render_confirmation(out, confirmation, &json!({"type": "confirmDelete"}), &json!({"type": "cancelDelete"}));
    }
    out.push_str("</section>");
}
