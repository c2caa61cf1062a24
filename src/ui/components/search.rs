//! List toolbar renderer: search box, clear control, bulk delete and the
//! table/grid toggle.

use crate::storage::ViewType;
use crate::ui::helpers::{attr, escape, flag, on, on_bound};
use crate::ui::viewmodel::ListInfo;
use serde_json::json;
use std::fmt::Write as _;

/// Appends the toolbar above the list content.
///
/// The search input dispatches `searchInput` on every keystroke with the
/// whole value bound to `query`. The clear button appears only while a query
/// is active.
pub fn render_toolbar(out: &mut String, list: &ListInfo) {
    let search = &list.search_bar;
    out.push_str(r#"<div class="toolbar"><div class="search-box">"#);
    let _ = write!(
        out,
        r#"<input type="text" class="search-input"{}{}{}>"#,
        attr("value", &search.query),
        attr("placeholder", &search.placeholder),
        on_bound("input", &json!({"type": "searchInput"}), "query"),
    );
    if let Some(label) = &search.clear_label {
        let _ = write!(
            out,
            r#"<button class="clear-search"{}{}>×</button>"#,
            attr("aria-label", label),
            on("click", &json!({"type": "clearSearch"})),
        );
    }
    out.push_str("</div>");

    if let Some(label) = &list.bulk_delete_label {
        let _ = write!(
            out,
            r#"<button class="delete-selected"{}>{}</button>"#,
            on("click", &json!({"type": "requestBulkDelete"})),
            escape(label),
        );
    }

    out.push_str(r#"<div class="view-toggle">"#);
    for (view, label) in [(ViewType::Table, &list.table_view_label), (ViewType::Grid, &list.grid_view_label)] {
        let active = list.view_type == view;
        let _ = write!(
            out,
            r#"<button class="view-button{}"{}{}{}>{}</button>"#,
            if active { " active" } else { "" },
            attr("aria-pressed", if active { "true" } else { "false" }),
            flag("disabled", active),
            on("click", &json!({"type": "setViewType", "view": view})),
            escape(label),
        );
    }
    out.push_str("</div></div>");
}
