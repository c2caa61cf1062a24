//! Table and grid renderers for the current page of employees.
//!
//! Both layouts render the same [`DisplayItem`]s. The table carries the
//! selection checkboxes; the grid shows one card per employee with edit
//! and delete buttons.

use crate::ui::helpers::{attr, escape, flag, on, on_bound};
use crate::ui::viewmodel::{DisplayItem, ListInfo};
use serde_json::json;
use std::fmt::Write as _;

fn render_row_actions(out: &mut String, item: &DisplayItem, list: &ListInfo) {
    let _ = write!(
        out,
        r#"<button class="edit"{}{}>✎</button><button class="delete"{}{}>🗑</button>"#,
        attr("title", &list.edit_label),
        on("click", &json!({"type": "editEmployee", "id": item.id})),
        attr("title", &list.delete_label),
        on("click", &json!({"type": "requestDelete", "id": item.id})),
    );
}

/// Appends the `<table>` view.
///
/// # Columns
///
/// A leading checkbox column, then one column per entry in `list.columns`
/// (the last being actions). The header checkbox reflects
/// `page_fully_selected` and dispatches `selectAll` with `checked` bound.
pub fn render_table(out: &mut String, list: &ListInfo) {
    out.push_str(r#"<div class="table-container"><table class="employee-table"><thead><tr>"#);
    let _ = write!(
        out,
        r#"<th class="checkbox-column"><input type="checkbox"{}{}{}></th>"#,
        attr("aria-label", &list.select_all_label),
        flag("checked", list.page_fully_selected),
        on_bound("change", &json!({"type": "selectAll"}), "checked"),
    );
    for column in &list.columns {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr></thead><tbody>");

    for item in &list.display_items {
        let _ = write!(
            out,
            r#"<tr{}{}><td class="checkbox-column"><input type="checkbox"{}{}></td>"#,
            attr("data-id", &item.id.to_string()),
            if item.is_selected { r#" class="selected""# } else { "" },
            flag("checked", item.is_selected),
            on("change", &json!({"type": "toggleSelection", "id": item.id})),
        );
        for value in [
            &item.first_name,
            &item.last_name,
            &item.date_of_employment,
            &item.date_of_birth,
            &item.phone,
            &item.email,
            &item.department,
            &item.position,
        ] {
            let _ = write!(out, "<td>{}</td>", escape(value));
        }
        out.push_str(r#"<td class="actions">"#);
        render_row_actions(out, item, list);
        out.push_str("</td></tr>");
    }
    out.push_str("</tbody></table></div>");
}

/// Appends the card grid view.
pub fn render_grid(out: &mut String, list: &ListInfo) {
    // Labels follow table column order: first/last name are folded into the card title.
    let labels = &list.columns;
    out.push_str(r#"<div class="employee-grid">"#);
    for item in &list.display_items {
        let _ = write!(
            out,
            r#"<div class="employee-card"{}><h3 class="card-name">{}</h3><dl>"#,
            attr("data-id", &item.id.to_string()),
            escape(&item.full_name),
        );
        let values = [
            &item.date_of_employment,
            &item.date_of_birth,
            &item.phone,
            &item.email,
            &item.department,
            &item.position,
        ];
        for (label, value) in labels.iter().skip(2).zip(values) {
            let _ = write!(out, "<dt>{}</dt><dd>{}</dd>", escape(label), escape(value));
        }
        out.push_str(r#"</dl><div class="card-actions">"#);
        render_row_actions(out, item, list);
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
}
