//! Pagination control renderer.

use crate::app::pagination::PageControl;
use crate::ui::helpers::{escape, flag, on};
use crate::ui::viewmodel::PaginationInfo;
use serde_json::json;
use std::fmt::Write as _;

/// Appends the summary line and the previous/pages/next control.
///
/// Previous and next are disabled at the ends. The current page button is
/// marked `active` and does not dispatch.
pub fn render_pagination(out: &mut String, pagination: &PaginationInfo) {
    let window = &pagination.window;
    let _ = write!(
        out,
        r#"<div class="pagination"><span class="pagination-summary">{}</span><div class="pagination-controls">"#,
        escape(&pagination.summary),
    );

    let _ = write!(
        out,
        r#"<button class="page-nav"{}{}>{}</button>"#,
        flag("disabled", !window.previous_enabled),
        on("click", &json!({"type": "changePage", "page": window.current.saturating_sub(1)})),
        escape(&pagination.previous_label),
    );
    for control in &window.controls {
        match control {
            PageControl::Page(page) if *page == window.current => {
                let _ = write!(out, r#"<button class="page-number active" aria-current="page">{page}</button>"#);
            }
            PageControl::Page(page) => {
                let _ = write!(
                    out,
                    r#"<button class="page-number"{}>{page}</button>"#,
                    on("click", &json!({"type": "changePage", "page": page})),
                );
            }
            PageControl::Ellipsis => out.push_str(r#"<span class="ellipsis">…</span>"#),
        }
    }
    let _ = write!(
        out,
        r#"<button class="page-nav"{}{}>{}</button>"#,
        flag("disabled", !window.next_enabled),
        on("click", &json!({"type": "changePage", "page": window.current + 1})),
        escape(&pagination.next_label),
    );
    out.push_str("</div></div>");
}
