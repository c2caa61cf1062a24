//! Empty state component renderer.
//!
//! Shown in place of the table or grid when the current page has no rows,
//! either because the collection is empty or the search matched nothing.

use crate::ui::helpers::escape;
use crate::ui::viewmodel::EmptyState;
use std::fmt::Write as _;

/// Appends the two-line empty state message.
pub fn render_empty_state(out: &mut String, empty: &EmptyState) {
    let _ = write!(
        out,
        r#"<div class="empty-state"><p class="empty-message">{}</p><p class="empty-subtitle">{}</p></div>"#,
        escape(&empty.message),
        escape(&empty.subtitle),
    );
}
