//! Page-number window for the list's pagination control.
//!
//! At most [`MAX_VISIBLE_PAGES`] consecutive page numbers are shown,
//! centered on the current page where possible. The first and last page
//! stay reachable outside the window, separated by an ellipsis when pages
//! are skipped.
//!
//! # Example
//!
//! ```
//! use roster::app::pagination::{PageControl, PaginationWindow};
//!
//! let window = PaginationWindow::compute(5, 10);
//! assert_eq!(window.controls.first(), Some(&PageControl::Page(1)));
//! assert_eq!(window.controls.last(), Some(&PageControl::Page(10)));
//! ```

use serde::Serialize;

pub const MAX_VISIBLE_PAGES: usize = 5;

/// One entry between the previous and next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationWindow {
    pub current: usize,
    pub total_pages: usize,
    pub controls: Vec<PageControl>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationWindow {
    /// Lays out the control for `current` of `total_pages`.
    #[must_use]
    pub fn compute(current: usize, total_pages: usize) -> Self {
        let half = MAX_VISIBLE_PAGES / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = total_pages.min(start + MAX_VISIBLE_PAGES - 1);
        if end + 1 < start + MAX_VISIBLE_PAGES {
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }

        let mut controls = Vec::with_capacity(MAX_VISIBLE_PAGES + 4);
        if start > 1 {
            controls.push(PageControl::Page(1));
            if start > 2 {
                controls.push(PageControl::Ellipsis);
            }
        }
        controls.extend((start..=end).map(PageControl::Page));
        if end < total_pages {
            if end + 1 < total_pages {
                controls.push(PageControl::Ellipsis);
            }
            controls.push(PageControl::Page(total_pages));
        }

        Self {
            current,
            total_pages,
            controls,
            previous_enabled: current > 1,
            next_enabled: current < total_pages,
        }
    }
}

/// Whether a page change to `page` should reach the store.
#[must_use]
pub const fn is_valid_page(page: usize, total_pages: usize) -> bool {
    page >= 1 && page <= total_pages
}
