//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The output is one HTML fragment the host swaps into its root element:
//!
//! ```text
//! <style>:root { --color-... }</style>
//! <div class="app" lang="..">
//!   [header]
//!   <main>[list | login | not found]</main>
//!   [form modals, oldest first]
//! </div>
//! ```
//!
//! # Example
//!
//! ```
//! use roster::app::AppState;
//! use roster::i18n::{I18n, Locale};
//! use roster::storage::EmployeeStore;
//! use roster::ui::{render, Theme};
//!
//! let mut state = AppState::new(EmployeeStore::new(vec![], 12), I18n::new(Locale::En), Theme::default());
//! state.navigate("/login-page");
//! let html = render(&state);
//! assert!(html.contains(r#"class="login-form""#));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::attr;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UIViewModel};
use std::fmt::Write as _;

/// Renders the whole UI for `state`.
#[must_use]
pub fn render(state: &AppState) -> String {
    let _span = tracing::trace_span!("render").entered();
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme)
}

/// Renders a pre-computed view model with the given palette.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(out, "<style>{}</style>", theme.css_variables());
    let _ = write!(out, r#"<div class="app"{}>"#, attr("lang", vm.lang.as_ref()));

    components::render_header(&mut out, &vm.header);

    out.push_str("<main>");
    match &vm.page {
        PageView::List(list) => components::render_list(&mut out, list),
        PageView::Login(login) => components::render_login(&mut out, login),
        PageView::NotFound(not_found) => components::render_not_found(&mut out, not_found),
    }
    out.push_str("</main>");

    for modal in &vm.modals {
        components::render_form_modal(&mut out, modal);
    }
    out.push_str("</div>");

    tracing::trace!(bytes = out.len(), "rendered");
    out
}
