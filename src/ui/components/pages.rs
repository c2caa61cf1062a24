//! Login and not-found page renderers.

use crate::ui::helpers::{attr, escape, on};
use crate::ui::viewmodel::{LoginInfo, NotFoundInfo};
use serde_json::json;
use std::fmt::Write as _;

/// Appends the login form. There is no authentication; proceed navigates
/// to the list.
pub fn render_login(out: &mut String, login: &LoginInfo) {
    let _ = write!(
        out,
        r#"<div class="login-page"><form class="login-form"{}><h1>{}</h1>"#,
        on("submit", &json!({"type": "loginProceed"})),
        escape(&login.title),
    );
    for (id, kind, label, placeholder) in [
        ("username", "text", &login.username_label, &login.username_placeholder),
        ("password", "password", &login.password_label, &login.password_placeholder),
    ] {
        let _ = write!(
            out,
            r#"<div class="form-group"><label{}>{}</label><input{}{}{}></div>"#,
            attr("for", id),
            escape(label),
            attr("type", kind),
            attr("id", id),
            attr("placeholder", placeholder),
        );
    }
    let _ = write!(out, r#"<button type="submit">{}</button></form></div>"#, escape(&login.proceed_label));
}

pub fn render_not_found(out: &mut String, not_found: &NotFoundInfo) {
    let _ = write!(
        out,
        r#"<div class="not-found"><h1>{}</h1><p>{}</p><code>{}</code><a{}{}>{}</a></div>"#,
        escape(&not_found.title),
        escape(&not_found.description),
        escape(&not_found.path),
        attr("href", &not_found.back_href),
        on("click", &json!({"type": "navigate", "path": not_found.back_href})),
        escape(&not_found.back_label),
    );
}
