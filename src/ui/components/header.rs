//! Header component renderer.
//!
//! Renders the navigation bar: logo link to the list, the optional
//! "add new" button, the login link and the language selector with its
//! popup.

use crate::ui::helpers::{attr, escape, on};
use crate::ui::viewmodel::HeaderInfo;
use serde_json::json;
use std::fmt::Write as _;

/// Appends the `<header>` element for `header` to `out`.
///
/// # Layout
///
/// ```text
/// [logo → /employees]            [Employees] [+ Add New] [Login] [EN ▾]
///                                                                 ├ English
///                                                                 └ Türkçe
/// ```
///
/// The add-new button is omitted when `header.add_new_label` is `None`. The
/// popup list is only emitted while it is open, and the active language
/// carries the `active` class.
pub fn render_header(out: &mut String, header: &HeaderInfo) {
    out.push_str(r#"<header class="header"><nav class="nav">"#);
    let _ = write!(
        out,
        r#"<a class="logo"{}{}>ING</a>"#,
        attr("href", &header.employees_href),
        on("click", &json!({"type": "navigate", "path": header.employees_href})),
    );

    out.push_str(r#"<div class="nav-actions">"#);
    let _ = write!(
        out,
        r#"<a class="nav-link"{}{}>{}</a>"#,
        attr("href", &header.employees_href),
        on("click", &json!({"type": "navigate", "path": header.employees_href})),
        escape(&header.employees_label),
    );
    if let Some(label) = &header.add_new_label {
        let _ = write!(
            out,
            r#"<button class="add-new"{}>+ {}</button>"#,
            on("click", &json!({"type": "addNew"})),
            escape(label),
        );
    }
    let _ = write!(
        out,
        r#"<button class="login"{}>{}</button>"#,
        on("click", &json!({"type": "login"})),
        escape(&header.login_label),
    );

    let _ = write!(
        out,
        r#"<div class="language-selector" data-outside-click="outsideClick"><button class="language-toggle"{}{}>{}</button>"#,
        attr("aria-label", &header.language_label),
        on("click", &json!({"type": "toggleLanguagePopup"})),
        escape(&header.current_language.as_ref().to_uppercase()),
    );
    if header.language_popup_open {
        out.push_str(r#"<ul class="language-popup">"#);
        for option in &header.languages {
            let class = if option.active { "language-option active" } else { "language-option" };
            let _ = write!(
                out,
                r#"<li{}{}{}>{}</li>"#,
                attr("class", class),
                attr("lang", option.locale.as_ref()),
                on("click", &json!({"type": "chooseLanguage", "lang": option.locale})),
                escape(&option.name),
            );
        }
        out.push_str("</ul>");
    }
    out.push_str("</div></div></nav></header>");
}
