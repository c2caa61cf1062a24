//! Employee form modal renderer.

use super::confirmation::render_confirmation;
use crate::ui::helpers::{attr, escape, flag, on, on_bound};
use crate::ui::viewmodel::{FormFieldInfo, FormModalInfo};
use serde_json::json;
use std::fmt::Write as _;

fn render_field(out: &mut String, modal: &FormModalInfo, field: &FormFieldInfo) {
    let input_id = format!("modal-{}-{}", modal.id, field.field);
    let input = on_bound("input", &json!({"type": "formInput", "modal": modal.id, "field": field.field}), "value");
    let _ = write!(
        out,
        r#"<div class="form-group{}"><label{}>{}</label>"#,
        if field.error.is_some() { " has-error" } else { "" },
        attr("for", &input_id),
        escape(&field.label),
    );

    if let Some(html_type) = field.kind.html_type() {
        let _ = write!(
            out,
            r#"<input{}{}{}{}{}{}>"#,
            attr("type", html_type),
            attr("id", &input_id),
            attr("value", &field.value),
            attr("placeholder", &field.placeholder),
            flag("disabled", modal.submitting),
            input,
        );
    } else {
        let _ = write!(
            out,
            r#"<select{}{}{}><option value="">{}</option>"#,
            attr("id", &input_id),
            flag("disabled", modal.submitting),
            input,
            escape(&field.placeholder),
        );
        for (value, label) in &field.options {
            let _ = write!(
                out,
                "<option{}{}>{}</option>",
                attr("value", value),
                flag("selected", *value == field.value),
                escape(label),
            );
        }
        out.push_str("</select>");
    }

    if let Some(error) = &field.error {
        let _ = write!(out, r#"<span class="error-message">{}</span>"#, escape(error));
    }
    out.push_str("</div>");
}

/// Appends one form modal, and its update confirmation when staged.
///
/// Fields render in form order with their inline errors. Inputs, select
/// boxes and buttons are disabled while submitting, and the overlay only
/// closes the modal when not submitting.
pub fn render_form_modal(out: &mut String, modal: &FormModalInfo) {
    let close = json!({"type": "closeModal", "modal": modal.id});
    let dismiss = if modal.submitting { String::new() } else { on("click", &close) };
    let _ = write!(
        out,
        r#"<div class="modal-overlay" data-overlay{}{dismiss}><div class="modal" role="dialog"><h2 class="modal-title">{}</h2><form class="employee-form"{}>"#,
        attr("data-modal", &modal.id.to_string()),
        escape(&modal.title),
        on("submit", &json!({"type": "formSubmit", "modal": modal.id})),
    );
    for field in &modal.fields {
        render_field(out, modal, field);
    }
    let _ = write!(
        out,
        r#"<div class="form-actions"><button type="button" class="cancel"{}{}>{}</button><button type="submit" class="submit"{}>{}</button></div></form></div></div>"#,
        flag("disabled", modal.submitting),
        on("click", &close),
        escape(&modal.cancel_label),
        flag("disabled", modal.submitting),
        escape(&modal.submit_label),
    );

    if let Some(confirmation) = &modal.confirmation {
        render_confirmation(
            out,
            confirmation,
            &json!({"type": "formConfirmUpdate", "modal": modal.id}),
            &json!({"type": "formCancelUpdate", "modal": modal.id}),
        );
    }
}
