//! Confirmation dialog renderer shared by delete and update prompts.

use crate::ui::helpers::{attr, escape, flag, on};
use crate::ui::viewmodel::ConfirmationInfo;
use serde_json::Value;
use std::fmt::Write as _;

/// Appends a confirmation dialog.
///
/// `confirm` and `cancel` are the events the two buttons (and the close
/// control and overlay, for `cancel`) should dispatch. While submitting the
/// buttons are disabled and the overlay does not dispatch.
pub fn render_confirmation(out: &mut String, info: &ConfirmationInfo, confirm: &Value, cancel: &Value) {
    let dismiss = if info.submitting { String::new() } else { on("click", cancel) };
    let _ = write!(
        out,
        r#"<div class="confirmation-overlay" data-overlay{dismiss}><div class="confirmation-dialog" role="alertdialog"><div class="confirmation-header"><h2>{}</h2><button class="close"{}{}{}>×</button></div>"#,
        escape(&info.title),
        attr("aria-label", &info.close_label),
        flag("disabled", info.submitting),
        on("click", cancel),
    );
    let _ = write!(
        out,
        r#"<p class="confirmation-message">{}</p><div class="confirmation-actions"><button class="confirm"{}{}>{}</button><button class="cancel"{}{}>{}</button></div></div></div>"#,
        escape(&info.message),
        flag("disabled", info.submitting),
        on("click", confirm),
        escape(&info.confirm_label),
        flag("disabled", info.submitting),
        on("click", cancel),
        escape(&info.cancel_label),
    );
}
