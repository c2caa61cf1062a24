//! Actions representing side effects the host must carry out.
//!
//! The event handler returns a `Vec<Action>` alongside a render flag. The
//! crate never touches the browser itself; the host applies each action in
//! order: pushing history entries, updating the document `lang` attribute,
//! and scheduling the commit step of a form submission.
//!
//! # Example
//!
//! ```
//! use roster::app::Action;
//!
//! let action = Action::Navigate { path: "/employees".to_string() };
//! let json = serde_json::to_string(&action).unwrap();
//! assert_eq!(json, r#"{"type":"navigate","path":"/employees"}"#);
//! ```

use super::form::ModalId;
use crate::i18n::Locale;
use serde::Serialize;

/// Commands for the host, serialized with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Push `path` onto the browser history.
    ///
    /// Emitted on every route change, including the root redirect.
    Navigate { path: String },

    /// Set `<html lang>` to the chosen locale.
    SetDocumentLanguage { lang: Locale },

    /// Deliver `Event::Commit` for `modal` on the next tick.
    ///
    /// The modal is already showing its processing label; deferring the
    /// store write lets the host paint that state first.
    Commit { modal: ModalId },
}
