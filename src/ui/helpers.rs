//! Shared rendering utilities and helpers.
//!
//! Components build markup by appending to a `String`. These helpers keep
//! escaping and event wiring consistent across them.
//!
//! # Event Wiring
//!
//! Interactive elements carry a `data-on-<trigger>` attribute holding the
//! JSON of the [`Event`](crate::app::Event) the host should dispatch. When the
//! event needs the element's current value, `data-bind` names the payload key
//! the host fills in (`value` for text, `checked` for checkboxes).
//!
//! Two markers change when a click counts:
//!
//! - `data-overlay`: dispatch the element's `data-on-click` only when the
//!   click target is the element itself, not a descendant. Used by modal
//!   backdrops so clicks inside the dialog do not dismiss it.
//! - `data-outside-click="<eventType>"`: dispatch `{"type": "<eventType>"}`
//!   for any click that lands outside the element. Used by the language
//!   selector to close its popup.
//!
//! # Example
//!
//! ```
//! use roster::ui::helpers::{escape, on};
//! use serde_json::json;
//!
//! assert_eq!(escape("<b>Ali & Ece</b>"), "&lt;b&gt;Ali &amp; Ece&lt;/b&gt;");
//! assert_eq!(
//!     on("click", &json!({"type": "addNew"})),
//!     r#" data-on-click="{&quot;type&quot;:&quot;addNew&quot;}""#
//! );
//! ```

use serde_json::Value;

/// Escapes text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formats ` name="value"` with the value escaped.
#[must_use]
pub fn attr(name: &str, value: &str) -> String {
    format!(" {name}=\"{}\"", escape(value))
}

/// Formats ` name` when `enabled`, else nothing.
#[must_use]
pub fn flag(name: &str, enabled: bool) -> String {
    if enabled {
        format!(" {name}")
    } else {
        String::new()
    }
}

/// Formats the `data-on-<trigger>` attribute for `event`.
#[must_use]
pub fn on(trigger: &str, event: &Value) -> String {
    attr(&format!("data-on-{trigger}"), &event.to_string())
}

/// Formats an `on` attribute plus `data-bind="key"`.
#[must_use]
pub fn on_bound(trigger: &str, event: &Value, key: &str) -> String {
    format!("{}{}", on(trigger, event), attr("data-bind", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_quotes_and_apostrophes() {
        assert_eq!(escape(r#"O'Neil "Jr""#), "O&#39;Neil &quot;Jr&quot;");
        assert_eq!(escape("Çalışan"), "Çalışan");
    }

    #[test]
    fn test_flag_and_bound() {
        assert_eq!(flag("disabled", true), " disabled");
        assert_eq!(flag("disabled", false), "");
        let html = on_bound("input", &json!({"type": "searchInput"}), "query");
        assert!(html.ends_with(r#" data-bind="query""#));
    }
}
