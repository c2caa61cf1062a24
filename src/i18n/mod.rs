//! Translation lookup for the two supported locales.
//!
//! Locale tables are TOML files compiled into the crate. Nested tables are
//! flattened into dotted keys, so `[employeeList.columns] firstName = ".."`
//! is looked up as `employeeList.columns.firstName`. Values may contain
//! `{{name}}` placeholders which [`I18n::t`] fills from its parameters.
//!
//! A key missing from the active locale falls back to English, and a key
//! missing from both resolves to the key itself.
//!
//! # Example
//!
//! ```
//! use roster::i18n::{I18n, Locale};
//!
//! let i18n = I18n::new(Locale::Tr);
//! assert_eq!(i18n.t("header.addNew", &[]), "Yeni Ekle");
//! assert_eq!(
//!     i18n.t("common.messages.confirmDelete", &[("name", "Ali Kaya")]),
//!     "Ali Kaya kaydını silmek istediğinizden emin misiniz?"
//! );
//! ```

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use strum::{AsRefStr, Display, EnumIter, EnumString};

const EN_TABLE: &str = include_str!("../../locales/en.toml");
const TR_TABLE: &str = include_str!("../../locales/tr.toml");

/// Supported UI languages. The string form is the BCP 47 tag written to the
/// document's `lang` attribute.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Name shown in the language selector, in the language itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tr => "Türkçe",
        }
    }

    /// Parses a tag such as `tr` or `en-US`, ignoring the region.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        primary.parse().ok()
    }
}

type Table = HashMap<String, String>;

/// Active locale plus the flattened translation tables.
///
/// Cloning is cheap; the tables are shared.
#[derive(Debug, Clone)]
pub struct I18n {
    locale: Locale,
    fallback: Arc<Table>,
    active: Arc<Table>,
}

impl I18n {
    /// Builds the translator over the built-in tables.
    ///
    /// A built-in table that fails to parse is logged and treated as empty,
    /// which leaves every key resolving to itself.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let en = Arc::new(parse_or_empty(EN_TABLE, Locale::En));
        let tr = Arc::new(parse_or_empty(TR_TABLE, Locale::Tr));
        let active = match locale {
            Locale::En => Arc::clone(&en),
            Locale::Tr => tr,
        };
        Self {
            locale,
            fallback: en,
            active,
        }
    }

    /// Builds a translator from caller-provided TOML tables.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Locale`] if either table is not valid TOML.
    pub fn from_tables(locale: Locale, fallback_toml: &str, active_toml: &str) -> Result<Self> {
        Ok(Self {
            locale,
            fallback: Arc::new(parse_table(fallback_toml)?),
            active: Arc::new(parse_table(active_toml)?),
        })
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches the active locale, keeping the English fallback.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        tracing::debug!(from = %self.locale, to = %locale, "switching locale");
        *self = Self::new(locale);
    }

    /// Looks up `key` and interpolates `{{name}}` placeholders.
    ///
    /// Placeholders without a matching parameter are left as written.
    #[must_use]
    pub fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self
            .active
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or(key, String::as_str);

        if params.is_empty() || !template.contains("{{") {
            return template.to_string();
        }
        interpolate(template, params)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = after[..close].trim();
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

fn parse_or_empty(source: &str, locale: Locale) -> Table {
    parse_table(source).unwrap_or_else(|e| {
        tracing::error!(locale = %locale, error = %e, "built-in locale table failed to parse");
        Table::new()
    })
}

fn parse_table(source: &str) -> Result<Table> {
    let root: toml::Table = toml::from_str(source).map_err(|e| RosterError::Locale(e.to_string()))?;
    let mut table = Table::new();
    flatten("", &toml::Value::Table(root), &mut table);
    Ok(table)
}

fn flatten(prefix: &str, value: &toml::Value, out: &mut Table) {
    match value {
        toml::Value::Table(entries) => {
            for (key, child) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        toml::Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
