//! Roster: the core of a browser employee management UI.
//!
//! Roster keeps everything except the DOM itself:
//! - An in-memory employee store with search, pagination, selection and
//!   synchronous change notification
//! - A paginated, searchable table/grid list with single and bulk delete
//! - Validated create/edit form modals with two-phase confirmation
//! - Header with language switching (English, Turkish) and a small router
//! - HTML rendering with themeable CSS custom properties
//!
//! A thin browser shim owns a [`host::Host`], forwards DOM interactions as
//! JSON events and applies the returned actions and markup.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host bridge (host.rs)                              │  ← JSON in/out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, routing                          │
//! │  - List, form and confirmation components           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ i18n          │
//! │ (ui/)         │   │ (storage/)    │   │ (i18n/)       │
//! │ - HTML render │   │ - Store       │   │ - en / tr     │
//! │ - Theming     │   │ - Seeding     │   │ - Fallback    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                    │
//! │  - Employee model, validation, errors               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The host reads `data-*` attributes from its mount element, or a TOML
//! file:
//!
//! ```toml
//! items_per_page = 12
//! seed_count = 100
//! seed = 42
//! language = "tr"
//! theme = "ing-dark"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```
//! use roster::{handle_event, initialize, Config, Event};
//!
//! let config = Config { seed: Some(7), ..Default::default() };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Navigate { path: "/employees".into() })?;
//! assert_eq!(state.store.len(), 100);
//! assert_eq!(state.list.snapshot().items.len(), 12);
//! # let _ = actions;
//! # Ok::<(), roster::RosterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod host;
pub mod i18n;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Employee, Result, RosterError};
pub use host::Host;
pub use ui::Theme;

use i18n::{I18n, Locale};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use storage::{generate_employees, EmployeeStore, DEFAULT_ITEMS_PER_PAGE};

const DEFAULT_SEED_COUNT: usize = 100;

/// Runtime configuration.
///
/// Every field has a default, so an empty TOML document or attribute map is
/// a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rows per list page. Default: 12
    pub items_per_page: usize,

    /// Number of synthetic employees seeded at startup. Default: 100
    pub seed_count: usize,

    /// RNG seed for reproducible data. Random when unset.
    pub seed: Option<u64>,

    /// Initial UI language tag (`en`, `tr`, `tr-TR`, ...). Default: `"en"`
    pub language: String,

    /// Built-in theme name: `ing-orange` or `ing-dark`. Ignored if
    /// `theme_file` is set.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Filter directive for tracing. Options: `trace`, `debug`, `info`,
    /// `warn`, `error`, or a full `EnvFilter` directive.
    pub trace_level: Option<String>,

    /// Write traces to this file instead of stderr.
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            seed_count: DEFAULT_SEED_COUNT,
            seed: None,
            language: Locale::En.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from the host element's attributes.
    ///
    /// Keys may use `snake_case` or `kebab-case` and an optional `data-`
    /// prefix. Parsing is lenient: unknown keys are ignored, and values that
    /// fail to parse keep their default.
    ///
    /// # Parsing Rules
    ///
    /// - `items_per_page`: String → `usize`, must be at least 1
    /// - `seed_count`: String → `usize`
    /// - `seed`: String → `u64`
    /// - `language`, `theme`, `theme_file`, `trace_level`, `trace_file`: as-is
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use roster::Config;
    ///
    /// let mut attrs = BTreeMap::new();
    /// attrs.insert("data-items-per-page".to_string(), "20".to_string());
    /// attrs.insert("seed_count".to_string(), "many".to_string());
    ///
    /// let config = Config::from_attributes(&attrs);
    /// assert_eq!(config.items_per_page, 20);
    /// assert_eq!(config.seed_count, 100);
    /// ```
    #[must_use]
    pub fn from_attributes(attributes: &BTreeMap<String, String>) -> Self {
        let normalized: BTreeMap<String, &str> = attributes
            .iter()
            .map(|(key, value)| {
                let key = key.strip_prefix("data-").unwrap_or(key).replace('-', "_");
                (key, value.trim())
            })
            .collect();
        let text = |key: &str| normalized.get(key).filter(|v| !v.is_empty()).map(|v| (*v).to_string());

        let defaults = Self::default();
        Self {
            items_per_page: normalized
                .get("items_per_page")
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.items_per_page),
            seed_count: normalized
                .get("seed_count")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed_count),
            seed: normalized.get("seed").and_then(|s| s.parse().ok()),
            language: text("language").unwrap_or(defaults.language),
            theme_name: text("theme").or_else(|| text("theme_name")),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            trace_file: text("trace_file"),
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] on malformed TOML, unknown keys, or an
    /// `items_per_page` of zero.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RosterError::Config(format!("Failed to parse config TOML: {e}")))?;
        if config.items_per_page == 0 {
            return Err(RosterError::Config("items_per_page must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Builds the application state from configuration.
///
/// Creates a new `AppState` with:
/// - A store seeded with `seed_count` synthetic employees
/// - Loaded theme (from file, name, or default)
/// - Translator for `language`, falling back to English for unknown tags
///
/// The state starts on the login route with nothing mounted; the host
/// dispatches [`Event::Navigate`] with the current location next.
///
/// Tracing is not initialized here; call
/// [`observability::init_tracing`] first if output is wanted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed_count = config.seed_count, seed = ?config.seed, "initializing roster");

    let mut rng = config.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let employees = generate_employees(config.seed_count, &mut rng);
    let store = EmployeeStore::new(employees, config.items_per_page.max(1));

    let locale = Locale::from_tag(&config.language).unwrap_or_else(|| {
        tracing::debug!(language = %config.language, "unsupported language, using English");
        Locale::En
    });

    AppState::new(store, I18n::new(locale), load_theme(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_toml_accepts_theme_alias() {
        let config = Config::from_toml_str("theme = \"ing-dark\"\nseed = 3\nlanguage = \"tr\"").unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("ing-dark"));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_toml_rejects_unknown_keys_and_zero_page_size() {
        assert!(matches!(Config::from_toml_str("colour = 1"), Err(RosterError::Config(_))));
        assert!(matches!(Config::from_toml_str("items_per_page = 0"), Err(RosterError::Config(_))));
    }

    #[test]
    fn test_attributes_are_lenient() {
        let attrs: BTreeMap<String, String> = [
            ("items-per-page", "0"),
            ("data-seed", "99"),
            ("theme", "ing-dark"),
            ("trace_level", "  "),
            ("unrelated", "x"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_attributes(&attrs);
        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.theme_name.as_deref(), Some("ing-dark"));
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn test_initialize_is_deterministic_with_seed() {
        let config = Config { seed: Some(11), seed_count: 20, ..Default::default() };
        let a = initialize(&config);
        let b = initialize(&config);
        assert_eq!(a.store.employees(), b.store.employees());
        assert_eq!(a.store.len(), 20);
    }

    #[test]
    fn test_initialize_picks_locale_and_theme() {
        let config = Config {
            seed_count: 0,
            language: "tr-TR".to_string(),
            theme_name: Some("ing-dark".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.i18n.locale(), Locale::Tr);
        assert_eq!(state.theme.name, "ing-dark");

        let fallback = initialize(&Config { language: "de".to_string(), seed_count: 0, ..Default::default() });
        assert_eq!(fallback.i18n.locale(), Locale::En);
        assert_eq!(fallback.theme, Theme::default());
    }
}
