//! Theme palette and CSS custom property generation.
//!
//! This module defines the color scheme system for the UI, supporting both
//! built-in themes and custom themes loaded from TOML files. The renderer
//! emits the palette as CSS custom properties on the root element so that
//! stylesheets refer to `var(--color-primary)` and friends.
//!
//! # Built-in Themes
//!
//! - `ing-orange`: Light theme with the orange brand accent (default)
//! - `ing-dark`: Dark surfaces with the same accent
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! primary = "#FF6200"
//! primary_hover = "#FF4400"
//! background = "#F5F5F5"
//! white = "#FFFFFF"
//! text_primary = "#333333"
//! text_secondary = "#666666"
//! text_light = "#999999"
//! border = "#EEEEEE"
//! hover = "#F8F8F8"
//! error = "#dc3545"
//! error_light = "#f8d7da"
//! ```
//!
//! # Example
//!
//! ```
//! use roster::ui::theme::Theme;
//!
//! let theme = Theme::from_name("ing-orange").unwrap();
//! assert!(theme.css_variables().contains("--color-primary: #FF6200;"));
//! ```

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const DEFAULT_THEME: &str = "ing-orange";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Palette entries, as hex strings (e.g., "#FF6200").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Brand accent: titles, buttons, active page.
    pub primary: String,
    pub primary_hover: String,
    /// Page background behind cards and tables.
    pub background: String,
    /// Card, table and modal surface.
    pub white: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_light: String,
    pub border: String,
    /// Row hover background.
    pub hover: String,
    /// Inline validation text and input border.
    pub error: String,
    pub error_light: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "ing-orange" => include_str!("../../themes/ing-orange.toml"),
            "ing-dark" => include_str!("../../themes/ing-dark.toml"),
            _ => return None,
        };

        Self::from_toml_str(toml_str).ok()
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] if the TOML is malformed, a color is
    /// missing, or a color is not a `#RRGGBB` hex string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let theme: Self =
            toml::from_str(source).map_err(|e| RosterError::Theme(format!("Failed to parse theme TOML: {e}")))?;

        if let Some((name, value)) = theme.colors.entries().into_iter().find(|(_, hex)| !is_hex_color(hex)) {
            return Err(RosterError::Theme(format!("Color {name} is not a #RRGGBB value: {value:?}")));
        }
        Ok(theme)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips `#` prefix if present. Returns `(255, 255, 255)` (white) on
    /// parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Renders the palette as a `:root { ... }` rule of CSS custom
    /// properties.
    ///
    /// Each color is exposed as `--color-<name>` plus an `-rgb` triplet for
    /// use in `rgba()` overlays.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {");
        for (name, hex) in self.colors.entries() {
            let (r, g, b) = Self::hex_to_rgb(hex);
            let _ = write!(css, " --color-{name}: {hex}; --color-{name}-rgb: {r}, {g}, {b};");
        }
        css.push_str(" }");
        css
    }
}

impl ThemeColors {
    /// Palette entries keyed by their CSS variable suffix.
    fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("primary", self.primary.as_str()),
            ("primary-hover", self.primary_hover.as_str()),
            ("background", self.background.as_str()),
            ("white", self.white.as_str()),
            ("text-primary", self.text_primary.as_str()),
            ("text-secondary", self.text_secondary.as_str()),
            ("text-light", self.text_light.as_str()),
            ("border", self.border.as_str()),
            ("hover", self.hover.as_str()),
            ("error", self.error.as_str()),
            ("error-light", self.error_light.as_str()),
        ]
    }
}

/// `#` followed by exactly six hex digits.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

impl Default for Theme {
    /// Returns the default theme (`ing-orange`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in ing-orange theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        assert_eq!(Theme::from_name("ing-orange").unwrap().colors.primary, "#FF6200");
        assert_eq!(Theme::from_name("ing-dark").unwrap().name, "ing-dark");
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn test_css_variables_include_rgb_triplets() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary-rgb: 255, 98, 0;"));
        assert!(css.contains("--color-error-light: #f8d7da;"));
    }

    #[test]
    fn test_bad_hex_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#12"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("zzzzzz"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#333333"), (51, 51, 51));
    }

    #[test]
    fn test_from_file_reads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../../themes/ing-dark.toml").replace("ing-dark", "custom");
        file.write_all(source.as_bytes()).unwrap();
        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn test_non_hex_color_is_rejected() {
        let source = include_str!("../../themes/ing-orange.toml")
            .replace("\"#FF4400\"", "\"red</style><script>alert(1)</script>\"");
        let err = Theme::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, RosterError::Theme(ref msg) if msg.contains("primary-hover")));

        let short = include_str!("../../themes/ing-orange.toml").replace("\"#dc3545\"", "\"#dc35\"");
        assert!(Theme::from_toml_str(&short).is_err());
    }

    #[test]
    fn test_hex_color_check() {
        assert!(is_hex_color("#f8d7da"));
        assert!(!is_hex_color("f8d7da"));
        assert!(!is_hex_color("#f8d7dz"));
        assert!(!is_hex_color("#f8d7da;"));
    }

    #[test]
    fn test_missing_color_is_theme_error() {
        let err = Theme::from_toml_str("name = \"x\"\n[colors]\nprimary = \"#000000\"").unwrap_err();
        assert!(matches!(err, RosterError::Theme(_)));
    }
}
