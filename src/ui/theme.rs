//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Three are built in and embedded at compile time;
//! users can point `theme_file` at their own.
//!
//! # Built-in Themes
//!
//! - `portal`: Dark theme in the show's portal green and deep blue (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#97ce4c"
//! header_bg = "#24325f"
//! selection_fg = "#262c3a"
//! selection_bg = "#00b5cc"
//! text_normal = "#e4e6eb"
//! text_dim = "#8a93a6"
//! border = "#24325f"
//! filter_label = "#00b5cc"
//! filter_focus = "#f0e14a"
//! match_highlight_fg = "#262c3a"
//! match_highlight_bg = "#f0e14a"
//! empty_state_fg = "#00b5cc"
//! error_fg = "#f44336"
//! status_alive = "#97ce4c"
//! status_dead = "#f44336"
//! status_unknown = "#9e9e9e"
//! pagination_active = "#f0e14a"
//! pagination_disabled = "#4a5368"
//! ```

use crate::domain::{CatalogError, LifeStatus, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const PORTAL: &str = include_str!("../../themes/portal.toml");
const CATPPUCCIN_MOCHA: &str = include_str!("../../themes/catppuccin-mocha.toml");
const CATPPUCCIN_LATTE: &str = include_str!("../../themes/catppuccin-latte.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g., `"#97ce4c"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, column headings, secondary info.
    pub text_dim: String,

    pub border: String,

    /// Filter bar field labels.
    pub filter_label: String,
    /// The filter field being edited.
    pub filter_focus: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    pub error_fg: String,

    /// Status dot colors.
    pub status_alive: String,
    pub status_dead: String,
    pub status_unknown: String,

    /// Enabled pagination controls and the page position.
    pub pagination_active: String,
    /// Disabled pagination controls.
    pub pagination_disabled: String,
}

impl ThemeColors {
    /// Dot color for a character's life status.
    #[must_use]
    pub fn status(&self, status: LifeStatus) -> &str {
        match status {
            LifeStatus::Alive => &self.status_alive,
            LifeStatus::Dead => &self.status_dead,
            LifeStatus::Unknown => &self.status_unknown,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use character_catalog::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "portal" => PORTAL,
            "catppuccin-mocha" => CATPPUCCIN_MOCHA,
            "catppuccin-latte" => CATPPUCCIN_LATTE,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Theme`] if its contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| CatalogError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple; white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `portal` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the test suite rules out.
    fn default() -> Self {
        Self::from_name("portal").expect("built-in portal theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_built_in_theme_parses() {
        for name in ["portal", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_is_portal_with_show_status_colors() {
        let theme = Theme::default();
        assert_eq!(theme.name, "portal");
        assert_eq!(theme.colors.status(LifeStatus::Alive), "#97ce4c");
        assert_eq!(theme.colors.status(LifeStatus::Dead), "#f44336");
        assert_eq!(theme.colors.status(LifeStatus::Unknown), "#9e9e9e");
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#97CE4C"), "\u{1b}[38;2;151;206;76m");
        assert_eq!(Theme::bg("nonsense"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trips_through_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = Theme::from_name("portal").unwrap();
        write!(file, "{}", toml::to_string(&source).unwrap()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), source);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nheader_fg = 3\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(CatalogError::Theme(_))));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Theme::from_file(dir.path().join("absent.toml")),
            Err(CatalogError::Io(_))
        ));
    }
}
