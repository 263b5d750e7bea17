//! Character Catalog: a Zellij plugin for browsing the Rick and Morty
//! character API one page at a time.
//!
//! The plugin shows a table of characters with filters for name, status,
//! species, type and gender, and pages through results with first, previous,
//! next and last controls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← key mapping, host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← handle_event
//! │  - Pagination state machine                         │
//! │  - Input modes and view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ API Layer (api/)      │         │ UI Layer (ui/)        │
//! │ - Query building      │         │ - Components          │
//! │ - Defensive decoding  │         │ - Themes              │
//! │ - Request tokens      │         │                       │
//! └───────────────────────┘         └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure · Observability   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: an [`Event`] goes through [`handle_event`], which
//! mutates [`AppState`] and returns [`Action`]s; the shim performs them and
//! Zellij asks for a render.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/character-catalog.wasm" {
//!         theme "portal"
//!         status "alive"
//!         species "Human"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use character_catalog::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let (mut state, endpoint) = initialize(&config)?;
//! assert_eq!(endpoint.as_str(), "https://rickandmortyapi.com/api/character");
//!
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), character_catalog::CatalogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{CatalogError, Result};
pub use ui::Theme;

use api::{Endpoint, DEFAULT_BASE_URL};
use domain::{FilterSet, StatusFilter};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's plugin options.
///
/// ```kdl
/// plugin location="file:/path/to/character-catalog.wasm" {
///     base_url "https://rickandmortyapi.com/api/character"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/zellij/catalog-theme.toml"
///     trace_level "debug"
///     name "rick"
///     status "alive"
///     species "Human"
///     type "Parasite"
///     gender "female"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Character endpoint queried with `page` and filter parameters.
    pub base_url: String,

    /// Built-in theme: `portal`, `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme, with `~` already mapped to `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Filters applied to the first request.
    pub filters: FilterSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            filters: FilterSet::default(),
        }
    }
}

impl Config {
    /// Reads options from Zellij's configuration map.
    ///
    /// Blank values count as unset. An unrecognized `status` is logged and
    /// ignored rather than failing the plugin load.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use character_catalog::domain::StatusFilter;
    /// use character_catalog::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("name".to_string(), "rick".to_string()),
    ///     ("status".to_string(), "Alive".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.filters.name, "rick");
    /// assert_eq!(config.filters.status, Some(StatusFilter::Alive));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let status = get("status").and_then(|raw| {
            raw.parse::<StatusFilter>()
                .map_err(|e| tracing::debug!(status = %raw, error = %e, "ignoring status option"))
                .ok()
        });

        let filters = FilterSet {
            name: get("name").unwrap_or_default(),
            status,
            species: get("species"),
            kind: get("type"),
            gender: get("gender"),
        };

        Self {
            base_url: get("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: get("trace_level"),
            filters,
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(path) = &self.theme_file {
            match Theme::from_file(path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                }
            }
        } else if let Some(name) = &self.theme_name {
            if let Some(theme) = Theme::from_name(name) {
                return theme;
            }
            tracing::debug!(theme_name = %name, "unknown theme, using default");
        }

        Theme::default()
    }
}

/// Builds the initial state and the endpoint requests are sent to.
///
/// No request is issued yet: the first page is fetched once web access has
/// been granted.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidUrl`] if `base_url` is not an absolute URL.
pub fn initialize(config: &Config) -> Result<(AppState, Endpoint)> {
    tracing::debug!(base_url = %config.base_url, "initializing character catalog");

    let endpoint = Endpoint::parse(&config.base_url)?;
    let state = AppState::new(config.filters.clone(), config.theme());

    Ok((state, endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_options_give_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn filter_options_seed_the_initial_filters() {
        let config = Config::from_zellij(&options(&[
            ("name", " morty "),
            ("status", "dead"),
            ("species", "Alien"),
            ("type", "Parasite"),
            ("gender", "Female"),
        ]));

        assert_eq!(config.filters.name, "morty");
        assert_eq!(config.filters.status, Some(StatusFilter::Dead));
        assert_eq!(config.filters.species.as_deref(), Some("Alien"));
        assert_eq!(config.filters.kind.as_deref(), Some("Parasite"));
        assert_eq!(config.filters.gender.as_deref(), Some("Female"));
    }

    #[test]
    fn unknown_status_is_ignored() {
        let config = Config::from_zellij(&options(&[("status", "zombie")]));
        assert_eq!(config.filters.status, None);
    }

    #[test]
    fn theme_file_expands_tilde_and_blank_values_are_unset() {
        let config = Config::from_zellij(&options(&[
            ("theme_file", "~/themes/catalog.toml"),
            ("base_url", "  "),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/catalog.toml"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn theme_resolution_prefers_file_then_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "squanchy".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let from_file = Config {
            theme_file: Some(file.path().display().to_string()),
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(from_file.theme().name, "squanchy");

        let from_name = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(from_name.theme().name, "catppuccin-mocha");

        let unknown = Config {
            theme_name: Some("plumbus".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.theme().name, "portal");
    }

    #[test]
    fn initialize_rejects_relative_base_url() {
        let config = Config {
            base_url: "api/character".to_string(),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(CatalogError::InvalidUrl(_))));
    }

    #[test]
    fn initialize_carries_configured_filters() {
        let config = Config::from_zellij(&options(&[("name", "rick")]));
        let (state, endpoint) = initialize(&config).unwrap();

        assert_eq!(state.pagination.filters().name, "rick");
        assert_eq!(endpoint.as_str(), DEFAULT_BASE_URL);
    }
}
