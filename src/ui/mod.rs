//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust,no_run
//! use character_catalog::app::AppState;
//! use character_catalog::domain::FilterSet;
//! use character_catalog::ui::{render, Theme};
//!
//! let state = AppState::new(FilterSet::default(), Theme::default());
//! render(&state, 24, 100); // Renders to stdout
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CharacterRow, DetailInfo, EmptyKind, EmptyState, FilterBarInfo, FilterFieldInfo, FooterInfo,
    HeaderInfo, PaginationInfo, UIViewModel,
};
