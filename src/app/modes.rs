//! Input mode state for the catalog.
//!
//! The mode decides how keys are interpreted and which footer hints and
//! filter bar decorations are shown.
//!
//! - **Normal**: selection movement, page navigation and shortcut commands
//! - **Editing**: typing goes into one free-text filter field
//! - **`GotoPage`**: typing collects a page number
//!
//! # Example
//!
//! ```rust
//! use character_catalog::app::InputMode;
//! use character_catalog::domain::TextField;
//!
//! let mode = InputMode::Editing(TextField::Name);
//! assert!(mode.is_text_entry());
//! ```

use crate::domain::TextField;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (select), h/l (page), g/G (first/last page),
    /// p (go to page), / (edit filters), s (cycle status), c (clear),
    /// r (reload), q (quit).
    #[default]
    Normal,

    /// Editing a free-text filter field.
    ///
    /// Every keystroke replaces the filters immediately. Tab and Shift-Tab
    /// move between fields; Enter or Esc return to `Normal`.
    Editing(TextField),

    /// Typing a page number to jump to.
    GotoPage,
}

impl InputMode {
    /// True when printable keys should be treated as text rather than commands.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        !matches!(self, Self::Normal)
    }
}
