//! One fetched page of characters plus its pagination metadata.

use super::character::CharacterSummary;
use serde::{Deserialize, Serialize};

/// Result of a single successful fetch.
///
/// Each fetch produces a new `PageResult` that replaces the previous one
/// wholesale. Invariant: `1 <= current_page <= max(total_pages, 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<CharacterSummary>,
    pub total_pages: u32,
    pub current_page: u32,
    /// Total matching characters across all pages.
    pub total_count: u32,
}

impl PageResult {
    /// The "no characters match" result.
    ///
    /// Always reports page 1: with zero pages no other page satisfies the
    /// invariant.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            current_page: 1,
            total_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether `page` is a navigable page of this result.
    #[must_use]
    pub const fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }
}
