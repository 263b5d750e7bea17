//! Domain layer for the character catalog.
//!
//! Core value types, independent of Zellij APIs and of the HTTP wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`character`]: Character model and life status classification
//! - [`filter`]: Search criteria ([`FilterSet`])
//! - [`page`]: One fetched page ([`PageResult`])

pub mod character;
pub mod error;
pub mod filter;
pub mod page;

pub use character::{CharacterSummary, LifeStatus, LocationRef};
pub use error::{CatalogError, FetchError, Result};
pub use filter::{FilterSet, StatusFilter, TextField};
pub use page::PageResult;
