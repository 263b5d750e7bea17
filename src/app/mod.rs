//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, API and UI
//! layers. Data flows one way:
//!
//! ```text
//! Key / web events → Event → handle_event → AppState mutation → Actions → host calls
//!                       ↑                                          │
//!                       └──────────── PageFetched ─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state
//! - [`pagination`]: The fetch state machine and request tokens
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use pagination::{PageNav, Pagination, Phase};
pub use state::AppState;
