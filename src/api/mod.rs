//! Character API client.
//!
//! Builds request URLs from filters, issues them through an injected
//! [`HttpTransport`] and decodes responses into [`crate::domain::PageResult`].
//! Nothing here talks to Zellij directly; the plugin binary supplies the
//! transport.

pub mod client;
pub mod context;
pub mod query;
pub mod response;

pub use client::{FetchOutcome, FetchTicket, HttpTransport, PageFetcher, RequestId};
pub use context::{RequestContext, TraceContext};
pub use query::{build_request, Endpoint, PageRequest, DEFAULT_BASE_URL};
pub use response::decode_page;
