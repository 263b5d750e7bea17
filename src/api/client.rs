//! Page fetching over an injected HTTP transport.
//!
//! Fetching is split in two halves because the host delivers responses as
//! events: [`PageFetcher::fetch`] issues the request and returns at once, and
//! [`PageFetcher::complete`] turns the response event back into a
//! [`FetchOutcome`] tagged with the [`RequestId`] that issued it.

use super::context::{RequestContext, TraceContext};
use super::query::{Endpoint, PageRequest};
use super::response::decode_page;
use crate::domain::{FetchError, PageResult};
use std::collections::BTreeMap;

/// Token identifying one issued request.
///
/// Strictly increasing per plugin instance. A completion whose id differs
/// from the pending one is stale and must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// A request the state machine wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: RequestId,
    pub request: PageRequest,
}

/// Result of one request, routed back to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub id: RequestId,
    pub page: u32,
    pub result: Result<PageResult, FetchError>,
}

/// Fire-and-forget HTTP GET.
///
/// Implementations hand the request to whatever performs I/O and arrange for
/// the response to come back through [`PageFetcher::complete`] with the same
/// `context` map.
pub trait HttpTransport {
    fn get(&self, url: &str, context: BTreeMap<String, String>);
}

/// Issues page requests and decodes their responses.
pub struct PageFetcher {
    endpoint: Endpoint,
    transport: Box<dyn HttpTransport>,
}

impl PageFetcher {
    #[must_use]
    pub fn new(endpoint: Endpoint, transport: Box<dyn HttpTransport>) -> Self {
        Self { endpoint, transport }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Sends the request described by `ticket`.
    pub fn fetch(&self, ticket: &FetchTicket) {
        let url = ticket.request.url(&self.endpoint);

        let span = tracing::debug_span!(
            "fetch_page",
            request_id = ticket.id.0,
            page = ticket.request.page
        );
        let _guard = span.enter();

        let context = RequestContext {
            request_id: ticket.id,
            page: ticket.request.page,
            trace: TraceContext::from_current(),
        };

        tracing::debug!(url = %url, "issuing page request");
        self.transport.get(url.as_str(), context.into_map());
    }

    /// Decodes a response delivered by the host.
    ///
    /// Returns `None` when `context` does not belong to a page request.
    /// Status `0` means the host produced no HTTP response at all.
    #[must_use]
    pub fn complete(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<FetchOutcome> {
        let request = RequestContext::from_map(context)?;
        let _context_guard = request.trace.as_ref().and_then(TraceContext::attach);

        let span = tracing::debug_span!(
            "complete_page",
            request_id = request.request_id.0,
            page = request.page,
            status
        );
        let _guard = span.enter();

        let result = if status == 0 {
            Err(FetchError::Transport {
                status: None,
                message: String::from_utf8_lossy(body).into_owned(),
            })
        } else {
            decode_page(status, body, request.page)
        };

        if let Err(e) = &result {
            tracing::debug!(error = %e, "page request failed");
        }

        Some(FetchOutcome {
            id: request.request_id,
            page: request.page,
            result,
        })
    }
}
