//! Request context carried through the host's HTTP round trip.
//!
//! Zellij hands back an opaque `BTreeMap<String, String>` with every web
//! response. The plugin stores everything it needs to route the response in
//! that map: the request token, the page asked for and, when tracing is
//! active, the span that issued the request.

use super::client::RequestId;
use std::collections::BTreeMap;

const REQUEST_ID_KEY: &str = "catalog.request_id";
const PAGE_KEY: &str = "catalog.page";
const TRACE_ID_KEY: &str = "catalog.trace_id";
const PARENT_SPAN_ID_KEY: &str = "catalog.parent_span_id";

/// Distributed tracing context for linking the response span to the request span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the active tracing span.
    ///
    /// Returns `None` when there is no valid OpenTelemetry span, for example
    /// when tracing is not initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();
        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes this context the remote parent for spans opened while the
    /// returned guard is alive.
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }
}

/// Everything the plugin attaches to one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub page: u32,
    pub trace: Option<TraceContext>,
}

impl RequestContext {
    /// Flattens the context into the host's string map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(REQUEST_ID_KEY.to_string(), self.request_id.0.to_string());
        map.insert(PAGE_KEY.to_string(), self.page.to_string());
        if let Some(trace) = self.trace {
            map.insert(TRACE_ID_KEY.to_string(), trace.trace_id);
            map.insert(PARENT_SPAN_ID_KEY.to_string(), trace.parent_span_id);
        }
        map
    }

    /// Reads a context back from a response's map.
    ///
    /// Returns `None` if the map was not produced by [`Self::into_map`], which
    /// means the response belongs to some other request.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let request_id = map.get(REQUEST_ID_KEY)?.parse().ok()?;
        let page = map.get(PAGE_KEY)?.parse().ok()?;
        let trace = match (map.get(TRACE_ID_KEY), map.get(PARENT_SPAN_ID_KEY)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Some(Self {
            request_id: RequestId(request_id),
            page,
            trace,
        })
    }
}
