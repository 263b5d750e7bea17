//! Fetch state machine for the paginated catalog.
//!
//! [`Pagination`] owns the active [`FilterSet`], the current [`Phase`] and the
//! request counter. Every transition that needs the network returns a
//! [`FetchTicket`]; the caller hands it to the page fetcher and later feeds the
//! matching [`FetchOutcome`] back through [`Pagination::complete`].
//!
//! # Transitions
//!
//! ```text
//! Idle ──start──▶ Loading(1, filters)
//! any ──filters changed──▶ Loading(1, new filters)
//! Loaded ──navigate (in range)──▶ Loading(target, filters)
//! Errored ──navigate / reload──▶ Loading(page, filters)
//! Loading ──outcome Ok──▶ Loaded
//! Loading ──outcome Err──▶ Errored
//! ```
//!
//! Issuing a new ticket supersedes the pending one. Outcomes carrying any other
//! [`RequestId`] are stale and dropped.

use crate::api::{build_request, FetchOutcome, FetchTicket, RequestId};
use crate::domain::{FetchError, FilterSet, PageResult};

/// Where the catalog currently is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet.
    Idle,

    /// Waiting for the response to `ticket`.
    Loading { ticket: FetchTicket },

    /// Showing a page.
    Loaded(PageResult),

    /// The last fetch failed. Items are cleared; the request is kept so it can
    /// be retried.
    Errored {
        page: u32,
        filters: FilterSet,
        error: FetchError,
    },
}

/// Page navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    Goto(u32),
}

impl PageNav {
    /// Resolves the command to a page number given the current position.
    const fn target(self, current: u32, total: u32) -> u32 {
        match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => total,
            Self::Goto(page) => page,
        }
    }
}

/// The pagination state machine.
///
/// # Example
///
/// ```
/// use character_catalog::app::pagination::{Pagination, PageNav};
/// use character_catalog::domain::FilterSet;
///
/// let mut pagination = Pagination::new(FilterSet::default());
/// let ticket = pagination.start().unwrap();
/// assert_eq!(ticket.request.page, 1);
///
/// // Navigation is ignored until a page has loaded.
/// assert!(pagination.navigate(PageNav::Next).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Pagination {
    phase: Phase,
    filters: FilterSet,
    /// Page count of the last successful load under the current filters.
    known_pages: Option<u32>,
    last_id: u64,
}

impl Pagination {
    #[must_use]
    pub const fn new(filters: FilterSet) -> Self {
        Self {
            phase: Phase::Idle,
            filters,
            known_pages: None,
            last_id: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The loaded page, if the catalog is showing one.
    #[must_use]
    pub const fn page(&self) -> Option<&PageResult> {
        match &self.phase {
            Phase::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// Page number being shown, requested or retried.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        match &self.phase {
            Phase::Idle => 1,
            Phase::Loading { ticket } => ticket.request.page,
            Phase::Loaded(page) => page.current_page,
            Phase::Errored { page, .. } => *page,
        }
    }

    /// Page count of the last successful load under the current filters.
    #[must_use]
    pub const fn known_pages(&self) -> Option<u32> {
        self.known_pages
    }

    /// Token of the in-flight request.
    #[must_use]
    pub const fn pending(&self) -> Option<RequestId> {
        match &self.phase {
            Phase::Loading { ticket } => Some(ticket.id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Issues the first request. Only valid once, from `Idle`.
    pub fn start(&mut self) -> Option<FetchTicket> {
        if self.phase != Phase::Idle {
            return None;
        }
        Some(self.issue(1))
    }

    /// Replaces the filters and restarts from page 1.
    ///
    /// Returns `None` when the new filters would send the same query as the
    /// current ones. The new value is stored either way so the filter bar shows
    /// exactly what was typed.
    pub fn set_filters(&mut self, filters: FilterSet) -> Option<FetchTicket> {
        let unchanged = self.filters.same_query(&filters);
        self.filters = filters;

        if unchanged && self.phase != Phase::Idle {
            return None;
        }

        self.known_pages = None;
        Some(self.issue(1))
    }

    /// Moves to another page of the current result set.
    ///
    /// From `Loaded`, the target must be a different page within
    /// `1..=total_pages`. From `Errored`, the target is checked against the
    /// last known page count and page 1 is always allowed, so a failed request
    /// can be retried in place. `Idle` and `Loading` ignore navigation.
    pub fn navigate(&mut self, nav: PageNav) -> Option<FetchTicket> {
        let Some(target) = self.target_for(nav) else {
            tracing::debug!(?nav, current_page = self.current_page(), "navigation disabled");
            return None;
        };
        Some(self.issue(target))
    }

    /// Page that `nav` would request, or `None` if the control is disabled.
    #[must_use]
    pub fn target_for(&self, nav: PageNav) -> Option<u32> {
        match &self.phase {
            Phase::Loaded(page) => {
                let target = nav.target(page.current_page, page.total_pages);
                (target != page.current_page && page.contains_page(target)).then_some(target)
            }
            Phase::Errored { page, .. } => {
                let total = self.known_pages.unwrap_or(0);
                let target = nav.target(*page, total);
                (target == 1 || (1..=total).contains(&target)).then_some(target)
            }
            Phase::Idle | Phase::Loading { .. } => None,
        }
    }

    /// Re-requests the current page with the current filters.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        if self.phase == Phase::Idle {
            return self.start();
        }
        let page = self.current_page();
        Some(self.issue(page))
    }

    /// Applies a fetch outcome.
    ///
    /// Returns `false` when the outcome is stale (not the pending request) and
    /// was discarded.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        let Phase::Loading { ticket } = &self.phase else {
            tracing::debug!(request_id = outcome.id.0, "no request pending, dropping outcome");
            return false;
        };

        if ticket.id != outcome.id {
            tracing::debug!(
                request_id = outcome.id.0,
                pending_id = ticket.id.0,
                "stale outcome discarded"
            );
            return false;
        }

        self.phase = match outcome.result {
            Ok(page) => {
                self.known_pages = Some(page.total_pages);
                Phase::Loaded(page)
            }
            Err(error) => Phase::Errored {
                page: ticket.request.page,
                filters: ticket.request.filters.clone(),
                error,
            },
        };
        true
    }

    fn issue(&mut self, page: u32) -> FetchTicket {
        self.last_id += 1;
        let ticket = FetchTicket {
            id: RequestId(self.last_id),
            request: build_request(page, self.filters.clone()),
        };
        self.phase = Phase::Loading { ticket: ticket.clone() };
        ticket
    }
}
