//! Request building: filters plus a page number to one canonical URL.
//!
//! Parameters are always emitted in the same order (`page`, `name`,
//! `status`, `species`, `type`, `gender`), so two requests for the same page
//! and filters produce byte-identical URLs.

use crate::domain::{FilterSet, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Default character endpoint of the public API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// Parsed base endpoint that page requests are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parses a base URL.
    ///
    /// Any query string on the base is discarded when a request URL is built.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CatalogError::InvalidUrl`] if `base` is not an absolute URL.
    pub fn parse(base: &str) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base.trim())?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("constant URL parses")),
        }
    }
}

/// Descriptor for one page request.
///
/// Derived deterministically from a page number and a [`FilterSet`]; it has
/// no identity of its own. Use [`build_request`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub filters: FilterSet,
}

impl PageRequest {
    /// Query parameters in canonical order, empty fields omitted.
    ///
    /// `status` and `gender` are lowercased; everything else is passed
    /// through as typed.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let filters = &self.filters;
        let mut pairs = vec![("page", self.page.to_string())];

        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                pairs.push((key, value));
            }
        };

        push("name", Some(filters.name.clone()));
        push("status", filters.status.map(|s| s.as_query_value().to_string()));
        push("species", filters.species.clone());
        push("type", filters.kind.clone());
        push("gender", filters.gender.as_deref().map(str::to_lowercase));

        pairs
    }

    /// Full request URL against `endpoint`, percent-encoded.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> Url {
        let mut url = endpoint.base.clone();
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (key, value) in self.query_pairs() {
                query.append_pair(key, &value);
            }
        }
        url
    }
}

/// Builds the request descriptor for `page` under `filters`.
///
/// `page` must be at least 1; callers only navigate within known bounds.
///
/// # Examples
///
/// ```
/// use character_catalog::api::{build_request, Endpoint};
/// use character_catalog::domain::FilterSet;
///
/// let request = build_request(1, FilterSet::default().with_name("rick"));
/// assert_eq!(
///     request.url(&Endpoint::default()).as_str(),
///     "https://rickandmortyapi.com/api/character?page=1&name=rick"
/// );
/// ```
#[must_use]
pub fn build_request(page: u32, filters: FilterSet) -> PageRequest {
    debug_assert!(page >= 1, "page numbers start at 1");
    PageRequest { page, filters }
}
