//! Error types for the character catalog.
//!
//! [`CatalogError`] is the crate-wide error and [`Result`] its alias. Fetch
//! failures get their own [`FetchError`] because they travel inside
//! application events and must be `Clone + Eq`, which `std::io::Error` is not.

use thiserror::Error;

/// Why a single page fetch failed.
///
/// An empty result set is never a `FetchError`; the API's "nothing here"
/// sentinel decodes to an empty page instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a usable response.
    ///
    /// Covers unreachable hosts, timeouts reported by the host and any
    /// non-2xx status. `status` is `None` when no HTTP status was received.
    #[error("transport error: {message}")]
    Transport {
        /// HTTP status code, if the server answered.
        status: Option<u16>,
        /// Description of the failure.
        message: String,
    },

    /// The payload did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Builds a transport error for a response with an unexpected status code.
    #[must_use]
    pub fn status(status: u16, body: &[u8]) -> Self {
        let snippet: String = String::from_utf8_lossy(body).chars().take(120).collect();
        let detail = if snippet.trim().is_empty() {
            "empty response body".to_string()
        } else {
            snippet
        };
        Self::Transport {
            status: Some(status),
            message: format!("HTTP {status}: {detail}"),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// The main error type for character catalog operations.
///
/// # Examples
///
/// ```
/// use character_catalog::domain::CatalogError;
///
/// fn validate_base_url(url: &str) -> Result<(), CatalogError> {
///     if url.is_empty() {
///         return Err(CatalogError::Config("base_url must not be empty".to_string()));
///     }
///     Ok(())
/// }
/// assert!(validate_base_url("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A page fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured endpoint could not be parsed as a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
