//! Error types for the omnisearch crate.
//!
//! Call-time failures are converted to [`crate::types::Envelope`] error
//! strings at the adapter boundary, so the display messages here are part
//! of the public contract and must stay stable. Credentials never appear
//! in error messages.

/// Errors that can occur while configuring or querying a search provider.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query was empty or whitespace-only. Checked before any
    /// network activity.
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// Invalid provider configuration (missing credential, zero timeout).
    /// Raised at adapter construction, never deferred to call time.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP round trip failed: connection error, timeout, or a
    /// non-2xx status from the provider.
    #[error("API request failed: {0}")]
    Request(String),

    /// The provider answered 2xx but the decoded payload carried the
    /// provider's own error field.
    #[error("{provider} error: {message}")]
    ProviderReported {
        /// Human-readable provider name, e.g. `"SerpApi"`.
        provider: &'static str,
        /// The provider's error message, verbatim.
        message: String,
    },

    /// Any other failure while decoding or normalizing the response.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience type alias for omnisearch results.
pub type Result<T> = std::result::Result<T, SearchError>;
