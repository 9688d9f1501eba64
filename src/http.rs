//! Shared HTTP client construction for provider API calls.
//!
//! Each adapter builds one [`reqwest::Client`] at construction with its
//! configured timeout; the client is reused for every call on that adapter
//! and is safe for concurrent use.

use std::time::Duration;

use crate::error::SearchError;

/// Crate-identifying User-Agent sent with every provider request.
const USER_AGENT: &str = concat!("omnisearch/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] with the given request timeout.
///
/// The timeout bounds the whole round trip, so a hung provider surfaces
/// as a transport failure instead of blocking the caller indefinitely.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed;
/// this is a construction-time fault, not a call-time one.
pub fn build_client(timeout_seconds: u64) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}
