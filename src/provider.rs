//! Trait definition for pluggable search provider backends.
//!
//! Each provider (SerpApi, Serper, DuckDuckGo) implements
//! [`SearchProviderTrait`] so callers can fetch normalized sources without
//! knowing which external API answered.

use crate::types::{SearchProvider, SourcesEnvelope};

/// A pluggable search provider backend.
///
/// Implementors call one external search API and normalize its raw payload
/// into [`crate::types::SearchSources`]. Each provider handles its own:
///
/// - request construction (endpoint, credential placement, parameters)
/// - provider-specific raw field vocabulary and section mappings
/// - error conversion into the uniform envelope
///
/// Every call is a single-shot transaction: validate, one HTTP round trip,
/// normalize. Failures never escape as panics or typed errors; they come
/// back inside the envelope. All implementations must be `Send + Sync` so
/// one adapter can serve concurrent calls.
pub trait SearchProviderTrait: Send + Sync {
    /// Fetch and normalize search results for `query`.
    ///
    /// # Arguments
    ///
    /// * `query` — the search query; blank queries fail without any
    ///   network activity.
    /// * `num_results` — requested result count; `None` or `Some(0)`
    ///   falls back to the provider's configured default.
    /// * `location` — region override; `None` or empty falls back to the
    ///   provider's configured default. Lowercased before use.
    fn get_sources(
        &self,
        query: &str,
        num_results: Option<usize>,
        location: Option<&str>,
    ) -> impl std::future::Future<Output = SourcesEnvelope> + Send;

    /// Returns which [`SearchProvider`] variant this implementation
    /// represents.
    fn provider_type(&self) -> SearchProvider;
}

/// Resolve the effective search region: a non-empty override wins over
/// the configured default; the result is always lowercased.
pub(crate) fn resolve_location(location: Option<&str>, default: &str) -> String {
    match location {
        Some(loc) if !loc.trim().is_empty() => loc.to_lowercase(),
        _ => default.to_lowercase(),
    }
}

/// Resolve the effective result count: a positive request wins over the
/// configured default.
pub(crate) fn resolve_num_results(num_results: Option<usize>, default: usize) -> usize {
    match num_results {
        Some(n) if n > 0 => n,
        _ => default,
    }
}
