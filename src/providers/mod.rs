//! Search provider implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::SearchProviderTrait`] that calls one external search
//! API and owns that provider's raw field vocabulary.

pub mod duckduckgo;
pub mod serpapi;
pub mod serper;

pub use duckduckgo::DuckDuckGoProvider;
pub use serpapi::SerpApiProvider;
pub use serper::SerperProvider;

/// Canonical target fields for organic web results.
pub(crate) const ORGANIC_FIELDS: &[&str] = &["title", "link", "snippet", "date"];

/// Canonical target fields for news and image entries.
pub(crate) const MEDIA_FIELDS: &[&str] = &["title", "imageUrl"];

/// Empty mapping table: every target reads the source key of the same name.
pub(crate) const IDENTITY_MAPPING: &[(&str, &str)] = &[];
