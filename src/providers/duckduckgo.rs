//! DuckDuckGo Instant Answer adapter — keyless metasearch.
//!
//! The Instant Answer API is abstract-centric rather than a full result
//! index: it has no region or result-count parameters, and its
//! `RelatedTopics` array feeds both the organic and relatedSearches
//! sections. Organic entries keep DuckDuckGo's own field vocabulary
//! (`Text`, `FirstURL`, `Icon`) instead of the canonical organic field
//! names; consumers that need uniform organic fields should prefer the
//! keyed providers.

use serde_json::Value;

use crate::config::DuckDuckGoConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::projector::{project_fields, raw_array, raw_value};
use crate::provider::SearchProviderTrait;
use crate::types::{Envelope, SearchProvider, SearchSources, SourcesEnvelope};

use super::IDENTITY_MAPPING;

/// Fields projected out of each `RelatedTopics` entry.
const TOPIC_FIELDS: &[&str] = &["Text", "FirstURL", "Icon"];

/// DuckDuckGo Instant Answer adapter.
///
/// Holds an immutable [`DuckDuckGoConfig`] and one HTTP client; safe to
/// share across concurrent calls. No credential required.
pub struct DuckDuckGoProvider {
    config: DuckDuckGoConfig,
    client: reqwest::Client,
}

impl DuckDuckGoProvider {
    /// Create an adapter from an explicit config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the config is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: DuckDuckGoConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(config.timeout_seconds)?;
        Ok(Self { config, client })
    }

    async fn fetch(&self, query: &str) -> Result<SearchSources> {
        tracing::trace!(query, "DuckDuckGo search");

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_redirect", "1"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| SearchError::Unexpected(e.to_string()))?;

        let sources = normalize_payload(&payload);
        tracing::debug!(
            topics = sources.organic.len(),
            has_abstract = sources.answer_box.is_some(),
            "DuckDuckGo response normalized"
        );
        Ok(sources)
    }
}

impl SearchProviderTrait for DuckDuckGoProvider {
    async fn get_sources(
        &self,
        query: &str,
        _num_results: Option<usize>,
        _location: Option<&str>,
    ) -> SourcesEnvelope {
        if query.trim().is_empty() {
            return Envelope::err(SearchError::EmptyQuery.to_string());
        }
        let envelope: SourcesEnvelope = self.fetch(query).await.into();
        if let Some(error) = envelope.error() {
            tracing::warn!(error, "DuckDuckGo search failed");
        }
        envelope
    }

    fn provider_type(&self) -> SearchProvider {
        SearchProvider::DuckDuckGo
    }
}

/// Map a raw Instant Answer payload into the canonical schema.
///
/// Extracted as a separate function for testability with mock payloads.
pub(crate) fn normalize_payload(payload: &Value) -> SearchSources {
    SearchSources {
        organic: project_fields(payload.get("RelatedTopics"), TOPIC_FIELDS, IDENTITY_MAPPING),
        answer_box: raw_value(payload.get("AbstractText")),
        related_searches: raw_array(payload.get("RelatedTopics")),
        ..Default::default()
    }
}
