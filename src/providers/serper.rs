//! Serper adapter — Google results over `google.serper.dev`.
//!
//! Serper answers a single JSON POST and already names its sections close
//! to the canonical schema, so every mapping here is identity. The API
//! accepts at most 10 results per call; the resolved count is clamped.

use serde_json::Value;

use crate::config::SerperConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::projector::{project_fields, raw_array, raw_value};
use crate::provider::{resolve_location, resolve_num_results, SearchProviderTrait};
use crate::types::{Envelope, SearchProvider, SearchSources, SourcesEnvelope, MAX_IMAGE_RESULTS};

use super::{IDENTITY_MAPPING, MEDIA_FIELDS, ORGANIC_FIELDS};

/// Smallest result count the Serper API accepts.
const MIN_NUM_RESULTS: usize = 1;

/// Largest result count the Serper API accepts.
const MAX_NUM_RESULTS: usize = 10;

/// Serper search adapter.
///
/// Holds an immutable [`SerperConfig`] and one HTTP client; safe to share
/// across concurrent calls.
pub struct SerperProvider {
    config: SerperConfig,
    client: reqwest::Client,
}

impl SerperProvider {
    /// Create an adapter from an explicit config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the config is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: SerperConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(config.timeout_seconds)?;
        Ok(Self { config, client })
    }

    /// Create an adapter with the credential from `SERPER_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the variable is unset.
    pub fn from_env() -> Result<Self> {
        Self::new(SerperConfig::from_env()?)
    }

    async fn fetch(
        &self,
        query: &str,
        num_results: Option<usize>,
        location: Option<&str>,
    ) -> Result<SearchSources> {
        let gl = resolve_location(location, &self.config.default_location);
        let num = resolve_num_results(num_results, self.config.default_num_results)
            .clamp(MIN_NUM_RESULTS, MAX_NUM_RESULTS);
        tracing::trace!(query, num, gl = %gl, "Serper search");

        let body = serde_json::json!({
            "q": query,
            "num": num,
            "gl": gl,
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .header("X-API-KEY", &self.config.api_key)
            .json(&body)
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
            organic = sources.organic.len(),
            stories = sources.top_stories.len(),
            images = sources.images.len(),
            "Serper response normalized"
        );
        Ok(sources)
    }
}

impl SearchProviderTrait for SerperProvider {
    async fn get_sources(
        &self,
        query: &str,
        num_results: Option<usize>,
        location: Option<&str>,
    ) -> SourcesEnvelope {
        if query.trim().is_empty() {
            return Envelope::err(SearchError::EmptyQuery.to_string());
        }
        let envelope: SourcesEnvelope = self.fetch(query, num_results, location).await.into();
        if let Some(error) = envelope.error() {
            tracing::warn!(error, "Serper search failed");
        }
        envelope
    }

    fn provider_type(&self) -> SearchProvider {
        SearchProvider::Serper
    }
}

/// Map a raw Serper payload into the canonical schema.
///
/// Extracted as a separate function for testability with mock payloads.
pub(crate) fn normalize_payload(payload: &Value) -> SearchSources {
    let mut images = project_fields(payload.get("images"), MEDIA_FIELDS, IDENTITY_MAPPING);
    images.truncate(MAX_IMAGE_RESULTS);

    SearchSources {
        organic: project_fields(payload.get("organic"), ORGANIC_FIELDS, IDENTITY_MAPPING),
        top_stories: project_fields(payload.get("topStories"), MEDIA_FIELDS, IDENTITY_MAPPING),
        images,
        graph: raw_value(payload.get("knowledgeGraph")),
        answer_box: raw_value(payload.get("answerBox")),
        people_also_ask: raw_array(payload.get("peopleAlsoAsk")),
        related_searches: raw_array(payload.get("relatedSearches")),
    }
}
