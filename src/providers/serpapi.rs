//! SerpApi adapter — scraped Google results over `serpapi.com`.
//!
//! SerpApi reports failures inside a 2xx payload under an `error` key, so
//! the adapter checks for it before any projection. Raw section names use
//! snake_case and sometimes come in two spellings (`top_stories` vs
//! `news_results`, `images_results` vs `inline_images`); the primary name
//! wins and the alternate is read only when the primary key is entirely
//! absent from the payload.

use serde_json::Value;

use crate::config::SerpApiConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::projector::{project_fields, raw_array, raw_value};
use crate::provider::{resolve_location, resolve_num_results, SearchProviderTrait};
use crate::types::{Envelope, SearchProvider, SearchSources, SourcesEnvelope, MAX_IMAGE_RESULTS};

use super::{IDENTITY_MAPPING, MEDIA_FIELDS, ORGANIC_FIELDS};

/// SerpApi names image URLs `thumbnail` in both news and image sections.
const MEDIA_MAPPING: &[(&str, &str)] = &[("imageUrl", "thumbnail")];

/// SerpApi search adapter.
///
/// Holds an immutable [`SerpApiConfig`] and one HTTP client; safe to share
/// across concurrent calls.
pub struct SerpApiProvider {
    config: SerpApiConfig,
    client: reqwest::Client,
}

impl SerpApiProvider {
    /// Create an adapter from an explicit config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the config is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: SerpApiConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(config.timeout_seconds)?;
        Ok(Self { config, client })
    }

    /// Create an adapter with the credential from `SERPAPI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the variable is unset.
    pub fn from_env() -> Result<Self> {
        Self::new(SerpApiConfig::from_env()?)
    }

    async fn fetch(
        &self,
        query: &str,
        num_results: Option<usize>,
        location: Option<&str>,
    ) -> Result<SearchSources> {
        let location = resolve_location(location, &self.config.default_location);
        let num = resolve_num_results(num_results, self.config.default_num_results).to_string();
        tracing::trace!(query, num = %num, location = %location, "SerpApi search");

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("location", location.as_str()),
                ("api_key", self.config.api_key.as_str()),
                ("num", num.as_str()),
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

        // SerpApi reports quota and key problems inside a 2xx payload.
        if let Some(error) = payload.get("error") {
            let message = match error.as_str() {
                Some(text) => text.to_string(),
                None => error.to_string(),
            };
            return Err(SearchError::ProviderReported {
                provider: "SerpApi",
                message,
            });
        }

        let sources = normalize_payload(&payload);
        tracing::debug!(
            organic = sources.organic.len(),
            stories = sources.top_stories.len(),
            images = sources.images.len(),
            "SerpApi response normalized"
        );
        Ok(sources)
    }
}

impl SearchProviderTrait for SerpApiProvider {
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
            tracing::warn!(error, "SerpApi search failed");
        }
        envelope
    }

    fn provider_type(&self) -> SearchProvider {
        SearchProvider::SerpApi
    }
}

/// Map a raw SerpApi payload into the canonical schema.
///
/// Extracted as a separate function for testability with mock payloads.
pub(crate) fn normalize_payload(payload: &Value) -> SearchSources {
    let stories = payload
        .get("top_stories")
        .or_else(|| payload.get("news_results"));
    let images_raw = payload
        .get("images_results")
        .or_else(|| payload.get("inline_images"));

    let mut images = project_fields(images_raw, MEDIA_FIELDS, MEDIA_MAPPING);
    images.truncate(MAX_IMAGE_RESULTS);

    SearchSources {
        organic: project_fields(payload.get("organic_results"), ORGANIC_FIELDS, IDENTITY_MAPPING),
        top_stories: project_fields(stories, MEDIA_FIELDS, MEDIA_MAPPING),
        images,
        graph: raw_value(payload.get("knowledge_graph")),
        answer_box: raw_value(payload.get("answer_box")),
        people_also_ask: raw_array(payload.get("people_also_ask")),
        related_searches: raw_array(payload.get("related_searches")),
    }
}
