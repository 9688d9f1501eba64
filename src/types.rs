//! Core types: provider identification, the canonical result schema, and
//! the success/failure envelope returned by every adapter call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::SearchError;

/// A loosely-typed JSON object, the element type of projected sections.
pub type JsonObject = serde_json::Map<String, Value>;

/// Maximum number of entries kept in the canonical `images` section.
pub const MAX_IMAGE_RESULTS: usize = 6;

/// Supported search providers that omnisearch can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchProvider {
    /// SerpApi — scraped Google results behind a paid JSON API.
    SerpApi,
    /// Serper — Google search API with the richest section coverage.
    Serper,
    /// DuckDuckGo Instant Answer API — keyless metasearch, abstract-centric.
    DuckDuckGo,
}

impl SearchProvider {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SerpApi => "SerpApi",
            Self::Serper => "Serper",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Whether this provider requires an API credential at construction.
    pub fn requires_api_key(&self) -> bool {
        match self {
            Self::SerpApi | Self::Serper => true,
            Self::DuckDuckGo => false,
        }
    }

    /// Returns all available provider variants.
    pub fn all() -> &'static [SearchProvider] {
        &[Self::SerpApi, Self::Serper, Self::DuckDuckGo]
    }
}

impl fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The canonical, provider-agnostic search result schema.
///
/// Every adapter maps its raw payload into this shape, so consumers never
/// see provider-specific top-level keys. Section entries stay loosely typed
/// ([`JsonObject`] / [`Value`]) because providers disagree on the fields
/// inside each entry; the projector guarantees which keys are present.
///
/// All sequence sections default to empty (never null) when the provider
/// omits the raw section; `graph` and `answer_box` default to absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSources {
    /// Ordered organic web results: `{title, link, snippet, date}`.
    #[serde(default)]
    pub organic: Vec<JsonObject>,
    /// Ordered news entries: `{title, imageUrl}`.
    #[serde(default)]
    pub top_stories: Vec<JsonObject>,
    /// Ordered image entries `{title, imageUrl}`, at most
    /// [`MAX_IMAGE_RESULTS`] of them.
    #[serde(default)]
    pub images: Vec<JsonObject>,
    /// Provider-specific knowledge-panel object, if any.
    #[serde(default)]
    pub graph: Option<Value>,
    /// Provider-specific direct-answer object, if any. DuckDuckGo returns
    /// a plain string here.
    #[serde(default)]
    pub answer_box: Option<Value>,
    /// Provider-specific related-question objects, verbatim.
    #[serde(default)]
    pub people_also_ask: Vec<Value>,
    /// Provider-specific related-query objects, verbatim.
    #[serde(default)]
    pub related_searches: Vec<Value>,
}

/// Success/failure container returned by every `get_sources` call.
///
/// Exactly one of `data`/`error` is populated, enforced by the
/// [`Envelope::ok`] / [`Envelope::err`] constructors. Callers check
/// [`Envelope::success`] rather than handling panics or typed errors;
/// only configuration problems surface as `Err` at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Envelope specialization carried by every adapter response.
pub type SourcesEnvelope = Envelope<SearchSources>;

impl<T> Envelope<T> {
    /// Build a successful envelope holding `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Build a failed envelope holding an error message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// True when the call succeeded and [`Envelope::data`] is populated.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    /// True when the call failed and [`Envelope::error`] is populated.
    pub fn failed(&self) -> bool {
        !self.success()
    }

    /// The normalized payload, if the call succeeded.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// The failure message, if the call failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Convert into a plain [`Result`], consuming the envelope.
    pub fn into_result(self) -> std::result::Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(error)) => Err(error),
            (None, None) => Err("empty envelope".to_string()),
        }
    }
}

impl<T> From<Result<T, SearchError>> for Envelope<T> {
    fn from(result: Result<T, SearchError>) -> Self {
        match result {
            Ok(data) => Envelope::ok(data),
            Err(err) => Envelope::err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_display_and_name() {
        assert_eq!(SearchProvider::SerpApi.to_string(), "SerpApi");
        assert_eq!(SearchProvider::Serper.name(), "Serper");
        assert_eq!(SearchProvider::DuckDuckGo.to_string(), "DuckDuckGo");
    }

    #[test]
    fn provider_credential_requirements() {
        assert!(SearchProvider::SerpApi.requires_api_key());
        assert!(SearchProvider::Serper.requires_api_key());
        assert!(!SearchProvider::DuckDuckGo.requires_api_key());
    }

    #[test]
    fn provider_all_lists_every_variant() {
        let all = SearchProvider::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&SearchProvider::SerpApi));
        assert!(all.contains(&SearchProvider::DuckDuckGo));
    }

    #[test]
    fn sources_default_is_empty_not_null() {
        let sources = SearchSources::default();
        assert!(sources.organic.is_empty());
        assert!(sources.top_stories.is_empty());
        assert!(sources.images.is_empty());
        assert!(sources.graph.is_none());
        assert!(sources.answer_box.is_none());
        assert!(sources.people_also_ask.is_empty());
        assert!(sources.related_searches.is_empty());
    }

    #[test]
    fn sources_serializes_camel_case_keys() {
        let sources = SearchSources::default();
        let json = serde_json::to_value(&sources).expect("serialize");
        assert!(json.get("topStories").is_some());
        assert!(json.get("answerBox").is_some());
        assert!(json.get("peopleAlsoAsk").is_some());
        assert!(json.get("relatedSearches").is_some());
        assert_eq!(json["organic"], json!([]));
        assert_eq!(json["graph"], Value::Null);
    }

    #[test]
    fn sources_deserializes_with_missing_sections() {
        let sources: SearchSources = serde_json::from_str("{}").expect("deserialize");
        assert!(sources.organic.is_empty());
        assert!(sources.answer_box.is_none());
    }

    #[test]
    fn envelope_ok_holds_data_only() {
        let envelope = Envelope::ok(42);
        assert!(envelope.success());
        assert!(!envelope.failed());
        assert_eq!(envelope.data(), Some(&42));
        assert!(envelope.error().is_none());
    }

    #[test]
    fn envelope_err_holds_error_only() {
        let envelope: Envelope<SearchSources> = Envelope::err("Query cannot be empty");
        assert!(envelope.failed());
        assert!(envelope.data().is_none());
        assert_eq!(envelope.error(), Some("Query cannot be empty"));
    }

    #[test]
    fn envelope_into_result_round_trips() {
        let ok: Envelope<u8> = Envelope::ok(7);
        assert_eq!(ok.into_result(), Ok(7));
        let err: Envelope<u8> = Envelope::err("boom");
        assert_eq!(err.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn envelope_from_search_error_uses_display() {
        let envelope: Envelope<SearchSources> = Err(SearchError::Request("timeout".into())).into();
        assert_eq!(envelope.error(), Some("API request failed: timeout"));
    }

    #[test]
    fn envelope_serializes_only_populated_side() {
        let ok = Envelope::ok(json!({"organic": []}));
        let json = serde_json::to_value(&ok).expect("serialize");
        assert!(json.get("data").is_some());
        assert!(json.get("error").is_none());

        let err: Envelope<Value> = Envelope::err("bad");
        let json = serde_json::to_value(&err).expect("serialize");
        assert!(json.get("data").is_none());
        assert_eq!(json["error"], "bad");
    }
}
