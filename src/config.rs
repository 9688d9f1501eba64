//! Per-provider configuration with sensible defaults.
//!
//! Each provider variant owns its own config struct: credentials, endpoint,
//! default region, timeout, and default result count differ per provider
//! and are frozen at adapter construction. Environment lookup happens only
//! in the explicit `from_env` constructors, so library callers can always
//! inject configuration directly instead.

use crate::error::SearchError;

/// Environment variable holding the SerpApi credential.
pub const SERPAPI_API_KEY_VAR: &str = "SERPAPI_API_KEY";

/// Environment variable holding the Serper credential.
pub const SERPER_API_KEY_VAR: &str = "SERPER_API_KEY";

fn env_api_key(var: &str) -> Result<String, SearchError> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(SearchError::Config(format!(
            "{var} environment variable not set"
        ))),
    }
}

/// Configuration for the SerpApi adapter.
#[derive(Debug, Clone)]
pub struct SerpApiConfig {
    /// SerpApi API key, sent as a query parameter.
    pub api_key: String,
    /// Search endpoint URL.
    pub api_url: String,
    /// Region used when a call supplies no location override. Lowercased
    /// at request time.
    pub default_location: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Result count used when a call supplies no positive count.
    pub default_num_results: usize,
}

impl SerpApiConfig {
    /// Create a SerpApi config with default endpoint, location, timeout,
    /// and result count.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: "https://serpapi.com/search.json".to_string(),
            default_location: "United Kingdom".to_string(),
            timeout_seconds: 10,
            default_num_results: 20,
        }
    }

    /// Create a config reading the credential from [`SERPAPI_API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the variable is unset or blank.
    pub fn from_env() -> Result<Self, SearchError> {
        Ok(Self::new(env_api_key(SERPAPI_API_KEY_VAR)?))
    }

    /// Override the endpoint URL (useful for testing with mock servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the default search region.
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Override the default result count.
    pub fn with_default_num_results(mut self, num_results: usize) -> Self {
        self.default_num_results = num_results;
        self
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the API key is blank or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Config("SerpApi api_key must be set".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the Serper adapter.
#[derive(Debug, Clone)]
pub struct SerperConfig {
    /// Serper API key, sent in the `X-API-KEY` header.
    pub api_key: String,
    /// Search endpoint URL.
    pub api_url: String,
    /// Region (`gl` parameter) used when a call supplies no location
    /// override. Lowercased at request time.
    pub default_location: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Result count used when a call supplies no positive count. Serper
    /// accepts 1..=10; the adapter clamps the resolved count.
    pub default_num_results: usize,
}

impl SerperConfig {
    /// Create a Serper config with default endpoint, location, timeout,
    /// and result count.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: "https://google.serper.dev/search".to_string(),
            default_location: "us".to_string(),
            timeout_seconds: 10,
            default_num_results: 8,
        }
    }

    /// Create a config reading the credential from [`SERPER_API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the variable is unset or blank.
    pub fn from_env() -> Result<Self, SearchError> {
        Ok(Self::new(env_api_key(SERPER_API_KEY_VAR)?))
    }

    /// Override the endpoint URL (useful for testing with mock servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the default search region.
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Override the default result count.
    pub fn with_default_num_results(mut self, num_results: usize) -> Self {
        self.default_num_results = num_results;
        self
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the API key is blank or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Config("Serper api_key must be set".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the DuckDuckGo Instant Answer adapter.
///
/// DuckDuckGo needs no credential; only the endpoint and timeout are
/// configurable. The API accepts neither a region nor a result-count
/// parameter, so no defaults for those exist here.
#[derive(Debug, Clone)]
pub struct DuckDuckGoConfig {
    /// Instant Answer endpoint URL.
    pub api_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for DuckDuckGoConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.duckduckgo.com/".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl DuckDuckGoConfig {
    /// Override the endpoint URL (useful for testing with mock servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when the timeout is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serpapi_defaults() {
        let config = SerpApiConfig::new("key");
        assert_eq!(config.api_url, "https://serpapi.com/search.json");
        assert_eq!(config.default_location, "United Kingdom");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.default_num_results, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn serper_defaults() {
        let config = SerperConfig::new("key");
        assert_eq!(config.api_url, "https://google.serper.dev/search");
        assert_eq!(config.default_location, "us");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.default_num_results, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duckduckgo_defaults() {
        let config = DuckDuckGoConfig::default();
        assert_eq!(config.api_url, "https://api.duckduckgo.com/");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_api_key_rejected() {
        let err = SerperConfig::new("  ").validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
        let err = SerpApiConfig::new("").validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = SerperConfig::new("key")
            .with_timeout_seconds(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
        let err = DuckDuckGoConfig::default()
            .with_timeout_seconds(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn builder_overrides_apply() {
        let config = SerperConfig::new("key")
            .with_api_url("http://127.0.0.1:9/search")
            .with_default_location("gb")
            .with_timeout_seconds(3)
            .with_default_num_results(5);
        assert_eq!(config.api_url, "http://127.0.0.1:9/search");
        assert_eq!(config.default_location, "gb");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.default_num_results, 5);
    }

    // `from_env` reads process-wide state; each variable is touched by
    // exactly one test so parallel test threads never race on it.
    #[test]
    fn serper_from_env_set_and_unset() {
        std::env::set_var(SERPER_API_KEY_VAR, "env-key");
        let config = SerperConfig::from_env().expect("credential set");
        assert_eq!(config.api_key, "env-key");

        std::env::remove_var(SERPER_API_KEY_VAR);
        let err = SerperConfig::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config error: SERPER_API_KEY environment variable not set"
        );
    }

    #[test]
    fn serpapi_from_env_set_and_unset() {
        std::env::set_var(SERPAPI_API_KEY_VAR, "env-key");
        let config = SerpApiConfig::from_env().expect("credential set");
        assert_eq!(config.api_key, "env-key");

        std::env::remove_var(SERPAPI_API_KEY_VAR);
        let err = SerpApiConfig::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config error: SERPAPI_API_KEY environment variable not set"
        );
    }
}
