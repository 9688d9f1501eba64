//! # omnisearch
//!
//! Unified web-search provider adapters for Rust.
//!
//! This crate normalizes results from heterogeneous search APIs — SerpApi,
//! Serper, and the DuckDuckGo Instant Answer API — into one canonical
//! schema, so consumers never need to know which provider answered a query.
//!
//! ## Design
//!
//! - One [`SearchProviderTrait`] implemented by every adapter
//! - One canonical [`SearchSources`] schema shared by all providers
//! - One [`projector`] that extracts/renames fields from loosely-typed
//!   payloads; per-provider vocabulary stays in per-adapter mapping tables
//! - Every call returns a [`SourcesEnvelope`] — failures come back as
//!   uniform error strings, never as panics or provider-specific faults
//! - Single-shot calls: no retries, no caching, no cross-provider fan-out;
//!   callers that want fan-out invoke several adapters concurrently
//!
//! ## Security
//!
//! - Credentials are injected through configs (environment lookup only in
//!   the explicit `from_env` constructors) and never appear in logs or
//!   error messages
//! - Queries are logged only at trace level
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> omnisearch::Result<()> {
//! use omnisearch::{SearchProviderTrait, SerperConfig, SerperProvider};
//!
//! let provider = SerperProvider::new(SerperConfig::new("my-api-key"))?;
//! let envelope = provider.get_sources("rust programming", Some(5), None).await;
//! match envelope.data() {
//!     Some(sources) => {
//!         for item in &sources.organic {
//!             println!("{:?}: {:?}", item.get("title"), item.get("link"));
//!         }
//!     }
//!     None => eprintln!("search failed: {}", envelope.error().unwrap_or("unknown")),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod projector;
pub mod provider;
pub mod providers;
pub mod types;

pub use config::{DuckDuckGoConfig, SerpApiConfig, SerperConfig};
pub use error::{Result, SearchError};
pub use provider::SearchProviderTrait;
pub use providers::{DuckDuckGoProvider, SerpApiProvider, SerperProvider};
pub use types::{Envelope, SearchProvider, SearchSources, SourcesEnvelope};
