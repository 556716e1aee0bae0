//! Quote Sources
//!
//! Trait definition for quote providers plus the HTTP implementation for
//! the public kanye.rest endpoint. The abstraction keeps the board
//! testable: integration tests swap in scripted sources instead of a
//! network.
//!
//! # Endpoint modes
//!
//! kanye.rest exposes two read-only modes with no auth, no query
//! parameters and no pagination:
//! - `GET /quotes` - the full list as a JSON array of strings
//! - `GET /` - one random quote as `{ "quote": "..." }`
//!
//! The board consumes the bulk mode; the single mode is available for
//! quick probes.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::BoardConfig;

/// Errors a quote source can produce.
///
/// Both variants collapse into the single user-visible outcome "fetch
/// failed" - the distinction only matters for the log line.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request failed (connect, timeout, non-2xx status).
    #[error("quote endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("quote payload was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch task ended without delivering an outcome.
    #[error("fetch task ended unexpectedly")]
    TaskFailed,
}

/// A provider of quote text.
///
/// Implement this to feed the board from somewhere other than the public
/// endpoint (tests do exactly that).
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Provider name for log lines.
    fn name(&self) -> &str;

    /// Whether the provider is reachable.
    async fn health_check(&self) -> bool;

    /// Fetch the complete ordered quote list.
    async fn fetch_quotes(&self) -> Result<Vec<String>, SourceError>;

    /// Fetch a single quote (the provider picks which).
    async fn fetch_one(&self) -> Result<String, SourceError>;
}

/// Wire shape of the single-quote mode.
#[derive(Debug, Deserialize)]
struct SingleQuote {
    quote: String,
}

/// HTTP quote source backed by kanye.rest (or a compatible endpoint).
#[derive(Clone)]
pub struct KanyeRestSource {
    /// Base endpoint URL, without trailing slash.
    base_url: String,
    /// Shared HTTP client.
    http_client: reqwest::Client,
}

impl KanyeRestSource {
    /// Create a source for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create a source from board configuration.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }

    /// Bulk endpoint URL.
    fn quotes_url(&self) -> String {
        format!("{}/quotes", self.base_url)
    }

    /// Single-quote endpoint URL.
    fn single_url(&self) -> String {
        self.base_url.clone()
    }
}

#[async_trait]
impl QuoteSource for KanyeRestSource {
    fn name(&self) -> &'static str {
        "kanye.rest"
    }

    async fn health_check(&self) -> bool {
        self.http_client
            .get(self.single_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .is_ok()
    }

    async fn fetch_quotes(&self) -> Result<Vec<String>, SourceError> {
        let body = self
            .http_client
            .get(self.quotes_url())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let quotes: Vec<String> = serde_json::from_str(&body)?;
        tracing::debug!(count = quotes.len(), "fetched quote list");
        Ok(quotes)
    }

    async fn fetch_one(&self) -> Result<String, SourceError> {
        let body = self
            .http_client
            .get(self.single_url())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let single: SingleQuote = serde_json::from_str(&body)?;
        Ok(single.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_derive_from_base() {
        let source = KanyeRestSource::new("https://api.kanye.rest/", Duration::from_secs(5));
        assert_eq!(source.quotes_url(), "https://api.kanye.rest/quotes");
        assert_eq!(source.single_url(), "https://api.kanye.rest");
    }

    #[test]
    fn bulk_payload_decodes_as_string_array() {
        let body = r#"["first quote", "second quote"]"#;
        let quotes: Vec<String> = serde_json::from_str(body).expect("decode");
        assert_eq!(quotes, vec!["first quote", "second quote"]);
    }

    #[test]
    fn single_payload_decodes_quote_field() {
        let body = r#"{"quote": "I am a creative"}"#;
        let single: SingleQuote = serde_json::from_str(body).expect("decode");
        assert_eq!(single.quote, "I am a creative");
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let body = r#"{"unexpected": true}"#;
        let result: Result<Vec<String>, serde_json::Error> = serde_json::from_str(body);
        assert!(SourceError::from(result.unwrap_err()).to_string().contains("JSON"));
    }
}
