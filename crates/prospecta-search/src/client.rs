//! HTTP client for the web-search API.
//!
//! Every query is pinned to French results (`gl=fr`, `lr=lang_fr`). Failures
//! never abort a prospecting run: [`SearchClient::search`] logs them and
//! yields no hits, and the caller's variant loop moves on to the next query.

use std::sync::Arc;
use std::time::Duration;

use prospecta_core::{AppConfig, SearchHit};
use reqwest::{Client, Url};
use tokio::sync::Semaphore;

use crate::error::SearchError;
use crate::types::{ApiErrorEnvelope, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Upper bound the API accepts for `num`.
pub const MAX_PAGE_SIZE: u32 = 10;

/// Client for the web-search API.
///
/// Clones share one quota semaphore, so concurrent prospecting runs for
/// different keywords cannot exceed the configured number of in-flight
/// search requests.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
    base_url: Url,
    quota: Arc<Semaphore>,
}

impl SearchClient {
    /// Creates a client pointed at the production search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingCredentials`] if `api_key` or
    /// `engine_id` is blank, or [`SearchError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        api_key: &str,
        engine_id: &str,
        timeout_secs: u64,
        max_concurrent: usize,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(
            api_key,
            engine_id,
            timeout_secs,
            max_concurrent,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingCredentials`] for blank credentials,
    /// [`SearchError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`SearchError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        engine_id: &str,
        timeout_secs: u64,
        max_concurrent: usize,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        if api_key.trim().is_empty() {
            return Err(SearchError::MissingCredentials("api key"));
        }
        if engine_id.trim().is_empty() {
            return Err(SearchError::MissingCredentials("search engine id"));
        }

        let base_url = Url::parse(base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("prospecta/0.1 (company-search)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.trim().to_owned(),
            engine_id: engine_id.trim().to_owned(),
            base_url,
            quota: Arc::new(Semaphore::new(max_concurrent.max(1))),
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        Self::with_base_url(
            &config.search_api_key,
            &config.search_engine_id,
            config.search_timeout_secs,
            config.search_max_concurrent,
            &config.search_base_url,
        )
    }

    /// Runs one search query and returns its hits in API order.
    ///
    /// Transport failures, non-2xx responses, and API error payloads all
    /// degrade to an empty list; the condition is logged, never raised.
    pub async fn search(&self, query: &str, page_size: u32) -> Vec<SearchHit> {
        match self.try_search(query, page_size).await {
            Ok(hits) => {
                tracing::debug!(query, count = hits.len(), "search returned hits");
                hits
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "search request failed; continuing with no hits");
                Vec::new()
            }
        }
    }

    /// Fallible form of [`SearchClient::search`].
    ///
    /// `page_size` is clamped to `1..=10`. Hits without a `link` are dropped.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure (the request URL, which
    ///   carries the API key, is stripped from the error).
    /// - [`SearchError::QuotaClosed`] if the shared request quota was closed.
    /// - [`SearchError::ApiError`] if the body carries an `error` object.
    /// - [`SearchError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn try_search(
        &self,
        query: &str,
        page_size: u32,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.build_url(query, page_size);

        // The permit covers the whole request so clones sharing the quota
        // serialize their outbound calls.
        let _permit = self
            .quota
            .acquire()
            .await
            .map_err(|_| SearchError::QuotaClosed)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Http(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(e.without_url()))?;

        Self::check_api_error(status.as_u16(), &body)?;

        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: self.endpoint(),
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        Ok(parsed
            .items
            .into_iter()
            .filter(|item| !item.link.trim().is_empty())
            .map(|item| SearchHit {
                url: item.link,
                title: item.title,
                snippet: item.snippet,
            })
            .collect())
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str, page_size: u32) -> Url {
        let num = page_size.clamp(1, MAX_PAGE_SIZE).to_string();
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("cx", &self.engine_id);
            pairs.append_pair("num", &num);
            pairs.append_pair("gl", "fr");
            pairs.append_pair("lr", "lang_fr");
        }
        url
    }

    /// Endpoint without query string, safe to log.
    fn endpoint(&self) -> String {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.to_string()
    }

    /// Surfaces an `{"error": {...}}` payload, whatever the HTTP status.
    fn check_api_error(status: u16, body: &str) -> Result<(), SearchError> {
        let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) else {
            return Ok(());
        };
        Err(SearchError::ApiError {
            status: envelope.error.code.unwrap_or(status),
            message: envelope
                .error
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
