//! Client for the public French company registry search API.
//!
//! Used to attach a SIREN number and NAF activity code to companies the
//! pipeline found. Lookups are best effort: a failed or empty lookup leaves
//! the company unenriched.

use std::time::Duration;

use prospecta_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::RegistrySearchResponse;

const DEFAULT_BASE_URL: &str = "https://recherche-entreprises.api.gouv.fr";

/// Registry identifiers for the best match of a company name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMatch {
    pub siren: String,
    pub naf: String,
}

pub struct RegistryClient {
    client: Client,
    search_url: Url,
}

impl RegistryClient {
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom registry host (for wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`SearchError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, SearchError> {
        let raw = format!("{}/search", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&raw).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("prospecta/0.1 (company-enrichment)")
            .build()?;

        Ok(Self { client, search_url })
    }

    /// # Errors
    ///
    /// Same as [`RegistryClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        Self::with_base_url(config.registry_timeout_secs, &config.registry_base_url)
    }

    /// Looks up `company_name` and returns the first registry match, if any.
    ///
    /// Errors are logged and reported as `None`.
    pub async fn lookup(&self, company_name: &str) -> Option<RegistryMatch> {
        match self.try_lookup(company_name).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(company = company_name, error = %e, "registry lookup failed");
                None
            }
        }
    }

    /// Fallible form of [`RegistryClient::lookup`].
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or a non-2xx status.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn try_lookup(
        &self,
        company_name: &str,
    ) -> Result<Option<RegistryMatch>, SearchError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", company_name);

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: RegistrySearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("registry search(q={company_name})"),
                source: e,
            })?;

        let Some(first) = parsed.results.into_iter().next() else {
            return Ok(None);
        };

        let naf = first
            .activite_principale
            .filter(|s| !s.is_empty())
            .or(first.code_naf)
            .unwrap_or_default();

        Ok(Some(RegistryMatch {
            siren: first.siren.unwrap_or_default(),
            naf,
        }))
    }
}
