//! Company website content extractor.

use std::time::Duration;

use prospecta_core::{AppConfig, CompanyRecord};
use reqwest::Client;

use crate::error::ScraperError;
use crate::extract::{
    domain_fallback_name, extract_email, extract_phone, name_from_title, title_case, PageText,
};
use crate::fetch::fetch_html;

/// Fetches a company homepage and turns it into a [`CompanyRecord`].
///
/// [`SiteExtractor::extract`] never fails: an unreachable or broken page
/// yields a record named after the domain with no contact details.
#[derive(Clone)]
pub struct SiteExtractor {
    client: Client,
}

impl SiteExtractor {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// # Errors
    ///
    /// Same as [`SiteExtractor::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(config.site_timeout_secs, &config.site_user_agent)
    }

    /// Extracts name, phone, and email from the page at `url`.
    pub async fn extract(&self, url: &str) -> CompanyRecord {
        match self.try_extract(url).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(url, error = %e, "page extraction degraded to domain name");
                fallback_record(url)
            }
        }
    }

    /// Fallible form of [`SiteExtractor::extract`].
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` is not an `http(s)` URL.
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    pub async fn try_extract(&self, url: &str) -> Result<CompanyRecord, ScraperError> {
        let html = fetch_html(&self.client, url).await?;
        Ok(record_from_html(url, &html))
    }
}

/// Builds a record from an already-fetched page.
#[must_use]
pub fn record_from_html(url: &str, html: &str) -> CompanyRecord {
    let PageText { title, text } = PageText::parse(html);
    let name = title
        .as_deref()
        .and_then(name_from_title)
        .map_or_else(|| domain_fallback_name(url), |n| title_case(&n));

    CompanyRecord {
        name,
        website: url.to_owned(),
        phone: extract_phone(&text),
        email: extract_email(&text),
    }
}

fn fallback_record(url: &str) -> CompanyRecord {
    CompanyRecord {
        name: domain_fallback_name(url),
        website: url.to_owned(),
        phone: None,
        email: None,
    }
}
