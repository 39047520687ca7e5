//! Single-shot HTML fetch for a company homepage.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Fetch the body of `url` with one GET. Only `http`/`https` URLs are
/// fetched; any non-2xx status is an error. The body is decoded lossily, so a
/// mislabelled charset still yields text.
pub(crate) async fn fetch_html(client: &Client, url: &str) -> Result<String, ScraperError> {
    let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme {}", parsed.scheme()),
        });
    }

    let response = client
        .get(parsed)
        .header(ACCEPT, "text/html,application/xhtml+xml")
        .header(ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
