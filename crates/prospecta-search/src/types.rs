//! Wire types for the web-search and company-registry APIs.
//!
//! Every field is defaulted: both APIs omit keys freely (no `items` when a
//! query has no results, no `snippet` on some hits).

use serde::Deserialize;

/// Body of a successful web-search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single result in [`SearchResponse::items`].
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

/// `{"error": {"code": 403, "message": "..."}}` returned on API failures.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// company registry
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct RegistrySearchResponse {
    #[serde(default)]
    pub results: Vec<RegistryCompany>,
}

#[derive(Debug, Deserialize)]
pub struct RegistryCompany {
    #[serde(default)]
    pub siren: Option<String>,
    #[serde(default)]
    pub activite_principale: Option<String>,
    #[serde(default)]
    pub code_naf: Option<String>,
}
