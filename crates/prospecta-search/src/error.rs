use thiserror::Error;

/// Errors returned by the search and registry clients.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A credential required by the search API is empty.
    #[error("missing search credential: {0}")]
    MissingCredentials(&'static str),

    /// The configured endpoint is not a usable URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request quota shared by client clones was closed.
    #[error("search quota closed")]
    QuotaClosed,

    /// The API answered with an `error` object.
    #[error("search API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Non-2xx status without an `error` payload.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
