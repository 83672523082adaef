use thiserror::Error;

/// Errors returned by the places API client.
///
/// Upstream status codes such as `ZERO_RESULTS` or `REQUEST_DENIED` are not
/// errors at this layer; they arrive as [`crate::ApiStatus`] on the typed
/// response and callers decide what they mean.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
