use thiserror::Error;

/// Errors returned by the market data clients.
#[derive(Debug, Error)]
pub enum MarketsError {
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

    /// Client misconfiguration, e.g. an unparseable base URL.
    #[error("client configuration error: {0}")]
    Config(String),
}
