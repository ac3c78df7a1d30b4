use thiserror::Error;

/// Errors returned by the statistics/trade API clients.
#[derive(Debug, Error)]
pub enum StatsError {
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

    /// The body was valid JSON but not the documented envelope, e.g. a
    /// World Bank response that is not a two-element array.
    #[error("unexpected response shape for {context}")]
    UnexpectedShape { context: String },

    /// Client misconfiguration, e.g. an unparseable base URL.
    #[error("client configuration error: {0}")]
    Config(String),
}
