use thiserror::Error;

/// Errors returned by the news sources.
#[derive(Debug, Error)]
pub enum NewsError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A feed body was not well-formed XML.
    #[error("XML parse error in {context}: {source}")]
    Xml {
        context: String,
        #[source]
        source: quick_xml::Error,
    },

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
