use thiserror::Error;

/// Errors returned by the ENTSO-E Transparency Platform client.
#[derive(Debug, Error)]
pub enum EntsoeError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be parsed as an ENTSO-E market document.
    #[error("XML parse error for {context}: {source}")]
    Xml {
        context: String,
        #[source]
        source: quick_xml::Error,
    },

    /// Client misconfiguration, e.g. an unparseable base URL.
    #[error("client configuration error: {0}")]
    Config(String),
}
