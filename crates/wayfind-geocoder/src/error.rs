use thiserror::Error;

/// Errors returned by the geocoder client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The query was empty or whitespace; no request was sent.
    #[error("geocode query is empty")]
    EmptyQuery,

    #[error("invalid geocoder URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network or TLS failure, or a non-2xx status from the service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON array of places.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
