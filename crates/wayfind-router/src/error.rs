use thiserror::Error;

/// Errors returned by the routing client.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid router URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("route point {index} is not a valid coordinate: [{lat}, {lon}]")]
    InvalidPoint { index: usize, lat: f64, lon: f64 },

    /// The service answered with fewer than two points.
    #[error("routing service returned {points} point(s); expected at least 2")]
    Degenerate { points: usize },
}
