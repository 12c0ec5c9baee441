#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Nominatim-compatible `search` endpoint.
    pub geocoder_url: String,
    /// Endpoint answering `origin_lat/lon` + `destination_lat/lon` with a polyline.
    pub router_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
