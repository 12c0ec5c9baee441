//! Shared data model and configuration for the wayfind crates.

pub mod app_config;
pub mod config;
pub mod geo;
pub mod route;
pub mod suggestion;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{BoundingBox, Coordinate, DEFAULT_DESTINATION, DEFAULT_ORIGIN, SERVICE_AREA};
pub use route::Route;
pub use suggestion::Suggestion;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A path needs a start and an end; one vertex is not a route.
    #[error("route has {points} point(s); a route needs at least 2")]
    DegenerateRoute { points: usize },

    #[error("coordinate ({lat}, {lon}) is not a finite latitude/longitude")]
    InvalidCoordinate { lat: f64, lon: f64 },
}
