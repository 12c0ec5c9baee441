//! HTTP client for the remote `get-route` endpoint.
//!
//! The service takes the two endpoints as query parameters and answers with
//! the polyline as a JSON array of `[lat, lon]` pairs in traversal order.

use std::time::Duration;

use reqwest::{Client, Url};
use wayfind_core::config::{DEFAULT_ROUTER_URL, DEFAULT_USER_AGENT};
use wayfind_core::{AppConfig, Coordinate, Route};

use crate::error::RouteError;

#[derive(Debug, Clone)]
pub struct RouteClient {
    client: Client,
    endpoint: Url,
}

impl RouteClient {
    /// Creates a client for the default routing deployment.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, RouteError> {
        Self::with_base_url(DEFAULT_ROUTER_URL, timeout_secs, DEFAULT_USER_AGENT)
    }

    /// # Errors
    ///
    /// See [`RouteClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RouteError> {
        Self::with_base_url(
            &config.router_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an arbitrary endpoint URL (full path included).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`RouteError::InvalidBaseUrl`] if `endpoint` does not parse.
    pub fn with_base_url(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, RouteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| RouteError::InvalidBaseUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// Requests the path from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::Http`] on network failure or non-2xx HTTP status.
    /// - [`RouteError::Deserialize`] if the body is not an array of pairs.
    /// - [`RouteError::InvalidPoint`] if a pair is not a real coordinate.
    /// - [`RouteError::Degenerate`] if fewer than two points come back.
    pub async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteError> {
        let url = self.build_url(origin, destination);
        tracing::debug!(%origin, %destination, "requesting route");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let pairs: Vec<[f64; 2]> =
            serde_json::from_str(&body).map_err(|e| RouteError::Deserialize {
                context: format!("get-route({origin} -> {destination})"),
                source: e,
            })?;

        let route = parse_polyline(&pairs)?;
        tracing::debug!(points = route.len(), "route received");
        Ok(route)
    }

    fn build_url(&self, origin: Coordinate, destination: Coordinate) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("origin_lat", &origin.lat.to_string());
            pairs.append_pair("origin_lon", &origin.lon.to_string());
            pairs.append_pair("destination_lat", &destination.lat.to_string());
            pairs.append_pair("destination_lon", &destination.lon.to_string());
        }
        url
    }
}

fn parse_polyline(pairs: &[[f64; 2]]) -> Result<Route, RouteError> {
    if pairs.len() < 2 {
        return Err(RouteError::Degenerate {
            points: pairs.len(),
        });
    }

    let points = pairs
        .iter()
        .enumerate()
        .map(|(index, &[lat, lon])| {
            Coordinate::try_new(lat, lon).map_err(|_| RouteError::InvalidPoint { index, lat, lon })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Route::try_from_points(points).map_err(|_| RouteError::Degenerate {
        points: pairs.len(),
    })
}
