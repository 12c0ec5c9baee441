//! HTTP client for a Nominatim-compatible `search` endpoint.
//!
//! Every request is restricted to the service area (`bounded=1` plus a
//! `viewbox`) and capped at [`RESULT_LIMIT`] results. Failures come back as
//! [`GeocodeError`]; deciding whether a failure should look like "no
//! results" is left to the caller.

use std::time::Duration;

use reqwest::{Client, Url};
use wayfind_core::config::{DEFAULT_GEOCODER_URL, DEFAULT_USER_AGENT};
use wayfind_core::{AppConfig, BoundingBox, Coordinate, Suggestion, SERVICE_AREA};

use crate::error::GeocodeError;
use crate::types::NominatimPlace;

/// Maximum number of candidates requested from the service.
pub const RESULT_LIMIT: usize = 5;

/// Client for the geocoding service.
///
/// Use [`GeocoderClient::new`] for the public Nominatim instance or
/// [`GeocoderClient::with_base_url`] to point at another deployment or a
/// mock server in tests.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    client: Client,
    endpoint: Url,
    area: BoundingBox,
}

impl GeocoderClient {
    /// Creates a client for the public Nominatim `search` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(DEFAULT_GEOCODER_URL, timeout_secs, DEFAULT_USER_AGENT)
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`GeocoderClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::with_base_url(
            &config.geocoder_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an arbitrary `search` endpoint URL.
    ///
    /// `endpoint` is the full URL including its path (e.g.
    /// `https://nominatim.openstreetmap.org/search`).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`GeocodeError::InvalidBaseUrl`] if `endpoint` does not parse.
    pub fn with_base_url(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            area: SERVICE_AREA,
        })
    }

    /// Resolves free text into at most [`RESULT_LIMIT`] candidates, in the
    /// service's relevance order.
    ///
    /// Entries with unparseable coordinates or coordinates outside the
    /// service area are dropped.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::EmptyQuery`] if `text` is blank (no request is sent).
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the body is not a JSON array of places.
    pub async fn geocode(&self, text: &str) -> Result<Vec<Suggestion>, GeocodeError> {
        let query = text.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = self.build_url(query);
        tracing::debug!(query, "geocoding");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let suggestions: Vec<Suggestion> = places
            .into_iter()
            .filter_map(|place| self.to_suggestion(place))
            .take(RESULT_LIMIT)
            .collect();

        tracing::debug!(query, count = suggestions.len(), "geocode complete");
        Ok(suggestions)
    }

    fn to_suggestion(&self, place: NominatimPlace) -> Option<Suggestion> {
        let parsed = place
            .lat
            .trim()
            .parse::<f64>()
            .ok()
            .zip(place.lon.trim().parse::<f64>().ok())
            .and_then(|(lat, lon)| Coordinate::try_new(lat, lon).ok());

        let Some(coordinate) = parsed else {
            tracing::warn!(
                place_id = ?place.place_id,
                lat = %place.lat,
                lon = %place.lon,
                "skipping geocoder result with unparseable coordinates"
            );
            return None;
        };

        if !self.area.contains(coordinate) {
            tracing::debug!(
                place_id = ?place.place_id,
                %coordinate,
                "skipping geocoder result outside service area"
            );
            return None;
        }

        Some(Suggestion::new(place.display_name, coordinate))
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("format", "json");
            pairs.append_pair("addressdetails", "1");
            pairs.append_pair("limit", &RESULT_LIMIT.to_string());
            pairs.append_pair("bounded", "1");
            pairs.append_pair("viewbox", &self.area.viewbox_param());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(endpoint: &str) -> GeocoderClient {
        GeocoderClient::with_base_url(endpoint, 30, "wayfind-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_carries_all_search_parameters() {
        let client = test_client("https://nominatim.openstreetmap.org/search");
        let url = client.build_url("MG Road");
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?q=MG+Road&format=json&addressdetails=1&limit=5&bounded=1&viewbox=77.5%2C13.1%2C77.8%2C12.8"
        );
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://nominatim.openstreetmap.org/search");
        let url = client.build_url("Koramangala & HSR");
        assert!(
            url.as_str().contains("Koramangala+%26+HSR"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = GeocoderClient::with_base_url("not a url", 30, "ua").unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn to_suggestion_parses_decimal_strings() {
        let client = test_client("https://example.com/search");
        let place = NominatimPlace {
            place_id: Some(1),
            display_name: "Cubbon Park".to_string(),
            lat: "12.9763".to_string(),
            lon: " 77.5929".to_string(),
        };
        let suggestion = client.to_suggestion(place).expect("valid place");
        assert_eq!(suggestion.label, "Cubbon Park");
        assert_eq!(suggestion.coordinate, Coordinate::new(12.9763, 77.5929));
    }

    #[test]
    fn to_suggestion_rejects_garbage_and_out_of_area() {
        let client = test_client("https://example.com/search");
        let garbage = NominatimPlace {
            place_id: None,
            display_name: "Nowhere".to_string(),
            lat: "north".to_string(),
            lon: "77.59".to_string(),
        };
        assert!(client.to_suggestion(garbage).is_none());

        let delhi = NominatimPlace {
            place_id: None,
            display_name: "New Delhi".to_string(),
            lat: "28.6139".to_string(),
            lon: "77.2090".to_string(),
        };
        assert!(client.to_suggestion(delhi).is_none());
    }
}
