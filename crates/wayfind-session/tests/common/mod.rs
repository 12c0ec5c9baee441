#![allow(dead_code)]

use std::time::Duration;

use wayfind_geocoder::GeocoderClient;
use wayfind_router::RouteClient;
use wayfind_session::Session;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session whose geocoder and router both point at `server`
/// (`/search` and `/get-route`).
pub fn session_for(server: &MockServer) -> Session {
    let geocoder =
        GeocoderClient::with_base_url(&format!("{}/search", server.uri()), 5, "wayfind-test/0.1")
            .expect("geocoder construction should not fail");
    let router =
        RouteClient::with_base_url(&format!("{}/get-route", server.uri()), 5, "wayfind-test/0.1")
            .expect("router construction should not fail");
    Session::new(geocoder, router)
}

pub fn place(name: &str, lat: &str, lon: &str) -> serde_json::Value {
    serde_json::json!({ "display_name": name, "lat": lat, "lon": lon })
}

/// Geocoder answer for exactly `q`, optionally delayed.
pub async fn mount_geocode(
    server: &MockServer,
    q: &str,
    places: serde_json::Value,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", q))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(places)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn mount_route(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/get-route"))
        .respond_with(template)
        .mount(server)
        .await;
}
