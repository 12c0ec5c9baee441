use thiserror::Error;
use wayfind_geocoder::GeocodeError;
use wayfind_router::RouteError;

use crate::state::Field;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("geocoder client: {0}")]
    Geocoder(#[from] GeocodeError),

    #[error("routing client: {0}")]
    Router(#[from] RouteError),

    #[error("no {field} suggestion at index {index} ({available} available)")]
    NoSuchSuggestion {
        field: Field,
        index: usize,
        available: usize,
    },

    #[error("unknown field {0:?}; expected \"origin\" or \"destination\"")]
    UnknownField(String),
}
