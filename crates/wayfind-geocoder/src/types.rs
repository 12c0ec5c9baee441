//! Nominatim `search` response types.
//!
//! With `format=json` the service answers with a bare JSON array. Coordinates
//! arrive as decimal strings, not numbers.

use serde::Deserialize;

/// One entry of a Nominatim `search` response. Unused fields are ignored.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub place_id: Option<i64>,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}
