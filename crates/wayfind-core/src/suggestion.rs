use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A geocoder candidate: what the user sees, and where it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub coordinate: Coordinate,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }
}
