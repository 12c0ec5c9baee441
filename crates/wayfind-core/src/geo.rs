//! Coordinates and the fixed service area.
//!
//! The service area is the rectangle the geocoder is restricted to and the
//! map viewport is clamped to. Everything that ends up on the map must lie
//! inside it.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate from untrusted input, rejecting non-finite or
    /// out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] if either component is NaN,
    /// infinite, or outside `[-90, 90]` / `[-180, 180]`.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Axis-aligned lat/lon rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Bengaluru. South-west corner `(12.8, 77.5)`, north-east `(13.1, 77.8)`.
pub const SERVICE_AREA: BoundingBox = BoundingBox {
    south: 12.8,
    west: 77.5,
    north: 13.1,
    east: 77.8,
};

/// Origin marker position before any search.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::new(12.9716, 77.5946);

/// Destination marker position before any search.
pub const DEFAULT_DESTINATION: Coordinate = Coordinate::new(12.9716, 77.6046);

impl BoundingBox {
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lon)
    }

    /// Moves `point` to the nearest position inside the box.
    #[must_use]
    pub fn clamp(&self, point: Coordinate) -> Coordinate {
        Coordinate {
            lat: point.lat.clamp(self.south, self.north),
            lon: point.lon.clamp(self.west, self.east),
        }
    }

    /// Clamps both corners of `other` into this box.
    #[must_use]
    pub fn clamp_box(&self, other: &BoundingBox) -> BoundingBox {
        let south_west = self.clamp(Coordinate::new(other.south, other.west));
        let north_east = self.clamp(Coordinate::new(other.north, other.east));
        BoundingBox {
            south: south_west.lat,
            west: south_west.lon,
            north: north_east.lat,
            east: north_east.lon,
        }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn extent_of(points: &[Coordinate]) -> Option<BoundingBox> {
        let (first, rest) = points.split_first()?;
        let init = BoundingBox {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        Some(rest.iter().fold(init, |acc, p| BoundingBox {
            south: acc.south.min(p.lat),
            west: acc.west.min(p.lon),
            north: acc.north.max(p.lat),
            east: acc.east.max(p.lon),
        }))
    }

    /// Nominatim `viewbox` parameter, ordered `west,north,east,south`.
    #[must_use]
    pub fn viewbox_param(&self) -> String {
        format!("{},{},{},{}", self.west, self.north, self.east, self.south)
    }

    /// `[[south, west], [north, east]]`, the corner pair map widgets expect.
    #[must_use]
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}
