//! Everything a tile map needs to draw the current search, derived from
//! [`SearchState`] and nothing else.
//!
//! The viewport is pinned to the service area: markers, route vertices and
//! the fitted bounds are clamped into it, and `max_bounds_viscosity = 1.0`
//! tells the widget to snap back when dragged outside.

use serde::Serialize;
use wayfind_core::{BoundingBox, Coordinate, SERVICE_AREA};

use crate::shell::ShellView;
use crate::state::{Field, SearchState};

/// Zoom used when there is no route to fit.
pub const DEFAULT_ZOOM: u8 = 13;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub field: Field,
    pub position: Coordinate,
    pub popup: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Coordinate>,
    pub color: &'static str,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Viewport {
    FitBounds { bounds: BoundingBox },
    Center { center: Coordinate, zoom: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub markers: [Marker; 2],
    pub polyline: Option<Polyline>,
    pub viewport: Viewport,
    pub max_bounds: BoundingBox,
    pub max_bounds_viscosity: f64,
    pub tile_layer: TileLayer,
    /// Changes whenever the widget has to be rebuilt from scratch.
    pub map_key: usize,
    /// Drawer beside the map.
    pub shell: ShellView,
}

impl MapView {
    #[must_use]
    pub fn render(state: &SearchState) -> Self {
        let area = SERVICE_AREA;

        let markers = Field::ALL.map(|field| Marker {
            field,
            position: area.clamp(state.coordinate(field)),
            popup: field.title(),
        });

        let route = state.route();
        let polyline = (!route.is_empty()).then(|| Polyline {
            points: route.points().iter().map(|p| area.clamp(*p)).collect(),
            color: "red",
            weight: 5,
        });

        let viewport = match route.extent() {
            Some(extent) => Viewport::FitBounds {
                bounds: area.clamp_box(&extent),
            },
            None => Viewport::Center {
                center: markers[0].position,
                zoom: DEFAULT_ZOOM,
            },
        };

        Self {
            markers,
            polyline,
            viewport,
            max_bounds: area,
            max_bounds_viscosity: 1.0,
            tile_layer: TileLayer {
                url_template: TILE_URL_TEMPLATE,
                attribution: TILE_ATTRIBUTION,
            },
            map_key: route.len(),
            shell: state.shell().view(),
        }
    }

    /// Every coordinate the map would draw or frame.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let viewport: Vec<Coordinate> = match &self.viewport {
            Viewport::FitBounds { bounds } => vec![
                Coordinate::new(bounds.south, bounds.west),
                Coordinate::new(bounds.north, bounds.east),
            ],
            Viewport::Center { center, .. } => vec![*center],
        };
        self.markers
            .iter()
            .map(|m| m.position)
            .chain(self.polyline.iter().flat_map(|p| p.points.iter().copied()))
            .chain(viewport)
    }
}
