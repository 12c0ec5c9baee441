use serde::{Deserialize, Serialize};

use crate::geo::{BoundingBox, Coordinate};
use crate::CoreError;

/// A path in traversal order. Either empty (nothing resolved yet) or at
/// least two points long.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Route(Vec<Coordinate>);

impl Route {
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wraps a polyline received from the routing service.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DegenerateRoute`] for a single-point path.
    pub fn try_from_points(points: Vec<Coordinate>) -> Result<Self, CoreError> {
        if points.len() == 1 {
            return Err(CoreError::DegenerateRoute { points: 1 });
        }
        Ok(Self(points))
    }

    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn extent(&self) -> Option<BoundingBox> {
        BoundingBox::extent_of(&self.0)
    }
}

impl TryFrom<Vec<Coordinate>> for Route {
    type Error = CoreError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::try_from_points(points)
    }
}

impl From<Route> for Vec<Coordinate> {
    fn from(route: Route) -> Self {
        route.0
    }
}
