use std::fmt;

use crate::geometry::Point;
use crate::math::predicates_2d::{point_on_segment, ray_crosses_edge};
use crate::math::EDGE_EPS;

/// Location of a point relative to a polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLocation {
    /// Reserved for inapplicable queries; never produced for a well-formed ring.
    Invalid,
    Inside,
    Outside,
    /// On one of the boundary segments, endpoints included.
    OnEdge,
}

impl fmt::Display for PointLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "Invalid",
            Self::Inside => "Inside",
            Self::Outside => "Outside",
            Self::OnEdge => "OnEdge",
        };
        f.write_str(name)
    }
}

/// Classifies a point against a closed vertex ring.
///
/// The boundary test runs first and wins: a point within tolerance of any
/// edge is `OnEdge`. Otherwise an even-odd ray cast towards +x decides
/// between `Inside` and `Outside`, which is correct for convex and concave
/// simple rings alike. Rings with fewer than three vertices enclose nothing,
/// so every point is `Outside`.
pub struct LocatePoint {
    point: Point,
    eps: f64,
}

impl LocatePoint {
    /// Creates a new `LocatePoint` query with the default edge tolerance.
    #[must_use]
    pub fn new(point: Point) -> Self {
        Self {
            point,
            eps: EDGE_EPS,
        }
    }

    /// Overrides the distance within which a point counts as on an edge.
    #[must_use]
    pub fn with_tolerance(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Executes the query against `points`.
    #[must_use]
    pub fn execute(&self, points: &[Point]) -> PointLocation {
        let n = points.len();
        if n < 3 {
            return PointLocation::Outside;
        }

        let edges = (0..n).map(|i| (&points[i], &points[(i + 1) % n]));

        let mut inside = false;
        for (a, b) in edges {
            if point_on_segment(&self.point, a, b, self.eps) {
                tracing::trace!(point = %self.point, start = %a, end = %b, "point on edge");
                return PointLocation::OnEdge;
            }
            if ray_crosses_edge(&self.point, a, b) {
                inside = !inside;
            }
        }

        if inside {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }
}
