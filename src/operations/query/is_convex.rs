use crate::geometry::Point;
use crate::math::predicates_2d::{turn, Turn};
use crate::math::CONVEXITY_EPS;

/// Tests whether a closed vertex ring is convex.
///
/// Every cyclic triple `(i, i+1, i+2)` is classified by the sign of the cross
/// product of its two edge vectors. The ring is convex when all non-collinear
/// turns share one sign. Two special cases return `false`:
///
/// - fewer than three vertices (no orientation), and
/// - every turn collinear (all vertices on one line).
///
/// The vertex order is assumed to trace a simple boundary. The result on
/// self-intersecting rings is unspecified: a star polygon whose turns all go
/// the same way is reported convex.
pub struct IsConvex<'a> {
    points: &'a [Point],
    eps: f64,
}

impl<'a> IsConvex<'a> {
    /// Creates a new `IsConvex` query with the default turn tolerance.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            eps: CONVEXITY_EPS,
        }
    }

    /// Overrides the tolerance below which a turn counts as collinear.
    #[must_use]
    pub fn with_tolerance(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut left = false;
        let mut right = false;
        for i in 0..n {
            let p1 = &self.points[i];
            let p2 = &self.points[(i + 1) % n];
            let p3 = &self.points[(i + 2) % n];
            match turn(p1, p2, p3, self.eps) {
                Turn::Left => left = true,
                Turn::Right => right = true,
                Turn::Straight => {}
            }
            if left && right {
                tracing::trace!(vertex = (i + 1) % n, "turn direction flips, not convex");
                return false;
            }
        }

        left || right
    }
}
