use super::{Vector2, TOLERANCE};
use crate::geometry::Point;

/// Direction of the turn made at the middle of three consecutive vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise (positive cross product).
    Left,
    /// Clockwise (negative cross product).
    Right,
    /// Cross product within tolerance of zero.
    Straight,
}

/// Z component of the cross product of two planar vectors.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Classifies the turn `p1 → p2 → p3` from the cross product of the edge
/// vectors `(p2 - p1) × (p3 - p2)`.
#[must_use]
pub fn turn(p1: &Point, p2: &Point, p3: &Point, eps: f64) -> Turn {
    let cross = cross_2d(&(*p2 - *p1), &(*p3 - *p2));
    if cross > eps {
        Turn::Left
    } else if cross < -eps {
        Turn::Right
    } else {
        Turn::Straight
    }
}

/// Returns `true` if `p` lies on the closed segment `a`–`b`.
///
/// The point must be within `eps` of the supporting line and inside the
/// segment's bounding box grown by `eps`. Endpoints are included.
#[must_use]
pub fn point_on_segment(p: &Point, a: &Point, b: &Point, eps: f64) -> bool {
    let ab = *b - *a;
    let len = ab.norm();
    if len < TOLERANCE {
        // Degenerate segment (repeated vertex).
        return p.distance(a) <= eps;
    }

    if cross_2d(&ab, &(*p - *a)).abs() / len > eps {
        return false;
    }

    let (min_x, max_x) = (a.x().min(b.x()), a.x().max(b.x()));
    let (min_y, max_y) = (a.y().min(b.y()), a.y().max(b.y()));
    p.x() >= min_x - eps && p.x() <= max_x + eps && p.y() >= min_y - eps && p.y() <= max_y + eps
}

/// Returns `true` if a ray cast from `p` towards +x crosses the edge `a`–`b`.
///
/// Uses the half-open rule on y so a ray through a shared vertex is counted
/// exactly once.
#[must_use]
pub fn ray_crosses_edge(p: &Point, a: &Point, b: &Point) -> bool {
    if (a.y() > p.y()) == (b.y() > p.y()) {
        return false;
    }
    let x_at = a.x() + (p.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
    p.x() < x_at
}
