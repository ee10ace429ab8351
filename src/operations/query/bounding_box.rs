use crate::geometry::Point;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

impl Aabb {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            0.5 * (self.min.x() + self.max.x()),
            0.5 * (self.min.y() + self.max.y()),
        )
    }
}

/// Computes the axis-aligned bounding box of a vertex list.
pub struct BoundingBox<'a> {
    points: &'a [Point],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// Executes the query, returning `None` for an empty vertex list.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let (first, rest) = self.points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = Point::new(min.x().min(p.x()), min.y().min(p.y()));
            max = Point::new(max.x().max(p.x()), max.y().max(p.y()));
        }
        Some(Aabb { min, max })
    }
}
