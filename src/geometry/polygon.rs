use std::fmt;
use std::path::Path;

use crate::error::{PolygonError, Result};
use crate::export::svg::{self, SvgStyle};
use crate::operations::query::{IsConvex, LocatePoint, Perimeter, PointLocation};

use super::Point;

/// A simple polygon: an ordered, cyclic sequence of owned vertices with a
/// fixed maximum vertex count.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % n`. The capacity is set at
/// construction and never changes; [`Polygon::add_point`] fails once it is
/// reached. Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    capacity: usize,
}

impl Polygon {
    /// Creates an empty polygon that can hold up to `capacity` vertices.
    ///
    /// The capacity only bounds [`Polygon::add_point`]; storage grows as
    /// vertices are added.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            capacity,
        }
    }

    /// Creates a polygon with the given capacity and appends every point of `points`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::CapacityExceeded` if `points` yields more than
    /// `capacity` vertices.
    pub fn from_points<I>(capacity: usize, points: I) -> std::result::Result<Self, PolygonError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut polygon = Self::new(capacity);
        for p in points {
            polygon.add_point(p)?;
        }
        Ok(polygon)
    }

    /// Appends a vertex.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::CapacityExceeded` when the polygon is full. The
    /// polygon is left unchanged.
    pub fn add_point(&mut self, point: Point) -> std::result::Result<(), PolygonError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, point = %point, "add_point rejected");
            return Err(PolygonError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.points.push(point);
        Ok(())
    }

    /// Replaces the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if `index >= num_points()`.
    pub fn set_point(&mut self, index: usize, point: Point) -> std::result::Result<(), PolygonError> {
        let len = self.points.len();
        let Some(slot) = self.points.get_mut(index) else {
            tracing::debug!(index, len, "set_point rejected");
            return Err(PolygonError::IndexOutOfRange { index, len });
        };
        *slot = point;
        Ok(())
    }

    /// Returns the vertex at `index`, or `None` outside `[0, num_points())`.
    #[must_use]
    pub fn get_point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Current number of vertices.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Maximum number of vertices.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    /// The vertices in boundary order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the cyclic edges `(v[i], v[(i + 1) % n])`.
    ///
    /// A single vertex yields one zero-length edge; an empty polygon yields none.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Sum of all edge lengths including the closing edge. `0.0` below two vertices.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        Perimeter::new(&self.points).execute()
    }

    /// Whether the polygon is convex. See [`IsConvex`] for the exact rules.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        IsConvex::new(&self.points).execute()
    }

    /// Classifies `point` as inside, outside or on the boundary.
    #[must_use]
    pub fn locate_point(&self, point: &Point) -> PointLocation {
        let location = LocatePoint::new(*point).execute(&self.points);
        tracing::trace!(point = %point, %location, "located point");
        location
    }

    /// Renders the polygon as an SVG document sized `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidCanvas` if either dimension is zero.
    pub fn to_svg(&self, width: u32, height: u32, style: &SvgStyle) -> Result<String> {
        Ok(svg::render(&self.points, width, height, style)?)
    }

    /// Writes the polygon to an SVG file with the default style.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidCanvas` for a zero-sized canvas, or
    /// `ExportError::Io` if the file cannot be written.
    pub fn export_svg(&self, path: impl AsRef<Path>, width: u32, height: u32) -> Result<()> {
        svg::write_svg(path.as_ref(), &self.points, width, height, &SvgStyle::default())?;
        Ok(())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon with {} points: ", self.points.len())?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polygon(coords: &[(f64, f64)]) -> Polygon {
        Polygon::from_points(coords.len(), coords.iter().copied().map(Point::from)).unwrap()
    }

    fn unit_square() -> Polygon {
        polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn new_is_empty() {
        let p = Polygon::new(4);
        assert_eq!(p.num_points(), 0);
        assert_eq!(p.capacity(), 4);
        assert!(p.is_empty());
        assert!(!p.is_full());
    }

    #[test]
    fn square_properties() {
        let sq = unit_square();
        assert_eq!(sq.num_points(), 4);
        assert_relative_eq!(sq.perimeter(), 4.0);
        assert!(sq.is_convex());
        assert!(sq.get_point(2).unwrap().equals(&Point::new(1.0, 1.0)));
        assert!(sq.get_point(10).is_none());
    }

    #[test]
    fn add_beyond_capacity_fails() {
        let mut sq = unit_square();
        let err = sq.add_point(Point::new(5.0, 5.0)).unwrap_err();
        assert_eq!(err, PolygonError::CapacityExceeded { capacity: 4 });
        assert_eq!(sq.num_points(), 4);
        assert_eq!(sq, unit_square());
    }

    #[test]
    fn huge_capacity_is_only_a_bound() {
        let mut p = Polygon::new(usize::MAX);
        assert_eq!(p.capacity(), usize::MAX);
        assert!(!p.is_full());
        p.add_point(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(p.num_points(), 1);

        let mut large = Polygon::new(1 << 40);
        large.add_point(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(large.capacity(), 1 << 40);
    }

    #[test]
    fn zero_capacity_accepts_nothing() {
        let mut p = Polygon::new(0);
        assert!(p.is_full());
        assert!(p.add_point(Point::new(0.0, 0.0)).is_err());
        assert_eq!(p.num_points(), 0);
    }

    #[test]
    fn from_points_overflow() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        let err = Polygon::from_points(2, pts).unwrap_err();
        assert_eq!(err, PolygonError::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn set_point_replaces_vertex() {
        let mut sq = unit_square();
        sq.set_point(2, Point::new(2.0, 1.0)).unwrap();
        assert!(sq.get_point(2).unwrap().equals(&Point::new(2.0, 1.0)));
        assert_eq!(sq.num_points(), 4);
        assert_relative_eq!(sq.perimeter(), 3.0 + 2.0_f64.sqrt() + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn set_point_out_of_range_fails() {
        let mut p = Polygon::new(4);
        p.add_point(Point::new(0.0, 0.0)).unwrap();
        // Index within capacity but past the vertex count.
        let err = p.set_point(1, Point::new(9.0, 9.0)).unwrap_err();
        assert_eq!(err, PolygonError::IndexOutOfRange { index: 1, len: 1 });
        assert!(p.set_point(usize::MAX, Point::new(9.0, 9.0)).is_err());
        assert_eq!(p.num_points(), 1);
        assert!(p.get_point(0).unwrap().equals(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn stored_point_is_a_copy() {
        let mut src = Point::new(1.0, 2.0);
        let mut p = Polygon::new(1);
        p.add_point(src).unwrap();
        src.set_x(100.0);
        assert!(p.get_point(0).unwrap().equals(&Point::new(1.0, 2.0)));
    }

    #[test]
    fn dented_pentagon_not_convex() {
        let p = polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)]);
        assert_eq!(p.num_points(), 5);
        assert!(!p.is_convex());
    }

    #[test]
    fn collinear_not_convex() {
        assert!(!polygon(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).is_convex());
        assert!(!polygon(&[(0.0, 0.0), (1.0, 0.0)]).is_convex());
    }

    #[test]
    fn clone_is_deep() {
        let base = polygon(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let mut copy = base.clone();
        assert_eq!(copy.num_points(), base.num_points());
        assert_relative_eq!(copy.perimeter(), base.perimeter());
        assert_eq!(copy.is_convex(), base.is_convex());

        copy.set_point(0, Point::new(-5.0, -5.0)).unwrap();
        assert!(base.get_point(0).unwrap().equals(&Point::new(0.0, 0.0)));
        assert_relative_eq!(base.perimeter(), 2.0 + 2.0_f64.sqrt());
    }

    #[test]
    fn assignment_replaces_content() {
        let concave = polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)]);
        let mut assigned = Polygon::new(3);
        assigned.add_point(Point::new(-1.0, -1.0)).unwrap();
        assigned.add_point(Point::new(-2.0, -2.0)).unwrap();

        assigned.clone_from(&concave);
        assert_eq!(assigned.num_points(), 5);
        assert_eq!(assigned.capacity(), 5);
        assert!(!assigned.is_convex());
        assert_relative_eq!(assigned.perimeter(), concave.perimeter());

        assigned.set_point(3, Point::new(1.0, 3.0)).unwrap();
        assert!(concave.get_point(3).unwrap().equals(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn locate_square() {
        let sq = polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(sq.locate_point(&Point::new(1.0, 1.0)), PointLocation::Inside);
        assert_eq!(sq.locate_point(&Point::new(3.0, 1.0)), PointLocation::Outside);
        assert_eq!(sq.locate_point(&Point::new(1.0, 0.0)), PointLocation::OnEdge);
        assert_eq!(sq.locate_point(&Point::new(0.0, 1.0)), PointLocation::OnEdge);
    }

    #[test]
    fn locate_on_concave_polygon() {
        let p = polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)]);
        assert_eq!(p.locate_point(&Point::new(1.0, 1.5)), PointLocation::Outside);
        assert_eq!(p.locate_point(&Point::new(1.0, 0.5)), PointLocation::Inside);
        assert_eq!(p.locate_point(&Point::new(0.25, 1.5)), PointLocation::Inside);
        assert_eq!(p.locate_point(&Point::new(0.5, 1.5)), PointLocation::OnEdge);
        assert_eq!(p.locate_point(&Point::new(1.5, 1.5)), PointLocation::OnEdge);
    }

    #[test]
    fn small_polygons_locate_outside() {
        let mut p = Polygon::new(3);
        for pt in [Point::new(0.0, 0.0), Point::new(4.0, 0.0)] {
            assert_eq!(p.locate_point(&pt), PointLocation::Outside);
            p.add_point(pt).unwrap();
        }
        assert_eq!(p.locate_point(&Point::new(2.0, 0.0)), PointLocation::Outside);
        assert_eq!(p.locate_point(&Point::new(0.0, 0.0)), PointLocation::Outside);
    }

    #[test]
    fn edges_are_cyclic() {
        let sq = unit_square();
        let edges: Vec<_> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert!(edges[3].0.equals(&Point::new(0.0, 1.0)));
        assert!(edges[3].1.equals(&Point::new(0.0, 0.0)));
        assert_eq!(Polygon::new(2).edges().count(), 0);
    }

    #[test]
    fn display_format() {
        let p = polygon(&[(0.0, 0.0), (1.5, -2.0)]);
        assert_eq!(
            p.to_string(),
            "Polygon with 2 points: (0.000000, 0.000000), (1.500000, -2.000000)"
        );
        assert_eq!(Polygon::new(3).to_string(), "Polygon with 0 points: ");
    }
}
