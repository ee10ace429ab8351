use crate::geometry::Point;

/// Computes the perimeter of a closed vertex ring.
///
/// The ring is cyclic: the closing edge from the last vertex back to the first
/// is included. Fewer than two vertices give `0.0`.
pub struct Perimeter<'a> {
    points: &'a [Point],
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` query over `points`.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the sum of all edge lengths.
    ///
    /// Collinear or self-intersecting rings are fine: this is a plain sum of
    /// segment lengths.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.points[i].distance(&self.points[(i + 1) % n]))
            .sum()
    }
}
