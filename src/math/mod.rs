pub mod predicates_2d;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Threshold below which a turn (cross product of consecutive edges) counts as collinear.
pub const CONVEXITY_EPS: f64 = 1e-9;

/// Distance tolerance for classifying a point as lying on a polygon edge.
pub const EDGE_EPS: f64 = 1e-9;
