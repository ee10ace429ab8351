pub mod dataset;
pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanarError, Result};
pub use geometry::{Point, Polygon};
pub use operations::query::PointLocation;
