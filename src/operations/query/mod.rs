mod bounding_box;
mod is_convex;
mod length;
mod locate_point;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_convex::IsConvex;
pub use length::Perimeter;
pub use locate_point::{LocatePoint, PointLocation};
