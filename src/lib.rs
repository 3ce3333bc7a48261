pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod visualize;

pub use error::{MinkowskiError, Result};
pub use geometry::{Polygon, Segment, Shape};
pub use operations::{minkowski_difference_convex, minkowski_sum_convex, minkowski_sum_non_convex};
