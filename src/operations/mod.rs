pub mod arrangement;
pub mod convex;
pub mod non_convex;
pub mod trace;

pub use arrangement::BreakUp;
pub use convex::{Anchor, ConvexMinkowskiDifference, ConvexMinkowskiSum};
pub use non_convex::{has_equal_segment_angles, NonConvexMinkowskiSum, SumParams, TieBreak};
pub use trace::BoundaryTracer;

use crate::error::Result;
use crate::geometry::Polygon;

/// Minkowski sum of two convex polygons, anchored on A's bottom-left vertex.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if either polygon is not convex.
pub fn minkowski_sum_convex(a: &Polygon, b: &Polygon) -> Result<Polygon> {
    ConvexMinkowskiSum::new(a.clone(), b.clone()).execute()
}

/// Minkowski sum of two simple polygons with default [`SumParams`].
///
/// # Errors
///
/// See [`NonConvexMinkowskiSum::execute`].
pub fn minkowski_sum_non_convex(a: &Polygon, b: &Polygon) -> Result<Polygon> {
    NonConvexMinkowskiSum::new(a.clone(), b.clone()).execute()
}

/// Convex Minkowski difference `{b - a}`.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if either polygon is not convex.
pub fn minkowski_difference_convex(a: &Polygon, b: &Polygon) -> Result<Polygon> {
    ConvexMinkowskiDifference::new(a.clone(), b.clone()).execute()
}
