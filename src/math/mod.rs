pub mod angle_2d;
pub mod hull_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for coordinate and angle comparisons.
pub const TOLERANCE: f64 = 1e-7;

/// Returns `true` if `|a - b| <= TOLERANCE`.
#[must_use]
pub fn epsilon_equals(a: f64, b: f64) -> bool {
    epsilon_equals_with(a, b, TOLERANCE)
}

/// Returns `true` if `|a - b| <= eps`.
#[must_use]
pub fn epsilon_equals_with(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Per-axis tolerant point equality.
///
/// Two points are equal iff both `|dx|` and `|dy|` are within
/// [`TOLERANCE`]; this is deliberately not a Euclidean distance test.
#[must_use]
pub fn points_equal(p: &Point2, q: &Point2) -> bool {
    epsilon_equals(p.x, q.x) && epsilon_equals(p.y, q.y)
}

/// Z component of the 3D cross product of two planar vectors.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
