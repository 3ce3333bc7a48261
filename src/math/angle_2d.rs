use super::{cross_2d, Vector2, TOLERANCE};
use crate::geometry::Segment;

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle - 360.0 * (angle / 360.0).floor();
    // Tiny negative inputs round up to exactly 360.0.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Heading of a direction vector in degrees, in `[0, 360)`.
#[must_use]
pub fn heading_of(v: &Vector2) -> f64 {
    normalize_degrees(v.y.atan2(v.x).to_degrees())
}

/// Heading of a segment from its start to its end, in degrees in `[0, 360)`.
///
/// This is the single canonical angle used by every range check and sort
/// in the crate.
#[must_use]
pub fn angle_of(segment: &Segment) -> f64 {
    heading_of(&segment.direction())
}

/// Signed turn from `incoming` to `outgoing` in degrees, in `(-180, 180]`.
///
/// Negative values turn clockwise, positive values counter-clockwise.
/// Computed as `atan2(cross, dot)`; a full reversal always reports `+180`.
#[must_use]
pub fn turn_angle(incoming: &Vector2, outgoing: &Vector2) -> f64 {
    let angle = cross_2d(incoming, outgoing)
        .atan2(incoming.dot(outgoing))
        .to_degrees();
    if angle <= -180.0 + TOLERANCE {
        180.0
    } else {
        angle
    }
}

/// Checks whether `angle` lies in the closed circular range `[lower, upper]`.
///
/// When `lower > upper` the range wraps through 0°. Bounds are inclusive
/// within [`TOLERANCE`].
#[must_use]
pub fn angle_in_range(angle: f64, lower: f64, upper: f64) -> bool {
    if lower > upper {
        angle >= lower - TOLERANCE || angle <= upper + TOLERANCE
    } else {
        angle >= lower - TOLERANCE && angle <= upper + TOLERANCE
    }
}
