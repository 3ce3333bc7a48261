use crate::math::angle_2d::angle_of;
use crate::math::{points_equal, Point2, Vector2, TOLERANCE};

/// A directed line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw coordinates.
    #[must_use]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Same segment traversed end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Segment moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Vector from start to end (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` if both endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        points_equal(&self.start, &self.end) || self.length() <= TOLERANCE
    }

    /// Heading in degrees, in `[0, 360)`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        angle_of(self)
    }

    /// Endpoint-wise epsilon equality, respecting direction.
    #[must_use]
    pub fn epsilon_eq(&self, other: &Self) -> bool {
        points_equal(&self.start, &other.start) && points_equal(&self.end, &other.end)
    }

    /// Epsilon equality ignoring direction.
    #[must_use]
    pub fn same_undirected(&self, other: &Self) -> bool {
        self.epsilon_eq(other) || self.epsilon_eq(&other.reversed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_swaps_endpoints() {
        let s = Segment::from_coords(0.0, 0.0, 2.0, 1.0);
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
        assert!(((s.heading() - r.heading()).abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn translated_moves_both_ends() {
        let s = Segment::from_coords(0.0, 0.0, 1.0, 0.0).translated(&Vector2::new(2.0, 3.0));
        assert!(s.epsilon_eq(&Segment::from_coords(2.0, 3.0, 3.0, 3.0)));
    }

    #[test]
    fn equality_with_and_without_direction() {
        let s = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        let nudged = Segment::from_coords(0.5e-7, 0.0, 1.0, 1.0 - 0.5e-7);
        assert!(s.epsilon_eq(&nudged));
        assert!(!s.epsilon_eq(&s.reversed()));
        assert!(s.same_undirected(&s.reversed()));
    }

    #[test]
    fn degenerate_detection() {
        assert!(Segment::from_coords(1.0, 1.0, 1.0, 1.0).is_degenerate());
        assert!(!Segment::from_coords(0.0, 0.0, 0.0, 1.0).is_degenerate());
        assert!((Segment::from_coords(0.0, 0.0, 3.0, 4.0).length() - 5.0).abs() < 1e-12);
    }
}
