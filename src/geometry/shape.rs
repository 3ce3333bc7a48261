use crate::math::Point2;

use super::{Polygon, Segment};

/// The closed set of shapes the kernel reports to diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point2),
    Segment(Segment),
    Polygon(Polygon),
}

impl Shape {
    /// Every vertex of the shape, in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Self::Point(p) => vec![*p],
            Self::Segment(s) => vec![s.start, s.end],
            Self::Polygon(p) => p.vertices().to_vec(),
        }
    }
}

impl From<Point2> for Shape {
    fn from(p: Point2) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}
