use crate::math::Point2;

use super::Segment;

/// Which input polygon an edge was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    A,
    B,
}

/// A convolution segment: an edge of `source` translated by a vertex
/// (`anchor`) of the other polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinkowskiSegment {
    pub segment: Segment,
    pub source: Source,
    pub anchor: Point2,
}

impl MinkowskiSegment {
    #[must_use]
    pub fn new(segment: Segment, source: Source, anchor: Point2) -> Self {
        Self {
            segment,
            source,
            anchor,
        }
    }

    /// Short label for diagnostics, e.g. `"A@(1, 0)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:?}@({}, {})", self.source, self.anchor.x, self.anchor.y)
    }
}

impl From<MinkowskiSegment> for Segment {
    fn from(tagged: MinkowskiSegment) -> Self {
        tagged.segment
    }
}
