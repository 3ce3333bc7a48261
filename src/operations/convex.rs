use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::hull_2d::convex_hull;
use crate::math::polygon_2d::scalar_distance;
use crate::math::Point2;
use crate::visualize::{NullSink, Tag, VisualizationSink};

/// Reference point that A's copies are placed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// A's bottom-left vertex is moved onto each vertex of B. The result is
    /// the true sum shifted by minus that vertex.
    #[default]
    BottomLeft,
    /// A is moved by each vertex of B as a vector, giving the true sum.
    Origin,
}

/// Minkowski sum of two convex polygons by translate-and-hull.
#[derive(Debug, Clone)]
pub struct ConvexMinkowskiSum {
    a: Polygon,
    b: Polygon,
    anchor: Anchor,
}

impl ConvexMinkowskiSum {
    #[must_use]
    pub fn new(a: Polygon, b: Polygon) -> Self {
        Self {
            a,
            b,
            anchor: Anchor::default(),
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Computes the sum as a counter-clockwise hull.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SelfIntersecting` if either polygon is not
    /// simple, and `OperationError::InvalidInput` if either is not convex.
    pub fn execute(&self) -> Result<Polygon> {
        self.execute_with_sink(&mut NullSink)
    }

    /// Computes the sum, reporting each translated copy of A.
    ///
    /// # Errors
    ///
    /// See [`ConvexMinkowskiSum::execute`].
    pub fn execute_with_sink(&self, sink: &mut dyn VisualizationSink) -> Result<Polygon> {
        for (name, p) in [("A", &self.a), ("B", &self.b)] {
            p.validate_simple()?;
            if !p.is_convex() {
                return Err(OperationError::InvalidInput(format!(
                    "polygon {name} is not convex"
                ))
                .into());
            }
        }

        let reference = match self.anchor {
            Anchor::BottomLeft => self.a.bottom_left(),
            Anchor::Origin => Point2::origin(),
        };

        let mut cloud = Vec::with_capacity(self.a.vertex_count() * self.b.vertex_count());
        for (i, v) in self.b.vertices().iter().enumerate() {
            let copy = self.a.translated(&scalar_distance(&reference, v));
            cloud.extend_from_slice(copy.vertices());
            sink.record(&copy.into(), Tag::Translated, &format!("A at B[{i}]"));
        }

        let hull = Polygon::new(convex_hull(&cloud))?;
        debug!(points = cloud.len(), vertices = hull.vertex_count(), "convex sum");
        sink.record(&hull.clone().into(), Tag::Result, "convex sum");
        Ok(hull)
    }
}

/// Convex Minkowski difference `{b - a : a ∈ A, b ∈ B}`.
///
/// Computed as the exact convex sum of A reflected through the origin with B.
#[derive(Debug, Clone)]
pub struct ConvexMinkowskiDifference {
    a: Polygon,
    b: Polygon,
}

impl ConvexMinkowskiDifference {
    #[must_use]
    pub fn new(a: Polygon, b: Polygon) -> Self {
        Self { a, b }
    }

    /// # Errors
    ///
    /// Returns `GeometryError::SelfIntersecting` if either polygon is not
    /// simple, and `OperationError::InvalidInput` if either is not convex.
    pub fn execute(&self) -> Result<Polygon> {
        self.execute_with_sink(&mut NullSink)
    }

    /// # Errors
    ///
    /// See [`ConvexMinkowskiDifference::execute`].
    pub fn execute_with_sink(&self, sink: &mut dyn VisualizationSink) -> Result<Polygon> {
        ConvexMinkowskiSum::new(self.a.reflected(), self.b.clone())
            .with_anchor(Anchor::Origin)
            .execute_with_sink(sink)
    }
}
