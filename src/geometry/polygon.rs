use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{classify, overlap_length, SegmentRelation};
use crate::math::polygon_2d::{
    bottom_left_point, is_counter_clockwise, order_counter_clockwise, rotate_points,
    signed_area_2d, top_right_point, translate_points,
};
use crate::math::{cross_2d, points_equal, Point2, Vector2, TOLERANCE};

use super::Segment;

/// A simple closed polygon ring with at least three distinct vertices.
///
/// The ring is implicitly closed: the last vertex connects back to the first
/// and is never repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from a ring of points.
    ///
    /// A repeated closing point and consecutive duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if any coordinate is not finite or
    /// the ring encloses no area, and `GeometryError::TooFewVertices` if fewer
    /// than three distinct vertices remain.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::Degenerate("non-finite coordinate".into()).into());
        }

        let mut vertices = points;
        vertices.dedup_by(|a, b| points_equal(a, b));
        while vertices.len() > 1 && points_equal(&vertices[0], &vertices[vertices.len() - 1]) {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                found: vertices.len(),
            }
            .into());
        }
        if signed_area_2d(&vertices).abs() <= TOLERANCE {
            return Err(GeometryError::Degenerate("ring encloses zero area".into()).into());
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// See [`Polygon::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Edges in ring order, the last one closing back to the first vertex.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Signed area, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        is_counter_clockwise(&self.vertices)
    }

    /// Same ring wound counter-clockwise.
    #[must_use]
    pub fn ordered_counter_clockwise(&self) -> Self {
        Self {
            vertices: order_counter_clockwise(&self.vertices),
        }
    }

    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self {
            vertices: translate_points(&self.vertices, offset),
        }
    }

    /// Rotated about the origin by `degrees`.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Self {
        Self {
            vertices: rotate_points(&self.vertices, degrees),
        }
    }

    /// Point reflection through the origin, `(x, y) -> (-x, -y)`.
    ///
    /// Winding is preserved.
    #[must_use]
    pub fn reflected(&self) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| Point2::new(-p.x, -p.y)).collect(),
        }
    }

    /// Vertex with minimal X, ties broken by minimal Y.
    #[must_use]
    pub fn bottom_left(&self) -> Point2 {
        bottom_left_point(&self.vertices).unwrap_or_else(Point2::origin)
    }

    /// Vertex with maximal Y, ties broken by maximal X.
    #[must_use]
    pub fn top_right(&self) -> Point2 {
        top_right_point(&self.vertices).unwrap_or_else(Point2::origin)
    }

    /// Returns `true` if no vertex turns against the ring's winding.
    ///
    /// Collinear vertices are allowed.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let sign = self.signed_area().signum();
        (0..n).all(|i| {
            let prev = self.vertices[(i + n - 1) % n];
            let cur = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            cross_2d(&(cur - prev), &(next - cur)) * sign >= -TOLERANCE
        })
    }

    /// Checks that the ring does not touch or cross itself.
    ///
    /// Non-adjacent edges may not meet at all; adjacent edges may only share
    /// their common vertex (no fold-back overlap).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SelfIntersecting` on the first offending edge pair.
    pub fn validate_simple(&self) -> Result<()> {
        let edges = self.edges();
        let n = edges.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                let relation = classify(&edges[i], &edges[j]);
                let offending = if adjacent {
                    relation == SegmentRelation::Collinear
                        && overlap_length(&edges[i], &edges[j]) > TOLERANCE
                } else {
                    !matches!(
                        relation,
                        SegmentRelation::Parallel | SegmentRelation::Disjoint
                    )
                };
                if offending {
                    return Err(GeometryError::SelfIntersecting.into());
                }
            }
        }
        Ok(())
    }
}
