use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Segment};
use crate::math::epsilon_equals;
use crate::math::polygon_2d::remove_collinear_vertices;
use crate::visualize::{NullSink, Tag, VisualizationSink};

use super::arrangement::{augment_tagged, BreakUp, DEFAULT_MAX_ITERATIONS};
use super::trace::BoundaryTracer;

/// What to do when an edge of A and an edge of B share a heading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TieBreak {
    /// Run the convolution as-is.
    #[default]
    None,
    /// Rotate B about the origin by `step_degrees` until no heading is
    /// shared, giving up after `max_attempts` rotations. The result is the
    /// sum with the rotated B.
    Rotate { step_degrees: f64, max_attempts: usize },
}

/// Tunables for [`NonConvexMinkowskiSum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumParams {
    /// Cap on break-up split iterations.
    pub max_break_up_iterations: usize,
    /// Cap on boundary walk steps; `None` scales with the arrangement size.
    pub max_trace_steps: Option<usize>,
    pub tie_break: TieBreak,
    /// Drop collinear and duplicate vertices from the traced ring.
    pub simplify: bool,
}

impl Default for SumParams {
    fn default() -> Self {
        Self {
            max_break_up_iterations: DEFAULT_MAX_ITERATIONS,
            max_trace_steps: None,
            tie_break: TieBreak::None,
            simplify: true,
        }
    }
}

/// Minkowski sum of two simple polygons by convolution.
///
/// Both inputs are wound counter-clockwise, their convolution segments are
/// split into a planar arrangement, and the arrangement's outer boundary is
/// traced.
#[derive(Debug, Clone)]
pub struct NonConvexMinkowskiSum {
    a: Polygon,
    b: Polygon,
    params: SumParams,
}

impl NonConvexMinkowskiSum {
    #[must_use]
    pub fn new(a: Polygon, b: Polygon) -> Self {
        Self {
            a,
            b,
            params: SumParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SumParams) -> Self {
        self.params = params;
        self
    }

    /// Computes the sum.
    ///
    /// # Errors
    ///
    /// - `GeometryError::SelfIntersecting` if either input is not simple.
    /// - `OperationError::TieBreakExhausted` if rotation never clears a tie.
    /// - `OperationError::DidNotConverge` if break-up hits its cap.
    /// - `OperationError::ArrangementInvalid` if the boundary cannot be traced.
    pub fn execute(&self) -> Result<Polygon> {
        self.execute_with_sink(&mut NullSink)
    }

    /// Computes the sum, reporting intermediate geometry to `sink`.
    ///
    /// # Errors
    ///
    /// See [`NonConvexMinkowskiSum::execute`].
    pub fn execute_with_sink(&self, sink: &mut dyn VisualizationSink) -> Result<Polygon> {
        self.a.validate_simple()?;
        self.b.validate_simple()?;

        let a = self.a.ordered_counter_clockwise();
        let b = self.break_ties(&a, self.b.ordered_counter_clockwise())?;

        let tagged = augment_tagged(&a, &b);
        debug!(segments = tagged.len(), "augmented");
        for t in &tagged {
            sink.record(&t.segment.into(), Tag::Augmented, &t.label());
        }

        let arrangement = BreakUp::new(tagged.into_iter().map(Segment::from).collect())
            .with_max_iterations(self.params.max_break_up_iterations)
            .execute_with_sink(sink)?;

        let mut tracer = BoundaryTracer::new(arrangement);
        if let Some(steps) = self.params.max_trace_steps {
            tracer = tracer.with_max_steps(steps);
        }
        let traced = tracer.execute_with_sink(sink)?;
        debug!(vertices = traced.vertex_count(), "traced");

        let result = if self.params.simplify {
            Polygon::new(remove_collinear_vertices(traced.vertices())).map_err(|e| {
                OperationError::ArrangementInvalid(format!(
                    "simplified boundary is degenerate: {e}"
                ))
            })?
        } else {
            traced
        };
        sink.record(&result.clone().into(), Tag::Result, "sum");
        Ok(result)
    }

    fn break_ties(&self, a: &Polygon, b: Polygon) -> Result<Polygon> {
        let TieBreak::Rotate {
            step_degrees,
            max_attempts,
        } = self.params.tie_break
        else {
            return Ok(b);
        };

        let mut rotated = b;
        for attempt in 0..=max_attempts {
            if !has_equal_segment_angles(a, &rotated) {
                if attempt > 0 {
                    warn!(attempt, step_degrees, "rotated B to clear a shared edge heading");
                }
                return Ok(rotated);
            }
            if attempt < max_attempts {
                rotated = rotated.rotated(step_degrees);
            }
        }
        Err(OperationError::TieBreakExhausted {
            attempts: max_attempts,
        }
        .into())
    }
}

/// Returns `true` if some edge of `a` and some edge of `b` have
/// epsilon-equal headings.
#[must_use]
pub fn has_equal_segment_angles(a: &Polygon, b: &Polygon) -> bool {
    let headings_b: Vec<f64> = b.edges().iter().map(Segment::heading).collect();
    a.edges()
        .iter()
        .any(|e| headings_b.iter().any(|&h| epsilon_equals(e.heading(), h)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, MinkowskiError};
    use crate::math::hull_2d::convex_hull;
    use crate::math::{points_equal, Point2};
    use crate::operations::convex::{Anchor, ConvexMinkowskiSum};
    use crate::visualize::RecordingSink;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        Polygon::from_coords(coords).unwrap()
    }

    fn unit_square() -> Polygon {
        poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    fn l_shape() -> Polygon {
        poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)])
    }

    fn assert_ring(p: &Polygon, expected: &[(f64, f64)]) {
        assert_eq!(p.vertex_count(), expected.len(), "got {:?}", p.vertices());
        for (v, &(x, y)) in p.vertices().iter().zip(expected) {
            assert!(points_equal(v, &Point2::new(x, y)), "got {:?}", p.vertices());
        }
    }

    #[test]
    fn square_plus_square() {
        let big = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let sum = NonConvexMinkowskiSum::new(big, unit_square()).execute().unwrap();
        assert_ring(&sum, &[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
    }

    #[test]
    fn l_shape_plus_square_keeps_the_notch() {
        let sum = NonConvexMinkowskiSum::new(l_shape(), unit_square()).execute().unwrap();
        assert_ring(
            &sum,
            &[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (2.0, 2.0), (2.0, 3.0), (0.0, 3.0)],
        );
        assert!((sum.area() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn clockwise_input_gives_the_same_sum() {
        let cw_l = poly(&[(0.0, 0.0), (0.0, 2.0), (1.0, 2.0), (1.0, 1.0), (2.0, 1.0), (2.0, 0.0)]);
        let sum = NonConvexMinkowskiSum::new(cw_l, unit_square()).execute().unwrap();
        assert!(sum.is_counter_clockwise());
        assert!((sum.area() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn convex_inputs_agree_with_the_convex_path() {
        let tri = poly(&[(0.0, 0.0), (3.0, 1.0), (1.0, 3.0)]);
        let sum = NonConvexMinkowskiSum::new(tri.clone(), unit_square()).execute().unwrap();
        assert_ring(
            &sum,
            &[(0.0, 0.0), (1.0, 0.0), (4.0, 1.0), (4.0, 2.0), (2.0, 4.0), (1.0, 4.0), (0.0, 1.0)],
        );
        let convex = ConvexMinkowskiSum::new(tri, unit_square())
            .with_anchor(Anchor::Origin)
            .execute()
            .unwrap();
        assert!((sum.area() - 11.0).abs() < 1e-9);
        assert!((sum.area() - convex.area()).abs() < 1e-9);
    }

    #[test]
    fn unsimplified_ring_keeps_split_vertices() {
        let params = SumParams {
            simplify: false,
            ..SumParams::default()
        };
        let sum = NonConvexMinkowskiSum::new(l_shape(), unit_square())
            .with_params(params)
            .execute()
            .unwrap();
        assert!(sum.vertex_count() > 6);
        assert!((sum.area() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn slightly_rotated_combs_converge() {
        // Splitting leaves pieces around 1e-5 long meeting at right angles.
        let comb = poly(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (5.0, 3.0),
            (4.0, 3.0),
            (4.0, 1.0),
            (3.0, 1.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]);
        let sum = NonConvexMinkowskiSum::new(comb.rotated(5.0), comb.clone())
            .execute()
            .unwrap();
        assert!(sum.is_counter_clockwise());
        assert!((sum.area() - 62.675_488).abs() < 1e-4, "area={}", sum.area());

        let hulls = ConvexMinkowskiSum::new(
            Polygon::new(convex_hull(comb.rotated(5.0).vertices())).unwrap(),
            Polygon::new(convex_hull(comb.vertices())).unwrap(),
        )
        .with_anchor(Anchor::Origin)
        .execute()
        .unwrap();
        assert!(sum.area() < hulls.area());
    }

    #[test]
    fn sink_sees_every_phase() {
        let mut sink = RecordingSink::new();
        NonConvexMinkowskiSum::new(l_shape(), unit_square())
            .execute_with_sink(&mut sink)
            .unwrap();
        assert!(sink.with_tag(Tag::Augmented).count() > 0);
        assert!(sink.with_tag(Tag::Split).count() > 0);
        assert_eq!(sink.with_tag(Tag::Outermost).count(), 1);
        assert!(sink.with_tag(Tag::Boundary).count() >= 6);
        assert_eq!(sink.with_tag(Tag::Result).count(), 1);
        let first = sink.events.first().unwrap();
        assert!(first.label.starts_with('B'));
    }

    #[test]
    fn self_intersecting_input_is_rejected() {
        let twisted = poly(&[(0.0, 0.0), (4.0, 2.0), (4.0, 0.0), (0.0, 3.0)]);
        let err = NonConvexMinkowskiSum::new(twisted, unit_square())
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MinkowskiError::Geometry(GeometryError::SelfIntersecting)
        ));
    }

    #[test]
    fn break_up_cap_surfaces_as_non_convergence() {
        let params = SumParams {
            max_break_up_iterations: 1,
            ..SumParams::default()
        };
        let err = NonConvexMinkowskiSum::new(l_shape(), unit_square())
            .with_params(params)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MinkowskiError::Operation(OperationError::DidNotConverge { .. })
        ));
    }

    #[test]
    fn equal_segment_angles() {
        let a = poly(&[(0.0, 0.0), (2.0, 1.0), (1.0, 2.0)]);
        let b = poly(&[(0.0, 0.0), (3.0, 2.0), (2.0, 4.0)]);
        assert!(has_equal_segment_angles(&a, &b));

        let c = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
        let d = poly(&[(0.0, 0.0), (2.0, 2.0), (1.0, 3.0)]);
        assert!(!has_equal_segment_angles(&c, &d));
    }

    #[test]
    fn rotate_tie_break_clears_shared_headings() {
        let params = SumParams {
            tie_break: TieBreak::Rotate {
                step_degrees: 1.0,
                max_attempts: 5,
            },
            ..SumParams::default()
        };
        let big = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let sum = NonConvexMinkowskiSum::new(big, unit_square())
            .with_params(params)
            .execute()
            .unwrap();
        assert!(sum.is_counter_clockwise());
        // Rotating B by 1° changes the sum only slightly.
        assert!((sum.area() - 9.0).abs() < 0.2, "area={}", sum.area());
        assert!(sum.vertex_count() >= 8);
    }

    #[test]
    fn rotate_tie_break_gives_up() {
        let params = SumParams {
            tie_break: TieBreak::Rotate {
                step_degrees: 90.0,
                max_attempts: 3,
            },
            ..SumParams::default()
        };
        let err = NonConvexMinkowskiSum::new(unit_square(), unit_square())
            .with_params(params)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MinkowskiError::Operation(OperationError::TieBreakExhausted { attempts: 3 })
        ));
    }
}
