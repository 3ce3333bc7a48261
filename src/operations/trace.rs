use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Segment};
use crate::math::angle_2d::turn_angle;
use crate::math::polygon_2d::bottom_left_point;
use crate::math::{epsilon_equals, points_equal, Point2, TOLERANCE};
use crate::visualize::{NullSink, Tag, VisualizationSink};

/// Extracts the outer boundary of a clean arrangement.
///
/// Starts at the outermost segment and always takes the most clockwise
/// connected segment until the walk returns to its start. The result is
/// counter-clockwise.
#[derive(Debug, Clone)]
pub struct BoundaryTracer {
    segments: Vec<Segment>,
    max_steps: Option<usize>,
}

impl BoundaryTracer {
    /// Creates a tracer over a non-crossing segment set.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            max_steps: None,
        }
    }

    /// Caps the number of walk steps. Defaults to `4 * segments + 16`.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Traces the boundary.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::ArrangementInvalid` if the arrangement is
    /// empty, a walk reaches a dangling end point, the walk does not close
    /// within the step cap, or the closed ring is degenerate.
    pub fn execute(&self) -> Result<Polygon> {
        self.execute_with_sink(&mut NullSink)
    }

    /// Traces the boundary, reporting the start segment and every step.
    ///
    /// # Errors
    ///
    /// See [`BoundaryTracer::execute`].
    pub fn execute_with_sink(&self, sink: &mut dyn VisualizationSink) -> Result<Polygon> {
        let first = outermost_segment(&self.segments).ok_or_else(|| {
            OperationError::ArrangementInvalid("no segments to trace".to_owned())
        })?;
        sink.record(&first.into(), Tag::Outermost, "outermost");

        let max_steps = self.max_steps.unwrap_or(4 * self.segments.len() + 16);
        let mut ring = vec![first.start];
        let mut current = first;

        for step in 0..max_steps {
            if points_equal(&current.end, &first.start) {
                debug!(steps = step, vertices = ring.len(), "boundary closed");
                return finish(ring);
            }
            ring.push(current.end);

            let candidates = connected_segments(&current, &self.segments);
            let next = most_clockwise(&current, &candidates).ok_or_else(|| {
                OperationError::ArrangementInvalid(format!(
                    "dangling end point at ({}, {})",
                    current.end.x, current.end.y
                ))
            })?;
            trace!(step, from = ?next.start, to = ?next.end, "boundary step");
            sink.record(&next.into(), Tag::Boundary, &format!("step {step}"));
            current = next;
        }

        Err(OperationError::ArrangementInvalid(format!(
            "boundary did not close within {max_steps} steps"
        ))
        .into())
    }
}

/// Starting segment of the walk.
///
/// Pivots on the minimum-X (then minimum-Y) endpoint and, among segments
/// touching it (oriented away from it), takes the one with the smallest
/// heading in `(-90°, 90°]`. Ties take the shorter segment.
#[must_use]
pub fn outermost_segment(segments: &[Segment]) -> Option<Segment> {
    let endpoints: Vec<Point2> = segments.iter().flat_map(|s| [s.start, s.end]).collect();
    let pivot = bottom_left_point(&endpoints)?;

    let mut best: Option<(Segment, f64)> = None;
    for s in segments.iter().filter(|s| !s.is_degenerate()) {
        let oriented = if points_equal(&s.start, &pivot) {
            *s
        } else if points_equal(&s.end, &pivot) {
            s.reversed()
        } else {
            continue;
        };
        let d = oriented.direction();
        let heading = d.y.atan2(d.x).to_degrees();
        let better = match best {
            None => true,
            Some((b, bh)) => {
                heading < bh - TOLERANCE
                    || (epsilon_equals(heading, bh) && oriented.length() < b.length())
            }
        };
        if better {
            best = Some((oriented, heading));
        }
    }
    best.map(|(s, _)| s)
}

/// Segments continuing from `current.end`, oriented to start there.
///
/// `current` itself and its reverse are excluded.
#[must_use]
pub fn connected_segments(current: &Segment, segments: &[Segment]) -> Vec<Segment> {
    segments
        .iter()
        .filter(|s| !s.same_undirected(current) && !s.is_degenerate())
        .filter_map(|s| {
            if points_equal(&s.start, &current.end) {
                Some(*s)
            } else if points_equal(&s.end, &current.end) {
                Some(s.reversed())
            } else {
                None
            }
        })
        .collect()
}

/// Candidate with the smallest signed turn from `current` (most clockwise).
///
/// A reversal counts as `+180°`, the least preferred turn.
#[must_use]
pub fn most_clockwise(current: &Segment, candidates: &[Segment]) -> Option<Segment> {
    let incoming = current.direction();
    candidates
        .iter()
        .map(|c| (*c, turn_angle(&incoming, &c.direction())))
        .min_by(|(a, ta), (b, tb)| ta.total_cmp(tb).then(a.length().total_cmp(&b.length())))
        .map(|(c, _)| c)
}

fn finish(ring: Vec<Point2>) -> Result<Polygon> {
    let mut cleaned: Vec<Point2> = Vec::with_capacity(ring.len());
    for p in ring {
        if cleaned.last().is_none_or(|q| !points_equal(q, &p)) {
            cleaned.push(p);
        }
    }
    if cleaned.len() < 3 {
        return Err(OperationError::ArrangementInvalid(format!(
            "traced boundary has only {} vertices",
            cleaned.len()
        ))
        .into());
    }
    Polygon::new(cleaned).map_err(|e| {
        OperationError::ArrangementInvalid(format!("traced boundary is degenerate: {e}")).into()
    })
}
