use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::Segment;
use crate::math::intersect_2d::{is_collinear, is_vertical, line_intersection, overlap_length};
use crate::math::{points_equal, Point2, TOLERANCE};
use crate::visualize::{NullSink, Tag, VisualizationSink};

use super::hygiene::{has_duplicates, remove_degenerate, remove_duplicates};

/// Default cap on split iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Splits a segment soup until no two segments cross or overlap.
///
/// Each iteration removes duplicates, finds the first offending pair,
/// and replaces it with its pieces. L-touches and end-to-end collinear
/// contacts are left alone.
#[derive(Debug, Clone)]
pub struct BreakUp {
    worklist: Vec<Segment>,
    max_iterations: usize,
}

impl BreakUp {
    /// Creates a break-up over `segments`.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            worklist: segments,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Runs the fixpoint.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::DidNotConverge` if the cap is reached.
    pub fn execute(self) -> Result<Vec<Segment>> {
        self.execute_with_sink(&mut NullSink)
    }

    /// Runs the fixpoint, reporting every piece it produces.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::DidNotConverge` if the cap is reached.
    pub fn execute_with_sink(self, sink: &mut dyn VisualizationSink) -> Result<Vec<Segment>> {
        let mut work = remove_degenerate(self.worklist);

        for iteration in 0..self.max_iterations {
            if has_duplicates(&work) {
                work = remove_duplicates(&work);
            }

            let Some((i, j, pieces)) = find_split(&work) else {
                debug!(iterations = iteration, segments = work.len(), "break-up converged");
                return Ok(work);
            };

            trace!(
                iteration,
                first = ?work[i],
                second = ?work[j],
                pieces = pieces.len(),
                "split"
            );
            // j > i, so removing j first keeps i valid.
            work.remove(j);
            work.remove(i);
            for piece in pieces {
                sink.record(&piece.into(), Tag::Split, &format!("split {iteration}"));
                work.push(piece);
            }
        }

        Err(OperationError::DidNotConverge {
            iterations: self.max_iterations,
        }
        .into())
    }
}

/// First pair `(i, j)` with `i < j` that needs splitting, with its pieces.
fn find_split(segments: &[Segment]) -> Option<(usize, usize, Vec<Segment>)> {
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if let Some(pieces) = split_pair(segments, i, j) {
                return Some((i, j, pieces));
            }
        }
    }
    None
}

/// Pieces replacing `segments[i]` and `segments[j]`, or `None` if the pair
/// is already clean.
fn split_pair(segments: &[Segment], i: usize, j: usize) -> Option<Vec<Segment>> {
    let (s1, s2) = (&segments[i], &segments[j]);
    if is_collinear(s1, s2) {
        if overlap_length(s1, s2) <= TOLERANCE {
            return None;
        }
        let shared = |p: &Point2| {
            segments.iter().enumerate().any(|(k, s)| {
                k != i && k != j && (points_equal(&s.start, p) || points_equal(&s.end, p))
            })
        };
        return Some(split_collinear(s1, s2, shared));
    }
    let p = snap_to_endpoint(s1, s2, line_intersection(s1, s2)?);
    let mut pieces = split_at(s1, p);
    pieces.extend(split_at(s2, p));
    Some(pieces)
}

/// Sorts the four endpoints along the shared axis and covers their span
/// with `p0 -> p1` and `p1 -> p3`.
///
/// `p2` is kept as a vertex (`p1 -> p2 -> p3`) when `shared` reports that
/// another segment ends there, so a junction is never merged away.
fn split_collinear(s1: &Segment, s2: &Segment, shared: impl Fn(&Point2) -> bool) -> Vec<Segment> {
    let use_y = is_vertical(s1) || is_vertical(s2);
    let mut points = [s1.start, s1.end, s2.start, s2.end];
    points.sort_by(|a, b| axis(a, use_y).total_cmp(&axis(b, use_y)));
    let mut pieces = vec![Segment::new(points[0], points[1])];
    if shared(&points[2]) {
        pieces.push(Segment::new(points[1], points[2]));
        pieces.push(Segment::new(points[2], points[3]));
    } else {
        pieces.push(Segment::new(points[1], points[3]));
    }
    pieces.retain(|s| !s.is_degenerate());
    pieces
}

/// Replaces a computed intersection with an existing endpoint when it
/// falls on or past the end of either segment, or within tolerance of one.
///
/// Splitting at the endpoint itself leaves that segment whole and makes
/// the pieces of the other meet it exactly.
fn snap_to_endpoint(s1: &Segment, s2: &Segment, p: Point2) -> Point2 {
    for s in [s1, s2] {
        let d = s.direction();
        let t = (p - s.start).dot(&d) / d.norm_squared();
        if t <= 0.0 {
            return s.start;
        }
        if t >= 1.0 {
            return s.end;
        }
    }
    [s1.start, s1.end, s2.start, s2.end]
        .into_iter()
        .find(|e| points_equal(e, &p))
        .unwrap_or(p)
}

fn split_at(s: &Segment, p: Point2) -> Vec<Segment> {
    [Segment::new(s.start, p), Segment::new(p, s.end)]
        .into_iter()
        .filter(|piece| !piece.is_degenerate())
        .collect()
}

fn axis(p: &Point2, use_y: bool) -> f64 {
    if use_y {
        p.y
    } else {
        p.x
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MinkowskiError;
    use crate::math::intersect_2d::is_crossing;
    use crate::visualize::RecordingSink;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::from_coords(x0, y0, x1, y1)
    }

    fn contains(segments: &[Segment], s: &Segment) -> bool {
        segments.iter().any(|t| t.same_undirected(s))
    }

    fn assert_clean(segments: &[Segment]) {
        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                assert!(!is_crossing(a, b), "{a:?} crosses {b:?}");
                assert!(!a.same_undirected(b), "duplicate {a:?}");
            }
        }
    }

    #[test]
    fn collinear_overlap_becomes_two_pieces() {
        let result = BreakUp::new(vec![seg(0.0, 0.0, 2.0, 2.0), seg(1.0, 1.0, 3.0, 3.0)])
            .execute()
            .unwrap();
        assert_eq!(result.len(), 2);
        assert!(contains(&result, &seg(0.0, 0.0, 1.0, 1.0)));
        assert!(contains(&result, &seg(1.0, 1.0, 3.0, 3.0)));
    }

    #[test]
    fn collinear_containment_keeps_the_span() {
        let result = BreakUp::new(vec![seg(0.0, 0.0, 0.0, 3.0), seg(0.0, 1.0, 0.0, 2.0)])
            .execute()
            .unwrap();
        assert_clean(&result);
        let total: f64 = result.iter().map(Segment::length).sum();
        assert!((total - 3.0).abs() < 1e-9, "result={result:?}");
    }

    #[test]
    fn plain_crossing_becomes_four_pieces() {
        let result = BreakUp::new(vec![seg(0.0, 0.0, 2.0, 2.0), seg(0.0, 2.0, 2.0, 0.0)])
            .execute()
            .unwrap();
        assert_eq!(result.len(), 4);
        for expected in [
            seg(0.0, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 2.0, 2.0),
            seg(0.0, 2.0, 1.0, 1.0),
            seg(1.0, 1.0, 2.0, 0.0),
        ] {
            assert!(contains(&result, &expected), "missing {expected:?}");
        }
    }

    #[test]
    fn t_intersection_splits_only_the_hit_segment() {
        let result = BreakUp::new(vec![seg(0.0, 2.0, 2.0, 0.0), seg(1.0, 1.0, 3.0, 3.0)])
            .execute()
            .unwrap();
        assert_eq!(result.len(), 3);
        assert!(contains(&result, &seg(0.0, 2.0, 1.0, 1.0)));
        assert!(contains(&result, &seg(1.0, 1.0, 2.0, 0.0)));
        assert!(contains(&result, &seg(1.0, 1.0, 3.0, 3.0)));
    }

    #[test]
    fn collinear_merge_keeps_a_junction_vertex() {
        let stem = seg(2.0, 0.0, 2.0, 1.0);
        let mut sink = RecordingSink::new();
        let result = BreakUp::new(vec![seg(0.0, 0.0, 2.0, 0.0), seg(1.0, 0.0, 3.0, 0.0), stem])
            .execute_with_sink(&mut sink)
            .unwrap();
        assert_eq!(result.len(), 4);
        for expected in [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 2.0, 0.0),
            seg(2.0, 0.0, 3.0, 0.0),
            stem,
        ] {
            assert!(contains(&result, &expected), "missing {expected:?}");
        }
        // One split, no T re-split at (2, 0) afterwards.
        assert_eq!(sink.with_tag(Tag::Split).count(), 3);
    }

    #[test]
    fn split_lands_exactly_on_a_near_endpoint() {
        let base = seg(0.0, 0.0, 1.0, 0.0);
        let post = seg(0.5, 1.0, 0.5, 5e-8);
        let result = BreakUp::new(vec![base, post]).execute().unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.contains(&post));
        let foot = post.end;
        assert!(result.contains(&Segment::new(base.start, foot)));
        assert!(result.contains(&Segment::new(foot, base.end)));
    }

    #[test]
    fn duplicates_and_l_touches_are_tolerated() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        let result = BreakUp::new(vec![a, b, a.reversed()]).execute().unwrap();
        assert_eq!(result, vec![a, b]);
    }

    #[test]
    fn grid_resolves_to_clean_arrangement() {
        let mut segments = Vec::new();
        for k in 0..4 {
            let c = f64::from(k);
            segments.push(seg(-0.5, c, 3.5, c));
            segments.push(seg(c, -0.5, c, 3.5));
        }
        let mut sink = RecordingSink::new();
        let result = BreakUp::new(segments).execute_with_sink(&mut sink).unwrap();
        assert_clean(&result);
        // Each line is cut at 4 crossings into 5 pieces.
        assert_eq!(result.len(), 40);
        assert!(sink.with_tag(Tag::Split).count() >= 40);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let err = BreakUp::new(vec![seg(0.0, 0.0, 2.0, 2.0), seg(0.0, 2.0, 2.0, 0.0)])
            .with_max_iterations(1)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MinkowskiError::Operation(OperationError::DidNotConverge { iterations: 1 })
        ));
    }
}
