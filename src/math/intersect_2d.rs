use super::{cross_2d, epsilon_equals, points_equal, Point2, Vector2, TOLERANCE};
use crate::geometry::Segment;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Relationship between two segments.
///
/// Classification is layered (parallel, collinear, L-touch, T, crossing)
/// so exactly one variant describes any pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentRelation {
    /// Parallel on the same supporting line with overlapping extents.
    Collinear,
    /// Parallel but not overlapping.
    Parallel,
    /// Non-parallel, sharing an endpoint.
    LTouch,
    /// An endpoint of one segment lands on the interior of the other.
    TIntersection(Point2),
    /// Interiors cross at a single point.
    Crossing(Point2),
    /// No contact.
    Disjoint,
}

/// Returns `true` if the segment's X coordinates are epsilon-equal.
#[must_use]
pub fn is_vertical(s: &Segment) -> bool {
    epsilon_equals(s.start.x, s.end.x)
}

/// Returns `true` if the segment's Y coordinates are epsilon-equal.
#[must_use]
pub fn is_horizontal(s: &Segment) -> bool {
    epsilon_equals(s.start.y, s.end.y)
}

/// Rise over run. Only meaningful for non-vertical segments.
#[must_use]
pub fn slope(s: &Segment) -> f64 {
    (s.end.y - s.start.y) / (s.end.x - s.start.x)
}

/// Returns `true` if both segments are horizontal, both vertical, or their
/// slopes are epsilon-equal.
#[must_use]
pub fn is_parallel(s1: &Segment, s2: &Segment) -> bool {
    if is_horizontal(s1) && is_horizontal(s2) {
        return true;
    }
    if is_vertical(s1) && is_vertical(s2) {
        return true;
    }
    // Exactly one vertical: never parallel, and its slope would be infinite.
    if is_vertical(s1) || is_vertical(s2) {
        return false;
    }
    epsilon_equals(slope(s1), slope(s2))
}

/// Returns `true` if two parallel segments share a supporting line and their
/// projections onto the shared axis overlap (touching counts).
///
/// The axis is Y when either segment is vertical, X otherwise.
#[must_use]
pub fn is_overlapping(s1: &Segment, s2: &Segment) -> bool {
    if !is_parallel(s1, s2) || !on_same_line(s1, s2) {
        return false;
    }
    let (min1, max1) = axis_extent(s1, project_on_y(s1, s2));
    let (min2, max2) = axis_extent(s2, project_on_y(s1, s2));
    max2 >= min1 - TOLERANCE && max1 >= min2 - TOLERANCE
}

/// `is_parallel && is_overlapping`.
#[must_use]
pub fn is_collinear(s1: &Segment, s2: &Segment) -> bool {
    is_parallel(s1, s2) && is_overlapping(s1, s2)
}

/// Length of the shared extent of two collinear segments along their axis.
///
/// Zero when they only touch end to end; negative when they are apart.
#[must_use]
pub fn overlap_length(s1: &Segment, s2: &Segment) -> f64 {
    let use_y = project_on_y(s1, s2);
    let (min1, max1) = axis_extent(s1, use_y);
    let (min2, max2) = axis_extent(s2, use_y);
    max1.min(max2) - min1.max(min2)
}

/// Orientation of the triple `(p, q, r)` from the sign of `(q - p) x (r - q)`.
///
/// The triple is collinear when `r` lies within [`TOLERANCE`] of the line
/// through `p` and `q`, so the gate does not shrink with segment length.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let pq = q - p;
    let val = cross_2d(&pq, &(r - q));
    if val.abs() <= TOLERANCE * pq.norm() {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Returns `true` if the segments share an endpoint in any start/end combination.
#[must_use]
pub fn is_l_touch(s1: &Segment, s2: &Segment) -> bool {
    points_equal(&s1.start, &s2.start)
        || points_equal(&s1.start, &s2.end)
        || points_equal(&s1.end, &s2.start)
        || points_equal(&s1.end, &s2.end)
}

/// Strict crossing test: parallel, collinear and L-touching pairs never cross.
///
/// A T-junction (endpoint on the other's interior) counts as a crossing.
#[must_use]
pub fn is_crossing(s1: &Segment, s2: &Segment) -> bool {
    if is_collinear(s1, s2) || is_parallel(s1, s2) {
        return false;
    }
    if is_l_touch(s1, s2) {
        return false;
    }

    // Axis-aligned pairs are compared directly to stay clear of infinite slopes.
    let vertical_horizontal = if is_vertical(s1) && is_horizontal(s2) {
        Some((s1, s2))
    } else if is_horizontal(s1) && is_vertical(s2) {
        Some((s2, s1))
    } else {
        None
    };
    if let Some((v, h)) = vertical_horizontal {
        return within(v.start.x, h.start.x, h.end.x) && within(h.start.y, v.start.y, v.end.y);
    }

    let o1 = orientation(&s1.start, &s1.end, &s2.start);
    let o2 = orientation(&s1.start, &s1.end, &s2.end);
    let o3 = orientation(&s2.start, &s2.end, &s1.start);
    let o4 = orientation(&s2.start, &s2.end, &s1.end);
    o1 != o2 && o3 != o4
}

/// Returns `true` if the segments cross at a point that is an endpoint of
/// one of them (but not a shared endpoint).
#[must_use]
pub fn is_t_intersection(s1: &Segment, s2: &Segment) -> bool {
    line_intersection(s1, s2).is_some_and(|p| lands_on_endpoint(s1, s2, &p))
}

/// Intersection point of two crossing segments, or `None` if they do not cross.
///
/// Solves `p + t * r = q + u * s` for `t = cross(q - p, s) / cross(r, s)`.
#[must_use]
pub fn line_intersection(s1: &Segment, s2: &Segment) -> Option<Point2> {
    if !is_crossing(s1, s2) {
        return None;
    }
    let r = s1.direction();
    let s = s2.direction();
    let (t, _) = line_line_intersect_2d(&s1.start, &r, &s2.start, &s)?;
    Some(s1.start + r * t)
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1, d2);
    if cross.abs() < f64::EPSILON {
        return None;
    }
    let offset = p2 - p1;
    let t = cross_2d(&offset, d2) / cross;
    let u = cross_2d(&offset, d1) / cross;
    Some((t, u))
}

/// Classifies the relationship between two segments.
#[must_use]
pub fn classify(s1: &Segment, s2: &Segment) -> SegmentRelation {
    if is_collinear(s1, s2) {
        return SegmentRelation::Collinear;
    }
    if is_parallel(s1, s2) {
        return SegmentRelation::Parallel;
    }
    if is_l_touch(s1, s2) {
        return SegmentRelation::LTouch;
    }
    match line_intersection(s1, s2) {
        Some(p) if lands_on_endpoint(s1, s2, &p) => SegmentRelation::TIntersection(p),
        Some(p) => SegmentRelation::Crossing(p),
        None => SegmentRelation::Disjoint,
    }
}

fn lands_on_endpoint(s1: &Segment, s2: &Segment, p: &Point2) -> bool {
    points_equal(p, &s1.start)
        || points_equal(p, &s1.end)
        || points_equal(p, &s2.start)
        || points_equal(p, &s2.end)
}

fn on_same_line(s1: &Segment, s2: &Segment) -> bool {
    orientation(&s1.start, &s1.end, &s2.start) == Orientation::Collinear
        && orientation(&s1.start, &s1.end, &s2.end) == Orientation::Collinear
}

fn project_on_y(s1: &Segment, s2: &Segment) -> bool {
    is_vertical(s1) || is_vertical(s2)
}

fn axis_extent(s: &Segment, use_y: bool) -> (f64, f64) {
    let (a, b) = if use_y {
        (s.start.y, s.end.y)
    } else {
        (s.start.x, s.end.x)
    };
    (a.min(b), a.max(b))
}

/// Inclusive range check with tolerance; `a` and `b` may be in either order.
fn within(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) - TOLERANCE && value <= a.max(b) + TOLERANCE
}
