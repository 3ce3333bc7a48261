use super::intersect_2d::{orientation, Orientation};
use super::{epsilon_equals, points_equal, Point2, Vector2, TOLERANCE};

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Edge sum `Σ (x[i+1] - x[i]) * (y[i+1] + y[i])` over the closed ring.
///
/// Positive for clockwise rings.
#[must_use]
pub fn shoelace_sum(points: &[Point2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            (b.x - a.x) * (b.y + a.y)
        })
        .sum()
}

/// Returns `true` if the ring winds counter-clockwise.
///
/// A zero-area ring counts as counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    shoelace_sum(points) <= 0.0
}

/// Returns the ring in counter-clockwise order.
///
/// A clockwise ring keeps its first vertex and reverses the remainder.
#[must_use]
pub fn order_counter_clockwise(points: &[Point2]) -> Vec<Point2> {
    if points.is_empty() || is_counter_clockwise(points) {
        return points.to_vec();
    }
    let mut ordered = Vec::with_capacity(points.len());
    ordered.push(points[0]);
    ordered.extend(points[1..].iter().rev());
    ordered
}

/// Rotates every point about the origin by `degrees` (counter-clockwise positive).
#[must_use]
pub fn rotate_points(points: &[Point2], degrees: f64) -> Vec<Point2> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    points
        .iter()
        .map(|p| Point2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

/// Translates every point by `offset`.
#[must_use]
pub fn translate_points(points: &[Point2], offset: &Vector2) -> Vec<Point2> {
    points.iter().map(|p| p + offset).collect()
}

/// Vertex with minimal X, ties broken by minimal Y.
#[must_use]
pub fn bottom_left_point(points: &[Point2]) -> Option<Point2> {
    let (first, rest) = points.split_first()?;
    let mut best = *first;
    for &pt in rest {
        if pt.x < best.x - TOLERANCE || (epsilon_equals(pt.x, best.x) && pt.y < best.y) {
            best = pt;
        }
    }
    Some(best)
}

/// Vertex with maximal Y, ties broken by maximal X.
#[must_use]
pub fn top_right_point(points: &[Point2]) -> Option<Point2> {
    let (first, rest) = points.split_first()?;
    let mut best = *first;
    for &pt in rest {
        if pt.y > best.y + TOLERANCE || (epsilon_equals(pt.y, best.y) && pt.x > best.x) {
            best = pt;
        }
    }
    Some(best)
}

/// Signed per-axis offset that carries `from` onto `to`.
#[must_use]
pub fn scalar_distance(from: &Point2, to: &Point2) -> Vector2 {
    to - from
}

/// Removes consecutive duplicates and vertices lying on the line through
/// their neighbours (including fold-back spikes), cyclically, until stable.
#[must_use]
pub fn remove_collinear_vertices(points: &[Point2]) -> Vec<Point2> {
    let mut ring = points.to_vec();
    loop {
        let n = ring.len();
        if n < 3 {
            return ring;
        }
        let redundant = (0..n).find(|&i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            points_equal(&prev, &ring[i])
                || orientation(&prev, &ring[i], &next) == Orientation::Collinear
        });
        match redundant {
            Some(i) => {
                ring.remove(i);
            }
            None => return ring,
        }
    }
}
