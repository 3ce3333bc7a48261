use super::{cross_2d, points_equal, Point2, TOLERANCE};

/// Computes the convex hull of a point set (Andrew's monotone chain).
///
/// Returns the hull counter-clockwise, starting from the lexicographically
/// smallest point, without repeating it at the end. Duplicate points and
/// points lying on a hull edge are dropped. Fewer than three distinct
/// points are returned as-is (sorted and deduplicated).
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| points_equal(a, b));
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point2> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        push_convex(&mut lower, p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        push_convex(&mut upper, p);
    }

    // Last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Pushes `p`, first popping any tail point that would not make a strict
/// left turn.
fn push_convex(chain: &mut Vec<Point2>, p: Point2) {
    while chain.len() >= 2 {
        let a = chain[chain.len() - 2];
        let b = chain[chain.len() - 1];
        if cross_2d(&(b - a), &(p - b)) > TOLERANCE {
            break;
        }
        chain.pop();
    }
    chain.push(p);
}
