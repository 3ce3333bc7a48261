use crate::geometry::{MinkowskiSegment, Polygon, Segment, Source};
use crate::math::angle_2d::{angle_in_range, angle_of};

/// Edges of `polygon`, in ring order, whose heading lies in the circular
/// range `[lower, upper]` (degrees, wrapping through 0° when `lower > upper`).
#[must_use]
pub fn segments_within_range(lower: f64, upper: f64, polygon: &Polygon) -> Vec<Segment> {
    polygon
        .edges()
        .into_iter()
        .filter(|e| angle_in_range(angle_of(e), lower, upper))
        .collect()
}

/// Convolution segments of `a` and `b`, tagged with the polygon each edge
/// came from.
///
/// B's edges placed at A's vertices come first, then A's edges placed at
/// B's vertices. Both polygons are expected counter-clockwise.
#[must_use]
pub fn augment_tagged(a: &Polygon, b: &Polygon) -> Vec<MinkowskiSegment> {
    let mut out = Vec::new();
    convolve(a, b, Source::B, &mut out);
    convolve(b, a, Source::A, &mut out);
    out
}

/// Untagged form of [`augment_tagged`].
#[must_use]
pub fn augment(a: &Polygon, b: &Polygon) -> Vec<Segment> {
    augment_tagged(a, b).into_iter().map(Segment::from).collect()
}

/// Places every edge of `edges_of` whose heading falls between the incoming
/// and outgoing headings at a vertex of `vertices_of` onto that vertex.
fn convolve(
    vertices_of: &Polygon,
    edges_of: &Polygon,
    source: Source,
    out: &mut Vec<MinkowskiSegment>,
) {
    let ring = vertices_of.vertices();
    let n = ring.len();
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let v = ring[i];
        let next = ring[(i + 1) % n];
        let incoming = angle_of(&Segment::new(prev, v));
        let outgoing = angle_of(&Segment::new(v, next));
        for edge in segments_within_range(incoming, outgoing, edges_of) {
            out.push(MinkowskiSegment::new(edge.translated(&v.coords), source, v));
        }
    }
}
