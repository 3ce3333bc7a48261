use crate::geometry::Segment;

/// Returns `true` if two segments in the set are equal, ignoring direction.
#[must_use]
pub fn has_duplicates(segments: &[Segment]) -> bool {
    segments
        .iter()
        .enumerate()
        .any(|(i, s)| segments[i + 1..].iter().any(|t| s.same_undirected(t)))
}

/// Keeps the first occurrence of every segment, ignoring direction.
#[must_use]
pub fn remove_duplicates(segments: &[Segment]) -> Vec<Segment> {
    let mut unique: Vec<Segment> = Vec::with_capacity(segments.len());
    for s in segments {
        if !unique.iter().any(|u| u.same_undirected(s)) {
            unique.push(*s);
        }
    }
    unique
}

/// Drops zero-length segments.
#[must_use]
pub fn remove_degenerate(segments: Vec<Segment>) -> Vec<Segment> {
    segments.into_iter().filter(|s| !s.is_degenerate()).collect()
}
