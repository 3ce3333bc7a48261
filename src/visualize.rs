//! Optional diagnostics hook for intermediate geometry.
//!
//! Operations report the shapes they produce to a [`VisualizationSink`].
//! Results never depend on what the sink does with them.

use tracing::trace;

use crate::geometry::Shape;

/// Role of a reported shape within the sum pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A translated copy of an input polygon (convex path).
    Translated,
    /// A convolution segment produced by augmentation.
    Augmented,
    /// A piece produced by the break-up loop.
    Split,
    /// The starting segment of the boundary walk.
    Outermost,
    /// A segment accepted by the boundary walk.
    Boundary,
    /// The final sum polygon.
    Result,
}

/// Receiver for intermediate shapes.
pub trait VisualizationSink {
    /// Records one shape with its role and a free-form label.
    fn record(&mut self, shape: &Shape, tag: Tag, label: &str);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl VisualizationSink for NullSink {
    fn record(&mut self, _shape: &Shape, _tag: Tag, _label: &str) {}
}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkEvent {
    pub shape: Shape,
    pub tag: Tag,
    pub label: String,
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events carrying `tag`, in recording order.
    pub fn with_tag(&self, tag: Tag) -> impl Iterator<Item = &SinkEvent> {
        self.events.iter().filter(move |e| e.tag == tag)
    }
}

impl VisualizationSink for RecordingSink {
    fn record(&mut self, shape: &Shape, tag: Tag, label: &str) {
        self.events.push(SinkEvent {
            shape: shape.clone(),
            tag,
            label: label.to_owned(),
        });
    }
}

/// Forwards events to `tracing` at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl VisualizationSink for TracingSink {
    fn record(&mut self, shape: &Shape, tag: Tag, label: &str) {
        trace!(?tag, label, points = ?shape.points(), "shape");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::math::Point2;

    #[test]
    fn recording_sink_keeps_order_and_filters_by_tag() {
        let mut sink = RecordingSink::new();
        sink.record(&Point2::new(0.0, 0.0).into(), Tag::Outermost, "start");
        sink.record(
            &Segment::from_coords(0.0, 0.0, 1.0, 0.0).into(),
            Tag::Boundary,
            "b0",
        );
        sink.record(
            &Segment::from_coords(1.0, 0.0, 1.0, 1.0).into(),
            Tag::Boundary,
            "b1",
        );
        assert_eq!(sink.events.len(), 3);
        let labels: Vec<_> = sink.with_tag(Tag::Boundary).map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["b0", "b1"]);
    }

    #[test]
    fn null_and_tracing_sinks_accept_events() {
        let shape: Shape = Point2::new(1.0, 1.0).into();
        NullSink.record(&shape, Tag::Result, "ignored");
        TracingSink.record(&shape, Tag::Result, "logged");
    }
}
