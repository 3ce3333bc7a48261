pub mod polygon;
pub mod segment;
pub mod shape;
pub mod tagged;

pub use polygon::Polygon;
pub use segment::Segment;
pub use shape::Shape;
pub use tagged::{MinkowskiSegment, Source};
