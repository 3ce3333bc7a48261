//! Convolution segment soup and its refinement into a planar arrangement.

mod augment;
mod break_up;
pub mod hygiene;

pub use augment::{augment, augment_tagged, segments_within_range};
pub use break_up::{BreakUp, DEFAULT_MAX_ITERATIONS};
pub use hygiene::{has_duplicates, remove_degenerate, remove_duplicates};
