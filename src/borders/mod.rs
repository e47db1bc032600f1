//! Land border / coastline separation.
//!
//! Rings are flattened into segments, each segment is labelled by sampling
//! its endpoints and midpoint against the region table, and each category
//! is stitched back into polylines.

mod classify;
mod extract;
mod merge;
mod separator;

pub use classify::{SegmentClassifier, Votes};
pub use extract::{extract_segments, Shape};
pub use merge::LineMerger;
pub use separator::{separate_files, BorderSeparator, Separation, SeparationReport};
