//! Bordersplit - separates a country outline into land borders and coastline
//!
//! This library provides the region tables, segment classification and line
//! merging used by the `separate` binary.

pub mod borders;
pub mod models;
pub mod regions;

pub use borders::{BorderSeparator, SegmentClassifier, SeparationReport};
pub use models::{BorderKind, Label};
pub use regions::{Region, RegionClassifier};
