//! Core data models for border separation.

pub mod border;
pub mod geojson;

pub use border::{BorderKind, ClassifiedSegment, Label, Polyline, Segment};
pub use geojson::{BorderDocument, InputCollection, InputFeature, InputGeometry, Position};
