//! Land/coastal labelling of individual segments.

use geo::Coord;

use crate::models::{ClassifiedSegment, Label, Segment};
use crate::regions::RegionClassifier;

/// Region hits over a segment's two endpoints and midpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Votes {
    pub land: u8,
    pub coastal: u8,
}

impl Votes {
    /// Majority first, then any land hit beats any coastal hit
    pub fn decide(self) -> Label {
        if self.land >= 2 {
            Label::Land
        } else if self.coastal >= 2 {
            Label::Coastal
        } else if self.land >= 1 {
            Label::Land
        } else if self.coastal >= 1 {
            Label::Coastal
        } else {
            Label::None
        }
    }
}

/// Labels segments against a fixed region table
pub struct SegmentClassifier {
    regions: RegionClassifier,
}

impl SegmentClassifier {
    pub fn new(regions: RegionClassifier) -> Self {
        Self { regions }
    }

    /// Sample points are start, end and the arithmetic midpoint
    pub fn votes(&self, segment: &Segment) -> Votes {
        let midpoint: Coord<f64> = (segment.start + segment.end) / 2.0;

        let mut votes = Votes::default();
        for point in [segment.start, segment.end, midpoint] {
            if self.regions.point_in_land_region(point.x, point.y) {
                votes.land += 1;
            }
            if self.regions.point_in_coastal_region(point.x, point.y) {
                votes.coastal += 1;
            }
        }
        votes
    }

    pub fn classify(&self, segment: &Segment) -> Label {
        self.votes(segment).decide()
    }

    pub fn classify_segment(&self, segment: Segment) -> ClassifiedSegment {
        ClassifiedSegment {
            segment,
            label: self.classify(&segment),
        }
    }
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self::new(RegionClassifier::builtin())
    }
}
