//! Segment labels and border categories.

use geo_types::{Line, LineString};

/// One edge between two consecutive ring positions
pub type Segment = Line<f64>;

/// Connected run of merged segments
pub type Polyline = LineString<f64>;

/// Classification outcome for a single segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Land,
    Coastal,
    /// Internal boundary, dropped from both outputs
    None,
}

impl Label {
    /// Output category for this label, if it has one
    pub fn border_kind(self) -> Option<BorderKind> {
        match self {
            Label::Land => Some(BorderKind::Land),
            Label::Coastal => Some(BorderKind::Coastal),
            Label::None => None,
        }
    }
}

/// A segment together with its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedSegment {
    pub segment: Segment,
    pub label: Label,
}

/// Output category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// International land borders
    Land,
    /// Coastline
    Coastal,
}

impl BorderKind {
    /// Value of `properties.type` in the output document
    pub fn property_type(self) -> &'static str {
        match self {
            BorderKind::Land => "land_border",
            BorderKind::Coastal => "coastal_border",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BorderKind::Land => {
                "India's international land borders with Pakistan, China, Nepal, Bhutan, Bangladesh, Myanmar"
            }
            BorderKind::Coastal => "India's coastline - Arabian Sea, Bay of Bengal, Indian Ocean",
        }
    }
}

impl std::fmt::Display for BorderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderKind::Land => write!(f, "land"),
            BorderKind::Coastal => write!(f, "coastal"),
        }
    }
}
