//! Flattening of polygon rings into consecutive-point segments.

use geo::Line;

use crate::models::{InputGeometry, Position, Segment};

/// Borrowed view over one level of polygon nesting
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Ring(&'a [Position]),
    Polygon(&'a [Vec<Position>]),
    MultiPolygon(&'a [Vec<Vec<Position>>]),
}

impl<'a> Shape<'a> {
    /// `None` for geometry types that carry no rings
    pub fn from_geometry(geometry: &'a InputGeometry) -> Option<Self> {
        match geometry {
            InputGeometry::Polygon { coordinates } => Some(Shape::Polygon(coordinates)),
            InputGeometry::MultiPolygon { coordinates } => Some(Shape::MultiPolygon(coordinates)),
            InputGeometry::Unsupported => None,
        }
    }

    /// Total number of ring positions under this shape
    pub fn vertex_count(&self) -> usize {
        match self {
            Shape::Ring(ring) => ring.len(),
            Shape::Polygon(rings) => rings.iter().map(|r| Shape::Ring(r).vertex_count()).sum(),
            Shape::MultiPolygon(polygons) => polygons
                .iter()
                .map(|p| Shape::Polygon(p).vertex_count())
                .sum(),
        }
    }

    /// Number of rings with at least one position; each yields `len - 1` segments
    pub fn ring_count(&self) -> usize {
        match self {
            Shape::Ring(ring) => usize::from(!ring.is_empty()),
            Shape::Polygon(rings) => rings.iter().map(|r| Shape::Ring(r).ring_count()).sum(),
            Shape::MultiPolygon(polygons) => polygons
                .iter()
                .map(|p| Shape::Polygon(p).ring_count())
                .sum(),
        }
    }
}

/// Append the segments of every ring under `shape` to `out`, in traversal order.
///
/// Rings are not closed: a ring contributes its closing edge only if its last
/// position already repeats the first.
pub fn extract_segments(shape: Shape<'_>, out: &mut Vec<Segment>) {
    match shape {
        Shape::Ring(ring) => {
            out.extend(ring.windows(2).map(|pair| Line::new(pair[0].0, pair[1].0)));
        }
        Shape::Polygon(rings) => {
            for ring in rings {
                extract_segments(Shape::Ring(ring), out);
            }
        }
        Shape::MultiPolygon(polygons) => {
            for polygon in polygons {
                extract_segments(Shape::Polygon(polygon), out);
            }
        }
    }
}
