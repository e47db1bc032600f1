//! Chains consecutive segments that share endpoints into polylines.
//!
//! Matching is strictly in arrival order: a segment extends the current line
//! only if its start equals the line's last point exactly. Lines that would
//! connect out of order stay separate.

use geo::{Coord, LineString, MultiLineString};

use crate::models::{Polyline, Segment};

/// Single-pass merger for one border category
#[derive(Debug, Default)]
pub struct LineMerger {
    current: Vec<Coord<f64>>,
    lines: Vec<Polyline>,
    segments: usize,
}

impl LineMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments += 1;

        if self.current.last() == Some(&segment.start) {
            self.current.push(segment.end);
            return;
        }

        self.close_current();
        self.current.push(segment.start);
        self.current.push(segment.end);
    }

    /// Number of segments fed in so far
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    fn close_current(&mut self) {
        let line = std::mem::take(&mut self.current);
        if line.len() >= 2 {
            self.lines.push(LineString::new(line));
        }
    }

    /// Close the last line and return everything merged
    pub fn finish(mut self) -> MultiLineString<f64> {
        self.close_current();
        MultiLineString::new(self.lines)
    }
}
