//! Feature-by-feature land/coastal separation.

use std::path::Path;

use anyhow::Result;
use geo::{CoordsIter, MultiLineString};
use tracing::{debug, info};

use super::classify::SegmentClassifier;
use super::extract::{extract_segments, Shape};
use super::merge::LineMerger;
use crate::models::{BorderDocument, BorderKind, InputCollection, InputFeature, Segment};

/// Counts gathered over one run.
///
/// Every ring with `n` positions yields `n - 1` segments, so
/// `land_segments + coastal_segments + dropped_segments == input_vertices - input_rings`.
/// Every merged line is its first segment's two points plus one point per
/// further segment, so `land_vertices == land_segments + land_lines` (same for
/// coastal). A vertex where the label changes ends a line in one category and
/// starts one in the other, so output vertices can exceed `input_vertices`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeparationReport {
    pub features_processed: usize,
    pub features_skipped: usize,
    pub input_vertices: usize,
    pub input_rings: usize,
    pub land_segments: usize,
    pub coastal_segments: usize,
    pub dropped_segments: usize,
    pub land_lines: usize,
    pub coastal_lines: usize,
    pub land_vertices: usize,
    pub coastal_vertices: usize,
}

/// Merged lines for both categories
#[derive(Debug)]
pub struct Separation {
    pub land: MultiLineString<f64>,
    pub coastal: MultiLineString<f64>,
    pub report: SeparationReport,
}

impl Separation {
    pub fn lines(&self, kind: BorderKind) -> &MultiLineString<f64> {
        match kind {
            BorderKind::Land => &self.land,
            BorderKind::Coastal => &self.coastal,
        }
    }

    pub fn document(&self, kind: BorderKind) -> BorderDocument {
        BorderDocument::new(kind, self.lines(kind))
    }

    /// Write both categories; empty categories still get a document
    pub fn write_to_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        land_path: P,
        coastal_path: Q,
    ) -> Result<()> {
        for (kind, path) in [
            (BorderKind::Land, land_path.as_ref()),
            (BorderKind::Coastal, coastal_path.as_ref()),
        ] {
            info!("Writing {}...", path.display());
            self.document(kind).write_to_file(path)?;
        }
        Ok(())
    }
}

/// Routes classified segments of every polygon feature into per-category mergers
pub struct BorderSeparator {
    classifier: SegmentClassifier,
    land: LineMerger,
    coastal: LineMerger,
    report: SeparationReport,
    // Reused across features
    segments: Vec<Segment>,
}

impl BorderSeparator {
    pub fn new(classifier: SegmentClassifier) -> Self {
        Self {
            classifier,
            land: LineMerger::new(),
            coastal: LineMerger::new(),
            report: SeparationReport::default(),
            segments: Vec::new(),
        }
    }

    /// Classify one feature's segments. Returns false if the feature was skipped.
    pub fn add_feature(&mut self, feature: &InputFeature) -> bool {
        let shape = match feature.geometry.as_ref().and_then(Shape::from_geometry) {
            Some(shape) => shape,
            None => {
                debug!("Skipping feature without polygon geometry");
                self.report.features_skipped += 1;
                return false;
            }
        };

        self.report.features_processed += 1;
        self.report.input_vertices += shape.vertex_count();
        self.report.input_rings += shape.ring_count();

        self.segments.clear();
        extract_segments(shape, &mut self.segments);

        for &segment in &self.segments {
            let classified = self.classifier.classify_segment(segment);
            match classified.label.border_kind() {
                Some(BorderKind::Land) => self.land.add_segment(classified.segment),
                Some(BorderKind::Coastal) => self.coastal.add_segment(classified.segment),
                None => self.report.dropped_segments += 1,
            }
        }

        true
    }

    pub fn finish(self) -> Separation {
        let mut report = self.report;
        report.land_segments = self.land.segment_count();
        report.coastal_segments = self.coastal.segment_count();

        let land = self.land.finish();
        let coastal = self.coastal.finish();

        report.land_lines = land.0.len();
        report.coastal_lines = coastal.0.len();
        report.land_vertices = land.coords_count();
        report.coastal_vertices = coastal.coords_count();

        Separation {
            land,
            coastal,
            report,
        }
    }
}

/// Read `input`, separate, and write both outputs.
///
/// `on_feature(done, total)` is called after each input feature.
pub fn separate_files<F>(
    input: &Path,
    land_output: &Path,
    coastal_output: &Path,
    classifier: SegmentClassifier,
    mut on_feature: F,
) -> Result<SeparationReport>
where
    F: FnMut(usize, usize),
{
    info!("Reading {}...", input.display());
    let collection = InputCollection::load_from_file(input)?;

    info!("Processing features...");
    let total = collection.features.len();
    let mut separator = BorderSeparator::new(classifier);
    for (i, feature) in collection.features.iter().enumerate() {
        separator.add_feature(feature);
        on_feature(i + 1, total);
    }
    let separation = separator.finish();

    separation.write_to_files(land_output, coastal_output)?;
    Ok(separation.report)
}
