//! Spatial index for land-border region lookups.

use rstar::{RTree, RTreeObject, AABB};
use tracing::debug;

use super::Region;

/// Wrapper for R-tree indexing of regions
#[derive(Debug, Clone)]
struct IndexedRegion {
    region: Region,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedRegion {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedRegion {
    fn new(region: Region) -> Self {
        let envelope = AABB::from_corners(
            [region.lon_min, region.lat_min],
            [region.lon_max, region.lat_max],
        );
        Self { region, envelope }
    }
}

/// Immutable R-tree over the land region table
pub struct RegionIndex {
    tree: RTree<IndexedRegion>,
}

impl RegionIndex {
    pub fn build(regions: Vec<Region>) -> Self {
        let indexed: Vec<IndexedRegion> = regions.into_iter().map(IndexedRegion::new).collect();
        let tree = RTree::bulk_load(indexed);

        debug!("Region index built with {} entries", tree.size());

        Self { tree }
    }

    /// Names of all regions whose closed box contains the point
    pub fn regions_at(&self, lon: f64, lat: f64) -> Vec<&str> {
        // Envelope intersection is boundary-inclusive, same as `Region::contains`
        let query_envelope = AABB::from_point([lon, lat]);

        self.tree
            .locate_in_envelope_intersecting(&query_envelope)
            .map(|ir| ir.region.name.as_str())
            .collect()
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        !self.regions_at(lon, lat).is_empty()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::builtin_regions;

    #[test]
    fn test_overlapping_regions() {
        let index = RegionIndex::build(builtin_regions());
        assert_eq!(index.len(), 10);

        // Pakistan and China-West share the 74..74.5 lon strip
        let mut names = index.regions_at(74.2, 34.0);
        names.sort();
        assert_eq!(names, vec!["China-West", "Pakistan"]);
    }

    #[test]
    fn test_edge_point_found() {
        let index = RegionIndex::build(vec![Region::new("Box", 0.0, 1.0, 0.0, 1.0)]);
        assert!(index.contains(1.0, 1.0));
        assert!(index.contains(0.0, 0.5));
        assert!(!index.contains(1.0000001, 0.5));
    }

    #[test]
    fn test_empty_index() {
        let index = RegionIndex::build(vec![]);
        assert!(index.is_empty());
        assert!(index.regions_at(70.0, 30.0).is_empty());
    }
}
