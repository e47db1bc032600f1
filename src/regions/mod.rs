//! Static land-border regions and coastal predicates.
//!
//! Land regions are axis-aligned lat/lon boxes held in an R-tree; coastal
//! membership is a fixed set of coordinate bands.

mod config;
mod index;

pub use config::{RegionError, RegionsConfig};
pub use index::RegionIndex;

use serde::Deserialize;

/// A named, closed bounding box used as a land-border heuristic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub name: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Region {
    pub fn new(name: &str, lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            name: name.to_string(),
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Inclusive on all four edges
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }
}

// name, lat_min, lat_max, lon_min, lon_max
const BUILTIN_REGIONS: [(&str, f64, f64, f64, f64); 10] = [
    ("Pakistan", 23.0, 37.0, 68.0, 74.5),
    ("China-West", 32.0, 37.0, 74.0, 80.0),
    ("China-Central", 29.0, 32.0, 78.0, 89.0),
    ("China-East", 27.0, 30.0, 89.0, 97.5),
    ("Nepal", 26.0, 30.5, 80.0, 88.2),
    ("Bhutan", 26.5, 28.5, 88.5, 92.2),
    ("Bangladesh-North", 24.0, 26.5, 88.0, 92.5),
    ("Bangladesh-East", 21.5, 25.0, 91.5, 92.8),
    ("Bangladesh-South", 20.5, 24.0, 88.5, 92.5),
    ("Myanmar", 20.0, 29.0, 93.5, 97.5),
];

/// India's neighbours: Pakistan, China, Nepal, Bhutan, Bangladesh, Myanmar
pub fn builtin_regions() -> Vec<Region> {
    BUILTIN_REGIONS
        .iter()
        .map(|&(name, lat_min, lat_max, lon_min, lon_max)| {
            Region::new(name, lat_min, lat_max, lon_min, lon_max)
        })
        .collect()
}

/// Coastline bands, calibrated to the Indian peninsula and islands
pub fn point_in_coastal_region(lon: f64, lat: f64) -> bool {
    // Arabian Sea and Gujarat coast
    if lon < 77.0 && lat < 24.0 {
        return true;
    }

    // Southern tip and Lakshadweep
    if lat < 12.0 {
        return true;
    }

    // Bay of Bengal, below Bangladesh
    if lon > 79.0 && lat < 22.0 && lon < 88.0 {
        return true;
    }

    // Andaman and Nicobar Islands
    lon > 92.0 && lat < 14.0
}

/// Answers land and coastal membership queries for a point
pub struct RegionClassifier {
    land: RegionIndex,
}

impl RegionClassifier {
    pub fn new(land: RegionIndex) -> Self {
        Self { land }
    }

    /// Classifier over the built-in region table
    pub fn builtin() -> Self {
        Self::new(RegionIndex::build(builtin_regions()))
    }

    pub fn point_in_land_region(&self, lon: f64, lat: f64) -> bool {
        self.land.contains(lon, lat)
    }

    pub fn point_in_coastal_region(&self, lon: f64, lat: f64) -> bool {
        point_in_coastal_region(lon, lat)
    }

    /// Land regions (for stats/debugging)
    pub fn land_regions(&self) -> &RegionIndex {
        &self.land
    }
}

impl Default for RegionClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
