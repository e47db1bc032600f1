use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::Region;

#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("region table is empty")]
    Empty,
    #[error("region '{0}' has a non-finite bound")]
    NonFinite(String),
    #[error("region '{name}' has inverted {axis} bounds ({min} > {max})")]
    Inverted {
        name: String,
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

/// Replacement land-region table, read from TOML `[[regions]]` entries
#[derive(Debug, Deserialize, Clone)]
pub struct RegionsConfig {
    pub regions: Vec<Region>,
}

impl RegionsConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read regions file")?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RegionsConfig =
            toml::from_str(content).context("Failed to parse regions file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), RegionError> {
        if self.regions.is_empty() {
            return Err(RegionError::Empty);
        }

        for region in &self.regions {
            let bounds = [region.lat_min, region.lat_max, region.lon_min, region.lon_max];
            if bounds.iter().any(|b| !b.is_finite()) {
                return Err(RegionError::NonFinite(region.name.clone()));
            }
            if region.lat_min > region.lat_max {
                return Err(RegionError::Inverted {
                    name: region.name.clone(),
                    axis: "lat",
                    min: region.lat_min,
                    max: region.lat_max,
                });
            }
            if region.lon_min > region.lon_max {
                return Err(RegionError::Inverted {
                    name: region.name.clone(),
                    axis: "lon",
                    min: region.lon_min,
                    max: region.lon_max,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_regions() {
        let config = RegionsConfig::from_toml(
            r#"
            [[regions]]
            name = "Pakistan"
            lat_min = 23
            lat_max = 37
            lon_min = 68
            lon_max = 74.5
            "#,
        )
        .unwrap();
        assert_eq!(
            config.regions,
            vec![Region::new("Pakistan", 23.0, 37.0, 68.0, 74.5)]
        );
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = RegionsConfig {
            regions: vec![Region::new("Backwards", 30.0, 20.0, 68.0, 74.0)],
        };
        assert_eq!(
            config.validate(),
            Err(RegionError::Inverted {
                name: "Backwards".to_string(),
                axis: "lat",
                min: 30.0,
                max: 20.0,
            })
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(RegionsConfig::from_toml("regions = []").is_err());
        assert_eq!(
            RegionsConfig { regions: vec![] }.validate(),
            Err(RegionError::Empty)
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = RegionsConfig {
            regions: vec![Region::new("Nowhere", f64::NAN, 1.0, 0.0, 1.0)],
        };
        assert_eq!(
            config.validate(),
            Err(RegionError::NonFinite("Nowhere".to_string()))
        );
    }
}
