//! GeoJSON documents read and written by the border pipeline.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo_types::{Coord, MultiLineString};
use serde::{Deserialize, Deserializer, Serialize};

use super::BorderKind;

/// A GeoJSON position. Ordinates past longitude and latitude are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Coord<f64>);

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self(Coord { x: lon, y: lat })
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values.as_slice() {
            [lon, lat, ..] => Ok(Position::new(*lon, *lat)),
            _ => Err(serde::de::Error::invalid_length(
                values.len(),
                &"a position with at least two numbers",
            )),
        }
    }
}

/// Feature geometry as far as the border pipeline cares about it
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum InputGeometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    /// Points, lines and collections: never classified
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputFeature {
    /// `null` geometries are skipped like unsupported ones
    #[serde(default, deserialize_with = "deserialize_geometry")]
    pub geometry: Option<InputGeometry>,
}

/// Geometry objects without a string `type` are unsupported rather than malformed
fn deserialize_geometry<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<InputGeometry>, D::Error> {
    let value = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(value) => value,
        None => return Ok(None),
    };

    if value.is_object() && value.get("type").and_then(|t| t.as_str()).is_none() {
        return Ok(Some(InputGeometry::Unsupported));
    }

    InputGeometry::deserialize(value)
        .map(Some)
        .map_err(<D::Error as serde::de::Error>::custom)
}

/// Source country outline
#[derive(Debug, Clone, Deserialize)]
pub struct InputCollection {
    #[serde(default)]
    pub features: Vec<InputFeature>,
}

impl InputCollection {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let collection = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse GeoJSON from {}", path.display()))?;
        Ok(collection)
    }
}

/// Output collection holding a single border feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderDocument {
    #[serde(rename = "type")]
    pub geo_type: String,
    pub features: Vec<BorderFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderFeature {
    #[serde(rename = "type")]
    pub geo_type: String,
    pub properties: BorderProperties,
    pub geometry: BorderGeometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderProperties {
    #[serde(rename = "type")]
    pub border_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderGeometry {
    #[serde(rename = "type")]
    pub geo_type: String,
    pub coordinates: Vec<Vec<[f64; 2]>>, // [[lon, lat], ...] per line
}

impl BorderDocument {
    pub fn new(kind: BorderKind, lines: &MultiLineString<f64>) -> Self {
        let coordinates = lines
            .iter()
            .map(|line| line.coords().map(|c| [c.x, c.y]).collect())
            .collect();

        Self {
            geo_type: "FeatureCollection".to_string(),
            features: vec![BorderFeature {
                geo_type: "Feature".to_string(),
                properties: BorderProperties {
                    border_type: kind.property_type().to_string(),
                    description: kind.description().to_string(),
                },
                geometry: BorderGeometry {
                    geo_type: "MultiLineString".to_string(),
                    coordinates,
                },
            }],
        }
    }

    /// Write as indented JSON, replacing any existing file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to serialize GeoJSON to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open border file {}", path.display()))?;
        let document = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse border file {}", path.display()))?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::LineString;

    #[test]
    fn test_parse_polygon_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "India"},
                "geometry": {"type": "Polygon", "coordinates": [[[68, 30], [68, 31.5, 120.0]]]}
            }]
        }"#;
        let collection: InputCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.features.len(), 1);

        match &collection.features[0].geometry {
            Some(InputGeometry::Polygon { coordinates }) => {
                assert_eq!(coordinates[0][0], Position::new(68.0, 30.0));
                assert_eq!(coordinates[0][1], Position::new(68.0, 31.5));
            }
            other => panic!("unexpected geometry: {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_and_null_geometry() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [75, 10]}},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        }"#;
        let collection: InputCollection = serde_json::from_str(json).unwrap();
        assert!(matches!(
            collection.features[0].geometry,
            Some(InputGeometry::Unsupported)
        ));
        assert!(collection.features[1].geometry.is_none());
    }

    #[test]
    fn test_geometry_without_type_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {}},
                {"type": "Feature", "geometry": {"type": 7, "coordinates": []}},
                {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[68, 30], [68, 31]]]}}
            ]
        }"#;
        let collection: InputCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.features.len(), 3);
        assert!(matches!(
            collection.features[0].geometry,
            Some(InputGeometry::Unsupported)
        ));
        assert!(matches!(
            collection.features[1].geometry,
            Some(InputGeometry::Unsupported)
        ));
        assert!(matches!(
            collection.features[2].geometry,
            Some(InputGeometry::Polygon { .. })
        ));
    }

    #[test]
    fn test_missing_features_is_empty() {
        let collection: InputCollection =
            serde_json::from_str(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_short_position_rejected() {
        let json = r#"{"features": [{"geometry": {"type": "Polygon", "coordinates": [[[68]]]}}]}"#;
        assert!(serde_json::from_str::<InputCollection>(json).is_err());
    }

    #[test]
    fn test_border_document_shape() {
        let lines = MultiLineString::new(vec![LineString::from(vec![(68.0, 30.0), (68.0, 31.0)])]);
        let document = BorderDocument::new(BorderKind::Coastal, &lines);
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["properties"]["type"], "coastal_border");
        assert_eq!(value["features"][0]["geometry"]["type"], "MultiLineString");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"],
            serde_json::json!([[[68.0, 30.0], [68.0, 31.0]]])
        );
    }
}
