//! GeoJSON feature collection deserialization.

use std::path::Path;

use globe_geo::{GeoCoordinate, Ring};
use serde::Deserialize;

use crate::{DatasetError, Feature, UNKNOWN_NAME};

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize, Default)]
struct RawProperties {
    #[serde(default)]
    name: Option<String>,
}

type RawPosition = Vec<f64>;
type RawRing = Vec<RawPosition>;
type RawPolygon = Vec<RawRing>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon { coordinates: RawPolygon },
    MultiPolygon { coordinates: Vec<RawPolygon> },
    #[serde(other)]
    Unsupported,
}

/// Parse a GeoJSON feature collection into normalized features.
///
/// Features without geometry or with non-polygonal geometry are skipped.
/// Positions keep only longitude and latitude; positions with fewer than two
/// numbers are dropped.
pub fn parse_features(json: &str) -> Result<Vec<Feature>, DatasetError> {
    let raw: RawCollection = serde_json::from_str(json)?;
    let total = raw.features.len();

    let features: Vec<Feature> = raw
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(i, f)| normalize_feature(i, f))
        .collect();

    tracing::info!(
        parsed = features.len(),
        skipped = total - features.len(),
        "feature collection parsed"
    );
    Ok(features)
}

/// Read and parse a GeoJSON feature collection from disk.
pub fn load_features(path: &Path) -> Result<Vec<Feature>, DatasetError> {
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_features(&json)
}

fn normalize_feature(position: usize, raw: RawFeature) -> Option<Feature> {
    let name = raw
        .properties
        .and_then(|p| p.name)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let polygons = match raw.geometry {
        Some(RawGeometry::Polygon { coordinates }) => vec![coordinates],
        Some(RawGeometry::MultiPolygon { coordinates }) => coordinates,
        Some(RawGeometry::Unsupported) => {
            tracing::warn!(feature = position, %name, "unsupported geometry type skipped");
            return None;
        }
        None => {
            tracing::warn!(feature = position, %name, "feature without geometry skipped");
            return None;
        }
    };

    let polygons: Vec<Vec<Ring>> = polygons
        .into_iter()
        .map(|polygon| polygon.into_iter().map(|ring| to_ring(&name, ring)).collect())
        .collect();
    Some(Feature::from_polygons(name, polygons))
}

fn to_ring(name: &str, raw: RawRing) -> Ring {
    let total = raw.len();
    let ring: Ring = raw
        .into_iter()
        .filter_map(|pos| match pos.as_slice() {
            [lon, lat, ..] => Some(GeoCoordinate::new(*lon, *lat)),
            _ => None,
        })
        .collect();
    if ring.len() < total {
        tracing::warn!(
            %name,
            dropped = total - ring.len(),
            "positions with fewer than two coordinates dropped"
        );
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingRole;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Squareland", "iso": "SQL" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                        [[4, 4], [4, 6], [6, 6], [6, 4], [4, 4]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[20, 0], [21, 0], [21, 1], [20, 0]]],
                        [[[30, 0, 120.5], [31, 0, 80.0], [31, 1, 10.0], [30, 0, 120.5]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Pointland" },
                "geometry": { "type": "Point", "coordinates": [1, 2] }
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_polygon_and_multipolygon_normalize() {
        let features = parse_features(COLLECTION).unwrap();
        assert_eq!(features.len(), 2);

        let square = &features[0];
        assert_eq!(square.name, "Squareland");
        assert_eq!(square.rings.len(), 2);
        assert_eq!(square.rings[0].role, RingRole::Outer);
        assert_eq!(square.rings[1].role, RingRole::Hole);
        assert_eq!(square.rings[1].ring.len(), 5);

        let multi = &features[1];
        assert_eq!(multi.name, UNKNOWN_NAME);
        assert_eq!(multi.count_role(RingRole::Outer), 2);
        assert_eq!(multi.count_role(RingRole::Hole), 0);
    }

    #[test]
    fn test_altitude_is_dropped() {
        let features = parse_features(COLLECTION).unwrap();
        let ring = &features[1].rings[1].ring;
        assert_eq!(ring.coords()[1], GeoCoordinate::new(31.0, 0.0));
    }

    #[test]
    fn test_short_positions_dropped() {
        let json = r#"{"features":[{"properties":{"name":"X"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1],[1,1],[0,1],[0,0]]]}}]}"#;
        let features = parse_features(json).unwrap();
        assert_eq!(features[0].rings[0].ring.len(), 4);
    }

    #[test]
    fn test_empty_collection() {
        let features = parse_features(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_features("{not json"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.geo.json");
        std::fs::write(&path, COLLECTION).unwrap();
        assert_eq!(load_features(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_features(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(DatasetError::Read { .. })));
    }
}
