//! Dataset ingestion boundary.
//!
//! Deserializes a GeoJSON feature collection and normalizes Polygon and
//! MultiPolygon geometries into a flat list of `(ring, role)` pairs per
//! feature. Nothing downstream sees the original geometry type.

mod error;
mod feature;
mod geojson;

pub use error::DatasetError;
pub use feature::{Feature, FeatureRing, RingRole, UNKNOWN_NAME};
pub use geojson::{load_features, parse_features};
