//! Longitude/latitude coordinate pair.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// Longitude may be negative; latitude lies in `[-90, 90]`. Values are taken
/// as supplied by the dataset, no wrapping or clamping is applied.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from longitude and latitude in degrees.
    #[inline]
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns `[lon, lat]`, the GeoJSON position order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for GeoCoordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}
