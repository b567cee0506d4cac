//! Angular extent of rings and global-wrap detection.
//!
//! Longitudes are mapped into `[0, 360)` before taking min/max. A ring whose
//! longitude span then exceeds the wrap threshold is treated as an artifact that
//! encircles the planet, typically produced by wide or antimeridian-crossing
//! source rings, and its border group is never marked shared. The threshold is
//! a tunable heuristic.

use globe_geo::Ring;

/// Default longitude span above which a ring counts as a global wrap.
pub const DEFAULT_WRAP_THRESHOLD_DEGREES: f64 = 300.0;

/// Longitude and latitude span of a ring in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AngularExtent {
    /// `max − min` of longitudes normalized into `[0, 360)`.
    pub lon_span: f64,
    /// `max − min` of latitudes.
    pub lat_span: f64,
}

/// Compute the angular extent of a ring. An empty ring has zero extent.
pub fn angular_extent(ring: &Ring) -> AngularExtent {
    let coords = ring.coords();
    if coords.is_empty() {
        return AngularExtent::default();
    }

    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    for c in coords {
        let lon = c.lon.rem_euclid(360.0);
        min_lon = min_lon.min(lon);
        max_lon = max_lon.max(lon);
        min_lat = min_lat.min(c.lat);
        max_lat = max_lat.max(c.lat);
    }

    AngularExtent {
        lon_span: max_lon - min_lon,
        lat_span: max_lat - min_lat,
    }
}

/// Rejects shared classification for rings that wrap the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntimeridianFilter {
    threshold_degrees: f64,
}

impl Default for AntimeridianFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_THRESHOLD_DEGREES)
    }
}

impl AntimeridianFilter {
    /// Creates a filter with the given longitude span threshold.
    pub fn new(threshold_degrees: f64) -> Self {
        Self { threshold_degrees }
    }

    /// The longitude span threshold in degrees.
    pub fn threshold_degrees(&self) -> f64 {
        self.threshold_degrees
    }

    /// Returns `true` if the ring's longitude span exceeds the threshold.
    pub fn is_global_wrap(&self, ring: &Ring) -> bool {
        angular_extent(ring).lon_span > self.threshold_degrees
    }
}
