//! Geographic coordinate to sphere projection.
//!
//! Longitude and latitude map onto spherical angles
//!
//! ```text
//! phi   = (90 - lat) * π/180      (polar angle from +Y)
//! theta = (lon + 180) * π/180     (azimuth)
//! ```
//!
//! and then to Cartesian coordinates with +Y through the north pole:
//!
//! ```text
//! x = -r · sin(phi) · cos(theta)
//! y =  r · cos(phi)
//! z =  r · sin(phi) · sin(theta)
//! ```
//!
//! NaN or infinite inputs are not sanitized.

use glam::DVec3;

use crate::{GeoCoordinate, Ring};

/// Project a coordinate onto a sphere of the given radius.
#[inline]
#[must_use]
pub fn project(coord: GeoCoordinate, radius: f64) -> DVec3 {
    let phi = (90.0 - coord.lat).to_radians();
    let theta = (coord.lon + 180.0).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    DVec3::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

/// Project every coordinate of a ring, closing point included.
pub fn project_ring(ring: &Ring, radius: f64) -> Vec<DVec3> {
    ring.coords().iter().map(|&c| project(c, radius)).collect()
}

/// Inverse of [`project`]: recover the coordinate of a point off the origin.
///
/// Longitude is returned in `[-180, 180)`. The origin maps to `(−180, 90)`
/// by convention.
#[must_use]
pub fn unproject(point: DVec3) -> GeoCoordinate {
    let r = point.length();
    if r == 0.0 {
        return GeoCoordinate::new(-180.0, 90.0);
    }
    let phi = (point.y / r).clamp(-1.0, 1.0).acos();
    let theta = point.z.atan2(-point.x);

    let mut lon = theta.to_degrees() - 180.0;
    if lon < -180.0 {
        lon += 360.0;
    }
    GeoCoordinate::new(lon, 90.0 - phi.to_degrees())
}
