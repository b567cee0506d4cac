//! Global globe parameters.

use globe_borders::{DEFAULT_KEY_PRECISION, DEFAULT_WRAP_THRESHOLD_DEGREES};
use globe_config::{Config, ExtrusionPolicyConfig};
use globe_mesh::{ExtrusionParams, ExtrusionPolicy, ShellParams};

use crate::RebuildError;

/// Upper bound of [`GlobeParams::tessellation_segments`]. Keeps shell vertex
/// counts well inside `u32` index range.
pub const MAX_TESSELLATION_SEGMENTS: u32 = 4096;

/// Everything a full build depends on besides the dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeParams {
    /// Globe radius, positive.
    pub radius: f64,
    /// Extrusion height of region solids, non-negative.
    pub extrusion_height: f64,
    /// Shell tessellation, in `1..=MAX_TESSELLATION_SEGMENTS`. Does not affect
    /// region triangulation.
    pub tessellation_segments: u32,
    /// Top ring placement of region solids.
    pub extrusion_policy: ExtrusionPolicy,
    /// Radial offset of external border lines; internal borders use half.
    pub border_offset: f64,
    /// Ocean shell inset below the radius.
    pub ocean_inset: f64,
    /// Atmosphere shell padding beyond the radius.
    pub atmosphere_padding: f64,
    /// Longitude span above which a shared group is a wrap artifact.
    pub wrap_threshold_degrees: f64,
    /// Decimal places of canonical border keys.
    pub key_precision: u32,
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            radius: 3.4,
            extrusion_height: 0.1,
            tessellation_segments: 64,
            extrusion_policy: ExtrusionPolicy::Radial,
            border_offset: 0.1,
            ocean_inset: 0.02,
            atmosphere_padding: 0.8,
            wrap_threshold_degrees: DEFAULT_WRAP_THRESHOLD_DEGREES,
            key_precision: DEFAULT_KEY_PRECISION,
        }
    }
}

impl GlobeParams {
    /// Take every parameter from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let globe = &config.globe;
        Self {
            radius: globe.radius,
            extrusion_height: globe.extrusion_height,
            tessellation_segments: globe.tessellation_segments,
            extrusion_policy: match globe.extrusion_policy {
                ExtrusionPolicyConfig::Radial => ExtrusionPolicy::Radial,
                ExtrusionPolicyConfig::CentroidNormal => ExtrusionPolicy::CentroidNormal,
            },
            border_offset: globe.border_offset,
            ocean_inset: globe.ocean_inset,
            atmosphere_padding: globe.atmosphere_padding,
            wrap_threshold_degrees: config.borders.wrap_threshold_degrees,
            key_precision: config.borders.key_precision,
        }
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), RebuildError> {
        check(
            "radius",
            self.radius,
            self.radius.is_finite() && self.radius > 0.0,
            "finite and > 0",
        )?;
        check(
            "extrusion_height",
            self.extrusion_height,
            self.extrusion_height.is_finite() && self.extrusion_height >= 0.0,
            "finite and >= 0",
        )?;
        check(
            "tessellation_segments",
            self.tessellation_segments,
            (1..=MAX_TESSELLATION_SEGMENTS).contains(&self.tessellation_segments),
            "in 1..=4096",
        )?;
        check(
            "border_offset",
            self.border_offset,
            self.border_offset.is_finite(),
            "finite",
        )?;
        check(
            "ocean_inset",
            self.ocean_inset,
            self.ocean_inset.is_finite() && self.ocean_inset < self.radius,
            "finite and < radius",
        )?;
        check(
            "atmosphere_padding",
            self.atmosphere_padding,
            self.atmosphere_padding.is_finite(),
            "finite",
        )?;
        check(
            "wrap_threshold_degrees",
            self.wrap_threshold_degrees,
            !self.wrap_threshold_degrees.is_nan(),
            "a number",
        )?;
        check(
            "key_precision",
            self.key_precision,
            self.key_precision <= 15,
            "<= 15",
        )
    }

    pub(crate) fn extrusion(&self) -> ExtrusionParams {
        ExtrusionParams {
            radius: self.radius,
            height: self.extrusion_height,
            policy: self.extrusion_policy,
        }
    }

    pub(crate) fn shells(&self) -> ShellParams {
        ShellParams {
            radius: self.radius,
            segments: self.tessellation_segments,
            ocean_inset: self.ocean_inset,
            atmosphere_padding: self.atmosphere_padding,
        }
    }
}

fn check(
    name: &'static str,
    value: impl std::fmt::Display,
    valid: bool,
    expected: &'static str,
) -> Result<(), RebuildError> {
    if valid {
        Ok(())
    } else {
        Err(RebuildError::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        })
    }
}
