//! Command-line argument parsing for the border globe.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ExtrusionPolicyConfig};

/// Border globe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "border-globe", about = "Extruded country globe with shared border detection")]
pub struct CliArgs {
    /// Globe radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Extrusion height of country solids.
    #[arg(long)]
    pub height: Option<f64>,

    /// Tessellation segments of the ocean and atmosphere shells.
    #[arg(long)]
    pub segments: Option<u32>,

    /// Longitude span (degrees) above which a ring counts as a global-wrap artifact.
    #[arg(long)]
    pub wrap_threshold: Option<f64>,

    /// Use centroid-normal extrusion instead of radial extrusion.
    #[arg(long)]
    pub centroid_extrusion: bool,

    /// Path to a GeoJSON feature collection.
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Print the internal borders of this country after building.
    #[arg(long)]
    pub country: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.radius {
            self.globe.radius = r;
        }
        if let Some(h) = args.height {
            self.globe.extrusion_height = h;
        }
        if let Some(s) = args.segments {
            self.globe.tessellation_segments = s;
        }
        if let Some(t) = args.wrap_threshold {
            self.borders.wrap_threshold_degrees = t;
        }
        if args.centroid_extrusion {
            self.globe.extrusion_policy = ExtrusionPolicyConfig::CentroidNormal;
        }
        if let Some(ref path) = args.dataset {
            self.dataset.path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
