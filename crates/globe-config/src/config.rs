//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level globe configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe geometry settings.
    pub globe: GlobeConfig,
    /// Border dedup and display settings.
    pub borders: BorderConfig,
    /// Source dataset settings.
    pub dataset: DatasetConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How the top ring of an extruded region is placed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExtrusionPolicyConfig {
    /// Every top vertex is pushed outward along its own radius.
    #[default]
    Radial,
    /// The whole ring is translated along the ring centroid's direction.
    CentroidNormal,
}

/// Globe geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Globe radius in scene units.
    pub radius: f64,
    /// Height of the extruded country solids above the globe surface.
    pub extrusion_height: f64,
    /// Width and height segment count of the ocean and atmosphere shells.
    pub tessellation_segments: u32,
    /// Radial offset of external border lines. Internal borders use half of it.
    pub border_offset: f64,
    /// How far the ocean shell sits below the globe radius.
    pub ocean_inset: f64,
    /// How far the atmosphere shell extends beyond the globe radius.
    pub atmosphere_padding: f64,
    /// Extrusion policy for country solids.
    pub extrusion_policy: ExtrusionPolicyConfig,
}

/// Border classification and display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BorderConfig {
    /// Rings whose normalized longitude span exceeds this are treated as
    /// global-wrap artifacts and never marked shared.
    pub wrap_threshold_degrees: f64,
    /// Decimal places kept when computing canonical border keys.
    pub key_precision: u32,
    /// Show internal (non-outer ring) borders.
    pub show_internal: bool,
    /// Only show internal borders that are shared between two regions.
    pub shared_only: bool,
}

/// Source dataset configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to a GeoJSON feature collection on disk.
    pub path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 3.4,
            extrusion_height: 0.1,
            tessellation_segments: 64,
            border_offset: 0.1,
            ocean_inset: 0.02,
            atmosphere_padding: 0.8,
            extrusion_policy: ExtrusionPolicyConfig::Radial,
        }
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            wrap_threshold_degrees: 300.0,
            key_precision: 5,
            show_internal: true,
            shared_only: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for the globe, e.g. `~/.config/border-globe`.
///
/// Falls back to `./border-globe` when the platform has no config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("border-globe")
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
