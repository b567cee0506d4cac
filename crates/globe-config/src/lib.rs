//! Configuration system for the border globe.
//!
//! Provides runtime-configurable globe, border and dataset settings that persist
//! to disk as RON files. Supports CLI overrides via clap, hot-reload detection,
//! and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BorderConfig, Config, DatasetConfig, DebugConfig, ExtrusionPolicyConfig, GlobeConfig,
    default_config_dir,
};
pub use error::ConfigError;
