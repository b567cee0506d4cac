use clap::Parser;
use globe_borders::BorderVisibility;
use globe_config::{CliArgs, Config, default_config_dir};
use globe_dataset::{Feature, load_features, parse_features};
use globe_scene::{Globe, GlobeParams, RebuildError};

/// Dataset used when the config names none.
const SAMPLE_DATASET: &str = include_str!("../data/sample.geojson");

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    globe_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    tracing::info!(config_dir = %config_dir.display(), "border globe starting");

    let features = load_dataset(&config);
    let mut globe = match build_globe(&config, features) {
        Ok(globe) => globe,
        Err(err) => {
            tracing::error!(%err, "globe could not be built");
            std::process::exit(1);
        }
    };

    report_shells(&globe);
    report_borders(&globe, &config);

    match verify_rebuild_round_trip(&mut globe) {
        Ok(true) => tracing::info!("rebuild round trip reproduced the original classification"),
        Ok(false) => tracing::error!("rebuild round trip changed the classification"),
        Err(err) => tracing::error!(%err, "rebuild round trip failed"),
    }

    if let Some(country) = &args.country {
        print_country(&globe, country);
    }
}

/// Load the configured dataset, or the bundled sample when none is set.
///
/// A dataset that cannot be loaded yields an empty globe.
fn load_dataset(config: &Config) -> Vec<Feature> {
    let result = match &config.dataset.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            load_features(path)
        }
        None => {
            tracing::info!("no dataset configured, using bundled sample");
            parse_features(SAMPLE_DATASET)
        }
    };
    result.unwrap_or_else(|err| {
        tracing::warn!(%err, "dataset unavailable, continuing with an empty globe");
        Vec::new()
    })
}

fn build_globe(config: &Config, features: Vec<Feature>) -> Result<Globe, RebuildError> {
    let mut globe = Globe::new(GlobeParams::from_config(config))?;
    let report = globe.ingest(features)?;
    tracing::info!(%report, "initial build");
    Ok(globe)
}

fn report_shells(globe: &Globe) {
    let shells = globe.shells();
    tracing::info!(
        ocean_triangles = shells.ocean.triangle_count(),
        atmosphere_triangles = shells.atmosphere.triangle_count(),
        "shells generated"
    );
    let vertex_bytes: usize = globe
        .regions()
        .iter()
        .map(|r| std::mem::size_of_val(r.interleaved().as_slice()))
        .sum();
    tracing::info!(regions = globe.regions().len(), vertex_bytes, "region buffers packed");
}

fn report_borders(globe: &Globe, config: &Config) {
    let mode = BorderVisibility::from_toggles(config.borders.show_internal, config.borders.shared_only);
    let visible = globe.visible_borders(mode);
    tracing::info!(
        ?mode,
        visible = visible.len(),
        total = globe.border_index().len(),
        keys = globe.border_index().key_count(),
        "internal borders"
    );
}

/// Rebuild at a larger radius and height, then back, and compare
/// classifications with the original build.
fn verify_rebuild_round_trip(globe: &mut Globe) -> Result<bool, RebuildError> {
    let original = globe.signature();
    let GlobeParams {
        radius,
        extrusion_height,
        ..
    } = *globe.params();

    globe.rebuild_at(radius * 1.5, extrusion_height * 2.0)?;
    let scaled_matches = globe.signature() == original;
    globe.rebuild_at(radius, extrusion_height)?;
    Ok(scaled_matches && globe.signature() == original)
}

fn print_country(globe: &Globe, country: &str) {
    let borders = globe.borders_for_country(country);
    if borders.is_empty() {
        println!("{country}: no internal borders");
        return;
    }
    println!("{country}: {} internal border(s)", borders.len());
    for id in borders {
        if let Some(segment) = globe.border_index().get(id) {
            println!(
                "  #{} {} points, shared={}, key={}",
                id.index(),
                segment.ring().len(),
                segment.is_shared(),
                segment.key()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_parses() {
        let features = parse_features(SAMPLE_DATASET).unwrap();
        assert_eq!(features.len(), 5);
        assert_eq!(features[4].name, globe_dataset::UNKNOWN_NAME);
    }

    #[test]
    fn test_sample_classification() {
        let mut globe = build_globe(&Config::default(), load_dataset(&Config::default())).unwrap();
        let classification = globe.last_report().classification;
        assert_eq!(classification.shared_groups, 1);
        assert_eq!(classification.wrap_rejected_groups, 1);
        assert_eq!(globe.borders_for_country("Westmark").len(), 2);
        assert!(verify_rebuild_round_trip(&mut globe).unwrap());
    }

    #[test]
    fn test_missing_dataset_gives_empty_globe() {
        let mut config = Config::default();
        config.dataset.path = Some("/nonexistent/countries.geojson".into());
        assert!(load_dataset(&config).is_empty());
    }
}
