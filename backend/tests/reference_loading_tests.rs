//! Crop table loading tests
//!
//! - Bundled table when no override is configured
//! - `reference.crop_table_path` replacing the bundled table
//! - Malformed and missing override files as configuration errors

use std::io::Write;

use krishi_advisor_backend::{load_reference, AppError, AppState, Config};
use shared::SeasonTag;
use tempfile::NamedTempFile;

const HEADER: &str = "crop,min_temp_c,max_temp_c,min_rainfall_mm,seasons\n";

fn crop_table(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}{}", HEADER, rows).unwrap();
    file.flush().unwrap();
    file
}

fn config_with_table(path: &str) -> Config {
    let mut config = Config::default();
    config.reference.crop_table_path = Some(path.to_string());
    config
}

#[test]
fn test_bundled_table_without_override() {
    let reference = load_reference(&Config::default()).unwrap();
    assert_eq!(reference.crops.len(), 36);
}

#[test]
fn test_override_replaces_bundled_table() {
    let file = crop_table("sorghum,25,32,400,kharif|rabi\n");
    let config = config_with_table(file.path().to_str().unwrap());

    let reference = load_reference(&config).unwrap();

    assert_eq!(reference.crops.len(), 1);
    let sorghum = &reference.crops.crops()[0];
    assert_eq!(sorghum.name, "sorghum");
    assert!(sorghum.seasons.contains(&SeasonTag::Rabi));
}

#[test]
fn test_malformed_override_is_configuration_error() {
    let file = crop_table("sorghum,hot,32,400,kharif\n");
    let config = config_with_table(file.path().to_str().unwrap());

    let err = load_reference(&config).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_invalid_range_override_is_configuration_error() {
    let file = crop_table("sorghum,35,20,400,kharif\n");
    let config = config_with_table(file.path().to_str().unwrap());

    let err = load_reference(&config).unwrap_err();
    assert!(matches!(err, AppError::Configuration(msg) if msg.contains("sorghum")));
}

#[test]
fn test_missing_override_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_table.csv");
    let config = config_with_table(path.to_str().unwrap());

    let err = load_reference(&config).unwrap_err();
    assert!(matches!(err, AppError::Configuration(msg) if msg.contains("no_such_table.csv")));
}

#[test]
fn test_app_state_refuses_to_start_with_missing_table() {
    let config = config_with_table("/nonexistent/krishi/crops.csv");
    let result = AppState::from_config(config);
    assert!(matches!(result, Err(AppError::Configuration(_))));
}
