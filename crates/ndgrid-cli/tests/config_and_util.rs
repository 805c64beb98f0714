//! Integration tests for grid config loading and the argument parsing helpers.

use ndgrid_cli::config::{load_grid_config, GridConfig};
use ndgrid_cli::util::{parse_coords, parse_shape, parse_values};

// ---------------------------------------------------------------------------
// parse_shape
// ---------------------------------------------------------------------------

#[test]
fn parse_shape_single_axis() {
    assert_eq!(parse_shape("7").unwrap(), vec![7]);
}

#[test]
fn parse_shape_multi_axis() {
    assert_eq!(parse_shape("2x3x4").unwrap(), vec![2, 3, 4]);
}

#[test]
fn parse_shape_tolerates_whitespace() {
    assert_eq!(parse_shape("3 x 2").unwrap(), vec![3, 2]);
}

#[test]
fn parse_shape_rejects_empty_extent() {
    assert!(parse_shape("3xx2").is_err());
}

#[test]
fn parse_shape_rejects_non_numeric() {
    assert!(parse_shape("axb").is_err());
}

// ---------------------------------------------------------------------------
// parse_values / parse_coords
// ---------------------------------------------------------------------------

#[test]
fn parse_values_list() {
    assert_eq!(
        parse_values("1.1, 2.2,3.3").unwrap(),
        vec![1.1, 2.2, 3.3]
    );
}

#[test]
fn parse_values_rejects_garbage() {
    assert!(parse_values("1.0,two").is_err());
}

#[test]
fn parse_coords_pair() {
    assert_eq!(parse_coords("1,1").unwrap(), vec![1, 1]);
}

#[test]
fn parse_coords_rejects_negative() {
    assert!(parse_coords("1,-1").is_err());
}

// ---------------------------------------------------------------------------
// GridConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn grid_config_default_is_the_literal_demo() {
    let config = GridConfig::default();
    assert_eq!(config.shape, vec![3, 2]);
    assert!(config.fill.is_none());
    assert_eq!(config.values.as_ref().map(Vec::len), Some(6));
}

#[test]
fn grid_config_round_trips_json() {
    let config = GridConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let loaded: GridConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.shape, config.shape);
    assert_eq!(loaded.values, config.values);
}

#[test]
fn grid_config_optional_fields_default_to_none() {
    let config: GridConfig = serde_json::from_str(r#"{"shape": [4]}"#).unwrap();
    assert_eq!(config.shape, vec![4]);
    assert!(config.fill.is_none());
    assert!(config.values.is_none());
}

#[test]
fn grid_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, r#"{"shape": [2, 3], "fill": 1.5}"#).unwrap();

    let config = load_grid_config(&path).unwrap();
    assert_eq!(config.shape, vec![2, 3]);
    assert_eq!(config.fill, Some(1.5));
}

#[test]
fn grid_config_missing_file_errors() {
    assert!(load_grid_config(std::path::Path::new("/nonexistent/grid.json")).is_err());
}

#[test]
fn grid_config_invalid_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_grid_config(&path).is_err());
}
