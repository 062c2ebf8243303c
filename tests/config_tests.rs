// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use quickshot::Config;
use quickshot::backends::camera::{CameraBackendType, CameraFacing};
use quickshot::config::AppTheme;
use quickshot::constants::gallery;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.backend, CameraBackendType::PipeWire);
    assert_eq!(config.preferred_facing, CameraFacing::Back);
    assert!(config.last_camera_path.is_none());
    assert!(
        config.mirror_preview,
        "Mirror preview should be enabled by default"
    );
    assert_eq!(config.gallery_columns, gallery::DEFAULT_COLUMNS);
    assert_eq!(config.swipe_min_distance, gallery::DEFAULT_SWIPE_MIN_DISTANCE);
}

#[test]
fn test_grid_columns_clamped() {
    let mut config = Config::default();

    config.gallery_columns = 0;
    assert_eq!(config.grid_columns(), 1);

    config.gallery_columns = 5;
    assert_eq!(config.grid_columns(), 5);

    config.gallery_columns = 100;
    assert_eq!(config.grid_columns(), gallery::MAX_COLUMNS);
}

#[test]
fn test_theme_order_matches_dropdown() {
    assert_eq!(
        AppTheme::ALL,
        [AppTheme::System, AppTheme::Dark, AppTheme::Light]
    );
}

#[test]
fn test_config_serde_roundtrip() {
    let config = Config {
        preferred_facing: CameraFacing::Front,
        last_camera_path: Some("pipewire-serial-42".to_string()),
        ..Config::default()
    };

    let json = serde_json::to_string(&config).expect("serialize config");
    let restored: Config = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(restored, config);
}
