// SPDX-License-Identifier: GPL-3.0-only

use crate::backends::camera::{CameraBackendType, CameraFacing};
use crate::constants::gallery;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Variants in settings dropdown order
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Camera backend to use (PipeWire or test pattern)
    pub backend: CameraBackendType,
    /// Facing chosen with the camera switcher
    pub preferred_facing: CameraFacing,
    /// Last used camera device path
    pub last_camera_path: Option<String>,
    /// Mirror camera preview horizontally (selfie mode)
    pub mirror_preview: bool,
    /// Number of columns in the gallery grid
    pub gallery_columns: usize,
    /// Minimum horizontal drag, in logical pixels, that counts as a swipe in the viewer
    pub swipe_min_distance: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(), // Default to System theme
            backend: CameraBackendType::default(),
            preferred_facing: CameraFacing::default(),
            last_camera_path: None,
            mirror_preview: true, // Default to mirrored (selfie mode)
            gallery_columns: gallery::DEFAULT_COLUMNS,
            swipe_min_distance: gallery::DEFAULT_SWIPE_MIN_DISTANCE,
        }
    }
}

impl Config {
    /// Grid columns clamped to a renderable range
    pub fn grid_columns(&self) -> usize {
        self.gallery_columns.clamp(1, gallery::MAX_COLUMNS)
    }
}
