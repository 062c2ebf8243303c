// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Handles settings, external config changes and camera access permissions.

use crate::app::state::{AppModel, Message};
use crate::backends::camera::types::CameraBackendType;
use crate::backends::permissions::{self, PermissionStatus, Permissions};
use crate::config::AppTheme;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info, warn};

impl AppModel {
    // =========================================================================
    // Settings Handlers
    // =========================================================================

    /// Write the current config, logging `what` on failure
    pub(crate) fn persist_config(&self, what: &str) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, setting = what, "Failed to save setting");
        }
    }

    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        let backend_changed = config.backend != self.config.backend;
        self.config = config;
        self.sync_mirror_flag();

        if backend_changed && self.backend_override.is_none() {
            info!(backend = %self.config.backend, "Backend changed externally");
            return self.restart_cameras();
        }
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(&app_theme) = AppTheme::ALL.get(index) else {
            return Task::none();
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;
        self.persist_config("app theme");

        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_select_backend(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(&backend) = CameraBackendType::ALL.get(index) else {
            return Task::none();
        };
        if backend == self.config.backend {
            return Task::none();
        }

        info!(%backend, "Selected camera backend");
        self.config.backend = backend;
        self.persist_config("camera backend");

        if self.backend_override.is_some() {
            warn!("Backend forced from the command line, new setting applies on next start");
            return Task::none();
        }
        self.restart_cameras()
    }

    /// Drop the current camera list and enumerate again with the active backend
    fn restart_cameras(&mut self) -> Task<cosmic::Action<Message>> {
        self.available_cameras.clear();
        self.cameras_initialized = false;
        self.current_camera_index = 0;
        self.current_frame = None;
        self.preview_handle = None;
        Self::enumerate_cameras_task(
            self.backend_type(),
            self.config.last_camera_path.clone(),
            self.config.preferred_facing,
        )
    }

    // =========================================================================
    // Permission Handlers
    // =========================================================================

    pub(crate) fn permissions_task() -> Task<cosmic::Action<Message>> {
        Task::perform(permissions::query_permissions(), |permissions| {
            cosmic::Action::App(Message::PermissionsResolved(permissions))
        })
    }

    pub(crate) fn handle_permissions_resolved(
        &mut self,
        permissions: Permissions,
    ) -> Task<cosmic::Action<Message>> {
        info!(
            camera = ?permissions.camera,
            microphone = ?permissions.microphone,
            video_capable = permissions.video_capable(),
            "Permissions updated"
        );
        self.permissions = permissions;
        if !permissions.camera.is_granted() {
            self.current_frame = None;
        }
        Task::none()
    }

    pub(crate) fn handle_request_camera_access(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Requesting camera access again");
        self.permissions.camera = PermissionStatus::Unknown;
        Self::permissions_task()
    }
}
