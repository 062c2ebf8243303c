// SPDX-License-Identifier: GPL-3.0-only

//! Camera control handlers
//!
//! Handles camera enumeration, front/back switching, frames and mirror settings.

use crate::app::camera_preview::PreviewFrame;
use crate::app::state::{AppModel, Message};
use crate::backends::camera::types::{CameraBackendType, CameraDevice, CameraFacing};
use crate::backends::camera::{get_backend, select_camera};
use cosmic::Task;
use tracing::{debug, info};

/// Pick the camera to preview at startup
///
/// The last used camera wins when it is still present; otherwise the preferred facing decides.
pub(crate) fn initial_camera_index(
    cameras: &[CameraDevice],
    last_camera_path: Option<&str>,
    facing: CameraFacing,
) -> usize {
    last_camera_path
        .and_then(|path| cameras.iter().position(|cam| cam.path == path))
        .or_else(|| select_camera(cameras, facing))
        .unwrap_or(0)
}

impl AppModel {
    // =========================================================================
    // Camera Control Handlers
    // =========================================================================

    /// Enumerate cameras off the UI thread and report them with the camera to preview
    pub(crate) fn enumerate_cameras_task(
        backend_type: CameraBackendType,
        last_camera_path: Option<String>,
        facing: CameraFacing,
    ) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    info!(backend = %backend_type, "Enumerating cameras asynchronously");
                    let backend = get_backend(backend_type);
                    let cameras = backend.enumerate_cameras();
                    info!(count = cameras.len(), backend = %backend_type, "Found camera(s)");

                    let index = initial_camera_index(&cameras, last_camera_path.as_deref(), facing);
                    (cameras, index)
                })
                .await
                .unwrap_or_default()
            },
            |(cameras, index)| cosmic::Action::App(Message::CamerasInitialized(cameras, index)),
        )
    }

    pub(crate) fn handle_cameras_initialized(
        &mut self,
        cameras: Vec<CameraDevice>,
        camera_index: usize,
    ) -> Task<cosmic::Action<Message>> {
        info!(
            count = cameras.len(),
            camera_index, "Cameras initialized asynchronously"
        );

        self.available_cameras = cameras;
        self.current_camera_index = camera_index.min(self.available_cameras.len().saturating_sub(1));
        self.cameras_initialized = true;
        self.current_frame = None;
        self.preview_handle = None;

        if let Some(camera) = self.current_camera() {
            info!(name = %camera.name, facing = %camera.facing, "Previewing camera");
        }
        Task::none()
    }

    pub(crate) fn handle_switch_camera(&mut self) -> Task<cosmic::Action<Message>> {
        let facing = self.config.preferred_facing.toggled();
        info!(
            current_index = self.current_camera_index,
            %facing,
            "Received SwitchCamera message"
        );
        self.config.preferred_facing = facing;

        if let Some(index) = select_camera(&self.available_cameras, facing) {
            if index != self.current_camera_index {
                self.current_camera_index = index;
                // Never capture or show a stale frame from the previous camera
                self.current_frame = None;
                self.preview_handle = None;
                info!(new_index = index, "Switching to camera");
            } else {
                info!("Selected facing maps to the current camera");
            }
            self.config.last_camera_path = self.current_camera().map(|cam| cam.path.clone());
        }

        self.persist_config("camera selection");
        Task::none()
    }

    pub(crate) fn handle_camera_frame(
        &mut self,
        preview: PreviewFrame,
    ) -> Task<cosmic::Action<Message>> {
        static FRAME_MSG_COUNT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
        let count = FRAME_MSG_COUNT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        if !preview.is_from(self.current_camera()) {
            debug!(device = %preview.device_path, "Dropping frame from previous camera");
            return Task::none();
        }
        if count % crate::constants::timing::FRAME_LOG_INTERVAL == 0 {
            debug!(
                message = count,
                width = preview.frame.width,
                height = preview.frame.height,
                "CameraFrame message received in update()"
            );
        }

        self.preview_handle = Some(preview.handle);
        self.current_frame = Some(preview.frame);
        Task::none()
    }

    pub(crate) fn handle_toggle_mirror_preview(&mut self) -> Task<cosmic::Action<Message>> {
        self.config.mirror_preview = !self.config.mirror_preview;
        info!(
            mirror_preview = self.config.mirror_preview,
            "Mirror preview toggled"
        );
        self.sync_mirror_flag();
        self.persist_config("mirror preview setting");
        Task::none()
    }

    /// Publish the mirror setting to the running camera subscription
    pub(crate) fn sync_mirror_flag(&self) {
        self.mirror_flag
            .store(self.config.mirror_preview, std::sync::atomic::Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::SensorRotation;

    fn device(path: &str, facing: CameraFacing) -> CameraDevice {
        CameraDevice {
            name: path.to_uppercase(),
            path: path.to_string(),
            facing,
            rotation: SensorRotation::None,
        }
    }

    #[test]
    fn last_camera_is_restored() {
        let cameras = vec![
            device("rear", CameraFacing::Back),
            device("selfie", CameraFacing::Front),
        ];
        assert_eq!(
            initial_camera_index(&cameras, Some("selfie"), CameraFacing::Back),
            1
        );
    }

    #[test]
    fn missing_last_camera_falls_back_to_facing() {
        let cameras = vec![
            device("rear", CameraFacing::Back),
            device("selfie", CameraFacing::Front),
        ];
        assert_eq!(
            initial_camera_index(&cameras, Some("unplugged"), CameraFacing::Front),
            1
        );
        assert_eq!(initial_camera_index(&cameras, None, CameraFacing::Back), 0);
        assert_eq!(initial_camera_index(&[], None, CameraFacing::Front), 0);
    }
}
