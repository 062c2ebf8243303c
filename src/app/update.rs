// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context pages and links
//! - `handlers::camera`: Camera enumeration, switching, frames
//! - `handlers::capture`: Shutter and capture results
//! - `handlers::gallery`: Thumbnail sheet, viewer and swipes
//! - `handlers::system`: Settings, config updates, permissions

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// This dispatcher pattern keeps the main update function clean and makes
    /// it easy to find the handling code for any message type.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Camera Control =====
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::CameraFrame(frame) => self.handle_camera_frame(frame),
            Message::CamerasInitialized(cameras, index) => {
                self.handle_cameras_initialized(cameras, index)
            }
            Message::ToggleMirrorPreview => self.handle_toggle_mirror_preview(),

            // ===== Capture Operations =====
            Message::Capture => self.handle_capture(),
            Message::PhotoCaptured(outcome) => self.handle_photo_captured(outcome),
            Message::ClearCaptureNotice(id) => self.handle_clear_capture_notice(id),

            // ===== Gallery =====
            Message::ToggleGallery => self.handle_toggle_gallery(),
            Message::GalleryUpdated(sequence) => self.handle_gallery_updated(sequence),
            Message::SelectImage(id) => self.handle_select_image(id),
            Message::NavigateViewer(direction) => self.handle_navigate_viewer(direction),
            Message::DismissViewer => self.handle_dismiss_viewer(),
            Message::ViewerPointerMoved(position) => self.handle_viewer_pointer_moved(position),
            Message::ViewerPointerPressed => self.handle_viewer_pointer_pressed(),
            Message::ViewerPointerReleased => self.handle_viewer_pointer_released(),

            // ===== Settings & System =====
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SelectBackend(index) => self.handle_select_backend(index),
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::PermissionsResolved(permissions) => {
                self.handle_permissions_resolved(permissions)
            }
            Message::RequestCameraAccess => self.handle_request_camera_access(),
        }
    }
}
