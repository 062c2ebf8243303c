// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::app::camera_preview::PreviewFrame;
use crate::app::capture_state::CaptureState;
use crate::backends::camera::types::{CameraBackendType, CameraDevice, CameraFrame};
use crate::backends::permissions::Permissions;
use crate::config::Config;
use crate::gallery::{
    CaptureId, GallerySequence, GalleryStore, NavigateDirection, SwipeTracker, ViewerState,
};
use crate::pipelines::photo::CaptureOutcome;
use cosmic::cosmic_config;
use cosmic::iced::Point;
use cosmic::widget::about::About;
use cosmic::widget::image::Handle;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Startup options passed from the command line
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    /// Backend to use instead of the configured one
    pub backend_override: Option<CameraBackendType>,
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Backend forced from the command line, takes precedence over config
    pub backend_override: Option<CameraBackendType>,
    /// Camera and microphone access
    pub permissions: Permissions,
    /// Cameras found by the active backend
    pub available_cameras: Vec<CameraDevice>,
    /// Whether camera enumeration has completed at least once
    pub cameras_initialized: bool,
    /// Index into `available_cameras` of the camera being previewed
    pub current_camera_index: usize,
    /// Latest preview frame
    pub current_frame: Option<Arc<CameraFrame>>,
    /// Upright (and optionally mirrored) render handle for `current_frame`
    pub preview_handle: Option<Handle>,
    /// Mirror setting shared with the camera subscription
    pub mirror_flag: Arc<AtomicBool>,
    /// Capture in flight, next capture id and the failure notice
    pub capture: CaptureState,
    /// Photos taken in this session
    pub gallery: GalleryStore,
    /// Snapshot of `gallery` used for rendering
    pub gallery_snapshot: GallerySequence,
    /// Gallery bottom sheet shown
    pub gallery_visible: bool,
    /// Full-screen viewer state
    pub viewer: ViewerState,
    /// Drag tracking for viewer swipes
    pub swipe: SwipeTracker,
    /// Settings dropdown labels
    pub theme_dropdown_options: Vec<String>,
    pub backend_dropdown_options: Vec<String>,
}

impl AppModel {
    /// Backend in effect (command line override or config)
    pub fn backend_type(&self) -> CameraBackendType {
        self.backend_override.unwrap_or(self.config.backend)
    }

    /// Camera currently previewed
    pub fn current_camera(&self) -> Option<&CameraDevice> {
        self.available_cameras.get(self.current_camera_index)
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_capturing()
    }

    /// The camera pipeline should be running
    pub fn camera_enabled(&self) -> bool {
        self.permissions.camera.is_granted() && self.current_camera().is_some()
    }
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: Context pages and external links
/// - **Camera Control**: Camera selection and frames
/// - **Capture Operations**: Shutter and capture results
/// - **Gallery**: Bottom sheet and full-screen viewer
/// - **Settings & System**: Configuration and permissions
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Camera Control =====
    /// Toggle between the front and back camera
    SwitchCamera,
    /// New camera frame received from pipeline, already converted for display
    CameraFrame(PreviewFrame),
    /// Cameras enumerated asynchronously, with the index to preview
    CamerasInitialized(Vec<CameraDevice>, usize),
    /// Toggle mirror preview (horizontal flip)
    ToggleMirrorPreview,

    // ===== Capture Operations =====
    /// Shutter pressed
    Capture,
    /// Capture processing finished
    PhotoCaptured(CaptureOutcome),
    /// Hide the failure notice for a capture
    ClearCaptureNotice(CaptureId),

    // ===== Gallery =====
    /// Show or hide the thumbnail sheet
    ToggleGallery,
    /// New gallery snapshot published by the store
    GalleryUpdated(GallerySequence),
    /// Thumbnail tapped
    SelectImage(CaptureId),
    /// Step through photos in the viewer
    NavigateViewer(NavigateDirection),
    /// Close the viewer
    DismissViewer,
    /// Pointer moved over the viewer
    ViewerPointerMoved(Point),
    /// Pointer pressed on the viewer
    ViewerPointerPressed,
    /// Pointer released on the viewer
    ViewerPointerReleased,

    // ===== Settings & System =====
    /// Select theme from dropdown by index
    SetAppTheme(usize),
    /// Select camera backend from dropdown by index
    SelectBackend(usize),
    /// Configuration changed externally
    UpdateConfig(Config),
    /// Permission query finished
    PermissionsResolved(Permissions),
    /// Ask for camera access again
    RequestCameraAccess,
}
