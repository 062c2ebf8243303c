// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// UI Constants
pub mod ui {
    /// Capture button size (outer)
    pub const CAPTURE_BUTTON_OUTER: f32 = 60.0;

    /// Capture button size (inner)
    pub const CAPTURE_BUTTON_INNER: f32 = 50.0;

    /// Capture button border radius
    pub const CAPTURE_BUTTON_RADIUS: f32 = 25.0;

    /// Overlay button/container background transparency (0.0 = transparent, 1.0 = opaque)
    ///
    /// Used for semi-transparent backgrounds on buttons and panels overlaid on the camera preview.
    pub const OVERLAY_BACKGROUND_ALPHA: f32 = 0.6;

    /// Placeholder button width when camera switch is hidden
    pub const PLACEHOLDER_BUTTON_WIDTH: f32 = 40.0;

    /// Standard icon button width (for layout balancing)
    pub const ICON_BUTTON_WIDTH: f32 = 44.0;

    /// Gallery button thumbnail size
    pub const GALLERY_BUTTON_SIZE: f32 = 40.0;

    /// Gallery button corner radius
    pub const GALLERY_BUTTON_RADIUS: f32 = 8.0;

    /// Height of the gallery bottom sheet
    pub const GALLERY_SHEET_HEIGHT: f32 = 360.0;

    /// Corner radius of the gallery bottom sheet
    pub const GALLERY_SHEET_RADIUS: f32 = 16.0;

    /// Viewer navigation button icon size
    pub const VIEWER_ICON_SIZE: u16 = 32;

    /// Viewer caption text size
    pub const VIEWER_CAPTION_TEXT_SIZE: u16 = 14;
}

/// Gallery grid and viewer defaults
pub mod gallery {
    /// Edge length of a square thumbnail cell
    pub const THUMBNAIL_SIZE: f32 = 100.0;

    /// Spacing between thumbnail cells
    pub const GRID_SPACING: u16 = 4;

    /// Number of grid columns when not configured
    pub const DEFAULT_COLUMNS: usize = 3;

    /// Upper bound for configured grid columns
    pub const MAX_COLUMNS: usize = 8;

    /// Minimum horizontal drag (logical pixels) recognized as a swipe
    pub const DEFAULT_SWIPE_MIN_DISTANCE: u32 = 48;
}

/// GStreamer pipeline constants
pub mod pipeline {
    /// Maximum buffer queue size (keep small for low latency)
    pub const MAX_BUFFERS: u32 = 2;

    /// Capacity of the frame channel between the appsink and the UI
    pub const FRAME_CHANNEL_CAPACITY: usize = 2;
}

/// Timing constants
pub mod timing {
    /// Frame counter modulo for periodic logging
    pub const FRAME_LOG_INTERVAL: u64 = 30;

    /// GStreamer state change timeout for validation
    /// Reduced to minimize startup delay - we accept async state changes
    pub const STATE_CHANGE_TIMEOUT_MS: u64 = 50;

    /// How long the preview subscription waits for a frame before checking for cancellation
    pub const FRAME_POLL_TIMEOUT_MS: u64 = 16;

    /// How long a capture failure notice stays on screen
    pub const NOTICE_DURATION_SECS: u64 = 4;
}
