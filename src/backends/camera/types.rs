// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Camera backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraBackendType {
    /// PipeWire backend (modern Linux standard)
    #[default]
    PipeWire,
    /// Synthetic test pattern (no camera hardware required)
    TestPattern,
}

impl CameraBackendType {
    /// All backend variants for dropdown iteration
    pub const ALL: [CameraBackendType; 2] =
        [CameraBackendType::PipeWire, CameraBackendType::TestPattern];
}

impl std::fmt::Display for CameraBackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraBackendType::PipeWire => write!(f, "PipeWire"),
            CameraBackendType::TestPattern => write!(f, "Test pattern"),
        }
    }
}

/// Which way a camera points relative to the user
///
/// Taken from libcamera's `api.libcamera.location` property when PipeWire exposes it.
/// USB webcams usually carry no location and are reported as `External`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    /// Faces the user (selfie camera)
    Front,
    /// Faces away from the user
    #[default]
    Back,
    /// No location information (external or unknown)
    External,
}

impl CameraFacing {
    /// Parse a libcamera location string ("front", "back", "external")
    pub fn from_location(location: &str) -> Self {
        match location.trim().to_ascii_lowercase().as_str() {
            "front" => CameraFacing::Front,
            "back" | "rear" => CameraFacing::Back,
            _ => CameraFacing::External,
        }
    }

    /// The facing selected by the camera switcher after this one
    ///
    /// The switcher only toggles between front and back; an external preference
    /// switches to the front camera.
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back | CameraFacing::External => CameraFacing::Front,
        }
    }
}

impl std::fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraFacing::Front => write!(f, "front"),
            CameraFacing::Back => write!(f, "back"),
            CameraFacing::External => write!(f, "external"),
        }
    }
}

/// Sensor rotation in degrees (clockwise)
///
/// Camera sensors may be physically mounted at various angles relative to the device.
/// This is common on mobile devices where sensors are rotated 90° or 270° relative
/// to the display orientation. Rotating a frame clockwise by this amount makes it upright.
///
/// The rotation value comes from libcamera's `api.libcamera.rotation` property in PipeWire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorRotation {
    /// No rotation (sensor is oriented correctly)
    #[default]
    None,
    /// 90 degrees clockwise
    Rotate90,
    /// 180 degrees (upside down)
    Rotate180,
    /// 270 degrees clockwise (90 degrees counter-clockwise)
    Rotate270,
}

impl SensorRotation {
    /// Create rotation from an integer degree value (normalised to 0-360).
    pub fn from_degrees_int(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => SensorRotation::Rotate90,
            180 => SensorRotation::Rotate180,
            270 => SensorRotation::Rotate270,
            _ => SensorRotation::None,
        }
    }

    /// Parse rotation from a string value (degrees)
    pub fn from_degrees(degrees: &str) -> Self {
        degrees
            .trim()
            .parse::<i32>()
            .map(Self::from_degrees_int)
            .unwrap_or_default()
    }

    /// Get the rotation in degrees
    pub fn degrees(&self) -> u32 {
        match self {
            SensorRotation::None => 0,
            SensorRotation::Rotate90 => 90,
            SensorRotation::Rotate180 => 180,
            SensorRotation::Rotate270 => 270,
        }
    }
}

impl std::fmt::Display for SensorRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Represents a camera device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    pub name: String,
    pub path: String, // Backend-specific identifier (e.g. "pipewire-serial-57")
    pub facing: CameraFacing,
    pub rotation: SensorRotation,
}

/// A single RGBA frame from the camera
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA pixels, `stride` bytes per row
    pub data: Arc<[u8]>,
    /// Row stride in bytes (may include padding)
    pub stride: u32,
    /// Clockwise rotation needed to upright this frame
    pub rotation: SensorRotation,
    /// Timestamp when frame was captured (for latency diagnostics)
    pub captured_at: Instant,
}

/// Frame receiver type for preview streams
pub type FrameReceiver = futures::channel::mpsc::Receiver<CameraFrame>;

/// Frame sender type for preview streams
pub type FrameSender = futures::channel::mpsc::Sender<CameraFrame>;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Error types for backend operations
#[derive(Debug, Clone)]
pub enum BackendError {
    /// Backend is not available on this system
    NotAvailable(String),
    /// Failed to build or start the pipeline
    InitializationFailed(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NotAvailable(msg) => write!(f, "Backend not available: {}", msg),
            BackendError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_normalises_degrees() {
        assert_eq!(SensorRotation::from_degrees_int(90), SensorRotation::Rotate90);
        assert_eq!(SensorRotation::from_degrees_int(-90), SensorRotation::Rotate270);
        assert_eq!(SensorRotation::from_degrees_int(450), SensorRotation::Rotate90);
        assert_eq!(SensorRotation::from_degrees_int(45), SensorRotation::None);
    }

    #[test]
    fn rotation_parses_strings() {
        assert_eq!(SensorRotation::from_degrees(" 180 "), SensorRotation::Rotate180);
        assert_eq!(SensorRotation::from_degrees("270"), SensorRotation::Rotate270);
        assert_eq!(SensorRotation::from_degrees(""), SensorRotation::None);
        assert_eq!(SensorRotation::from_degrees("sideways"), SensorRotation::None);
    }

    #[test]
    fn facing_from_location() {
        assert_eq!(CameraFacing::from_location("front"), CameraFacing::Front);
        assert_eq!(CameraFacing::from_location("Back"), CameraFacing::Back);
        assert_eq!(CameraFacing::from_location("external"), CameraFacing::External);
        assert_eq!(CameraFacing::from_location(""), CameraFacing::External);
    }

    #[test]
    fn facing_toggle_alternates_front_and_back() {
        assert_eq!(CameraFacing::Back.toggled(), CameraFacing::Front);
        assert_eq!(CameraFacing::Front.toggled(), CameraFacing::Back);
        assert_eq!(CameraFacing::External.toggled(), CameraFacing::Front);
    }
}
