// SPDX-License-Identifier: MPL-2.0

//! Synthetic camera backend built on `videotestsrc`
//!
//! Exposes a fake back camera and a fake front camera so the preview, capture and
//! camera switcher can be exercised on machines without camera hardware.

use super::CameraBackend;
use super::types::*;
use tracing::info;

/// Test pattern backend implementation
pub struct TestPatternBackend;

impl TestPatternBackend {
    /// Create a new test pattern backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for TestPatternBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraBackend for TestPatternBackend {
    fn enumerate_cameras(&self) -> Vec<CameraDevice> {
        info!("Using test pattern backend");
        vec![
            CameraDevice {
                name: "Test Pattern (back)".to_string(),
                path: "smpte".to_string(),
                facing: CameraFacing::Back,
                rotation: SensorRotation::None,
            },
            CameraDevice {
                name: "Test Pattern (front)".to_string(),
                path: "ball".to_string(),
                facing: CameraFacing::Front,
                rotation: SensorRotation::None,
            },
        ]
    }

    fn source_description(&self, device: &CameraDevice) -> String {
        format!(
            "videotestsrc is-live=true pattern={} ! video/x-raw,width=1280,height=720,framerate=30/1",
            device.path
        )
    }

    fn backend_type(&self) -> CameraBackendType {
        CameraBackendType::TestPattern
    }

    fn is_available(&self) -> bool {
        gstreamer::init().is_ok() && gstreamer::ElementFactory::find("videotestsrc").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_front_and_back_cameras() {
        let cameras = TestPatternBackend::new().enumerate_cameras();
        assert!(cameras.iter().any(|c| c.facing == CameraFacing::Front));
        assert!(cameras.iter().any(|c| c.facing == CameraFacing::Back));
    }

    #[test]
    fn source_uses_device_pattern() {
        let backend = TestPatternBackend::new();
        let cameras = backend.enumerate_cameras();
        let source = backend.source_description(&cameras[1]);
        assert!(source.starts_with("videotestsrc"));
        assert!(source.contains("pattern=ball"));
    }
}
