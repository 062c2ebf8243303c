// SPDX-License-Identifier: MPL-2.0

//! Camera backend abstraction
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (App)    │
//! └──────────┬──────────┘
//!            │ frames (mpsc)
//!            ▼
//! ┌─────────────────────┐
//! │   CameraPipeline    │  ← source ! videoconvert ! RGBA appsink
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  CameraBackend Trait│  ← enumeration + source element
//! └──────────┬──────────┘
//!       ┌────┴──────┐
//!       ▼           ▼
//!  ┌────────┐ ┌───────────┐
//!  │PipeWire│ │TestPattern│
//!  └────────┘ └───────────┘
//! ```

pub mod pipeline;
pub mod pipewire;
pub mod test_pattern;
pub mod types;

pub use pipeline::CameraPipeline;
pub use types::*;

/// Camera backend trait
///
/// A backend knows how to find cameras and how to describe the GStreamer source
/// element for one of them. Pipeline construction is shared in [`CameraPipeline`].
pub trait CameraBackend: Send + Sync {
    /// Enumerate available cameras on this backend
    fn enumerate_cameras(&self) -> Vec<CameraDevice>;

    /// GStreamer launch fragment for the source element of `device`
    fn source_description(&self, device: &CameraDevice) -> String;

    /// Get the backend type identifier
    fn backend_type(&self) -> CameraBackendType;

    /// Check if this backend is available on the current system
    fn is_available(&self) -> bool;
}

/// Get a concrete backend instance
pub fn get_backend(backend_type: CameraBackendType) -> Box<dyn CameraBackend> {
    match backend_type {
        CameraBackendType::PipeWire => Box::new(pipewire::PipeWireBackend::new()),
        CameraBackendType::TestPattern => Box::new(test_pattern::TestPatternBackend::new()),
    }
}

/// Pick the camera to use for a preferred facing
///
/// Prefers the first camera whose reported location matches. Cameras without location
/// metadata (typical desktop webcams) are addressed by position: the back selector maps
/// to the first camera and the front selector to the second, when there is one.
pub fn select_camera(cameras: &[CameraDevice], facing: CameraFacing) -> Option<usize> {
    if cameras.is_empty() {
        return None;
    }

    if let Some(index) = cameras.iter().position(|cam| cam.facing == facing) {
        return Some(index);
    }

    let fallback = match facing {
        CameraFacing::Front if cameras.len() > 1 => 1,
        _ => 0,
    };
    Some(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, facing: CameraFacing) -> CameraDevice {
        CameraDevice {
            name: name.to_string(),
            path: format!("test-{}", name),
            facing,
            rotation: SensorRotation::None,
        }
    }

    #[test]
    fn select_camera_prefers_matching_location() {
        let cameras = vec![
            device("rear", CameraFacing::Back),
            device("selfie", CameraFacing::Front),
        ];
        assert_eq!(select_camera(&cameras, CameraFacing::Front), Some(1));
        assert_eq!(select_camera(&cameras, CameraFacing::Back), Some(0));
    }

    #[test]
    fn select_camera_falls_back_to_position() {
        let cameras = vec![
            device("usb-a", CameraFacing::External),
            device("usb-b", CameraFacing::External),
        ];
        assert_eq!(select_camera(&cameras, CameraFacing::Back), Some(0));
        assert_eq!(select_camera(&cameras, CameraFacing::Front), Some(1));
    }

    #[test]
    fn select_camera_single_device() {
        let cameras = vec![device("only", CameraFacing::External)];
        assert_eq!(select_camera(&cameras, CameraFacing::Front), Some(0));
        assert_eq!(select_camera(&[], CameraFacing::Back), None);
    }
}
