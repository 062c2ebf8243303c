// SPDX-License-Identifier: MPL-2.0

//! PipeWire camera backend
//!
//! This backend uses the GStreamer PipeWire device provider for camera enumeration
//! and `pipewiresrc` for capture. It's the modern, recommended approach for Linux
//! camera access and works inside the Flatpak sandbox through the camera portal.

mod enumeration;

pub use enumeration::{enumerate_pipewire_cameras, is_pipewire_available};

use super::CameraBackend;
use super::types::*;
use tracing::{info, warn};

/// Prefix used for device paths that carry a PipeWire object serial
const SERIAL_PREFIX: &str = "pipewire-serial-";

/// PipeWire backend implementation
pub struct PipeWireBackend;

impl PipeWireBackend {
    /// Create a new PipeWire backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for PipeWireBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraBackend for PipeWireBackend {
    fn enumerate_cameras(&self) -> Vec<CameraDevice> {
        info!("Using PipeWire backend for camera enumeration");

        if let Some(cameras) = enumerate_pipewire_cameras() {
            info!(count = cameras.len(), "PipeWire cameras enumerated");
            cameras
        } else {
            info!("PipeWire enumeration returned None");
            Vec::new()
        }
    }

    fn source_description(&self, device: &CameraDevice) -> String {
        pipewire_source(&device.path)
    }

    fn backend_type(&self) -> CameraBackendType {
        CameraBackendType::PipeWire
    }

    fn is_available(&self) -> bool {
        is_pipewire_available()
    }
}

/// Build the device path for a PipeWire object serial
pub(crate) fn device_path_for_serial(serial: &str) -> String {
    format!("{}{}", SERIAL_PREFIX, serial)
}

/// Build the `pipewiresrc` launch fragment for a device path
///
/// An empty path lets PipeWire pick the default camera.
fn pipewire_source(device_path: &str) -> String {
    if device_path.is_empty() {
        info!("Using default PipeWire camera (auto-select)");
        return "pipewiresrc".to_string();
    }

    if let Some(serial) = device_path.strip_prefix(SERIAL_PREFIX) {
        info!(serial, "Using PipeWire object.serial");
        format!("pipewiresrc target-object={}", serial)
    } else if device_path.starts_with("/dev/video") {
        info!(device_path, "Using V4L2 device via PipeWire");
        format!("pipewiresrc path=v4l2:{}", device_path)
    } else {
        warn!(device_path, "Unknown device path format, using path property");
        format!("pipewiresrc path={}", device_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_for_serial_path() {
        let path = device_path_for_serial("57");
        assert_eq!(path, "pipewire-serial-57");
        assert_eq!(pipewire_source(&path), "pipewiresrc target-object=57");
    }

    #[test]
    fn source_for_v4l2_and_default() {
        assert_eq!(
            pipewire_source("/dev/video2"),
            "pipewiresrc path=v4l2:/dev/video2"
        );
        assert_eq!(pipewire_source(""), "pipewiresrc");
    }
}
