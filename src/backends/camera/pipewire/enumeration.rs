// SPDX-License-Identifier: MPL-2.0

//! PipeWire camera enumeration through the GStreamer device monitor

use super::super::types::*;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

/// Check if the PipeWire GStreamer source is installed (factory check only)
pub fn is_pipewire_available() -> bool {
    if gstreamer::init().is_err() {
        return false;
    }
    gstreamer::ElementFactory::find("pipewiresrc").is_some()
}

/// Enumerate cameras exposed by PipeWire
///
/// Returns `None` when GStreamer or the device monitor cannot be started.
/// Devices from other providers (e.g. the plain V4L2 provider) are skipped because
/// they cannot be addressed through `pipewiresrc`.
pub fn enumerate_pipewire_cameras() -> Option<Vec<CameraDevice>> {
    if let Err(e) = gstreamer::init() {
        warn!(error = %e, "Failed to initialize GStreamer");
        return None;
    }

    let monitor = gstreamer::DeviceMonitor::new();
    let caps = gstreamer::Caps::new_empty_simple("video/x-raw");
    monitor.add_filter(Some("Video/Source"), Some(&caps));

    if let Err(e) = monitor.start() {
        warn!(error = %e, "Failed to start GStreamer device monitor");
        return None;
    }

    let devices = monitor.devices();
    monitor.stop();

    let cameras: Vec<CameraDevice> = devices
        .into_iter()
        .filter_map(|device| camera_from_device(&device))
        .collect();

    info!(count = cameras.len(), "Device monitor scan complete");
    Some(cameras)
}

/// Build a camera description from a monitored device
fn camera_from_device(device: &gstreamer::Device) -> Option<CameraDevice> {
    let name = device.display_name().to_string();
    let Some(props) = device.properties() else {
        debug!(name = %name, "Device has no properties, skipping");
        return None;
    };

    let Some(serial) = property_string(&props, "object.serial") else {
        debug!(name = %name, "Device is not a PipeWire node, skipping");
        return None;
    };

    let facing = property_string(&props, "api.libcamera.location")
        .map(|location| CameraFacing::from_location(&location))
        .unwrap_or(CameraFacing::External);
    let rotation = property_string(&props, "api.libcamera.rotation")
        .map(|degrees| SensorRotation::from_degrees(&degrees))
        .unwrap_or_default();

    info!(name = %name, serial = %serial, %facing, %rotation, "Found PipeWire camera");

    Some(CameraDevice {
        name,
        path: super::device_path_for_serial(&serial),
        facing,
        rotation,
    })
}

/// Read a device property as a string
///
/// PipeWire forwards most node properties as strings, but some versions expose
/// numeric ids as integers.
fn property_string(props: &gstreamer::StructureRef, key: &str) -> Option<String> {
    let value = props.value(key).ok()?;
    value
        .get::<String>()
        .ok()
        .or_else(|| value.get::<i32>().ok().map(|v| v.to_string()))
        .or_else(|| value.get::<u32>().ok().map(|v| v.to_string()))
        .or_else(|| value.get::<i64>().ok().map(|v| v.to_string()))
        .or_else(|| value.get::<u64>().ok().map(|v| v.to_string()))
}
