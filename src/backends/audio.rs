// SPDX-License-Identifier: MPL-2.0

//! Audio source discovery through the GStreamer device monitor

use gstreamer::prelude::*;
use tracing::{debug, warn};

/// Represents an audio input device
#[derive(Debug, Clone)]
pub struct AudioDevice {
    /// Human readable device name
    pub name: String,
}

/// Enumerate available audio input devices
pub fn enumerate_audio_devices() -> Vec<AudioDevice> {
    if let Err(e) = gstreamer::init() {
        warn!(error = %e, "Failed to initialize GStreamer");
        return Vec::new();
    }

    let monitor = gstreamer::DeviceMonitor::new();
    monitor.add_filter(Some("Audio/Source"), None);

    if let Err(e) = monitor.start() {
        warn!(error = %e, "Failed to start audio device monitor");
        return Vec::new();
    }

    let devices: Vec<AudioDevice> = monitor
        .devices()
        .into_iter()
        .map(|device| AudioDevice {
            name: device.display_name().to_string(),
        })
        .collect();
    monitor.stop();

    debug!(count = devices.len(), "Audio sources enumerated");
    devices
}
