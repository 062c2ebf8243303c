// SPDX-License-Identifier: MPL-2.0

//! GStreamer preview pipeline shared by all camera backends

use super::CameraBackend;
use super::types::*;
use crate::constants::{pipeline, timing};
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, warn};

static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Live camera pipeline
///
/// Runs `source ! videoconvert ! RGBA appsink` and forwards every decoded frame to
/// the UI through a bounded channel. Frames are dropped when the channel is full;
/// the preview only ever needs the latest one. The pipeline stops when dropped.
pub struct CameraPipeline {
    pipeline: gstreamer::Pipeline,
    appsink: AppSink,
}

impl CameraPipeline {
    /// Create and start a pipeline for `device`
    pub fn new(
        backend: &dyn CameraBackend,
        device: &CameraDevice,
        mut frame_sender: FrameSender,
    ) -> BackendResult<Self> {
        info!(device = %device.name, backend = %backend.backend_type(), "Creating camera pipeline");

        gstreamer::init().map_err(|e| BackendError::InitializationFailed(e.to_string()))?;

        let description = pipeline_description(&backend.source_description(device));
        info!(pipeline = %description, "Launching pipeline");

        let pipeline = gstreamer::parse::launch(&description)
            .map_err(|e| BackendError::InitializationFailed(e.to_string()))?
            .dynamic_cast::<gstreamer::Pipeline>()
            .map_err(|_| {
                BackendError::InitializationFailed("Failed to cast to pipeline".to_string())
            })?;

        let appsink = pipeline
            .by_name("sink")
            .ok_or_else(|| BackendError::InitializationFailed("Failed to get appsink".to_string()))?
            .dynamic_cast::<AppSink>()
            .map_err(|_| {
                BackendError::InitializationFailed("Failed to cast appsink".to_string())
            })?;

        appsink.set_property("sync", false); // Disable sync for lowest latency
        appsink.set_property("max-buffers", pipeline::MAX_BUFFERS);
        appsink.set_property("drop", true); // Drop old frames if processing is slow
        appsink.set_property("enable-last-sample", false);

        let rotation = device.rotation;
        appsink.set_callbacks(
            gstreamer_app::AppSinkCallbacks::builder()
                .new_sample(move |appsink| {
                    let frame_num = FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
                    let captured_at = Instant::now();

                    let sample = appsink.pull_sample().map_err(|e| {
                        error!(frame = frame_num, error = ?e, "Failed to pull sample");
                        gstreamer::FlowError::Eos
                    })?;
                    let buffer = sample.buffer().ok_or(gstreamer::FlowError::Error)?;
                    if buffer.flags().contains(gstreamer::BufferFlags::CORRUPTED) {
                        warn!(frame = frame_num, "Buffer marked as corrupted, skipping frame");
                        return Ok(gstreamer::FlowSuccess::Ok);
                    }

                    let caps = sample.caps().ok_or(gstreamer::FlowError::Error)?;
                    let video_info =
                        VideoInfo::from_caps(caps).map_err(|_| gstreamer::FlowError::Error)?;
                    let map = buffer
                        .map_readable()
                        .map_err(|_| gstreamer::FlowError::Error)?;

                    let frame = CameraFrame {
                        width: video_info.width(),
                        height: video_info.height(),
                        data: Arc::from(map.as_slice()),
                        stride: video_info.stride()[0] as u32,
                        rotation,
                        captured_at,
                    };

                    if frame_num % timing::FRAME_LOG_INTERVAL == 0 {
                        debug!(
                            frame = frame_num,
                            width = frame.width,
                            height = frame.height,
                            stride = frame.stride,
                            "Frame received"
                        );
                    }

                    if let Err(e) = frame_sender.try_send(frame) {
                        if e.is_disconnected() {
                            info!("Frame receiver gone, ending stream");
                            return Err(gstreamer::FlowError::Eos);
                        }
                        debug!(frame = frame_num, "Frame dropped (channel full)");
                    }

                    Ok(gstreamer::FlowSuccess::Ok)
                })
                .build(),
        );

        pipeline.set_state(gstreamer::State::Playing).map_err(|e| {
            BackendError::InitializationFailed(format!("Failed to start pipeline: {}", e))
        })?;

        let (result, state, pending) = pipeline.state(gstreamer::ClockTime::from_mseconds(
            timing::STATE_CHANGE_TIMEOUT_MS,
        ));
        debug!(?result, ?state, ?pending, "Pipeline state");
        if result.is_err() {
            let _ = pipeline.set_state(gstreamer::State::Null);
            return Err(BackendError::InitializationFailed(
                "Pipeline failed to reach PLAYING".to_string(),
            ));
        }

        info!("Camera pipeline running");
        Ok(Self { pipeline, appsink })
    }
}

impl Drop for CameraPipeline {
    fn drop(&mut self) {
        info!("Dropping camera pipeline - explicitly stopping");
        self.appsink
            .set_callbacks(gstreamer_app::AppSinkCallbacks::builder().build());
        // Release the device immediately rather than waiting for the bus to wind down
        let _ = self.pipeline.set_state(gstreamer::State::Null);
    }
}

/// Full launch description for a source fragment
fn pipeline_description(source: &str) -> String {
    format!(
        "{} ! queue max-size-buffers={} leaky=downstream ! videoconvert ! video/x-raw,format=RGBA ! appsink name=sink",
        source,
        pipeline::MAX_BUFFERS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_ends_in_rgba_appsink() {
        let description = pipeline_description("videotestsrc");
        assert!(description.starts_with("videotestsrc ! "));
        assert!(description.contains("format=RGBA"));
        assert!(description.ends_with("appsink name=sink"));
    }
}
