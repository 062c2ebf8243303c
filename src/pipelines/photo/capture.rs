// SPDX-License-Identifier: MPL-2.0

//! Photo capture from the preview stream
//!
//! A still is taken from the latest preview frame, so capturing never interrupts
//! the running pipeline.

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use std::sync::Arc;
use tracing::debug;

/// Photo capture handler
pub struct PhotoCapture;

impl PhotoCapture {
    /// Frame to use for a shutter press
    ///
    /// Fails with [`PhotoError::NoFrameAvailable`] when the camera has not delivered a
    /// frame yet (device still starting, busy, or gone).
    pub fn frame_for_capture(
        current: Option<&Arc<CameraFrame>>,
    ) -> Result<Arc<CameraFrame>, PhotoError> {
        let frame = current.ok_or(PhotoError::NoFrameAvailable)?;
        debug!(
            width = frame.width,
            height = frame.height,
            age_ms = frame.captured_at.elapsed().as_millis() as u64,
            "Using current preview frame for photo"
        );
        Ok(Arc::clone(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::SensorRotation;

    #[test]
    fn test_capture_from_frame() {
        let frame = Arc::new(CameraFrame {
            width: 1920,
            height: 1080,
            data: Arc::from(vec![0u8; 1920 * 1080 * 4]), // RGBA size (4 bytes per pixel)
            stride: 1920 * 4,
            rotation: SensorRotation::None,
            captured_at: std::time::Instant::now(),
        });

        let captured = PhotoCapture::frame_for_capture(Some(&frame)).unwrap();
        assert!(Arc::ptr_eq(&captured, &frame));
    }

    #[test]
    fn test_capture_without_frame() {
        assert_eq!(
            PhotoCapture::frame_for_capture(None).unwrap_err(),
            PhotoError::NoFrameAvailable
        );
    }
}
