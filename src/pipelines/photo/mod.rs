// SPDX-License-Identifier: MPL-2.0

//! Async photo capture pipeline
//!
//! Turns the preview frame that was current when the shutter fired into an upright
//! gallery photo without blocking the UI:
//!
//! ```text
//! Preview frame → Capture → Orientation (blocking worker) → CapturedImage
//!       ↓
//! Preview continues uninterrupted
//! ```
//!
//! The result is handed back to the update loop as a [`CaptureOutcome`]. Failures
//! are reported in the `Err` arm and never touch the gallery.

pub mod capture;
pub mod processing;

pub use capture::PhotoCapture;
pub use processing::orient_frame;

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use crate::gallery::{CaptureId, CapturedImage};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one shutter press
pub type CaptureOutcome = Result<CapturedImage, PhotoError>;

/// Photo capture pipeline
pub struct PhotoPipeline;

impl PhotoPipeline {
    /// Orient `frame` on a blocking worker and wrap it as capture `id`
    pub async fn capture(id: CaptureId, frame: Arc<CameraFrame>) -> CaptureOutcome {
        info!(
            %id,
            width = frame.width,
            height = frame.height,
            rotation = %frame.rotation,
            "Processing capture"
        );

        let pixels = tokio::task::spawn_blocking(move || orient_frame(&frame))
            .await
            .map_err(PhotoError::from)
            .and_then(|result| result)
            .inspect_err(|e| warn!(%id, error = %e, "Capture processing failed"))?;

        let image = CapturedImage::new(id, pixels, chrono::Local::now());
        info!(%id, width = image.width(), height = image.height(), "Capture ready");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::SensorRotation;
    use std::time::Instant;

    fn frame(width: u32, height: u32, rotation: SensorRotation) -> Arc<CameraFrame> {
        Arc::new(CameraFrame {
            width,
            height,
            data: Arc::from(vec![128u8; (width * height * 4) as usize]),
            stride: width * 4,
            rotation,
            captured_at: Instant::now(),
        })
    }

    #[tokio::test]
    async fn capture_produces_upright_image() {
        let image = PhotoPipeline::capture(CaptureId(1), frame(4, 2, SensorRotation::Rotate90))
            .await
            .unwrap();
        assert_eq!(image.id(), CaptureId(1));
        assert_eq!((image.width(), image.height()), (2, 4));
    }

    #[tokio::test]
    async fn truncated_frame_is_an_error() {
        let broken = Arc::new(CameraFrame {
            data: Arc::from(vec![0u8; 10]),
            ..(*frame(4, 4, SensorRotation::None)).clone()
        });
        let outcome = PhotoPipeline::capture(CaptureId(2), broken).await;
        assert!(matches!(outcome, Err(PhotoError::InvalidFrame(_))));
    }
}
