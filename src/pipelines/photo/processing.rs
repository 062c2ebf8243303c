// SPDX-License-Identifier: MPL-2.0

//! Orientation correction for captured frames
//!
//! Preview frames arrive as padded RGBA rows in sensor orientation. Before a frame
//! becomes a gallery photo, its rows are packed and it is rotated clockwise by the
//! sensor rotation so that "up" in the buffer is up in the scene.

use crate::backends::camera::types::{CameraFrame, SensorRotation};
use crate::errors::PhotoError;
use image::{RgbaImage, imageops};
use tracing::debug;

const BYTES_PER_PIXEL: usize = 4;

/// Copy `frame` into an upright RGBA image
pub fn orient_frame(frame: &CameraFrame) -> Result<RgbaImage, PhotoError> {
    let packed = pack_rows(frame)?;
    let image = RgbaImage::from_raw(frame.width, frame.height, packed).ok_or_else(|| {
        PhotoError::InvalidFrame("Failed to create RGBA image from frame".to_string())
    })?;

    debug!(rotation = %frame.rotation, "Applying sensor rotation");
    Ok(rotate(image, frame.rotation))
}

/// Rotate clockwise by `rotation`
pub fn rotate(image: RgbaImage, rotation: SensorRotation) -> RgbaImage {
    match rotation {
        SensorRotation::None => image,
        SensorRotation::Rotate90 => imageops::rotate90(&image),
        SensorRotation::Rotate180 => imageops::rotate180(&image),
        SensorRotation::Rotate270 => imageops::rotate270(&image),
    }
}

/// Strip row padding, validating the buffer against the frame geometry
fn pack_rows(frame: &CameraFrame) -> Result<Vec<u8>, PhotoError> {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let stride = frame.stride as usize;
    let row_bytes = width * BYTES_PER_PIXEL;

    if width == 0 || height == 0 {
        return Err(PhotoError::InvalidFrame(format!(
            "Empty frame: {}x{}",
            frame.width, frame.height
        )));
    }
    if stride < row_bytes {
        return Err(PhotoError::InvalidFrame(format!(
            "Stride {} shorter than row of {} bytes",
            stride, row_bytes
        )));
    }

    let required = stride * (height - 1) + row_bytes;
    if frame.data.len() < required {
        return Err(PhotoError::InvalidFrame(format!(
            "Frame data too small: expected {}, got {}",
            required,
            frame.data.len()
        )));
    }

    if stride == row_bytes {
        return Ok(frame.data[..row_bytes * height].to_vec());
    }

    let mut packed = Vec::with_capacity(row_bytes * height);
    for row in frame.data.chunks(stride).take(height) {
        packed.extend_from_slice(&row[..row_bytes]);
    }
    Ok(packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn frame(
        width: u32,
        height: u32,
        stride: u32,
        data: Vec<u8>,
        rotation: SensorRotation,
    ) -> CameraFrame {
        CameraFrame {
            width,
            height,
            data: Arc::from(data),
            stride,
            rotation,
            captured_at: Instant::now(),
        }
    }

    /// 2x1 frame: red on the left, blue on the right
    fn red_blue(rotation: SensorRotation) -> CameraFrame {
        frame(2, 1, 8, [RED, BLUE].concat(), rotation)
    }

    #[test]
    fn no_rotation_keeps_layout() {
        let image = orient_frame(&red_blue(SensorRotation::None)).unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0).0, RED);
        assert_eq!(image.get_pixel(1, 0).0, BLUE);
    }

    #[test]
    fn rotate_90_is_clockwise() {
        let image = orient_frame(&red_blue(SensorRotation::Rotate90)).unwrap();
        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.get_pixel(0, 0).0, RED);
        assert_eq!(image.get_pixel(0, 1).0, BLUE);
    }

    #[test]
    fn rotate_180_flips_both_axes() {
        let image = orient_frame(&red_blue(SensorRotation::Rotate180)).unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0).0, BLUE);
        assert_eq!(image.get_pixel(1, 0).0, RED);
    }

    #[test]
    fn rotate_270_is_counter_clockwise() {
        let image = orient_frame(&red_blue(SensorRotation::Rotate270)).unwrap();
        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.get_pixel(0, 0).0, BLUE);
        assert_eq!(image.get_pixel(0, 1).0, RED);
    }

    #[test]
    fn padded_rows_are_packed() {
        // 1x2 frame with 4 bytes of padding per row
        let data = [RED, [9; 4], BLUE, [9; 4]].concat();
        let image = orient_frame(&frame(1, 2, 8, data, SensorRotation::None)).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, RED);
        assert_eq!(image.get_pixel(0, 1).0, BLUE);
    }

    #[test]
    fn last_row_padding_may_be_missing() {
        let data = [RED, [9; 4], BLUE].concat();
        let image = orient_frame(&frame(1, 2, 8, data, SensorRotation::None)).unwrap();
        assert_eq!(image.get_pixel(0, 1).0, BLUE);
    }

    #[test]
    fn inconsistent_buffers_are_rejected() {
        let short = frame(2, 2, 8, vec![0; 12], SensorRotation::None);
        assert!(matches!(orient_frame(&short), Err(PhotoError::InvalidFrame(_))));

        let narrow_stride = frame(2, 1, 4, vec![0; 8], SensorRotation::None);
        assert!(matches!(orient_frame(&narrow_stride), Err(PhotoError::InvalidFrame(_))));

        let empty = frame(0, 0, 0, Vec::new(), SensorRotation::None);
        assert!(matches!(orient_frame(&empty), Err(PhotoError::InvalidFrame(_))));
    }
}
