// SPDX-License-Identifier: GPL-3.0-only

//! Camera preview surface
//!
//! Shows the live frame, or a placeholder while cameras are starting, missing,
//! or when camera access was refused.

use crate::app::state::{AppModel, Message};
use crate::backends::camera::types::{CameraDevice, CameraFrame};
use crate::backends::permissions::PermissionStatus;
use crate::errors::PhotoError;
use crate::fl;
use crate::pipelines::photo::orient_frame;
use cosmic::Element;
use cosmic::iced::{Background, ContentFit, Length};
use cosmic::widget::{self, image::Handle};
use image::imageops;
use std::sync::Arc;

/// A camera frame with its ready-to-draw preview image
///
/// Built in the camera subscription, so the update loop only swaps handles.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    /// Path of the camera that produced the frame
    pub device_path: Arc<str>,
    /// Raw frame kept for still capture
    pub frame: Arc<CameraFrame>,
    /// Upright (and optionally mirrored) render handle
    pub handle: Handle,
}

impl PreviewFrame {
    /// Orient and optionally mirror `frame` into a render handle
    ///
    /// Copies the whole frame, so callers run this off the UI thread.
    pub(crate) fn prepare(
        device_path: Arc<str>,
        frame: CameraFrame,
        mirror: bool,
    ) -> Result<Self, PhotoError> {
        let mut image = orient_frame(&frame)?;
        if mirror {
            imageops::flip_horizontal_in_place(&mut image);
        }
        let (width, height) = image.dimensions();
        Ok(Self {
            device_path,
            frame: Arc::new(frame),
            handle: Handle::from_rgba(width, height, image.into_raw()),
        })
    }

    /// Whether the frame came from `camera`
    ///
    /// Frames queued by a previous camera's pipeline can still arrive after a switch.
    pub(crate) fn is_from(&self, camera: Option<&CameraDevice>) -> bool {
        camera.is_some_and(|camera| *camera.path == *self.device_path)
    }
}

impl AppModel {
    /// Build the camera preview widget
    pub fn build_camera_preview(&self) -> Element<'_, Message> {
        match self.permissions.camera {
            PermissionStatus::Denied => return self.build_access_prompt(),
            PermissionStatus::Unknown => return placeholder(fl!("initializing-camera")),
            PermissionStatus::Granted => {}
        }

        if !self.cameras_initialized {
            return placeholder(fl!("initializing-camera"));
        }
        if self.available_cameras.is_empty() {
            return placeholder(fl!("no-camera-found"));
        }

        match &self.preview_handle {
            Some(handle) => widget::image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => widget::container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }

    /// Prompt shown when camera access was refused
    fn build_access_prompt(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let content = widget::column()
            .push(widget::icon::from_name("camera-disabled-symbolic").size(64).icon())
            .push(widget::text(fl!("camera-access-required")).size(16))
            .push(
                widget::button::suggested(fl!("request-access"))
                    .on_press(Message::RequestCameraAccess),
            )
            .spacing(spacing.space_s)
            .align_x(cosmic::iced::alignment::Horizontal::Center);

        themed_center(content.into())
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    themed_center(widget::text(label).size(20).into())
}

fn themed_center(content: Element<'_, Message>) -> Element<'_, Message> {
    widget::container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(cosmic::iced::alignment::Horizontal::Center)
        .align_y(cosmic::iced::alignment::Vertical::Center)
        .style(|theme| widget::container::Style {
            background: Some(Background::Color(theme.cosmic().bg_color().into())),
            text_color: Some(theme.cosmic().on_bg_color().into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::{CameraFacing, SensorRotation};
    use std::time::Instant;

    fn frame(data: Vec<u8>, rotation: SensorRotation) -> CameraFrame {
        CameraFrame {
            width: 3,
            height: 2,
            data: Arc::from(data),
            stride: 12,
            rotation,
            captured_at: Instant::now(),
        }
    }

    fn camera(path: &str) -> CameraDevice {
        CameraDevice {
            name: path.to_string(),
            path: path.to_string(),
            facing: CameraFacing::External,
            rotation: SensorRotation::None,
        }
    }

    #[test]
    fn prepare_accepts_valid_frames() {
        let valid = || frame(vec![255u8; 3 * 2 * 4], SensorRotation::Rotate90);
        let mirrored = PreviewFrame::prepare(Arc::from("cam-a"), valid(), true);
        assert!(mirrored.is_ok());
        let plain = PreviewFrame::prepare(Arc::from("cam-a"), valid(), false);
        assert_eq!(plain.map(|preview| preview.frame.width).ok(), Some(3));
    }

    #[test]
    fn prepare_rejects_truncated_frames() {
        let truncated = frame(vec![0u8; 4], SensorRotation::None);
        assert!(PreviewFrame::prepare(Arc::from("cam-a"), truncated, false).is_err());
    }

    #[test]
    fn frames_from_previous_camera_are_recognized() {
        let preview = PreviewFrame::prepare(
            Arc::from("cam-a"),
            frame(vec![0u8; 3 * 2 * 4], SensorRotation::None),
            false,
        )
        .expect("valid frame");

        assert!(preview.is_from(Some(&camera("cam-a"))));
        assert!(!preview.is_from(Some(&camera("cam-b"))));
        assert!(!preview.is_from(None));
    }
}
