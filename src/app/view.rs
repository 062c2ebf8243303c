// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! This module composes the main UI from modularized components:
//! - Camera preview (camera_preview module)
//! - Capture failure notice (inline)
//! - Bottom bar with capture button (bottom_bar and controls modules)
//! - Gallery sheet overlay (gallery_sheet module)
//! - Full-screen viewer overlay (image_viewer module)

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

/// Semi-transparent rounded background for controls drawn over the preview
pub fn overlay_container_style(theme: &cosmic::Theme) -> widget::container::Style {
    let cosmic = theme.cosmic();
    let mut background: Color = cosmic.bg_color().into();
    background.a = ui::OVERLAY_BACKGROUND_ALPHA;

    widget::container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(cosmic.on_bg_color().into()),
        border: Border {
            radius: cosmic.corner_radii.radius_m.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the main application view
    ///
    /// Composes all UI components into a layered layout with overlays.
    pub fn view(&self) -> Element<'_, Message> {
        // The viewer covers everything while open
        if let Some(viewer) = self.build_image_viewer() {
            return viewer;
        }

        let mut preview_stack = cosmic::iced::widget::stack![self.build_camera_preview()];

        if let Some(notice) = self.build_capture_notice() {
            preview_stack = preview_stack.push(
                widget::container(notice)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(cosmic::iced::alignment::Horizontal::Center)
                    .align_y(cosmic::iced::alignment::Vertical::Bottom)
                    .padding([0, 0, 8, 0]),
            );
        }

        let main_column = widget::column()
            .push(preview_stack.width(Length::Fill).height(Length::Fill))
            .push(self.build_bottom_bar())
            .width(Length::Fill)
            .height(Length::Fill);

        // Wrap content in a stack so we can overlay the gallery sheet
        let mut main_stack = cosmic::iced::widget::stack![main_column];

        if self.gallery_visible {
            main_stack = main_stack.push(
                widget::container(self.build_gallery_sheet())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(cosmic::iced::alignment::Vertical::Bottom),
            );
        }

        // Wrap everything in a black background container
        widget::container(main_stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Transient message for the last failed capture
    fn build_capture_notice(&self) -> Option<Element<'_, Message>> {
        let notice = self.capture.notice()?;
        let spacing = cosmic::theme::spacing();

        Some(
            widget::container(
                widget::text(fl!("capture-failed", reason = notice.reason.clone())).size(14),
            )
            .padding([spacing.space_xxs, spacing.space_s])
            .style(overlay_container_style)
            .into(),
        )
    }
}
