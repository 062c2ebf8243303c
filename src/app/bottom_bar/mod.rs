// SPDX-License-Identifier: GPL-3.0-only

//! Bottom bar module
//!
//! This module handles the bottom control bar UI components:
//! - Gallery button (with latest thumbnail)
//! - Capture button (centered)
//! - Camera switcher (front/back)

pub mod camera_switcher;
pub mod gallery_button;

use crate::app::state::{AppModel, Message};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

/// Fixed height for the bottom bar
const BOTTOM_BAR_HEIGHT: f32 = 96.0;

impl AppModel {
    /// Build the complete bottom bar widget
    ///
    /// Assembles gallery button, capture button, and camera switcher
    /// into a layout where the capture button is horizontally centered.
    pub fn build_bottom_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Three-column layout keeps the capture button centered regardless of
        // asymmetric button widths:
        // [left Fill + gallery] [capture] [camera_switcher + right Fill]
        let left_section = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_gallery_button())
            .push(widget::horizontal_space().width(spacing.space_l))
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let right_section = widget::row()
            .push(widget::horizontal_space().width(spacing.space_l))
            .push(self.build_camera_switcher())
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let bottom_row = widget::row()
            .push(left_section)
            .push(self.build_capture_button())
            .push(right_section)
            .padding(spacing.space_xs)
            .align_y(Alignment::Center);

        widget::container(bottom_row)
            .width(Length::Fill)
            .height(Length::Fixed(BOTTOM_BAR_HEIGHT))
            .center_y(BOTTOM_BAR_HEIGHT)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::TRANSPARENT)),
                ..Default::default()
            })
            .into()
    }
}
