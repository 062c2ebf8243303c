// SPDX-License-Identifier: MPL-2.0

//! Shutter button

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

/// Visual state of the shutter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shutter {
    /// Preview running, press to capture
    Ready,
    /// A capture is being processed
    Busy,
    /// No camera or no frame yet
    Unavailable,
}

impl Shutter {
    fn color(self) -> Color {
        match self {
            Shutter::Ready => Color::WHITE,
            Shutter::Busy => Color::from_rgb(0.7, 0.7, 0.7),
            Shutter::Unavailable => Color::from_rgba(0.5, 0.5, 0.5, 0.3),
        }
    }

    /// Shrink factor; the button looks pressed in while busy
    fn scale(self) -> f32 {
        match self {
            Shutter::Busy => 0.85,
            Shutter::Ready | Shutter::Unavailable => 1.0,
        }
    }
}

impl AppModel {
    fn shutter_state(&self) -> Shutter {
        if !self.camera_enabled() || self.current_frame.is_none() {
            Shutter::Unavailable
        } else if self.is_capturing() {
            Shutter::Busy
        } else {
            Shutter::Ready
        }
    }

    /// Build the round shutter button centered in its column
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let state = self.shutter_state();
        let scale = state.scale();
        let inner = ui::CAPTURE_BUTTON_INNER * scale;
        let color = state.color();

        let disc = widget::container(widget::Space::new(
            Length::Fixed(inner),
            Length::Fixed(inner),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: (ui::CAPTURE_BUTTON_RADIUS * scale).into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let outer = ui::CAPTURE_BUTTON_OUTER * scale;
        let button = widget::button::custom(disc)
            .padding(0)
            .width(Length::Fixed(outer))
            .height(Length::Fixed(outer))
            .on_press_maybe((state == Shutter::Ready).then_some(Message::Capture));

        let button = widget::tooltip(
            button,
            widget::text(fl!("take-photo")),
            widget::tooltip::Position::Top,
        );

        // Fixed slot so the bar does not shift while the button shrinks
        let slot = widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center(Length::Fixed(ui::CAPTURE_BUTTON_OUTER));

        widget::container(slot)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([spacing.space_xs, 0])
            .into()
    }
}
