// SPDX-License-Identifier: GPL-3.0-only

//! Full-screen photo viewer
//!
//! Renders the photo under the viewer cursor with a close button, a position label
//! and previous/next buttons. Horizontal drags on the photo are turned into
//! navigation by the swipe tracker in the update loop.

use crate::app::state::{AppModel, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use crate::fl;
use crate::gallery::NavigateDirection;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, ContentFit, Length};
use cosmic::widget;

impl AppModel {
    /// Build the viewer overlay, if it is open
    pub fn build_image_viewer(&self) -> Option<Element<'_, Message>> {
        let cursor = self.viewer.cursor()?;
        let image = self.viewer.current(&self.gallery_snapshot)?;
        let total = self.gallery_snapshot.len();
        let spacing = cosmic::theme::spacing();

        // on_press carries no position; the tracker uses the last move as origin
        let photo = widget::mouse_area(
            widget::container(
                widget::image(image.handle().clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .on_press(Message::ViewerPointerPressed)
        .on_move(Message::ViewerPointerMoved)
        .on_release(Message::ViewerPointerReleased);

        let caption = widget::column()
            .push(
                widget::text(fl!(
                    "viewer-position",
                    current = cursor + 1,
                    total = total
                ))
                .size(ui::VIEWER_CAPTION_TEXT_SIZE)
                .font(cosmic::font::bold()),
            )
            .push(
                widget::text(image.captured_at().format("%H:%M:%S").to_string())
                    .size(ui::VIEWER_CAPTION_TEXT_SIZE),
            )
            .align_x(Alignment::Center);

        let top_bar = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(widget::container(caption).padding(spacing.space_xxs).style(overlay_container_style))
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(
                widget::container(
                    widget::button::icon(widget::icon::from_name("window-close-symbolic"))
                        .on_press(Message::DismissViewer),
                )
                .style(overlay_container_style),
            )
            .padding(spacing.space_s)
            .align_y(Alignment::Center);

        let nav_row = widget::row()
            .push(nav_button(
                "go-previous-symbolic",
                fl!("previous-photo"),
                NavigateDirection::Previous,
                cursor > 0,
            ))
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(nav_button(
                "go-next-symbolic",
                fl!("next-photo"),
                NavigateDirection::Next,
                cursor + 1 < total,
            ))
            .padding(spacing.space_s)
            .align_y(Alignment::Center);

        let controls = widget::column()
            .push(top_bar)
            .push(
                widget::container(nav_row)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(cosmic::iced::alignment::Vertical::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill);

        let viewer = widget::container(
            cosmic::iced::widget::stack![photo, controls]
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            text_color: Some(Color::WHITE),
            ..Default::default()
        });

        Some(viewer.into())
    }
}

/// Chevron button; disabled at the ends of the gallery
fn nav_button<'a>(
    icon_name: &'static str,
    label: String,
    direction: NavigateDirection,
    enabled: bool,
) -> Element<'a, Message> {
    let icon = widget::icon::from_name(icon_name)
        .size(ui::VIEWER_ICON_SIZE)
        .icon();

    let mut button = widget::button::custom(icon)
        .padding(8)
        .class(cosmic::theme::Button::Text);
    if enabled {
        button = button.on_press(Message::NavigateViewer(direction));
    }

    widget::tooltip(
        widget::container(button).style(overlay_container_style),
        widget::text(label),
        widget::tooltip::Position::Bottom,
    )
    .into()
}
