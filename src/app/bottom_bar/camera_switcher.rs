// SPDX-License-Identifier: GPL-3.0-only

//! Camera switcher button widget implementation

use crate::app::state::{AppModel, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the camera switcher button widget
    ///
    /// Shows a flip button if multiple cameras are available,
    /// otherwise shows an invisible placeholder to maintain consistent layout.
    pub fn build_camera_switcher(&self) -> Element<'_, Message> {
        if self.available_cameras.len() < 2 {
            return widget::Space::new(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH), Length::Shrink)
                .into();
        }

        let icon_widget = widget::icon::from_name("camera-switch-symbolic")
            .size(32)
            .icon();

        // Center icon in fixed-size container
        let icon_content = widget::container(icon_widget)
            .width(Length::Fixed(52.0))
            .height(Length::Fixed(52.0))
            .center(Length::Fixed(52.0));

        // Button::Text gives a transparent background with a themed icon color
        let btn = widget::button::custom(icon_content)
            .padding(0)
            .class(cosmic::theme::Button::Text)
            .on_press(Message::SwitchCamera);

        let btn = widget::tooltip(
            btn,
            widget::text(fl!("switch-camera")),
            widget::tooltip::Position::Top,
        );

        // Themed background for visibility on top of the camera preview
        widget::container(btn).style(overlay_container_style).into()
    }
}
