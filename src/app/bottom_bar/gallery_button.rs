// SPDX-License-Identifier: MPL-2.0

//! Gallery button widget implementation

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the gallery button widget
    ///
    /// Shows the latest photo as a thumbnail, otherwise a pictures icon.
    pub fn build_gallery_button(&self) -> Element<'_, Message> {
        let size = ui::GALLERY_BUTTON_SIZE;

        let button_content: Element<'_, Message> = match self.gallery_snapshot.last() {
            Some(latest) => widget::container(
                widget::image(latest.handle().clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(size - 2.0))
                    .height(Length::Fixed(size - 2.0)),
            )
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center(size)
            .into(),
            None => widget::container(icon::from_name("folder-pictures-symbolic").size(24).icon())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .center(size)
                .into(),
        };

        widget::button::custom(button_content)
            .padding(0)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .class(cosmic::theme::Button::Image)
            .on_press(Message::ToggleGallery)
            .into()
    }
}
