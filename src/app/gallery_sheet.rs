// SPDX-License-Identifier: GPL-3.0-only

//! Gallery bottom sheet with the thumbnail grid

use crate::app::state::{AppModel, Message};
use crate::constants::{gallery, ui};
use crate::fl;
use crate::gallery::CapturedImage;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, ContentFit, Length};
use cosmic::widget;

impl AppModel {
    /// Build the bottom sheet listing every photo of the session
    ///
    /// Thumbnails are laid out oldest first, `gallery_columns` per row. Tapping one
    /// opens the viewer on it.
    pub fn build_gallery_sheet(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let header = widget::row()
            .push(widget::text(fl!("gallery")).size(16).font(cosmic::font::bold()))
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(
                widget::text(fl!("gallery-count", count = self.gallery_snapshot.len()))
                    .size(14)
                    .class(cosmic::theme::Text::Accent),
            )
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(
                widget::button::icon(widget::icon::from_name("window-close-symbolic"))
                    .on_press(Message::ToggleGallery),
            )
            .align_y(Alignment::Center);

        let body: Element<'_, Message> = if self.gallery_snapshot.is_empty() {
            widget::container(widget::text(fl!("gallery-empty")).size(16))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill)
                .into()
        } else {
            widget::scrollable(self.build_thumbnail_grid())
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        let sheet = widget::column()
            .push(header)
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(body)
            .padding(spacing.space_s)
            .width(Length::Fill)
            .height(Length::Fixed(ui::GALLERY_SHEET_HEIGHT));

        widget::container(sheet)
            .width(Length::Fill)
            .style(|theme| {
                let cosmic = theme.cosmic();
                widget::container::Style {
                    background: Some(Background::Color(cosmic.bg_color().into())),
                    text_color: Some(cosmic.on_bg_color().into()),
                    border: Border {
                        radius: [ui::GALLERY_SHEET_RADIUS, ui::GALLERY_SHEET_RADIUS, 0.0, 0.0]
                            .into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .into()
    }

    fn build_thumbnail_grid(&self) -> Element<'_, Message> {
        let columns = self.config.grid_columns();
        let images: Vec<&CapturedImage> = self.gallery_snapshot.iter().collect();

        images
            .chunks(columns)
            .fold(
                widget::column().spacing(gallery::GRID_SPACING),
                |grid, chunk| {
                    let row = chunk
                        .iter()
                        .fold(widget::row().spacing(gallery::GRID_SPACING), |row, image| {
                            row.push(thumbnail(image))
                        });
                    grid.push(row)
                },
            )
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }
}

/// A single square thumbnail; tapping it selects the photo by id
fn thumbnail<'a>(image: &CapturedImage) -> Element<'a, Message> {
    let size = gallery::THUMBNAIL_SIZE;

    widget::button::custom(
        widget::image(image.handle().clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size)),
    )
    .padding(0)
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .class(cosmic::theme::Button::Image)
    .on_press(Message::SelectImage(image.id()))
    .into()
}
