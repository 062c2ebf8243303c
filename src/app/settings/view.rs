// SPDX-License-Identifier: MPL-2.0

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::backends::camera::types::CameraBackendType;
use crate::config::AppTheme;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows theme, camera source, and preview settings.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let current_theme_index = AppTheme::ALL
            .iter()
            .position(|theme| *theme == self.config.app_theme);
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            current_theme_index,
            Message::SetAppTheme,
        );

        let current_backend_index = CameraBackendType::ALL
            .iter()
            .position(|backend| *backend == self.config.backend);
        let backend_dropdown = widget::dropdown(
            &self.backend_dropdown_options,
            current_backend_index,
            Message::SelectBackend,
        );

        // Mirror preview toggle
        let mirror_toggle =
            widget::toggler(self.config.mirror_preview).on_toggle(|_| Message::ToggleMirrorPreview);

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("settings-appearance"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("settings-theme")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("settings-camera"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("settings-backend")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(backend_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(widget::text(fl!("settings-mirror-preview")))
                    .push(widget::horizontal_space().width(cosmic::iced::Length::Fill))
                    .push(mirror_toggle)
                    .align_y(cosmic::iced::Alignment::Center),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
