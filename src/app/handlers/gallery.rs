// SPDX-License-Identifier: GPL-3.0-only

//! Gallery handlers
//!
//! Handles the thumbnail sheet and the full-screen viewer, including swipes.

use crate::app::state::{AppModel, Message};
use crate::gallery::{CaptureId, GallerySequence, NavigateDirection};
use cosmic::Task;
use cosmic::iced::Point;
use tracing::{debug, info, warn};

impl AppModel {
    // =========================================================================
    // Gallery Handlers
    // =========================================================================

    pub(crate) fn handle_toggle_gallery(&mut self) -> Task<cosmic::Action<Message>> {
        self.gallery_visible = !self.gallery_visible;
        debug!(visible = self.gallery_visible, "Gallery sheet toggled");
        Task::none()
    }

    pub(crate) fn handle_gallery_updated(
        &mut self,
        sequence: GallerySequence,
    ) -> Task<cosmic::Action<Message>> {
        if !sequence.supersedes(&self.gallery_snapshot) {
            debug!(
                len = sequence.len(),
                current = self.gallery_snapshot.len(),
                "Ignoring outdated gallery snapshot"
            );
            return Task::none();
        }
        debug!(len = sequence.len(), "Gallery snapshot updated");
        self.gallery_snapshot = sequence;
        Task::none()
    }

    pub(crate) fn handle_select_image(&mut self, id: CaptureId) -> Task<cosmic::Action<Message>> {
        self.swipe.cancel();
        if self.viewer.open(&self.gallery_snapshot, id) {
            info!(%id, cursor = ?self.viewer.cursor(), "Viewer opened");
        } else {
            warn!(%id, "Selected photo is not in the gallery");
        }
        Task::none()
    }

    pub(crate) fn handle_navigate_viewer(
        &mut self,
        direction: NavigateDirection,
    ) -> Task<cosmic::Action<Message>> {
        if self.viewer.navigate(direction, self.gallery_snapshot.len()) {
            debug!(?direction, cursor = ?self.viewer.cursor(), "Viewer moved");
        }
        Task::none()
    }

    pub(crate) fn handle_dismiss_viewer(&mut self) -> Task<cosmic::Action<Message>> {
        self.swipe.cancel();
        self.viewer.dismiss();
        Task::none()
    }

    pub(crate) fn handle_viewer_pointer_moved(
        &mut self,
        position: Point,
    ) -> Task<cosmic::Action<Message>> {
        self.swipe.moved(position);
        Task::none()
    }

    pub(crate) fn handle_viewer_pointer_pressed(&mut self) -> Task<cosmic::Action<Message>> {
        self.swipe.press();
        Task::none()
    }

    pub(crate) fn handle_viewer_pointer_released(&mut self) -> Task<cosmic::Action<Message>> {
        let min_distance = self.config.swipe_min_distance as f32;
        match self.swipe.release(min_distance) {
            Some(swipe) => {
                debug!(?swipe, "Swipe recognized");
                self.handle_navigate_viewer(swipe.navigation())
            }
            None => Task::none(),
        }
    }
}
