// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles the shutter and the results coming back from the photo pipeline.

use crate::app::capture_state::{Applied, ShutterPress};
use crate::app::state::{AppModel, Message};
use crate::constants::timing;
use crate::gallery::CaptureId;
use crate::pipelines::photo::{CaptureOutcome, PhotoPipeline};
use cosmic::Task;
use tracing::debug;

impl AppModel {
    // =========================================================================
    // Capture Operations Handlers
    // =========================================================================

    /// Create a delayed task that sends a message after the specified milliseconds
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    pub(crate) fn handle_capture(&mut self) -> Task<cosmic::Action<Message>> {
        match self.capture.shutter(self.current_frame.as_ref()) {
            ShutterPress::Started(id, frame) => {
                Task::perform(PhotoPipeline::capture(id, frame), |outcome| {
                    cosmic::Action::App(Message::PhotoCaptured(outcome))
                })
            }
            ShutterPress::Failed(id) => Self::notice_timeout(id),
            ShutterPress::Ignored => Task::none(),
        }
    }

    pub(crate) fn handle_photo_captured(
        &mut self,
        outcome: CaptureOutcome,
    ) -> Task<cosmic::Action<Message>> {
        match self.capture.apply(outcome, &self.gallery) {
            Applied::Stored(id) => {
                // Render the new photo right away; the subscription delivers the same snapshot
                self.gallery_snapshot = self.gallery.snapshot();
                debug!(%id, len = self.gallery_snapshot.len(), "Gallery refreshed after capture");
                Task::none()
            }
            Applied::Failed(id) => Self::notice_timeout(id),
            Applied::Stale => Task::none(),
        }
    }

    pub(crate) fn handle_clear_capture_notice(
        &mut self,
        id: CaptureId,
    ) -> Task<cosmic::Action<Message>> {
        self.capture.clear_notice(id);
        Task::none()
    }

    fn notice_timeout(id: CaptureId) -> Task<cosmic::Action<Message>> {
        Self::delay_task(
            timing::NOTICE_DURATION_SECS * 1000,
            Message::ClearCaptureNotice(id),
        )
    }
}
