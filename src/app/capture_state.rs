// SPDX-License-Identifier: GPL-3.0-only

//! Shutter bookkeeping
//!
//! Tracks the capture in flight, hands out capture ids and decides what a finished
//! capture does to the gallery. Only a successful outcome for the pending capture is
//! appended; every failure ends up in the notice instead.

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use crate::gallery::{CaptureId, GalleryStore};
use crate::pipelines::photo::{CaptureOutcome, PhotoCapture};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A failed capture shown over the preview until it times out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureNotice {
    /// Capture that failed; a newer failure replaces the notice
    pub id: CaptureId,
    pub reason: String,
}

/// What a shutter press led to
#[derive(Debug)]
pub enum ShutterPress {
    /// Processing should start for this frame
    Started(CaptureId, Arc<CameraFrame>),
    /// Nothing to capture; the notice was set
    Failed(CaptureId),
    /// Another capture is still in flight
    Ignored,
}

/// How a finished capture was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Photo appended to the gallery
    Stored(CaptureId),
    /// Capture failed; the notice was set
    Failed(CaptureId),
    /// No capture was pending, the result was dropped
    Stale,
}

#[derive(Debug, Clone)]
pub struct CaptureState {
    pending: Option<CaptureId>,
    next_id: CaptureId,
    notice: Option<CaptureNotice>,
}

impl Default for CaptureState {
    fn default() -> Self {
        Self {
            pending: None,
            next_id: CaptureId(1),
            notice: None,
        }
    }
}

impl CaptureState {
    pub fn is_capturing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notice(&self) -> Option<&CaptureNotice> {
        self.notice.as_ref()
    }

    /// Shutter pressed with `current_frame` as the latest preview frame
    pub fn shutter(&mut self, current_frame: Option<&Arc<CameraFrame>>) -> ShutterPress {
        if let Some(pending) = self.pending {
            debug!(%pending, "Capture already in progress, ignoring shutter");
            return ShutterPress::Ignored;
        }

        let id = self.next_id;
        self.next_id = id.next();

        match PhotoCapture::frame_for_capture(current_frame) {
            Ok(frame) => {
                info!(%id, "Capturing photo");
                self.pending = Some(id);
                ShutterPress::Started(id, frame)
            }
            Err(err) => {
                self.fail(id, err);
                ShutterPress::Failed(id)
            }
        }
    }

    /// Apply the result of the pending capture
    pub fn apply(&mut self, outcome: CaptureOutcome, gallery: &GalleryStore) -> Applied {
        let Some(id) = self.pending.take() else {
            warn!("Capture result arrived with no capture pending");
            return Applied::Stale;
        };

        match outcome {
            Ok(image) => {
                info!(%id, width = image.width(), height = image.height(), "Photo captured");
                gallery.append(image);
                Applied::Stored(id)
            }
            Err(err) => {
                self.fail(id, err);
                Applied::Failed(id)
            }
        }
    }

    /// Hide the notice, unless a newer failure replaced it
    pub fn clear_notice(&mut self, id: CaptureId) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
        }
    }

    fn fail(&mut self, id: CaptureId, err: PhotoError) {
        warn!(%id, error = %err, "Photo capture failed");
        self.notice = Some(CaptureNotice {
            id,
            reason: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::SensorRotation;
    use crate::gallery::{CapturedImage, ViewerState};
    use chrono::Local;
    use image::RgbaImage;
    use std::time::Instant;

    fn frame() -> Arc<CameraFrame> {
        Arc::new(CameraFrame {
            width: 2,
            height: 2,
            data: Arc::from(vec![0u8; 16]),
            stride: 8,
            rotation: SensorRotation::None,
            captured_at: Instant::now(),
        })
    }

    fn photo(id: CaptureId) -> CapturedImage {
        CapturedImage::new(id, RgbaImage::new(2, 2), Local::now())
    }

    /// Gallery with two photos and the viewer open on the second
    fn browsing() -> (CaptureState, GalleryStore, ViewerState) {
        let mut state = CaptureState::default();
        let gallery = GalleryStore::new();
        for _ in 0..2 {
            let ShutterPress::Started(id, _) = state.shutter(Some(&frame())) else {
                panic!("shutter should start a capture");
            };
            assert_eq!(state.apply(Ok(photo(id)), &gallery), Applied::Stored(id));
        }

        let mut viewer = ViewerState::default();
        assert!(viewer.open(&gallery.snapshot(), CaptureId(2)));
        (state, gallery, viewer)
    }

    #[test]
    fn shutter_without_frame_never_starts_a_capture() {
        let mut state = CaptureState::default();
        let gallery = GalleryStore::new();

        assert!(matches!(state.shutter(None), ShutterPress::Failed(CaptureId(1))));
        assert!(!state.is_capturing());
        assert_eq!(
            state.notice(),
            Some(&CaptureNotice {
                id: CaptureId(1),
                reason: PhotoError::NoFrameAvailable.to_string(),
            })
        );
        assert!(gallery.is_empty());
    }

    #[test]
    fn second_shutter_is_ignored_while_capturing() {
        let mut state = CaptureState::default();

        assert!(matches!(state.shutter(Some(&frame())), ShutterPress::Started(CaptureId(1), _)));
        assert!(state.is_capturing());
        assert!(matches!(state.shutter(Some(&frame())), ShutterPress::Ignored));
    }

    #[test]
    fn failed_capture_leaves_gallery_and_viewer_alone() {
        let (mut state, gallery, viewer) = browsing();
        let before = viewer;

        let ShutterPress::Started(id, _) = state.shutter(Some(&frame())) else {
            panic!("shutter should start a capture");
        };
        let outcome = Err(PhotoError::InvalidFrame("truncated".into()));

        assert_eq!(state.apply(outcome, &gallery), Applied::Failed(id));
        assert_eq!(gallery.len(), 2);
        assert_eq!(viewer, before);
        assert_eq!(
            viewer.current(&gallery.snapshot()).map(CapturedImage::id),
            Some(CaptureId(2))
        );
        assert_eq!(state.notice().map(|notice| notice.id), Some(id));
        assert!(!state.is_capturing());
    }

    #[test]
    fn successful_capture_appends_at_the_end() {
        let (mut state, gallery, _viewer) = browsing();

        let ShutterPress::Started(id, _) = state.shutter(Some(&frame())) else {
            panic!("shutter should start a capture");
        };
        assert_eq!(state.apply(Ok(photo(id)), &gallery), Applied::Stored(id));
        assert_eq!(gallery.snapshot().ids(), vec![CaptureId(1), CaptureId(2), id]);
        assert!(state.notice().is_none());
    }

    #[test]
    fn result_without_pending_capture_is_dropped() {
        let (mut state, gallery, _viewer) = browsing();

        assert_eq!(state.apply(Ok(photo(CaptureId(42))), &gallery), Applied::Stale);
        assert_eq!(
            state.apply(Err(PhotoError::NoFrameAvailable), &gallery),
            Applied::Stale
        );
        assert_eq!(gallery.len(), 2);
        assert!(state.notice().is_none());
    }

    #[test]
    fn newer_failure_keeps_its_notice() {
        let mut state = CaptureState::default();
        state.shutter(None);
        state.shutter(None);

        state.clear_notice(CaptureId(1));
        assert_eq!(state.notice().map(|notice| notice.id), Some(CaptureId(2)));

        state.clear_notice(CaptureId(2));
        assert!(state.notice().is_none());
    }
}
