// SPDX-License-Identifier: GPL-3.0-only

//! Full-screen viewer state machine

use super::{CaptureId, CapturedImage, GallerySequence};
use tracing::debug;

/// Direction of a viewer step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateDirection {
    Previous,
    Next,
}

/// Whether the viewer is showing and which photo it is on
///
/// While `Open`, `cursor` indexes the gallery snapshot and stays within
/// `0..len`. Stepping past either end leaves it where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { cursor: usize },
}

impl ViewerState {
    /// Open on the photo with `id`
    ///
    /// Returns `false` and leaves the state unchanged when `id` is not part of `sequence`.
    pub fn open(&mut self, sequence: &GallerySequence, id: CaptureId) -> bool {
        match sequence.position(id) {
            Some(cursor) => {
                debug!(%id, cursor, "Opening viewer");
                *self = ViewerState::Open { cursor };
                true
            }
            None => false,
        }
    }

    /// Step one photo in `direction`, clamped to `0..len`
    ///
    /// Returns whether the cursor moved. A closed viewer ignores navigation.
    pub fn navigate(&mut self, direction: NavigateDirection, len: usize) -> bool {
        let ViewerState::Open { cursor } = *self else {
            return false;
        };
        if len == 0 {
            return false;
        }

        let last = len - 1;
        let target = match direction {
            NavigateDirection::Previous => cursor.saturating_sub(1),
            NavigateDirection::Next => (cursor + 1).min(last),
        }
        .min(last);

        *self = ViewerState::Open { cursor: target };
        target != cursor
    }

    pub fn dismiss(&mut self) {
        *self = ViewerState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            ViewerState::Open { cursor } => Some(*cursor),
            ViewerState::Closed => None,
        }
    }

    /// Photo on display
    pub fn current<'a>(&self, sequence: &'a GallerySequence) -> Option<&'a CapturedImage> {
        self.cursor().and_then(|cursor| sequence.get(cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryStore;
    use chrono::Local;
    use image::RgbaImage;

    fn sequence(count: u64) -> GallerySequence {
        let store = GalleryStore::new();
        for id in 0..count {
            store.append(CapturedImage::new(
                CaptureId(id),
                RgbaImage::new(1, 1),
                Local::now(),
            ));
        }
        store.snapshot()
    }

    #[test]
    fn open_sets_cursor_to_position() {
        let seq = sequence(3);
        let mut viewer = ViewerState::default();

        assert!(viewer.open(&seq, CaptureId(2)));
        assert_eq!(viewer.cursor(), Some(2));
        assert_eq!(viewer.current(&seq).map(CapturedImage::id), Some(CaptureId(2)));
    }

    #[test]
    fn open_unknown_id_is_ignored() {
        let seq = sequence(2);
        let mut viewer = ViewerState::default();

        assert!(!viewer.open(&seq, CaptureId(42)));
        assert_eq!(viewer, ViewerState::Closed);

        viewer.open(&seq, CaptureId(1));
        assert!(!viewer.open(&seq, CaptureId(42)));
        assert_eq!(viewer.cursor(), Some(1));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut viewer = ViewerState::Open { cursor: 0 };
        assert!(!viewer.navigate(NavigateDirection::Previous, 3));
        assert_eq!(viewer.cursor(), Some(0));

        assert!(viewer.navigate(NavigateDirection::Next, 3));
        assert!(viewer.navigate(NavigateDirection::Next, 3));
        assert!(!viewer.navigate(NavigateDirection::Next, 3));
        assert_eq!(viewer.cursor(), Some(2));
    }

    #[test]
    fn closed_viewer_ignores_navigation() {
        let mut viewer = ViewerState::Closed;
        assert!(!viewer.navigate(NavigateDirection::Next, 5));
        assert_eq!(viewer, ViewerState::Closed);
    }

    #[test]
    fn dismiss_always_closes() {
        let mut viewer = ViewerState::Open { cursor: 4 };
        viewer.dismiss();
        assert!(!viewer.is_open());
        viewer.dismiss();
        assert_eq!(viewer, ViewerState::Closed);
    }
}
