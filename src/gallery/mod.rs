// SPDX-License-Identifier: GPL-3.0-only

//! In-session photo gallery
//!
//! Captured photos live only for the lifetime of the process. The store publishes
//! immutable snapshots through a `tokio::sync::watch` channel:
//!
//! ```text
//! PhotoCaptured ──▶ GalleryStore::append ──▶ watch ──▶ GallerySequence snapshots
//!  (update loop)      (single writer)                   (grid, viewer, tests)
//! ```
//!
//! Appending swaps in a whole new sequence, so a reader holding a snapshot never
//! observes a partially updated gallery.

pub mod gesture;
pub mod viewer;

pub use gesture::{SwipeDirection, SwipeTracker};
pub use viewer::{NavigateDirection, ViewerState};

use chrono::{DateTime, Local};
use cosmic::widget::image::Handle;
use image::RgbaImage;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Sequence number assigned when the shutter fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureId(pub u64);

impl CaptureId {
    /// The id that follows this one
    pub fn next(self) -> Self {
        CaptureId(self.0 + 1)
    }
}

impl std::fmt::Display for CaptureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An upright, immutable captured photo
///
/// Two images are equal when they share a [`CaptureId`], regardless of pixels.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    id: CaptureId,
    pixels: Arc<RgbaImage>,
    handle: Handle,
    captured_at: DateTime<Local>,
}

impl CapturedImage {
    pub fn new(id: CaptureId, pixels: RgbaImage, captured_at: DateTime<Local>) -> Self {
        let handle = Handle::from_rgba(pixels.width(), pixels.height(), pixels.as_raw().clone());
        Self {
            id,
            pixels: Arc::new(pixels),
            handle,
            captured_at,
        }
    }

    pub fn id(&self) -> CaptureId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Render handle shared by the thumbnail grid and the viewer
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn captured_at(&self) -> DateTime<Local> {
        self.captured_at
    }
}

impl PartialEq for CapturedImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CapturedImage {}

/// Immutable snapshot of the gallery, oldest first
#[derive(Debug, Clone)]
pub struct GallerySequence(Arc<[CapturedImage]>);

impl Default for GallerySequence {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl GallerySequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CapturedImage> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CapturedImage> {
        self.0.iter()
    }

    /// Index of the image with `id`, if it is part of this snapshot
    pub fn position(&self, id: CaptureId) -> Option<usize> {
        self.0.iter().position(|image| image.id == id)
    }

    /// Most recent capture
    pub fn last(&self) -> Option<&CapturedImage> {
        self.0.last()
    }

    /// Ids in sequence order
    pub fn ids(&self) -> Vec<CaptureId> {
        self.0.iter().map(CapturedImage::id).collect()
    }

    /// Whether this snapshot is at least as recent as `current`
    ///
    /// The gallery only grows, so a shorter snapshot was published before `current`.
    pub fn supersedes(&self, current: &GallerySequence) -> bool {
        self.len() >= current.len()
    }

    /// A new snapshot with `image` appended at the end
    fn appended(&self, image: CapturedImage) -> Self {
        let mut images = Vec::with_capacity(self.0.len() + 1);
        images.extend(self.0.iter().cloned());
        images.push(image);
        Self(Arc::from(images))
    }
}

impl<'a> IntoIterator for &'a GallerySequence {
    type Item = &'a CapturedImage;
    type IntoIter = std::slice::Iter<'a, CapturedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Single-writer store of captured photos
///
/// Owned by the update loop. Any number of observers may [`subscribe`](Self::subscribe)
/// and will be woken with the new snapshot after each append.
#[derive(Debug)]
pub struct GalleryStore {
    sender: watch::Sender<GallerySequence>,
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(GallerySequence::default());
        Self { sender }
    }

    /// Append a photo at the end of the sequence
    pub fn append(&self, image: CapturedImage) {
        let id = image.id;
        self.sender.send_modify(|sequence| {
            *sequence = sequence.appended(image);
        });
        debug!(%id, len = self.len(), "Photo added to gallery");
    }

    /// Current snapshot
    pub fn snapshot(&self) -> GallerySequence {
        self.sender.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver that is notified with each new snapshot
    pub fn subscribe(&self) -> watch::Receiver<GallerySequence> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: u64) -> CapturedImage {
        CapturedImage::new(CaptureId(id), RgbaImage::new(2, 2), Local::now())
    }

    #[test]
    fn append_keeps_capture_order() {
        let store = GalleryStore::new();
        assert!(store.is_empty());

        for id in 1..=3 {
            store.append(photo(id));
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.ids(), vec![CaptureId(1), CaptureId(2), CaptureId(3)]);
        assert_eq!(snapshot.last().map(CapturedImage::id), Some(CaptureId(3)));
    }

    #[test]
    fn snapshots_are_not_affected_by_later_appends() {
        let store = GalleryStore::new();
        store.append(photo(1));
        let before = store.snapshot();

        store.append(photo(2));

        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn equality_is_by_id() {
        let a = CapturedImage::new(CaptureId(7), RgbaImage::new(1, 1), Local::now());
        let b = CapturedImage::new(CaptureId(7), RgbaImage::new(4, 3), Local::now());
        assert_eq!(a, b);
        assert_ne!(a, photo(8));
    }

    #[test]
    fn position_finds_by_id() {
        let store = GalleryStore::new();
        store.append(photo(10));
        store.append(photo(11));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.position(CaptureId(11)), Some(1));
        assert_eq!(snapshot.position(CaptureId(99)), None);
    }

    #[test]
    fn older_snapshots_do_not_supersede_newer_ones() {
        let store = GalleryStore::new();
        store.append(photo(1));
        let older = store.snapshot();
        store.append(photo(2));
        let newer = store.snapshot();

        assert!(newer.supersedes(&older));
        assert!(newer.supersedes(&newer));
        assert!(!older.supersedes(&newer));
    }

    #[tokio::test]
    async fn subscribers_see_each_append() {
        let store = GalleryStore::new();
        let mut receiver = store.subscribe();

        store.append(photo(1));
        assert!(receiver.changed().await.is_ok());
        assert_eq!(receiver.borrow_and_update().len(), 1);

        store.append(photo(2));
        assert!(receiver.changed().await.is_ok());
        assert_eq!(receiver.borrow_and_update().ids(), vec![CaptureId(1), CaptureId(2)]);
    }
}
