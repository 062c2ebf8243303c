// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the capture → gallery → viewer flow

use chrono::Local;
use cosmic::iced::Point;
use quickshot::backends::camera::{CameraFrame, SensorRotation};
use quickshot::app::{Applied, CaptureState, ShutterPress};
use quickshot::gallery::{
    CaptureId, GalleryStore, NavigateDirection, SwipeDirection, SwipeTracker, ViewerState,
};
use quickshot::pipelines::photo::PhotoPipeline;
use std::sync::Arc;
use std::time::Instant;

const SWIPE: f32 = 48.0;

fn solid_frame(width: u32, height: u32, value: u8) -> Arc<CameraFrame> {
    Arc::new(CameraFrame {
        width,
        height,
        data: Arc::from(vec![value; (width * height * 4) as usize]),
        stride: width * 4,
        rotation: SensorRotation::None,
        captured_at: Instant::now(),
    })
}

fn truncated_frame() -> Arc<CameraFrame> {
    Arc::new(CameraFrame {
        width: 64,
        height: 64,
        data: Arc::from(vec![0u8; 16]),
        stride: 64 * 4,
        rotation: SensorRotation::None,
        captured_at: Instant::now(),
    })
}

/// Capture `count` photos through the pipeline into a fresh store
async fn capture_many(store: &GalleryStore, count: u64) -> Vec<CaptureId> {
    let mut ids = Vec::new();
    for n in 1..=count {
        let id = CaptureId(n);
        let image = PhotoPipeline::capture(id, solid_frame(4, 3, n as u8))
            .await
            .expect("capture should succeed");
        store.append(image);
        ids.push(id);
    }
    ids
}

fn swipe(tracker: &mut SwipeTracker, from: Point, to: Point) -> Option<SwipeDirection> {
    tracker.moved(from);
    tracker.press();
    tracker.moved(to);
    tracker.release(SWIPE)
}

#[tokio::test]
async fn test_captures_appear_in_order() {
    let store = GalleryStore::new();
    let ids = capture_many(&store, 5).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.ids(), ids);
    assert_eq!(snapshot.last().map(|img| img.id()), Some(CaptureId(5)));
}

#[tokio::test]
async fn test_failed_capture_leaves_gallery_untouched() {
    let store = GalleryStore::new();
    let mut capture = CaptureState::default();

    // Two good shots, then one whose frame buffer is truncated
    for frame in [solid_frame(4, 3, 1), solid_frame(4, 3, 2), truncated_frame()] {
        let ShutterPress::Started(id, frame) = capture.shutter(Some(&frame)) else {
            panic!("shutter should start a capture");
        };
        let outcome = PhotoPipeline::capture(id, frame).await;
        capture.apply(outcome, &store);
    }

    assert_eq!(store.len(), 2);
    assert_eq!(store.snapshot().ids(), vec![CaptureId(1), CaptureId(2)]);
    assert_eq!(capture.notice().map(|notice| notice.id), Some(CaptureId(3)));
    assert!(!capture.is_capturing());

    // The shutter works again after the failure
    let ShutterPress::Started(id, frame) = capture.shutter(Some(&solid_frame(4, 3, 4))) else {
        panic!("shutter should start a capture");
    };
    assert_eq!(
        capture.apply(PhotoPipeline::capture(id, frame).await, &store),
        Applied::Stored(CaptureId(4))
    );
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_snapshot_is_stable_across_appends() {
    let store = GalleryStore::new();
    capture_many(&store, 1).await;

    let before = store.snapshot();
    let image = PhotoPipeline::capture(CaptureId(2), solid_frame(2, 2, 9))
        .await
        .expect("capture should succeed");
    store.append(image);

    assert_eq!(before.len(), 1);
    assert_eq!(store.snapshot().len(), 2);
}

#[tokio::test]
async fn test_viewer_opens_on_selected_photo() {
    let store = GalleryStore::new();
    capture_many(&store, 4).await;
    let snapshot = store.snapshot();

    let mut viewer = ViewerState::default();
    assert!(viewer.open(&snapshot, CaptureId(3)));
    assert_eq!(viewer.cursor(), Some(2));
    assert_eq!(
        viewer.current(&snapshot).map(|img| img.id()),
        Some(CaptureId(3))
    );

    assert!(!ViewerState::default().open(&snapshot, CaptureId(99)));
}

#[tokio::test]
async fn test_viewer_navigation_clamps_at_ends() {
    let store = GalleryStore::new();
    capture_many(&store, 3).await;
    let snapshot = store.snapshot();

    let mut viewer = ViewerState::default();
    viewer.open(&snapshot, CaptureId(1));
    assert!(!viewer.navigate(NavigateDirection::Previous, snapshot.len()));
    assert_eq!(viewer.cursor(), Some(0));

    viewer.open(&snapshot, CaptureId(3));
    assert!(!viewer.navigate(NavigateDirection::Next, snapshot.len()));
    assert_eq!(viewer.cursor(), Some(2));

    viewer.dismiss();
    assert!(!viewer.is_open());
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_capture_browse_swipe_scenario() {
    // Take A, B and C, open B from the grid, then swipe both ways
    let store = GalleryStore::new();
    capture_many(&store, 3).await;
    let snapshot = store.snapshot();
    let (a, b, c) = (CaptureId(1), CaptureId(2), CaptureId(3));

    let mut viewer = ViewerState::default();
    let mut tracker = SwipeTracker::default();
    assert!(viewer.open(&snapshot, b));

    // Drag leftwards reveals the next photo
    let gesture = swipe(&mut tracker, Point::new(300.0, 200.0), Point::new(100.0, 210.0));
    assert_eq!(gesture, Some(SwipeDirection::Left));
    viewer.navigate(gesture.map(SwipeDirection::navigation).unwrap(), snapshot.len());
    assert_eq!(viewer.current(&snapshot).map(|img| img.id()), Some(c));

    // Two rightward drags go back to A and then stay there
    for _ in 0..2 {
        let gesture = swipe(&mut tracker, Point::new(100.0, 200.0), Point::new(300.0, 190.0));
        assert_eq!(gesture, Some(SwipeDirection::Right));
        viewer.navigate(gesture.map(SwipeDirection::navigation).unwrap(), snapshot.len());
    }
    assert_eq!(viewer.current(&snapshot).map(|img| img.id()), Some(a));

    // Short or vertical drags are ignored
    assert_eq!(
        swipe(&mut tracker, Point::new(100.0, 200.0), Point::new(120.0, 200.0)),
        None
    );
    assert_eq!(
        swipe(&mut tracker, Point::new(100.0, 100.0), Point::new(160.0, 300.0)),
        None
    );

    viewer.dismiss();
    assert_eq!(store.snapshot().ids(), vec![a, b, c]);
}

#[test]
fn test_captured_image_keeps_timestamp() {
    let now = Local::now();
    let image = quickshot::gallery::CapturedImage::new(
        CaptureId(7),
        image::RgbaImage::new(3, 2),
        now,
    );
    assert_eq!(image.captured_at(), now);
    assert_eq!((image.width(), image.height()), (3, 2));
}
