// SPDX-License-Identifier: GPL-3.0-only

//! Horizontal swipe recognition for the viewer
//!
//! The viewer's mouse area reports presses without a position, so the tracker keeps
//! the last known pointer position and uses it as the drag origin when a press starts.
//! A swipe is decided once, on release.

use super::NavigateDirection;
use cosmic::iced::Point;

/// Direction the pointer travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Dragging the photo to the right reveals the previous one
    pub fn navigation(self) -> NavigateDirection {
        match self {
            SwipeDirection::Right => NavigateDirection::Previous,
            SwipeDirection::Left => NavigateDirection::Next,
        }
    }
}

/// Tracks one drag at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    position: Option<Point>,
    origin: Option<Point>,
    pressed: bool,
}

impl SwipeTracker {
    /// Pointer moved to `position`
    pub fn moved(&mut self, position: Point) {
        self.position = Some(position);
        if self.pressed && self.origin.is_none() {
            self.origin = Some(position);
        }
    }

    /// Button or finger went down
    pub fn press(&mut self) {
        self.pressed = true;
        self.origin = self.position;
    }

    /// Button or finger went up; returns the recognized swipe, if any
    ///
    /// The horizontal travel must reach `min_distance` and exceed the vertical travel.
    pub fn release(&mut self, min_distance: f32) -> Option<SwipeDirection> {
        let origin = self.origin.take();
        let was_pressed = std::mem::replace(&mut self.pressed, false);
        if !was_pressed {
            return None;
        }

        let (origin, end) = (origin?, self.position?);
        let dx = end.x - origin.x;
        let dy = end.y - origin.y;

        if dx.abs() < min_distance || dx.abs() <= dy.abs() {
            return None;
        }

        Some(if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    }

    /// Abandon the current drag (pointer left the viewer)
    pub fn cancel(&mut self) {
        self.pressed = false;
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from: Point, to: Point, min_distance: f32) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::default();
        tracker.moved(from);
        tracker.press();
        tracker.moved(to);
        tracker.release(min_distance)
    }

    #[test]
    fn leftward_drag_goes_to_next() {
        let swipe = drag(Point::new(200.0, 100.0), Point::new(100.0, 110.0), 48.0);
        assert_eq!(swipe, Some(SwipeDirection::Left));
        assert_eq!(swipe.map(SwipeDirection::navigation), Some(NavigateDirection::Next));
    }

    #[test]
    fn rightward_drag_goes_to_previous() {
        let swipe = drag(Point::new(100.0, 100.0), Point::new(160.0, 90.0), 48.0);
        assert_eq!(swipe.map(SwipeDirection::navigation), Some(NavigateDirection::Previous));
    }

    #[test]
    fn short_or_vertical_drags_are_ignored() {
        assert_eq!(drag(Point::new(100.0, 100.0), Point::new(130.0, 100.0), 48.0), None);
        assert_eq!(drag(Point::new(100.0, 100.0), Point::new(160.0, 200.0), 48.0), None);
    }

    #[test]
    fn origin_taken_from_first_move_when_position_unknown() {
        let mut tracker = SwipeTracker::default();
        tracker.press();
        tracker.moved(Point::new(300.0, 50.0));
        tracker.moved(Point::new(200.0, 50.0));
        assert_eq!(tracker.release(48.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn one_navigation_per_drag() {
        let mut tracker = SwipeTracker::default();
        tracker.moved(Point::new(200.0, 0.0));
        tracker.press();
        tracker.moved(Point::new(50.0, 0.0));
        assert!(tracker.release(48.0).is_some());
        assert_eq!(tracker.release(48.0), None);
    }

    #[test]
    fn cancelled_drag_is_not_recognized() {
        let mut tracker = SwipeTracker::default();
        tracker.moved(Point::new(200.0, 0.0));
        tracker.press();
        tracker.moved(Point::new(20.0, 0.0));
        tracker.cancel();
        assert_eq!(tracker.release(48.0), None);
    }
}
