//! Horizontal swipe detection on the lightbox stage

use super::Vec2;

/// Minimum horizontal travel for a swipe, in CSS pixels (exclusive)
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Navigation requested by a swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right
    Previous,
    /// Finger moved left
    Next,
}

/// Classify a finished gesture by its total displacement.
///
/// Only mostly-horizontal gestures longer than the threshold count.
pub fn classify_swipe(delta: Vec2) -> Option<SwipeDirection> {
    if delta.x.abs() > SWIPE_THRESHOLD_PX && delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    } else {
        None
    }
}

/// Tracks one touch from start to end
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first touch point, replacing any gesture in flight
    pub fn begin(&mut self, at: Vec2) {
        self.start = Some(at);
    }

    /// Finish the gesture at the last touch point.
    ///
    /// Returns `None` when no gesture was started.
    pub fn finish(&mut self, at: Vec2) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        classify_swipe(at - start)
    }

    /// Drop the gesture in flight
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Check if a gesture is in flight
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_swipe_is_previous() {
        assert_eq!(
            classify_swipe(Vec2::new(80.0, 10.0)),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn test_left_swipe_is_next() {
        assert_eq!(
            classify_swipe(Vec2::new(-80.0, 10.0)),
            Some(SwipeDirection::Next)
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(classify_swipe(Vec2::new(50.0, 0.0)), None);
        assert_eq!(classify_swipe(Vec2::new(-50.0, 0.0)), None);
        assert_eq!(
            classify_swipe(Vec2::new(50.5, 0.0)),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn test_vertical_dominant_ignored() {
        assert_eq!(classify_swipe(Vec2::new(80.0, 120.0)), None);
        assert_eq!(classify_swipe(Vec2::new(80.0, 80.0)), None);
    }

    #[test]
    fn test_tracker_lifecycle() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(Vec2::new(300.0, 0.0)), None);

        tracker.begin(Vec2::new(200.0, 100.0));
        assert!(tracker.is_tracking());
        assert_eq!(
            tracker.finish(Vec2::new(100.0, 110.0)),
            Some(SwipeDirection::Next)
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_tracker_cancel() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(Vec2::ZERO);
        tracker.cancel();
        assert_eq!(tracker.finish(Vec2::new(100.0, 0.0)), None);
    }
}
