//! Lightbox input handling
//!
//! Keyboard shortcuts and horizontal swipe gestures, reduced to navigation
//! intents the gallery controller applies.

mod keys;
mod swipe;
mod vec2;

pub use keys::LightboxKey;
pub use swipe::{classify_swipe, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD_PX};
pub use vec2::Vec2;
