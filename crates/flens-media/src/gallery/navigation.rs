//! Lightbox navigation on the gallery controller

use super::{GalleryController, GalleryView};
use crate::input::{LightboxKey, SwipeDirection, Vec2};
use crate::lightbox::StageCommand;
use crate::schedule::IntervalScheduler;
use rand::Rng;

impl<V, S, R> GalleryController<V, S, R>
where
    V: GalleryView,
    S: IntervalScheduler,
    R: Rng,
{
    /// Tile click with its `data-media-idx` value
    pub fn activate_tile(&mut self, canonical_index: usize) -> bool {
        self.open(canonical_index)
    }

    /// Open the lightbox at a canonical index
    pub fn open(&mut self, index: usize) -> bool {
        let command = self.lightbox.open(&self.entries, index);
        self.apply(command)
    }

    pub fn close(&mut self) -> bool {
        self.swipe.cancel();
        let command = self.lightbox.close();
        self.apply(command)
    }

    pub fn next(&mut self) -> bool {
        let command = self.lightbox.next(&self.entries);
        self.apply(command)
    }

    pub fn prev(&mut self) -> bool {
        let command = self.lightbox.prev(&self.entries);
        self.apply(command)
    }

    /// `keydown` with `KeyboardEvent.key`; returns whether it was consumed
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Close) => self.close(),
            Some(LightboxKey::Previous) => self.prev(),
            Some(LightboxKey::Next) => self.next(),
            None => false,
        }
    }

    /// First touch on the stage
    pub fn touch_start(&mut self, at: Vec2) {
        if self.lightbox.is_open() {
            self.swipe.begin(at);
        }
    }

    /// Last touch on the stage
    pub fn touch_end(&mut self, at: Vec2) -> bool {
        match self.swipe.finish(at) {
            Some(SwipeDirection::Previous) => self.prev(),
            Some(SwipeDirection::Next) => self.next(),
            None => false,
        }
    }

    fn apply(&mut self, command: Option<StageCommand>) -> bool {
        match command {
            Some(command) => {
                self.view.render_stage(&command);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GalleryConfig;
    use crate::gallery::GalleryController;
    use crate::input::Vec2;
    use crate::lightbox::{LightboxState, StageCommand};
    use crate::media::MediaEntry;
    use crate::mock::{ManualScheduler, RecordingView};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ready(lightbox: bool) -> GalleryController<RecordingView, ManualScheduler, StdRng> {
        let mut gallery = GalleryController::new(
            GalleryConfig::default(),
            lightbox,
            RecordingView::full(),
            ManualScheduler::new(),
            StdRng::seed_from_u64(3),
        );
        gallery.finish_load(Ok(vec![
            MediaEntry::new("a.png", "u1", "p1").unwrap(),
            MediaEntry::new("b.png", "u2", "p2").unwrap(),
            MediaEntry::new("c.webm", "u3", "p3").unwrap(),
        ]));
        gallery
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut gallery = ready(true);
        assert!(!gallery.handle_key("ArrowRight"));
        assert!(!gallery.handle_key("Escape"));
        assert!(gallery.view().stages.is_empty());
    }

    #[test]
    fn test_keys_navigate_while_open() {
        let mut gallery = ready(true);
        gallery.activate_tile(0);

        assert!(gallery.handle_key("ArrowLeft"));
        assert_eq!(gallery.lightbox().state(), LightboxState::Open(2));
        assert!(gallery.handle_key("ArrowRight"));
        assert_eq!(gallery.lightbox().state(), LightboxState::Open(0));
        assert!(!gallery.handle_key("Tab"));

        assert!(gallery.handle_key("Escape"));
        assert_eq!(gallery.view().last_stage(), Some(&StageCommand::Clear));
    }

    #[test]
    fn test_swipe_navigates() {
        let mut gallery = ready(true);
        gallery.open(1);

        gallery.touch_start(Vec2::new(200.0, 100.0));
        assert!(gallery.touch_end(Vec2::new(149.0, 100.0)));
        assert_eq!(gallery.lightbox().current_index(), Some(2));

        gallery.touch_start(Vec2::new(100.0, 100.0));
        assert!(gallery.touch_end(Vec2::new(151.0, 100.0)));
        assert_eq!(gallery.lightbox().current_index(), Some(1));
    }

    #[test]
    fn test_swipe_at_threshold_does_nothing() {
        let mut gallery = ready(true);
        gallery.open(1);
        gallery.touch_start(Vec2::new(100.0, 0.0));
        assert!(!gallery.touch_end(Vec2::new(150.0, 0.0)));
        assert_eq!(gallery.lightbox().current_index(), Some(1));
    }

    #[test]
    fn test_touch_while_closed_ignored() {
        let mut gallery = ready(true);
        gallery.touch_start(Vec2::new(0.0, 0.0));
        assert!(!gallery.touch_end(Vec2::new(200.0, 0.0)));
        assert!(gallery.view().stages.is_empty());
    }

    #[test]
    fn test_touch_end_without_start_ignored() {
        let mut gallery = ready(true);
        gallery.open(0);
        assert!(!gallery.touch_end(Vec2::new(-200.0, 0.0)));
        assert_eq!(gallery.lightbox().current_index(), Some(0));
    }

    #[test]
    fn test_missing_overlay_disables_lightbox() {
        let mut gallery = ready(false);
        assert!(!gallery.activate_tile(0));
        assert!(!gallery.handle_key("ArrowRight"));
        assert!(gallery.view().stages.is_empty());
    }

    #[test]
    fn test_invalid_tile_index_is_noop() {
        let mut gallery = ready(true);
        assert!(!gallery.activate_tile(9));
        assert!(!gallery.lightbox().is_open());
    }
}
