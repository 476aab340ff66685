//! Mobile navigation drawer
//!
//! Every transition returns whether the open state changed.

use log::debug;

/// Viewport width above which the drawer is forced closed
pub const DESKTOP_BREAKPOINT_PX: f64 = 720.0;

/// Drawer open state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    /// Closed drawer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        debug!("[nav] {}", if open { "open" } else { "closed" });
        true
    }

    /// Toggle button click
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open)
    }

    /// Backdrop or link click
    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    /// `keydown`; only Escape does anything
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// `resize` with the new `innerWidth`
    pub fn handle_resize(&mut self, width: f64) -> bool {
        width > DESKTOP_BREAKPOINT_PX && self.close()
    }
}
