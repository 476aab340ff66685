//! Mobile navigation drawer mounting

use std::cell::RefCell;
use std::rc::Rc;

use flens_media::NavDrawer;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use crate::dom::{elements, listen, listen_passive};

pub const NAV_ID: &str = "siteNav";
pub const TOGGLE_SELECTOR: &str = "[data-nav-toggle]";
pub const DIM_SELECTOR: &str = "[data-nav-close].nav-dim";
const BODY_OPEN_CLASS: &str = "nav-open";

/// DOM elements the drawer state is reflected on
struct NavElements {
    body: HtmlElement,
    toggle: Element,
    dim: Option<Element>,
}

impl NavElements {
    fn reflect(&self, open: bool) -> Result<(), JsValue> {
        self.body
            .class_list()
            .toggle_with_force(BODY_OPEN_CLASS, open)?;
        self.toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" })?;
        if let Some(dim) = &self.dim {
            dim.set_attribute("aria-hidden", if open { "false" } else { "true" })?;
        }
        Ok(())
    }
}

struct Nav {
    drawer: NavDrawer,
    elements: NavElements,
}

impl Nav {
    /// Apply a transition and repaint only if it changed something
    fn update(&mut self, transition: impl FnOnce(&mut NavDrawer) -> bool) {
        if transition(&mut self.drawer) {
            if let Err(e) = self.elements.reflect(self.drawer.is_open()) {
                warn!("[nav] update failed: {:?}", e);
            }
        }
    }
}

/// Mount the drawer if the page has both the toggle and the nav
pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let toggle = document.query_selector(TOGGLE_SELECTOR)?;
    let nav = document.get_element_by_id(NAV_ID);
    let (Some(toggle), Some(nav), Some(body)) = (toggle, nav, document.body()) else {
        debug!("[nav] no drawer on this page");
        return Ok(());
    };
    let dim = document.query_selector(DIM_SELECTOR)?;

    let state = Rc::new(RefCell::new(Nav {
        drawer: NavDrawer::new(),
        elements: NavElements {
            body,
            toggle: toggle.clone(),
            dim: dim.clone(),
        },
    }));

    {
        let state = Rc::clone(&state);
        listen(&toggle, "click", move |_: Event| {
            state.borrow_mut().update(NavDrawer::toggle);
        })?;
    }

    if let Some(dim) = &dim {
        let state = Rc::clone(&state);
        listen(dim, "click", move |_: Event| {
            state.borrow_mut().update(NavDrawer::close);
        })?;
    }

    for link in elements(&nav.query_selector_all("a")?) {
        let state = Rc::clone(&state);
        listen(&link, "click", move |_: Event| {
            state.borrow_mut().update(NavDrawer::close);
        })?;
    }

    {
        let state = Rc::clone(&state);
        listen(window, "keydown", move |event: KeyboardEvent| {
            let key = event.key();
            state.borrow_mut().update(|drawer| drawer.handle_key(&key));
        })?;
    }

    let resized = window.clone();
    listen_passive(window, "resize", move |_: Event| {
        let Some(width) = resized.inner_width().ok().and_then(|w| w.as_f64()) else {
            return;
        };
        state.borrow_mut().update(|drawer| drawer.handle_resize(width));
    })
}
