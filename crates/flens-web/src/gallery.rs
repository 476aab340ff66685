//! Media wall mounting
//!
//! The controller is shared between event closures as
//! `Rc<RefCell<GalleryController>>`. No borrow is held across an await.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use flens_media::{GalleryController, GalleryPhase, ListingFetcher, Vec2};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, TouchEvent, Window};

use crate::config;
use crate::dom::{elements, listen, listen_passive};
use crate::fetch::FetchTransport;
use crate::platform::{BrowserClock, BrowserSessionStore};
use crate::scheduler::IntervalTimer;
use crate::view::{DomView, INDEX_ATTR};

pub const GRID_ID: &str = "mediaGrid";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const STAGE_ID: &str = "lightboxStage";
pub const META_ID: &str = "lightboxMeta";

type Controller = GalleryController<DomView, IntervalTimer, SmallRng>;
type Shared = Rc<RefCell<Controller>>;

/// Mount the media wall if the page has a grid
pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(grid) = document.get_element_by_id(GRID_ID) else {
        debug!("[gallery] no #{} on this page", GRID_ID);
        return Ok(());
    };

    let config = config::read(window);
    let location = config.location();

    let lightbox = document.get_element_by_id(LIGHTBOX_ID);
    let stage = document.get_element_by_id(STAGE_ID);
    let meta = document.get_element_by_id(META_ID);
    let lightbox_available = lightbox.is_some() && stage.is_some();

    let view = DomView::new(
        document.clone(),
        grid.clone(),
        lightbox.clone(),
        stage.clone(),
        meta,
    );

    let controller: Shared = Rc::new_cyclic(|weak: &Weak<RefCell<Controller>>| {
        let weak = weak.clone();
        let on_tick: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().reshuffle();
            }
        });
        RefCell::new(GalleryController::new(
            config,
            lightbox_available,
            view,
            IntervalTimer::new(window.clone(), on_tick),
            SmallRng::from_entropy(),
        ))
    });

    controller.borrow_mut().begin();

    if let (Some(lightbox), Some(stage)) = (&lightbox, &stage) {
        wire_lightbox(window, lightbox, stage, &controller)?;
    }
    wire_grid(&grid, &controller)?;

    let window = window.clone();
    let document = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let fetcher = ListingFetcher::new(
            location,
            FetchTransport::new(window.clone()),
            BrowserSessionStore::new(&window),
            BrowserClock,
        );
        let result = fetcher.fetch_entries().await;

        let phase = controller.borrow_mut().finish_load(result);
        if phase == GalleryPhase::Ready {
            if let Err(e) = wire_reshuffle(&document, &controller) {
                warn!("[gallery] reshuffle wiring failed: {:?}", e);
            }
        }
    });

    Ok(())
}

/// Tile clicks, resolved through the canonical index attribute
fn wire_grid(grid: &Element, controller: &Shared) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    listen(grid, "click", move |event: Event| {
        let Some(index) = clicked_index(&event) else {
            return;
        };
        controller.borrow_mut().activate_tile(index);
    })
}

fn clicked_index(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let tile = target.closest(&format!("[{}]", INDEX_ATTR)).ok()??;
    tile.get_attribute(INDEX_ATTR)?.parse().ok()
}

fn wire_lightbox(
    window: &Window,
    lightbox: &Element,
    stage: &Element,
    controller: &Shared,
) -> Result<(), JsValue> {
    for button in elements(&lightbox.query_selector_all("[data-lightbox-close]")?) {
        let controller = Rc::clone(controller);
        listen(&button, "click", move |_: Event| {
            controller.borrow_mut().close();
        })?;
    }

    if let Some(button) = lightbox.query_selector("[data-lightbox-prev]")? {
        let controller = Rc::clone(controller);
        listen(&button, "click", move |_: Event| {
            controller.borrow_mut().prev();
        })?;
    }

    if let Some(button) = lightbox.query_selector("[data-lightbox-next]")? {
        let controller = Rc::clone(controller);
        listen(&button, "click", move |_: Event| {
            controller.borrow_mut().next();
        })?;
    }

    {
        let controller = Rc::clone(controller);
        listen(window, "keydown", move |event: KeyboardEvent| {
            controller.borrow_mut().handle_key(&event.key());
        })?;
    }

    {
        let controller = Rc::clone(controller);
        listen_passive(stage, "touchstart", move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                controller.borrow_mut().touch_start(touch_point(&touch));
            }
        })?;
    }

    let controller = Rc::clone(controller);
    listen_passive(stage, "touchend", move |event: TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            controller.borrow_mut().touch_end(touch_point(&touch));
        }
    })
}

fn touch_point(touch: &web_sys::Touch) -> Vec2 {
    Vec2::new(touch.client_x() as f32, touch.client_y() as f32)
}

/// Shuffle button and visibility handling, after a successful load
fn wire_reshuffle(document: &Document, controller: &Shared) -> Result<(), JsValue> {
    if let Some(button) = document.query_selector("[data-media-shuffle]")? {
        let controller = Rc::clone(controller);
        listen(&button, "click", move |_: Event| {
            controller.borrow_mut().reshuffle();
        })?;
    }

    if controller.borrow().config().reshuffle_period_ms().is_none() {
        return Ok(());
    }

    let controller = Rc::clone(controller);
    let page = document.clone();
    listen(document, "visibilitychange", move |_: Event| {
        controller.borrow_mut().visibility_changed(page.hidden());
    })
}
