//! DOM rendering of the grid and lightbox

use flens_media::{
    GalleryView, GridView, Notice, StageCommand, StageContent, Thumbnail, Tile, FULL_GRID_CLASS,
};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlMediaElement};

/// Attribute carrying a tile's canonical index
pub const INDEX_ATTR: &str = "data-media-idx";

const OPEN_CLASS: &str = "is-open";

/// Paints into the host page's grid and lightbox elements
pub struct DomView {
    document: Document,
    grid: Element,
    lightbox: Option<Element>,
    stage: Option<Element>,
    meta: Option<Element>,
}

impl DomView {
    pub fn new(
        document: Document,
        grid: Element,
        lightbox: Option<Element>,
        stage: Option<Element>,
        meta: Option<Element>,
    ) -> Self {
        Self {
            document,
            grid,
            lightbox,
            stage,
            meta,
        }
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    // -------------------------------------------------------------------------
    // Grid
    // -------------------------------------------------------------------------

    fn paint_grid(&self, grid: &GridView) -> Result<(), JsValue> {
        self.grid.set_inner_html("");
        match grid {
            GridView::Loading(notice) | GridView::Empty(notice) | GridView::Failed(notice) => {
                let placeholder = self.notice(notice)?;
                self.grid.append_child(&placeholder)?;
            }
            GridView::Tiles(tiles) => {
                for tile in tiles {
                    let button = self.tile(tile)?;
                    self.grid.append_child(&button)?;
                }
            }
        }
        Ok(())
    }

    fn notice(&self, notice: &Notice) -> Result<Element, JsValue> {
        let div = self.element("div", "media-wall__loading")?;
        div.append_child(&self.document.create_text_node(&notice.lead))?;
        if let Some(code) = &notice.code {
            let span = self.document.create_element("code")?;
            span.set_text_content(Some(code));
            div.append_child(&span)?;
        }
        if !notice.tail.is_empty() {
            div.append_child(&self.document.create_text_node(&notice.tail))?;
        }
        Ok(div)
    }

    fn tile(&self, tile: &Tile) -> Result<Element, JsValue> {
        let button = self.element("button", "media-tile")?;
        button.set_attribute("type", "button")?;
        button.set_attribute(INDEX_ATTR, &tile.canonical_index.to_string())?;
        button.set_attribute("aria-label", &tile.label)?;

        match &tile.thumbnail {
            Thumbnail::Video { src } => {
                let video = self.element("video", "media-tile__media")?;
                video.set_attribute("muted", "")?;
                // The attribute alone does not mute a script-created element
                if let Some(media) = video.dyn_ref::<HtmlMediaElement>() {
                    media.set_muted(true);
                }
                video.set_attribute("playsinline", "")?;
                video.set_attribute("preload", "metadata")?;
                video.set_attribute("src", src)?;
                button.append_child(&video)?;

                let badge = self.element("div", "media-tile__badge")?;
                badge.set_text_content(Some("▶"));
                button.append_child(&badge)?;
            }
            Thumbnail::Image { src, alt } => {
                let img = self.element("img", "media-tile__media")?;
                img.set_attribute("src", src)?;
                img.set_attribute("alt", alt)?;
                img.set_attribute("loading", "lazy")?;
                button.append_child(&img)?;
            }
        }
        Ok(button)
    }

    // -------------------------------------------------------------------------
    // Lightbox
    // -------------------------------------------------------------------------

    fn paint_stage(&self, command: &StageCommand) -> Result<(), JsValue> {
        let (Some(lightbox), Some(stage)) = (&self.lightbox, &self.stage) else {
            return Ok(());
        };

        halt_video(lightbox)?;
        stage.set_inner_html("");
        if let Some(meta) = &self.meta {
            meta.set_text_content(Some(""));
        }

        match command {
            StageCommand::Clear => {
                lightbox.class_list().remove_1(OPEN_CLASS)?;
                lightbox.set_attribute("aria-hidden", "true")?;
            }
            StageCommand::Show { content, .. } => {
                lightbox.class_list().add_1(OPEN_CLASS)?;
                lightbox.set_attribute("aria-hidden", "false")?;
                let surface = self.surface(content)?;
                stage.append_child(&surface)?;
            }
        }
        Ok(())
    }

    fn surface(&self, content: &StageContent) -> Result<Element, JsValue> {
        match content {
            StageContent::Video { src } => {
                let video = self.element("video", "lightbox__video")?;
                video.set_attribute("src", src)?;
                video.set_attribute("controls", "")?;
                video.set_attribute("playsinline", "")?;
                video.set_attribute("autoplay", "")?;
                video.set_attribute("preload", "auto")?;
                Ok(video)
            }
            StageContent::Image { src, alt } => {
                let img = self.element("img", "lightbox__img")?;
                img.set_attribute("src", src)?;
                img.set_attribute("alt", alt)?;
                Ok(img)
            }
        }
    }
}

/// Pause and rewind a playing lightbox video
fn halt_video(lightbox: &Element) -> Result<(), JsValue> {
    if let Some(video) = lightbox.query_selector("video")? {
        if let Ok(media) = video.dyn_into::<HtmlMediaElement>() {
            media.pause()?;
            media.set_current_time(0.0);
        }
    }
    Ok(())
}

impl GalleryView for DomView {
    fn is_full_grid(&self) -> bool {
        self.grid.class_list().contains(FULL_GRID_CLASS)
    }

    fn render_grid(&mut self, grid: &GridView) {
        if let Err(e) = self.paint_grid(grid) {
            warn!("[gallery] grid render failed: {:?}", e);
        }
    }

    fn render_stage(&mut self, command: &StageCommand) {
        if let Err(e) = self.paint_stage(command) {
            warn!("[gallery] stage render failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flens_media::MediaKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dom_view() -> DomView {
        let document = web_sys::window().unwrap().document().unwrap();
        let grid = document.create_element("div").unwrap();
        DomView::new(document, grid, None, None, None)
    }

    #[wasm_bindgen_test]
    fn test_video_tile_is_muted() {
        let mut view = dom_view();
        let tile = Tile {
            canonical_index: 0,
            name: "clip.mp4".to_string(),
            kind: MediaKind::Video,
            thumbnail: Thumbnail::Video {
                src: "u0".to_string(),
            },
            label: "clip.mp4".to_string(),
        };
        view.render_grid(&GridView::Tiles(vec![tile]));

        let video = view.grid.query_selector("video").unwrap().unwrap();
        let media = video.dyn_into::<HtmlMediaElement>().unwrap();
        assert!(media.muted());
    }

    #[wasm_bindgen_test]
    fn test_full_grid_follows_class() {
        let view = dom_view();
        assert!(!view.is_full_grid());
        view.grid.class_list().add_1(FULL_GRID_CLASS).unwrap();
        assert!(view.is_full_grid());
        view.grid.class_list().remove_1(FULL_GRID_CLASS).unwrap();
        assert!(!view.is_full_grid());
    }
}
