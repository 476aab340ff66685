//! Listing transport over `window.fetch`

use flens_media::{GalleryError, GalleryResult, HttpReply, ListingTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

/// Cross-origin GET via `fetch`
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    async fn request(&self, url: &str, accept: &str) -> Result<HttpReply, JsValue> {
        let init = RequestInit::new();
        init.set_method("GET");
        init.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &init)?;
        request.headers().set("Accept", accept)?;

        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await?
            .dyn_into()?;

        let status = response.status();
        if !response.ok() {
            return Ok(HttpReply::new(status, String::new()));
        }

        let body = JsFuture::from(response.text()?).await?;
        Ok(HttpReply::new(status, body.as_string().unwrap_or_default()))
    }
}

impl ListingTransport for FetchTransport {
    async fn get(&self, url: &str, accept: &str) -> GalleryResult<HttpReply> {
        self.request(url, accept)
            .await
            .map_err(|e| GalleryError::Transport(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
