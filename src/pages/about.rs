//! The about page is not part of the startup bundle: its markup is fetched
//! the first time someone navigates to `/about`.

use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

use super::Page;
use crate::config::app_config;
use crate::constants::ABOUT_FRAGMENT_PATH;
use crate::error::LoadError;

/// Fetched markup for the about page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    html: Rc<str>,
}

impl AboutContent {
    pub fn new(html: &str) -> Self {
        Self { html: Rc::from(html) }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Deferred loader registered for the `about` route.
pub async fn load() -> Result<Page, LoadError> {
    let url = app_config().asset_url(ABOUT_FRAGMENT_PATH);
    crate::debug_log!("Fetching about page from {}", url);
    let started = js_sys::Date::now();
    let html = fetch_text(&url).await?;
    crate::debug_log!("About page loaded in {} ms", js_sys::Date::now() - started);
    Ok(Page::About(AboutContent::new(&html)))
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or_else(|| LoadError::new("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into::<Response>()?;

    if !resp.ok() {
        return Err(LoadError::new(format!(
            "GET {} failed: {} {}",
            url,
            resp.status(),
            resp.status_text()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

pub fn render(document: &Document, page: &Element, content: &AboutContent) -> Result<(), JsValue> {
    // Static asset shipped with the app, so it is trusted markup.
    let body = document.create_element("article")?;
    body.set_inner_html(content.html());
    page.append_child(&body)?;
    Ok(())
}
