//! Hash-based history: the route lives in the URL fragment
//! (`https://host/base/#/rewind/abc123/NA`), so the server only ever has to
//! serve the base page.

use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

thread_local! {
    static HASH_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::HashChangeEvent)>>> = RefCell::new(None);
}

/// Extract the route path from a `location.hash` value.
///
/// `"#/rewind/a/NA?tab=1"` -> `"/rewind/a/NA"`, `""` and `"#"` -> `"/"`.
pub fn path_from_hash(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let path = raw.split('?').next().unwrap_or_default();
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashHistory {
    base: String,
}

impl HashHistory {
    /// `base` is the configured base URL (see `config::AppConfig`).
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The href an `<a>` needs to reach `path`.
    pub fn href(&self, path: &str) -> String {
        format!("{}#{}", self.base, path_from_hash(path))
    }

    pub fn current_path(&self) -> String {
        path_from_hash(&raw_hash())
    }

    /// True when the location carries no route at all (`/base/` or `/base/#`).
    pub fn is_unset(&self) -> bool {
        raw_hash().is_empty()
    }

    /// New history entry. The browser fires `hashchange`, which is what
    /// actually drives navigation.
    pub fn push(&self, path: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.location().set_hash(&path_from_hash(path))
    }

    /// Swap the current entry instead of adding one. Only the fragment
    /// changes: the document may be served from below `base`
    /// (`/base/index.html`), and replacing the whole URL would load another one.
    pub fn replace(&self, path: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let location = window.location();
        let url = format!(
            "{}{}#{}",
            location.pathname()?,
            location.search()?,
            path_from_hash(path)
        );
        location.replace(&url)
    }

    /// Call `on_change` with the new route path on every `hashchange`.
    /// Only one listener is kept; registering again replaces it.
    pub fn listen<F>(&self, mut on_change: F) -> Result<(), JsValue>
    where
        F: FnMut(String) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        self.unlisten();

        let closure = Closure::wrap(Box::new(move |_event: web_sys::HashChangeEvent| {
            on_change(path_from_hash(&raw_hash()));
        }) as Box<dyn FnMut(_)>);

        let target: web_sys::EventTarget = window.into();
        target.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        HASH_HANDLER.with(|cell| *cell.borrow_mut() = Some(closure));
        Ok(())
    }

    /// Remove the listener installed by `listen`, if any.
    pub fn unlisten(&self) {
        HASH_HANDLER.with(|cell| {
            if let Some(cb) = cell.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    let target: web_sys::EventTarget = window.into();
                    let _ = target
                        .remove_event_listener_with_callback("hashchange", cb.as_ref().unchecked_ref());
                }
            }
        });
    }
}

fn raw_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
