//! Application shell: owns the router and the history, reacts to
//! `hashchange`, and mounts whatever the router selects.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::{self, AppConfig};
use crate::error::RouterError;
use crate::pages::{self, Page};
use crate::router::{HashHistory, Navigation, Params, Router};
use crate::routes::app_routes;
use crate::{debug_log, error_log, warn_log};

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

pub struct App {
    router: Router<Page>,
    history: RefCell<HashHistory>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, RouterError> {
        Ok(Self {
            router: Router::new(app_routes()?),
            history: RefCell::new(HashHistory::new(config.base_url())),
        })
    }

    pub fn router(&self) -> &Router<Page> {
        &self.router
    }

    pub fn history(&self) -> Ref<'_, HashHistory> {
        self.history.borrow()
    }

    /// Re-anchor the history on `config`'s base URL.
    pub fn apply_config(&self, config: &AppConfig) {
        *self.history.borrow_mut() = HashHistory::new(config.base_url());
    }

    /// Full `href` (base + fragment) for a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        Ok(self.history().href(&self.router.href_for(name, params)?))
    }

    pub fn push_named(&self, name: &str, params: &Params) -> Result<(), JsValue> {
        let path = self.router.href_for(name, params)?;
        self.history().push(&path)
    }

    /// Run one navigation and render its outcome.
    pub async fn navigate(&self, document: &Document, path: &str) -> Result<(), JsValue> {
        match self.router.navigate(path).await? {
            Navigation::Mounted(route) => pages::mount_page(document, self, &route),
            Navigation::NotFound { path } => {
                warn_log!("No route matches {}", path);
                pages::clear_outlet(document).map(|_| ())
            }
            Navigation::Superseded => Ok(()),
        }
    }
}

fn current_app() -> Option<Rc<App>> {
    APP.with(|cell| cell.borrow().clone())
}

/// Navigate to `path` in the background. Failures (e.g. the about page
/// could not be fetched) end up in the console.
pub fn dispatch(path: String) {
    let Some(app) = current_app() else {
        warn_log!("Navigation to {} requested before start()", path);
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Err(e) = app.navigate(&document, &path).await {
            error_log!("Navigation to {} failed: {:?}", path, e);
        }
    });
}

/// Called after the configuration changed at runtime, so links follow the
/// new base URL like the deferred fetches do.
pub(crate) fn config_changed(config: &AppConfig) {
    if let Some(app) = current_app() {
        debug_log!("Rebasing history on {}", config.base_url());
        app.apply_config(config);
    }
}

/// Push a named route onto the history; the `hashchange` listener does the rest.
pub fn push_named(name: &str, params: &Params) -> Result<(), JsValue> {
    let app = current_app().ok_or_else(|| JsValue::from_str("app not started"))?;
    app.push_named(name, params)
}

pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    config::init_app_config();
    let config = config::app_config();

    let app = Rc::new(App::new(&config)?);
    debug_log!(
        "Route table ready (base {}): {}",
        config.base_url(),
        app.router().table().names().collect::<Vec<_>>().join(", ")
    );
    APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));

    // Dispatch on every hash change, and once for the current hash. A bare
    // URL is rewritten to `#/`, whose hashchange does the first dispatch.
    let history = app.history();
    history.listen(dispatch)?;
    if history.is_unset() {
        history.replace("/")?;
    } else {
        dispatch(history.current_path());
    }
    Ok(())
}
