//! Browser tests for hash history and page mounting.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use rift_rewind_frontend::app::App;
use rift_rewind_frontend::config::{init_app_config_js, AppConfig};
use rift_rewind_frontend::pages::Page;
use rift_rewind_frontend::router::HashHistory;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn outlet(document: &Document) -> web_sys::Element {
    document.get_element_by_id("app-container").expect("outlet mounted")
}

#[wasm_bindgen_test]
fn push_updates_location_hash() {
    let history = HashHistory::new("/");
    history.push("/rewind/abc123/NA").unwrap();
    assert_eq!(history.current_path(), "/rewind/abc123/NA");

    history.push("/about").unwrap();
    assert_eq!(history.current_path(), "/about");
    assert!(!history.is_unset());
}

#[wasm_bindgen_test]
fn replace_only_touches_the_fragment() {
    let location = web_sys::window().unwrap().location();
    let pathname = location.pathname().unwrap();
    let search = location.search().unwrap();

    // The base differs from where the test page is served.
    let history = HashHistory::new("/rift-rewind/");
    history.replace("/rewind/abc123/NA").unwrap();

    assert_eq!(location.pathname().unwrap(), pathname);
    assert_eq!(location.search().unwrap(), search);
    assert_eq!(history.current_path(), "/rewind/abc123/NA");
}

#[wasm_bindgen_test]
async fn home_renders_search_form() {
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/").await.unwrap();

    let page = outlet(&document).first_element_child().unwrap();
    assert_eq!(page.get_attribute("data-route").as_deref(), Some("home"));
    let select = document.get_element_by_id("region-select").unwrap();
    assert_eq!(select.child_element_count(), 4);
}

#[wasm_bindgen_test]
async fn home_form_submit_is_handled_after_remount() {
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/").await.unwrap();
    app.navigate(&document, "/").await.unwrap();

    let form = document.get_element_by_id("home-search-form").unwrap();
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    let submit = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&submit).unwrap();

    // The live handler stops the browser's own form submission.
    assert!(submit.default_prevented());
}

#[wasm_bindgen_test]
async fn summary_section_has_its_own_id() {
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/rewind/abc123/NA").await.unwrap();

    assert!(document.get_element_by_id("rewind-summary").is_some());
    assert!(document.get_element_by_id("rewind-rewind").is_none());
}

#[wasm_bindgen_test]
async fn calendar_mounts_with_section_nav() {
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/rewind/abc123/NA/calendar").await.unwrap();

    let outlet = outlet(&document);
    assert_eq!(outlet.child_element_count(), 1);
    let page = outlet.first_element_child().unwrap();
    assert_eq!(page.get_attribute("data-route").as_deref(), Some("calendar"));

    let links = outlet.query_selector_all("nav.section-nav a").unwrap();
    assert_eq!(links.length(), 4);
    let active = outlet.query_selector("a.active").unwrap().unwrap();
    assert_eq!(
        active.get_attribute("href").as_deref(),
        Some("/#/rewind/abc123/NA/calendar")
    );
    assert!(document.get_element_by_id("rewind-calendar").is_some());
}

#[wasm_bindgen_test]
async fn params_are_rendered_as_text() {
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/rewind/%3Cb%3Eme%3C%2Fb%3E/NA").await.unwrap();

    let header = outlet(&document).query_selector("h2").unwrap().unwrap();
    assert_eq!(header.text_content().as_deref(), Some("<b>me</b> (NA)"));
    assert!(header.query_selector("b").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn unknown_path_leaves_outlet_empty() {
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/").await.unwrap();
    app.navigate(&document, "/nonexistent").await.unwrap();

    assert_eq!(outlet(&document).child_element_count(), 0);
    assert!(app.router().current().is_none());
}

#[wasm_bindgen_test]
async fn about_fetch_failure_is_reported() {
    // Nothing is served under this base.
    init_app_config_js(r#"{"baseUrl": "/missing/"}"#).unwrap();
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    let err = app.navigate(&document, "/about").await.unwrap_err();

    let message = err.as_string().unwrap_or_default();
    assert!(message.contains("about"), "unexpected error: {}", message);
    assert!(app
        .router()
        .table()
        .resolve("/about")
        .unwrap()
        .component()
        .is_none());
}

#[wasm_bindgen_test]
async fn about_is_fetched_once_then_cached() {
    // The test server falls back to the crate directory, which holds www/.
    init_app_config_js(r#"{"baseUrl": "/www/"}"#).unwrap();
    let document = document();
    let app = App::new(&AppConfig::new("/")).unwrap();
    app.navigate(&document, "/about").await.unwrap();

    let page = outlet(&document).first_element_child().unwrap();
    assert_eq!(page.get_attribute("data-route").as_deref(), Some("about"));
    assert!(page.query_selector("article h1").unwrap().is_some());
    let current = app.router().current().unwrap();
    assert!(matches!(current.component, Page::About(_)));

    // A second visit must not fetch: nothing is served here any more.
    init_app_config_js(r#"{"baseUrl": "/missing/"}"#).unwrap();
    app.navigate(&document, "/").await.unwrap();
    app.navigate(&document, "/about").await.unwrap();
    let page = outlet(&document).first_element_child().unwrap();
    assert_eq!(page.get_attribute("data-route").as_deref(), Some("about"));
}
