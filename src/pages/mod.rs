// src/pages/mod.rs
//
// Page-level views. The router hands over a `Page` plus the captured
// parameters and the matching module renders into the app container.

pub mod about;
pub mod home;
pub mod rewind;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::app::App;
use crate::constants::{
    CSS_PAGE, ROUTE_CALENDAR, ROUTE_INFOGRAPHIC, ROUTE_MASTERY, ROUTE_REWIND, ID_APP_CONTAINER,
};
use crate::router::ResolvedRoute;

pub use about::AboutContent;

/// The component type stored in the route table.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    Rewind(Section),
    About(AboutContent),
}

/// The four views of a player's rewind, sharing one header and nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Calendar,
    Infographic,
    Mastery,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::Calendar,
        Section::Infographic,
        Section::Mastery,
    ];

    pub fn route_name(self) -> &'static str {
        match self {
            Section::Summary => ROUTE_REWIND,
            Section::Calendar => ROUTE_CALENDAR,
            Section::Infographic => ROUTE_INFOGRAPHIC,
            Section::Mastery => ROUTE_MASTERY,
        }
    }

    /// Stable slug for element ids (`rewind-summary`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Calendar => "calendar",
            Section::Infographic => "infographic",
            Section::Mastery => "mastery",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Calendar => "Calendar",
            Section::Infographic => "Infographic",
            Section::Mastery => "Mastery",
        }
    }
}

/// Replace whatever the outlet shows with `route`'s page.
pub fn mount_page(document: &Document, app: &App, route: &ResolvedRoute<Page>) -> Result<(), JsValue> {
    let outlet = clear_outlet(document)?;

    let page = document.create_element("div")?;
    page.set_class_name(CSS_PAGE);
    page.set_attribute("data-route", &route.name)?;

    match &route.component {
        Page::Home => home::render(document, &page)?,
        Page::Rewind(section) => rewind::render(document, &page, app, *section, &route.params)?,
        Page::About(content) => about::render(document, &page, content)?,
    }

    outlet.append_child(&page)?;
    Ok(())
}

/// Empty the outlet (also what a not-found location shows) and return it.
pub fn clear_outlet(document: &Document) -> Result<Element, JsValue> {
    let outlet = outlet(document)?;
    while let Some(child) = outlet.first_child() {
        outlet.remove_child(&child)?;
    }
    Ok(outlet)
}

/// `#app-container`, created under `<body>` if the host page lacks it.
fn outlet(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(ID_APP_CONTAINER) {
        return Ok(el);
    }
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let el = document.create_element("div")?;
    el.set_id(ID_APP_CONTAINER);
    body.append_child(&el)?;
    Ok(el)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_slugs_are_distinct() {
        let slugs: HashSet<&str> = Section::ALL.iter().map(|s| s.slug()).collect();
        assert_eq!(slugs.len(), Section::ALL.len());
        assert_eq!(Section::Summary.slug(), "summary");
        assert_eq!(Section::Summary.route_name(), ROUTE_REWIND);
    }
}
