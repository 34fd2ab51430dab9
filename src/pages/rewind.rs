use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::Section;
use crate::app::App;
use crate::constants::{CSS_NAV_LINK, CSS_NAV_LINK_ACTIVE, CSS_SECTION_NAV, PARAM_REGION, PARAM_RIOT_ID};
use crate::router::Params;

/// Shared shell for the summary, calendar, infographic and mastery views:
/// player header, section nav, then the section body.
pub fn render(
    document: &Document,
    page: &Element,
    app: &App,
    section: Section,
    params: &Params,
) -> Result<(), JsValue> {
    let riot_id = params.get(PARAM_RIOT_ID).unwrap_or_default();
    let region = params.get(PARAM_REGION).unwrap_or_default();

    // Params come straight from the URL, so text only, never inner HTML.
    let header = document.create_element("h2")?;
    header.set_text_content(Some(&format!("{} ({})", riot_id, region)));
    page.append_child(&header)?;

    let nav = document.create_element("nav")?;
    nav.set_class_name(CSS_SECTION_NAV);
    for target in Section::ALL {
        let link = document.create_element("a")?;
        link.set_class_name(if target == section {
            CSS_NAV_LINK_ACTIVE
        } else {
            CSS_NAV_LINK
        });
        link.set_attribute("href", &app.href(target.route_name(), params)?)?;
        link.set_text_content(Some(target.title()));
        nav.append_child(&link)?;
    }
    page.append_child(&nav)?;

    let body = document.create_element("section")?;
    body.set_id(&format!("rewind-{}", section.slug()));
    let heading = document.create_element("h3")?;
    heading.set_text_content(Some(section.title()));
    body.append_child(&heading)?;
    page.append_child(&body)?;

    Ok(())
}
