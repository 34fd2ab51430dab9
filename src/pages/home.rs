use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::constants::{
    ID_HOME_FORM, ID_REGION_SELECT, ID_RIOT_ID_INPUT, PARAM_REGION, PARAM_RIOT_ID, REGIONS,
    ROUTE_REWIND,
};
use crate::router::Params;

thread_local! {
    // Only one home form is mounted at a time; mounting again drops the old
    // handler along with the detached form it held on to.
    static SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(None);
}

/// Landing page: pick a Riot ID and region, then jump to their rewind.
pub fn render(document: &Document, page: &Element) -> Result<(), JsValue> {
    let title = document.create_element("h1")?;
    title.set_text_content(Some("Rift Rewind"));
    page.append_child(&title)?;

    let form = document.create_element("form")?;
    form.set_id(ID_HOME_FORM);

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(ID_RIOT_ID_INPUT);
    input.set_type("text");
    input.set_placeholder("GameName#TAG");
    input.set_required(true);
    form.append_child(&input)?;

    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_id(ID_REGION_SELECT);
    for region in REGIONS {
        let option = document.create_element("option")?;
        option.set_attribute("value", region)?;
        option.set_text_content(Some(region));
        select.append_child(&option)?;
    }
    form.append_child(&select)?;

    let submit = document.create_element("button")?;
    submit.set_attribute("type", "submit")?;
    submit.set_text_content(Some("Rewind"));
    form.append_child(&submit)?;

    let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let Some(params) = search_params(&input, &select) else {
            crate::warn_log!("Riot ID is required");
            return;
        };
        if let Err(e) = crate::app::push_named(ROUTE_REWIND, &params) {
            crate::error_log!("Failed to open rewind: {:?}", e);
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    SUBMIT_HANDLER.with(|cell| *cell.borrow_mut() = Some(on_submit));

    page.append_child(&form)?;
    Ok(())
}

fn search_params(input: &HtmlInputElement, select: &HtmlSelectElement) -> Option<Params> {
    let riot_id = input.value().trim().to_string();
    if riot_id.is_empty() {
        return None;
    }
    Some(
        Params::new()
            .with(PARAM_RIOT_ID, riot_id)
            .with(PARAM_REGION, select.value()),
    )
}
