use crate::carousel::CarouselHandle;
use crate::core::HAMBURGER_TOGGLE_ID;
use crate::dom::Listener;
use crate::side_menu::MenuEntries;
use wasm_bindgen::JsCast;
use web_sys as web;

// The i-th side or hamburger menu entry jumps to slide i.
pub fn wire_menu_clicks(
    document: &web::Document,
    handle: &CarouselHandle,
    entries: &MenuEntries,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(entries.side.len() + entries.hamburger.len());

    for (index, entry) in entries.side.iter().enumerate() {
        let handle = handle.clone();
        listeners.push(Listener::new(entry, "click", move |ev| {
            ev.prevent_default();
            let nav = handle.navigate_to(index);
            log::debug!("[menu] side entry {}: {:?}", index, nav);
        })?);
    }

    for (index, entry) in entries.hamburger.iter().enumerate() {
        let handle = handle.clone();
        let doc = document.clone();
        listeners.push(Listener::new(entry, "click", move |ev| {
            ev.prevent_default();
            let nav = handle.navigate_to(index);
            log::debug!("[menu] hamburger entry {}: {:?}", index, nav);
            close_hamburger(&doc);
        })?);
    }

    Ok(listeners)
}

fn close_hamburger(document: &web::Document) {
    if let Some(toggle) = document
        .get_element_by_id(HAMBURGER_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        toggle.set_checked(false);
    }
}
