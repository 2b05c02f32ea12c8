use crate::carousel::{CarouselHandle, CarouselParts};
use crate::core::Step;
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_carousel_buttons(parts: &CarouselParts) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();

    if let Some(next) = &parts.next_button {
        let handle = parts.handle.clone();
        listeners.push(Listener::new(next, "click", move |_ev| {
            let nav = handle.step(Step::Next);
            log::debug!("[carousel] next arrow: {:?}", nav);
        })?);
    }

    if let Some(prev) = &parts.prev_button {
        let handle = parts.handle.clone();
        listeners.push(Listener::new(prev, "click", move |_ev| {
            let nav = handle.step(Step::Previous);
            log::debug!("[carousel] previous arrow: {:?}", nav);
        })?);
    }

    // One delegated listener on the strip; the clicked dot is the closest button.
    if let Some(nav) = &parts.dots_nav {
        let handle = parts.handle.clone();
        let dots = parts.dots.clone();
        listeners.push(Listener::new(nav, "click", move |ev| {
            if let Some(index) = clicked_dot_index(&ev, &dots) {
                dot_clicked(&handle, index);
            }
        })?);
    }

    Ok(listeners)
}

fn clicked_dot_index(ev: &web::Event, dots: &[web::HtmlElement]) -> Option<usize> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let button = target.closest("button").ok().flatten()?;
    let button: &web::Node = button.as_ref();
    dots.iter().position(|dot| dot.is_same_node(Some(button)))
}

fn dot_clicked(handle: &CarouselHandle, index: usize) {
    let nav = handle.navigate_to(index);
    log::debug!("[carousel] dot {}: {:?}", index, nav);
}
