use crate::carousel::CarouselHandle;
use crate::core::{WheelNavigator, WheelSample};
use crate::dom::Listener;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn wheel_sample(ev: &web::Event) -> WheelSample {
    // `wheelDelta` is non-standard and missing from web-sys bindings
    let raw: &JsValue = ev.as_ref();
    let wheel_delta = js_sys::Reflect::get(raw, &JsValue::from_str("wheelDelta"))
        .ok()
        .and_then(|v| v.as_f64());
    let detail = ev
        .dyn_ref::<web::UiEvent>()
        .map(|ui| ui.detail() as f64);
    WheelSample { wheel_delta, detail }
}

pub fn wire_wheel(
    document: &web::Document,
    handle: &CarouselHandle,
    debounce: Duration,
) -> anyhow::Result<Vec<Listener>> {
    // Both listeners share one debounce window.
    let navigator = Rc::new(RefCell::new(WheelNavigator::new(debounce)));

    let on_scroll = {
        let handle = handle.clone();
        move |ev: web::Event| {
            let sample = wheel_sample(&ev);
            let target = navigator.borrow_mut().target(
                &sample,
                Instant::now(),
                handle.current(),
                handle.len(),
            );
            if let Some(index) = target {
                let nav = handle.navigate_to(index);
                log::debug!("[wheel] {:?} -> {:?}", sample.direction(), nav);
            }
        }
    };

    Ok(vec![
        Listener::passive(document, "wheel", on_scroll.clone())?,
        Listener::new(document, "DOMMouseScroll", on_scroll)?,
    ])
}
