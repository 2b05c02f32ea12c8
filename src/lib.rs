#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod carousel;
pub mod core;
mod dom;
mod events;
mod side_menu;

// Dropping this removes every listener and clears a pending release timer.
struct App {
    carousel: Option<carousel::CarouselHandle>,
    listeners: Vec<dom::Listener>,
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = &self.carousel {
            handle.cancel_pending();
        }
        log::info!("[app] torn down, {} listeners removed", self.listeners.len());
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::when_ready(&document, || match init() {
        Ok(app) => {
            log::info!("[app] initialized");
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        }
        Err(e) => log::error!("init error: {:?}", e),
    });
    Ok(())
}

/// Remove all listeners and cancel pending timers. Safe to call twice.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

fn init() -> anyhow::Result<App> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let menu = side_menu::MenuEntries::from_document(&document);
    let mut observers: Vec<Box<dyn crate::core::SlideObserver>> = Vec::new();
    if let Some(sync) = menu.sync() {
        observers.push(Box::new(sync));
    }

    let Some(parts) = carousel::mount(&document, observers)? else {
        return Ok(App {
            carousel: None,
            listeners: Vec::new(),
        });
    };

    let mut listeners = events::wire_carousel_buttons(&parts)?;
    listeners.extend(events::wire_menu_clicks(&document, &parts.handle, &menu)?);
    listeners.extend(events::wire_wheel(
        &document,
        &parts.handle,
        parts.config.wheel_debounce,
    )?);
    log::info!("[app] {} listeners wired", listeners.len());

    Ok(App {
        carousel: Some(parts.handle),
        listeners,
    })
}
