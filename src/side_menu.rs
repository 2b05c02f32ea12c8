use crate::core::{SideMenuSync, HAMBURGER_MENU_SELECTOR, SIDE_MENU_SELECTOR};
use crate::dom;
use web_sys as web;

// `side` entries navigate and mirror the current slide; `hamburger` entries
// only navigate (and close the collapsed menu).
pub struct MenuEntries {
    pub side: Vec<web::HtmlElement>,
    pub hamburger: Vec<web::HtmlElement>,
}

impl MenuEntries {
    pub fn from_document(document: &web::Document) -> Self {
        let side = dom::query_all(document, SIDE_MENU_SELECTOR);
        let hamburger = dom::query_all(document, HAMBURGER_MENU_SELECTOR);
        log::debug!(
            "[menu] {} side entries, {} hamburger entries",
            side.len(),
            hamburger.len()
        );
        Self { side, hamburger }
    }

    // None when the page has no side menu
    pub fn sync(&self) -> Option<SideMenuSync<web::HtmlElement>> {
        (!self.side.is_empty()).then(|| SideMenuSync::new(self.side.clone()))
    }
}
