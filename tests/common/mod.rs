// Shared host-side fixtures.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

pub mod core {
    pub mod arrows {
        include!("../../src/core/arrows.rs");
    }
    pub mod carousel {
        include!("../../src/core/carousel.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod deck {
        include!("../../src/core/deck.rs");
    }
    pub mod dots {
        include!("../../src/core/dots.rs");
    }
    pub mod element {
        include!("../../src/core/element.rs");
    }
    pub mod side_menu {
        include!("../../src/core/side_menu.rs");
    }
    pub mod wheel {
        include!("../../src/core/wheel.rs");
    }

    pub use arrows::*;
    pub use carousel::*;
    pub use config::*;
    pub use constants::*;
    pub use deck::*;
    pub use dots::*;
    pub use element::*;
    pub use side_menu::*;
    pub use wheel::*;
}

use self::core::*;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct FakeState {
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
}

/// In-memory stand-in for a DOM element. Clones share state, like JS handles.
#[derive(Clone, Debug, Default)]
pub struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub fn with_class(class: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().classes.insert(class.to_string());
        el
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }
}

impl ElementHandle for FakeElement {
    fn set_class(&self, class: &str, on: bool) {
        let mut state = self.0.borrow_mut();
        if on {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }
}

/// Handles to every element of a fake landing page.
pub struct Page {
    pub track: FakeElement,
    pub slides: Vec<FakeElement>,
    pub texts: Vec<Vec<FakeElement>>,
    pub prev: FakeElement,
    pub next: FakeElement,
    pub dots: Vec<FakeElement>,
    pub menu: Vec<FakeElement>,
}

pub const SLIDE_WIDTH: f64 = 320.0;

impl Page {
    /// `slide_count` slides of [`SLIDE_WIDTH`], each with the three reveal texts,
    /// one dot per slide and a six-entry side menu. `marked` is the slide
    /// carrying `current-slide` in the markup.
    pub fn new(slide_count: usize, marked: Option<usize>) -> Self {
        let slides = (0..slide_count)
            .map(|i| {
                if Some(i) == marked {
                    FakeElement::with_class(CURRENT_SLIDE_CLASS)
                } else {
                    FakeElement::default()
                }
            })
            .collect::<Vec<_>>();
        let texts = (0..slide_count)
            .map(|_| {
                REVEAL_TEXT_SELECTORS
                    .iter()
                    .map(|_| FakeElement::default())
                    .collect()
            })
            .collect();
        Self {
            track: FakeElement::default(),
            slides,
            texts,
            prev: FakeElement::default(),
            next: FakeElement::default(),
            dots: (0..slide_count).map(|_| FakeElement::default()).collect(),
            menu: (0..SIDE_MENU_CLASSES.len())
                .map(|_| FakeElement::default())
                .collect(),
        }
    }

    pub fn deck(&self, current: Option<usize>) -> SlideDeck<FakeElement> {
        let slides = self
            .slides
            .iter()
            .zip(&self.texts)
            .enumerate()
            .map(|(i, (el, texts))| Slide::new(el.clone(), texts.clone(), SLIDE_WIDTH, i))
            .collect();
        SlideDeck::new(slides, current).expect("valid deck")
    }

    /// Coordinator with arrows, dots and side menu subscribed, already mounted.
    pub fn mounted(&self) -> CarouselCoordinator<FakeElement> {
        let marked = self
            .slides
            .iter()
            .position(|s| s.has_class(CURRENT_SLIDE_CLASS));
        let mut coordinator = CarouselCoordinator::new(self.track.clone(), self.deck(marked));
        coordinator.subscribe(Box::new(NavigationArrows::new(
            self.prev.clone(),
            self.next.clone(),
        )));
        coordinator.subscribe(Box::new(DotIndicator::new(self.dots.clone())));
        coordinator.subscribe(Box::new(SideMenuSync::new(self.menu.clone())));
        coordinator.mount();
        coordinator
    }

    pub fn current_slides(&self) -> Vec<usize> {
        marked_indices(&self.slides, CURRENT_SLIDE_CLASS)
    }

    pub fn current_dots(&self) -> Vec<usize> {
        marked_indices(&self.dots, CURRENT_SLIDE_CLASS)
    }

    pub fn revealed_slides(&self) -> Vec<usize> {
        self.texts
            .iter()
            .enumerate()
            .filter(|(_, texts)| texts.iter().all(|t| t.has_class(REVEAL_TEXT_CLASS)))
            .map(|(i, _)| i)
            .collect()
    }

    /// `(entry index, class)` for every selected-class occurrence in the side menu.
    pub fn menu_selection(&self) -> Vec<(usize, &'static str)> {
        let mut out = Vec::new();
        for (i, entry) in self.menu.iter().enumerate() {
            for class in SIDE_MENU_CLASSES {
                if entry.has_class(class) {
                    out.push((i, class));
                }
            }
        }
        out
    }

    pub fn prev_hidden(&self) -> bool {
        self.prev.has_class(HIDDEN_ARROW_CLASS)
    }

    pub fn next_hidden(&self) -> bool {
        self.next.has_class(HIDDEN_ARROW_CLASS)
    }
}

pub fn marked_indices(elements: &[FakeElement], class: &str) -> Vec<usize> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, el)| el.has_class(class))
        .map(|(i, _)| i)
        .collect()
}
