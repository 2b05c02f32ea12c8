use crate::core::{
    release_after_transition, CarouselConfig, CarouselCoordinator, DeckError, DotIndicator,
    ElementHandle, Navigation, NavigationArrows, Slide, SlideDeck, SlideObserver, Step,
    CURRENT_SLIDE_CLASS, DOTS_NAV_SELECTOR, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR,
    REVEAL_TEXT_SELECTORS, TRACK_SELECTOR,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub type Coordinator = CarouselCoordinator<web::HtmlElement>;

// Shared by every input path (arrows, dots, menu, wheel). Owns the pending
// lock-release timer; dropping the last handle or `cancel_pending` clears it.
#[derive(Clone)]
pub struct CarouselHandle {
    coordinator: Rc<RefCell<Coordinator>>,
    pending_release: Rc<RefCell<Option<dom::Timeout>>>,
    animation: Duration,
}

impl CarouselHandle {
    pub fn navigate_to(&self, index: usize) -> Navigation {
        let nav = self.coordinator.borrow_mut().navigate_to(index);
        if let Some(t) = nav.transition() {
            self.schedule_release(t.ticket);
        }
        nav
    }

    pub fn step(&self, step: Step) -> Navigation {
        let nav = self.coordinator.borrow_mut().step(step);
        if let Some(t) = nav.transition() {
            self.schedule_release(t.ticket);
        }
        nav
    }

    pub fn current(&self) -> usize {
        self.coordinator.borrow().current()
    }

    pub fn len(&self) -> usize {
        self.coordinator.borrow().len()
    }

    pub fn cancel_pending(&self) {
        self.pending_release.borrow_mut().take();
    }

    fn schedule_release(&self, ticket: u64) {
        let release = release_after_transition(&self.coordinator, ticket);
        match dom::Timeout::new(self.animation, release) {
            Ok(t) => *self.pending_release.borrow_mut() = Some(t),
            Err(e) => {
                log::warn!("[carousel] release timer failed, unlocking now: {:?}", e);
                self.coordinator.borrow_mut().release(ticket);
            }
        }
    }
}

pub struct CarouselParts {
    pub handle: CarouselHandle,
    pub config: CarouselConfig,
    pub prev_button: Option<web::HtmlElement>,
    pub next_button: Option<web::HtmlElement>,
    pub dots_nav: Option<web::HtmlElement>,
    pub dots: Vec<web::HtmlElement>,
}

/// Build the carousel from the page markup and mount it. `Ok(None)` when the
/// page has no track or the track is empty.
pub fn mount(
    document: &web::Document,
    extra_observers: Vec<Box<dyn SlideObserver>>,
) -> anyhow::Result<Option<CarouselParts>> {
    let Some(track) = dom::query(document, TRACK_SELECTOR) else {
        log::info!("[carousel] no {} on page", TRACK_SELECTOR);
        return Ok(None);
    };
    let dataset = track.dataset();
    let config = CarouselConfig::default().with_overrides(|key| dataset.get(key));

    let slide_elements = dom::children(&track);
    let current = slide_elements
        .iter()
        .position(|el| el.has_class(CURRENT_SLIDE_CLASS));
    let slides = slide_elements
        .into_iter()
        .enumerate()
        .map(|(i, el)| {
            let width = el.get_bounding_client_rect().width();
            let reveal_texts = REVEAL_TEXT_SELECTORS
                .iter()
                .filter_map(|sel| dom::query_within(&el, sel))
                .collect();
            Slide::new(el, reveal_texts, width, i)
        })
        .collect::<Vec<_>>();

    let deck = match SlideDeck::new(slides, current) {
        Ok(deck) => deck,
        Err(DeckError::Empty) => {
            log::info!("[carousel] track has no slides");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut coordinator = CarouselCoordinator::new(track, deck);

    let prev_button = dom::query(document, PREV_BUTTON_SELECTOR);
    let next_button = dom::query(document, NEXT_BUTTON_SELECTOR);
    if let (Some(prev), Some(next)) = (&prev_button, &next_button) {
        coordinator.subscribe(Box::new(NavigationArrows::new(prev.clone(), next.clone())));
    }

    let dots_nav = dom::query(document, DOTS_NAV_SELECTOR);
    let dots = dots_nav.as_ref().map(|nav| dom::children(nav)).unwrap_or_default();
    if !dots.is_empty() {
        coordinator.subscribe(Box::new(DotIndicator::new(dots.clone())));
    }

    // Subscribed before mount so they see the initial index.
    for observer in extra_observers {
        coordinator.subscribe(observer);
    }

    coordinator.mount();
    log::info!(
        "[carousel] ready: {} slides, current={}, animation={:?}",
        coordinator.len(),
        coordinator.current(),
        config.animation_duration
    );

    let handle = CarouselHandle {
        coordinator: Rc::new(RefCell::new(coordinator)),
        pending_release: Rc::new(RefCell::new(None)),
        animation: config.animation_duration,
    };
    Ok(Some(CarouselParts {
        handle,
        config,
        prev_button,
        next_button,
        dots_nav,
        dots,
    }))
}
