use std::cell::RefCell;
use std::rc::Rc;

use super::deck::{SlideDeck, Step};
use super::element::ElementHandle;

// `from == to` only for the initial announcement made by `mount`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

// Anything that mirrors the current slide (arrows, dots, side menu).
pub trait SlideObserver {
    fn slide_changed(&self, change: &SlideChange);
}

// Applied and holding the lock until `ticket` is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub offset_px: f64,
    pub ticket: u64,
}

// Only `Started` has visible effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Navigation {
    Started(Transition),
    Locked, // dropped, not queued
    OutOfRange,
    Unchanged,
}

impl Navigation {
    pub fn transition(&self) -> Option<Transition> {
        match self {
            Navigation::Started(t) => Some(*t),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct TransitionLock {
    held_by: Option<u64>,
    next_ticket: u64,
}

impl TransitionLock {
    fn acquire(&mut self) -> Option<u64> {
        if self.held_by.is_some() {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.held_by = Some(ticket);
        Some(ticket)
    }

    fn release(&mut self, ticket: u64) -> bool {
        if self.held_by == Some(ticket) {
            self.held_by = None;
            true
        } else {
            false
        }
    }
}

/// Owns the current index and sequences every slide change.
///
/// Input handlers (arrows, dots, menu, wheel) all funnel into
/// [`navigate_to`](Self::navigate_to). A successful call moves the track,
/// swaps the current marker and reveal-text classes, takes the transition
/// lock, then notifies observers synchronously. Releasing the lock is the
/// caller's job because timers are platform specific.
pub struct CarouselCoordinator<E> {
    track: E,
    deck: SlideDeck<E>,
    lock: TransitionLock,
    observers: Vec<Box<dyn SlideObserver>>,
}

impl<E: ElementHandle> CarouselCoordinator<E> {
    pub fn new(track: E, deck: SlideDeck<E>) -> Self {
        Self {
            track,
            deck,
            lock: TransitionLock::default(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SlideObserver>) {
        self.observers.push(observer);
    }

    pub fn current(&self) -> usize {
        self.deck.current()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_transitioning(&self) -> bool {
        self.lock.held_by.is_some()
    }

    // Observers hear the initial index as a change from and to `current`.
    pub fn mount(&mut self) {
        for slide in self.deck.slides() {
            slide.element.set_style("left", &format!("{}px", slide.offset_px));
        }
        let current = self.deck.current();
        if let Some(slide) = self.deck.slide(current) {
            slide.set_revealed(true);
        }
        log::debug!(
            "[carousel] mounted {} slides, current={}",
            self.deck.len(),
            current
        );
        self.notify(SlideChange {
            from: current,
            to: current,
            len: self.deck.len(),
        });
    }

    pub fn navigate_to(&mut self, target: usize) -> Navigation {
        if self.is_transitioning() {
            return Navigation::Locked;
        }
        let from = self.deck.current();
        let Some(offset_px) = self.deck.offset_of(target) else {
            return Navigation::OutOfRange;
        };
        if target == from {
            return Navigation::Unchanged;
        }
        let Some(ticket) = self.lock.acquire() else {
            return Navigation::Locked;
        };

        self.track
            .set_style("transform", &format!("translateX(-{}px)", offset_px));
        self.deck.set_current(target);
        if let Some(old) = self.deck.slide(from) {
            old.set_revealed(false);
        }
        if let Some(new) = self.deck.slide(target) {
            new.set_revealed(true);
        }
        log::debug!("[carousel] slide {} -> {} (ticket {})", from, target, ticket);

        self.notify(SlideChange {
            from,
            to: target,
            len: self.deck.len(),
        });
        Navigation::Started(Transition {
            from,
            to: target,
            offset_px,
            ticket,
        })
    }

    // No wrap-around at either end.
    pub fn step(&mut self, step: Step) -> Navigation {
        match self.deck.neighbour(step) {
            Some(index) => self.navigate_to(index),
            None => Navigation::OutOfRange,
        }
    }

    /// Returns false for stale or unknown tickets.
    pub fn release(&mut self, ticket: u64) -> bool {
        self.lock.release(ticket)
    }

    fn notify(&self, change: SlideChange) {
        for observer in &self.observers {
            observer.slide_changed(&change);
        }
    }
}

/// Body of the platform timer that ends a transition.
///
/// Holds only a weak reference, so a timer that fires after the carousel was
/// torn down does nothing.
pub fn release_after_transition<E: ElementHandle + 'static>(
    coordinator: &Rc<RefCell<CarouselCoordinator<E>>>,
    ticket: u64,
) -> impl FnOnce() + 'static {
    let coordinator = Rc::downgrade(coordinator);
    move || match coordinator.upgrade() {
        Some(c) => {
            c.borrow_mut().release(ticket);
        }
        None => log::debug!("[carousel] release {} after teardown ignored", ticket),
    }
}
