use super::carousel::{SlideChange, SlideObserver};
use super::constants::HIDDEN_ARROW_CLASS;
use super::element::ElementHandle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub prev_hidden: bool,
    pub next_hidden: bool,
}

#[inline]
pub fn arrow_visibility(index: usize, len: usize) -> ArrowVisibility {
    ArrowVisibility {
        prev_hidden: index == 0,
        next_hidden: index + 1 >= len,
    }
}

// Previous/next buttons, hidden at the ends of the deck.
pub struct NavigationArrows<E> {
    prev: E,
    next: E,
}

impl<E: ElementHandle> NavigationArrows<E> {
    pub fn new(prev: E, next: E) -> Self {
        Self { prev, next }
    }

    pub fn update(&self, index: usize, len: usize) {
        let vis = arrow_visibility(index, len);
        self.prev.set_class(HIDDEN_ARROW_CLASS, vis.prev_hidden);
        self.next.set_class(HIDDEN_ARROW_CLASS, vis.next_hidden);
    }
}

impl<E: ElementHandle> SlideObserver for NavigationArrows<E> {
    fn slide_changed(&self, change: &SlideChange) {
        self.update(change.to, change.len);
    }
}
