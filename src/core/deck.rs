use thiserror::Error;

use super::constants::{CURRENT_SLIDE_CLASS, REVEAL_TEXT_CLASS};
use super::element::ElementHandle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("carousel track has no slides")]
    Empty,
    #[error("current slide {index} is outside a deck of {len}")]
    CurrentOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

// `offset_px` is the measured width times the slide index.
pub struct Slide<E> {
    pub element: E,
    pub reveal_texts: Vec<E>,
    pub offset_px: f64,
}

impl<E: ElementHandle> Slide<E> {
    pub fn new(element: E, reveal_texts: Vec<E>, width_px: f64, index: usize) -> Self {
        Self {
            element,
            reveal_texts,
            offset_px: width_px * index as f64,
        }
    }

    pub fn set_current(&self, on: bool) {
        self.element.set_class(CURRENT_SLIDE_CLASS, on);
    }

    pub fn set_revealed(&self, on: bool) {
        for text in &self.reveal_texts {
            text.set_class(REVEAL_TEXT_CLASS, on);
        }
    }
}

/// Fixed, ordered set of slides with exactly one current slide.
///
/// The order and length never change after construction. The current index is
/// only moved by [`super::carousel::CarouselCoordinator`].
pub struct SlideDeck<E> {
    slides: Vec<Slide<E>>,
    current: usize,
}

impl<E: ElementHandle> SlideDeck<E> {
    // `current` is the slide marked in the markup, None selects the first.
    // Stray markers on other slides are cleared.
    pub fn new(slides: Vec<Slide<E>>, current: Option<usize>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let current = current.unwrap_or(0);
        if current >= slides.len() {
            return Err(DeckError::CurrentOutOfRange {
                index: current,
                len: slides.len(),
            });
        }
        for (i, slide) in slides.iter().enumerate() {
            slide.set_current(i == current);
        }
        Ok(Self { slides, current })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide(&self, index: usize) -> Option<&Slide<E>> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide<E>] {
        &self.slides
    }

    pub fn offset_of(&self, index: usize) -> Option<f64> {
        self.slides.get(index).map(|s| s.offset_px)
    }

    pub fn is_first(&self, index: usize) -> bool {
        index == 0
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.slides.len()
    }

    // no wrap-around
    pub fn neighbour(&self, step: Step) -> Option<usize> {
        match step {
            Step::Previous => self.current.checked_sub(1),
            Step::Next => (self.current + 1 < self.slides.len()).then_some(self.current + 1),
        }
    }

    // Only the coordinator moves the current marker.
    pub(super) fn set_current(&mut self, index: usize) {
        if let Some(old) = self.slides.get(self.current) {
            old.set_current(false);
        }
        if let Some(new) = self.slides.get(index) {
            new.set_current(true);
            self.current = index;
        }
    }
}
