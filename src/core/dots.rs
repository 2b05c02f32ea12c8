use super::carousel::{SlideChange, SlideObserver};
use super::constants::CURRENT_SLIDE_CLASS;
use super::element::ElementHandle;

// Dot buttons mirroring the current slide.
pub struct DotIndicator<E> {
    dots: Vec<E>,
}

impl<E: ElementHandle> DotIndicator<E> {
    pub fn new(dots: Vec<E>) -> Self {
        Self { dots }
    }

    /// Mark dot `index` and clear every other dot, whatever the markup had.
    /// With no dot at `index` all dots end up unmarked.
    pub fn select(&self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            dot.set_class(CURRENT_SLIDE_CLASS, i == index);
        }
    }
}

impl<E: ElementHandle> SlideObserver for DotIndicator<E> {
    fn slide_changed(&self, change: &SlideChange) {
        self.select(change.to);
    }
}
