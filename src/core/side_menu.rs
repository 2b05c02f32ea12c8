use super::carousel::{SlideChange, SlideObserver};
use super::constants::SIDE_MENU_CLASSES;
use super::element::ElementHandle;

#[inline]
pub fn selection_class(index: usize) -> Option<&'static str> {
    SIDE_MENU_CLASSES.get(index).copied()
}

/// External side menu whose entries highlight the slide on screen.
///
/// Each entry owns a distinct selected class (see [`SIDE_MENU_CLASSES`]);
/// at most one of them is applied across all entries.
pub struct SideMenuSync<E> {
    entries: Vec<E>,
}

impl<E: ElementHandle> SideMenuSync<E> {
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    // An index with no entry or no table class leaves the menu untouched.
    pub fn update_selection(&self, index: usize) {
        let (Some(entry), Some(class)) = (self.entries.get(index), selection_class(index)) else {
            log::debug!("[menu] no entry for slide {}", index);
            return;
        };
        for item in &self.entries {
            for name in SIDE_MENU_CLASSES {
                item.set_class(name, false);
            }
        }
        entry.set_class(class, true);
    }
}

impl<E: ElementHandle> SlideObserver for SideMenuSync<E> {
    fn slide_changed(&self, change: &SlideChange) {
        self.update_selection(change.to);
    }
}
