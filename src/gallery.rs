//! Screenshot carousel and lightbox state.
//!
//! The view layer in `app::carousel` keeps the collection, cursor and
//! lightbox in separate signals; [`Carousel`] bundles the same rules into a
//! single value so they can be driven without a DOM.

mod cursor;
mod images;
mod lightbox;
mod scroll_lock;

pub use cursor::{Cursor, Position};
pub use images::{ImageCollection, ImageDescriptor, RawImage};
pub use lightbox::{Lightbox, LightboxAction, LightboxKey};
pub use scroll_lock::{OverflowTarget, ScrollLock, LOCKED_OVERFLOW};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: ImageCollection,
    cursor: Cursor,
    lightbox: Lightbox,
}

impl Carousel {
    pub fn new(images: ImageCollection) -> Self {
        Self {
            images,
            ..Default::default()
        }
    }

    /// Swaps in a new collection, keeping the cursor in range. An empty
    /// collection also closes the lightbox.
    pub fn set_images(&mut self, images: ImageCollection) {
        self.images = images;
        self.cursor.clamp(self.images.len());
        if self.images.is_empty() {
            self.lightbox.close();
        }
    }

    pub fn images(&self) -> &ImageCollection {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.cursor.current(&self.images)
    }

    pub fn position(&self) -> Position {
        self.cursor.position(self.images.len())
    }

    pub fn advance(&mut self) {
        self.cursor.advance(self.images.len());
    }

    pub fn retreat(&mut self) {
        self.cursor.retreat(self.images.len());
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    pub fn request_open(&mut self) -> bool {
        let has_current = self.current().is_some();
        self.lightbox.open(has_current)
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    pub fn handle_key(&mut self, key: LightboxKey) -> LightboxAction {
        let action = self.lightbox.handle_key(key);
        match action {
            LightboxAction::Retreat => self.retreat(),
            LightboxAction::Advance => self.advance(),
            LightboxAction::Closed | LightboxAction::None => {}
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Carousel {
        Carousel::new(ImageCollection::from(vec![
            ImageDescriptor::new("a", None),
            ImageDescriptor::new("b", None),
            ImageDescriptor::new("c", None),
        ]))
    }

    #[test]
    fn test_advance_twice_reads_three_of_three() {
        let mut carousel = abc();
        assert_eq!(carousel.index(), 0);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.position().to_string(), "3 / 3");
        assert_eq!(carousel.current().map(|i| i.src.as_str()), Some("c"));
    }

    #[test]
    fn test_escape_closes_and_keeps_cursor() {
        let mut carousel = abc();
        carousel.advance();
        let before = carousel.index();
        assert!(carousel.request_open());
        assert_eq!(carousel.handle_key("Escape".into()), LightboxAction::Closed);
        assert!(!carousel.is_open());
        assert_eq!(carousel.index(), before);
    }

    #[test]
    fn test_arrow_keys_navigate_while_open() {
        let mut carousel = abc();
        carousel.request_open();
        carousel.handle_key("ArrowLeft".into());
        assert_eq!(carousel.index(), 2);
        carousel.handle_key("ArrowRight".into());
        carousel.handle_key("ArrowRight".into());
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_open());
    }

    #[test]
    fn test_arrow_keys_ignored_while_closed() {
        let mut carousel = abc();
        carousel.handle_key("ArrowRight".into());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_open_on_empty_is_noop() {
        let mut carousel = Carousel::default();
        assert!(!carousel.request_open());
        assert!(!carousel.is_open());
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
        assert_eq!(carousel.position().to_string(), "0 / 0");
    }

    #[test]
    fn test_set_images_keeps_invariants() {
        let mut carousel = abc();
        carousel.retreat();
        carousel.request_open();
        carousel.set_images(ImageCollection::from(vec![ImageDescriptor::new("z", None)]));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_open());

        carousel.set_images(ImageCollection::default());
        assert!(!carousel.is_open());
        assert!(carousel.current().is_none());
    }
}
