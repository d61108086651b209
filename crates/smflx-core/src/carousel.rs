//! Rotating slide index for the hero carousel.
//!
//! The carousel only tracks which slide is active. The timer that calls
//! [`Carousel::advance`] lives in the web layer and is cancelled with the
//! owning section.

/// Period between automatic advances, in milliseconds.
pub const DEFAULT_PERIOD_MS: u32 = 6_000;

/// Ordered slides with exactly one active entry (none when empty).
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<S> {
    slides: Vec<S>,
    active: usize,
}

impl<S> Carousel<S> {
    /// Start at the first slide.
    pub fn new(slides: Vec<S>) -> Self {
        Self { slides, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide, `None` when there are no slides.
    pub fn active_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.active
    }

    /// Move to the next slide, wrapping at the end.
    ///
    /// Returns the new index, or `None` for an empty carousel.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.active = (self.active + 1) % self.slides.len();
        Some(self.active)
    }

    /// Swap the slide list, clamping the active index into range.
    pub fn replace_slides(&mut self, slides: Vec<S>) {
        self.active = self.active.min(slides.len().saturating_sub(1));
        self.slides = slides;
    }

    /// Iterate `(index, slide, is_active)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &S, bool)> {
        self.slides
            .iter()
            .enumerate()
            .map(move |(i, slide)| (i, slide, i == self.active))
    }
}

impl<S> Default for Carousel<S> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{Liveness, Subscription};

    fn three() -> Carousel<&'static str> {
        Carousel::new(vec!["single", "married", "family"])
    }

    fn active_count<S>(carousel: &Carousel<S>) -> usize {
        carousel.iter().filter(|(_, _, active)| *active).count()
    }

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = three();
        assert_eq!(carousel.active_index(), Some(0));
    }

    #[test]
    fn test_cyclic_advance() {
        let mut carousel = three();
        for k in 1..=20 {
            carousel.advance();
            assert_eq!(carousel.active_index(), Some(k % 3));
        }
    }

    #[test]
    fn test_exactly_one_active() {
        let mut carousel = three();
        for _ in 0..7 {
            assert_eq!(active_count(&carousel), 1);
            carousel.advance();
        }
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel: Carousel<&str> = Carousel::default();
        assert_eq!(carousel.advance(), None);
        assert_eq!(carousel.active_index(), None);
        assert!(!carousel.is_active(0));
        assert_eq!(active_count(&carousel), 0);
    }

    #[test]
    fn test_replace_slides_clamps() {
        let mut carousel = three();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.active_index(), Some(2));

        carousel.replace_slides(vec!["a", "b"]);
        assert_eq!(carousel.active_index(), Some(1));

        carousel.replace_slides(vec![]);
        assert_eq!(carousel.active_index(), None);

        carousel.replace_slides(vec!["x", "y", "z"]);
        assert_eq!(carousel.active_index(), Some(0));
    }

    #[test]
    fn test_replace_slides_keeps_index_in_range() {
        let mut carousel = three();
        carousel.advance();
        carousel.replace_slides(vec!["a", "b", "c", "d"]);
        assert_eq!(carousel.active_index(), Some(1));
    }

    #[test]
    fn test_ticks_after_teardown_change_nothing() {
        let mut carousel = three();
        let mut timer = Subscription::new(Liveness::new(), || {});
        let tick = timer.liveness();

        tick.run(|| carousel.advance());
        assert_eq!(carousel.active_index(), Some(1));

        timer.cancel();
        for _ in 0..100 {
            tick.run(|| carousel.advance());
        }
        assert_eq!(carousel.active_index(), Some(1));
    }
}
