//! Slide deck model
//!
//! A deck is built once at startup and never changes afterwards. It is
//! guaranteed to hold at least one slide, so index arithmetic in the
//! navigator never has to deal with an empty sequence.

use crate::error::NavigationError;

/// One entry in the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDescriptor<R> {
    pub id: usize,
    /// Short human readable name, used for the progress indicator
    pub label: String,
    /// Whatever the presentation layer needs to draw this slide
    pub renderer: R,
}

impl<R> SlideDescriptor<R> {
    pub fn new(id: usize, label: impl Into<String>, renderer: R) -> Self {
        Self {
            id,
            label: label.into(),
            renderer,
        }
    }
}

/// Ordered, fixed-size, non-empty sequence of slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck<R> {
    slides: Vec<SlideDescriptor<R>>,
}

impl<R> SlideDeck<R> {
    /// Build a deck, rejecting an empty slide list
    pub fn new(slides: Vec<SlideDescriptor<R>>) -> Result<Self, NavigationError> {
        if slides.is_empty() {
            return Err(NavigationError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept so `len` does not trip clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor<R>> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[SlideDescriptor<R>] {
        &self.slides
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }
}
