//! Slide Navigator
//!
//! Owns the current slide index and the direction of the last move. The
//! index saturates at both ends of the deck: moving past the first or last
//! slide is an ordinary interaction, not an error. Only `jump_to` can fail,
//! and only when the caller hands in an index the deck does not have.

use std::sync::Arc;

use strum::Display;

use crate::deck::{SlideDeck, SlideDescriptor};
use crate::error::NavigationError;

/// Direction of the last navigation, selects the enter transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// The mutable part of the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub last_direction: Direction,
}

/// Outcome of a mutating navigator operation
///
/// Every mutation produces exactly one event, even when the index did not
/// move, so the presentation layer re-renders once per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

impl NavigationEvent {
    /// Whether the current slide changed
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Navigator over a shared, immutable deck
#[derive(Debug)]
pub struct Navigator<R> {
    deck: Arc<SlideDeck<R>>,
    state: NavigationState,
}

impl<R> Clone for Navigator<R> {
    fn clone(&self) -> Self {
        Self {
            deck: Arc::clone(&self.deck),
            state: self.state,
        }
    }
}

impl<R> Navigator<R> {
    /// Start on the first slide, heading forward
    pub fn new(deck: SlideDeck<R>) -> Self {
        Self::from_shared(Arc::new(deck))
    }

    pub fn from_shared(deck: Arc<SlideDeck<R>>) -> Self {
        Self {
            deck,
            state: NavigationState::default(),
        }
    }

    /// Advance one slide, saturating at the last one
    pub fn next(&mut self) -> NavigationEvent {
        let from = self.state.current_index;
        self.state.last_direction = Direction::Forward;
        self.state.current_index = (from + 1).min(self.deck.last_index());
        self.event_from(from)
    }

    /// Go back one slide, saturating at the first one
    pub fn previous(&mut self) -> NavigationEvent {
        let from = self.state.current_index;
        self.state.last_direction = Direction::Backward;
        self.state.current_index = from.saturating_sub(1);
        self.event_from(from)
    }

    /// Jump straight to `target`
    ///
    /// The direction follows the sign of the move and is left alone when
    /// `target` is already the current slide. An out-of-range target leaves
    /// the state untouched.
    pub fn jump_to(&mut self, target: usize) -> Result<NavigationEvent, NavigationError> {
        if target >= self.deck.len() {
            return Err(NavigationError::OutOfRange {
                index: target,
                len: self.deck.len(),
            });
        }

        let from = self.state.current_index;
        if target > from {
            self.state.last_direction = Direction::Forward;
        } else if target < from {
            self.state.last_direction = Direction::Backward;
        }
        self.state.current_index = target;
        Ok(self.event_from(from))
    }

    pub fn first(&mut self) -> NavigationEvent {
        self.jump_within(0)
    }

    pub fn last(&mut self) -> NavigationEvent {
        self.jump_within(self.deck.last_index())
    }

    pub fn current_slide(&self) -> &SlideDescriptor<R> {
        &self.deck.slides()[self.state.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn last_direction(&self) -> Direction {
        self.state.last_direction
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_at_start(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.state.current_index == self.deck.last_index()
    }

    /// All slides in deck order, for the progress indicator
    pub fn slides(&self) -> &[SlideDescriptor<R>] {
        self.deck.slides()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    fn jump_within(&mut self, target: usize) -> NavigationEvent {
        let from = self.state.current_index;
        match self.jump_to(target) {
            Ok(event) => event,
            // Boundary indices of a non-empty deck are always in range
            Err(_) => self.event_from(from),
        }
    }

    fn event_from(&self, from: usize) -> NavigationEvent {
        NavigationEvent {
            from,
            to: self.state.current_index,
            direction: self.state.last_direction,
        }
    }
}
