//! Slide navigation for fixed-order decks
//!
//! This crate provides:
//! - `SlideDeck`: an immutable, non-empty sequence of slide descriptors
//! - `Navigator`: owns the current index and last direction, saturating at both ends
//! - `NavigationError`: the contract violations a caller can hit
//!
//! The crate knows nothing about rendering. A descriptor carries an opaque
//! renderer `R` that the presentation layer picks.

pub mod deck;
pub mod error;
pub mod navigator;

pub use deck::{SlideDeck, SlideDescriptor};
pub use error::NavigationError;
pub use navigator::{Direction, NavigationEvent, NavigationState, Navigator};
