use thiserror::Error;

/// Errors raised by deck construction and navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A jump target outside `[0, len)`
    #[error("slide index {index} is out of range for a deck of {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("a slide deck needs at least one slide")]
    EmptyDeck,
}
