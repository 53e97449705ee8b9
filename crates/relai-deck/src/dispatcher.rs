//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Queued actions are drained by the store once the current
//! action has been fully processed, so they re-enter the chain from the beginning
//! in the order they were dispatched.
//!
//! This enables patterns like:
//! - GlobalKeyPressed(→) is translated by KeyboardMiddleware into SlideNext
//! - SlideNext flows through LoggingMiddleware and reaches the deck reducer

use crate::actions::Action;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Dispatcher for queueing actions onto the middleware chain
#[derive(Debug, Default)]
pub struct Dispatcher {
    queue: RefCell<VecDeque<Action>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        self.queue.borrow_mut().push_back(action);
    }

    /// Take all queued actions, oldest first
    pub fn drain(&self) -> Vec<Action> {
        self.queue.borrow_mut().drain(..).collect()
    }
}
