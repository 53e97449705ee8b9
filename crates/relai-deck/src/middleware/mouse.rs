use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::{deck_layout, footer::FooterHit};

/// MouseMiddleware - turns clicks on footer controls into slide actions
///
/// Hit-testing uses the same layout the renderer draws from, computed for
/// the last known viewport.
pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_click(&self, column: u16, row: u16, state: &AppState, dispatcher: &Dispatcher) {
        // Help is modal
        if state.help_visible {
            return;
        }

        let navigator = &state.deck.navigator;
        let layout = deck_layout(
            state.viewport,
            navigator.len(),
            state.config.show_navigation_hint,
        );

        match layout.footer.hit(column, row) {
            // Disabled affordances do nothing
            Some(FooterHit::Previous) if !navigator.is_at_start() => {
                dispatcher.dispatch(Action::SlidePrevious)
            }
            Some(FooterHit::Next) if !navigator.is_at_end() => {
                dispatcher.dispatch(Action::SlideNext)
            }
            Some(FooterHit::Dot(index)) if index != navigator.current_index() => {
                dispatcher.dispatch(Action::SlideJumpTo(index))
            }
            hit => log::trace!("Click at ({}, {}) ignored: {:?}", column, row, hit),
        }
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::GlobalMouseClicked { column, row } = action {
            self.handle_click(*column, *row, state, dispatcher);
            // Consume the raw click
            return false;
        }

        true
    }
}
