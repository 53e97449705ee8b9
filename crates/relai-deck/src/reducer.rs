use crate::actions::Action;
use crate::reducers::deck_reducer;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    match action {
        Action::GlobalQuit => {
            state.running = false;
            return state;
        }
        Action::GlobalClose => {
            // Esc closes the help overlay first, quits otherwise
            if state.help_visible {
                state.help_visible = false;
            } else {
                state.running = false;
            }
            return state;
        }
        Action::HelpToggle => {
            state.help_visible = !state.help_visible;
            return state;
        }
        Action::GlobalViewportResized(area) => {
            state.viewport = *area;
            return state;
        }
        _ => {}
    }

    // Run sub-reducers for component-specific actions
    state.deck = deck_reducer::reduce(state.deck, action);

    state
}
