use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched by middleware
        let pending_actions = self.dispatcher.drain();
        for action in pending_actions {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every action it sees and swallows `HelpToggle`
    struct Recorder {
        seen: std::rc::Rc<std::cell::RefCell<Vec<Action>>>,
    }

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            self.seen.borrow_mut().push(action.clone());
            if *action == Action::HelpToggle {
                dispatcher.dispatch(Action::SlideNext);
                return false;
            }
            true
        }
    }

    #[test]
    fn test_consumed_action_skips_reducer_but_follow_ups_run() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(Recorder { seen: seen.clone() }));

        store.dispatch(Action::HelpToggle);

        assert!(!store.state().help_visible);
        assert_eq!(store.state().deck.navigator.current_index(), 1);
        assert_eq!(*seen.borrow(), vec![Action::HelpToggle, Action::SlideNext]);
    }
}
