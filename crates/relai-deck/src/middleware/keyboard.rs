use crate::actions::Action;
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
///
/// Owns the pending first key of a two-key sequence between events.
pub struct KeyboardMiddleware {
    pending: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending: None }
    }

    fn handle_key_event(&mut self, key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Digits pick a slide directly, like the indicator dots do
        if let Some(index) = digit_slide_index(key) {
            self.pending = None;
            if state.help_visible {
                return;
            }
            if index < state.deck.navigator.len() {
                dispatcher.dispatch(Action::SlideJumpTo(index));
            } else {
                log::trace!("No slide for digit key {:?}", key.code);
            }
            return;
        }

        match state.keymap.match_key(key, self.pending.as_ref()) {
            KeyMatch::Commands(commands) => {
                self.pending = None;
                for command in commands {
                    if state.help_visible && !is_allowed_with_help_open(command) {
                        log::trace!("Ignoring {} while help is open", command);
                        continue;
                    }
                    dispatcher.dispatch(command.to_action());
                }
            }
            KeyMatch::Pending(c) => {
                self.pending = Some(PendingKey::new(c));
            }
            KeyMatch::NoMatch => {
                self.pending = None;
                log::trace!("Unhandled key: {:?}", key);
            }
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::GlobalKeyPressed(key) = action {
            self.handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// '1'..='9' without modifiers, as a 0-based slide index
fn digit_slide_index(key: &KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') if key.modifiers == KeyModifiers::NONE => {
            c.to_digit(10).map(|d| d as usize - 1)
        }
        _ => None,
    }
}

/// The help overlay is modal: only commands that close it or quit get through
fn is_allowed_with_help_open(command: CommandId) -> bool {
    matches!(
        command,
        CommandId::HelpToggle | CommandId::GlobalClose | CommandId::GlobalQuit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use deck_navigator::Direction;

    fn store() -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store
    }

    fn press(store: &mut Store, code: KeyCode) {
        let modifiers = match code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
            _ => KeyModifiers::NONE,
        };
        store.dispatch(Action::GlobalKeyPressed(KeyEvent::new(code, modifiers)));
    }

    #[test]
    fn test_arrow_right_and_page_down_advance() {
        let mut store = store();
        press(&mut store, KeyCode::Right);
        press(&mut store, KeyCode::PageDown);
        assert_eq!(store.state().deck.navigator.current_index(), 2);
        assert_eq!(store.state().deck.navigator.last_direction(), Direction::Forward);
    }

    #[test]
    fn test_arrow_left_and_page_up_go_back() {
        let mut store = store();
        press(&mut store, KeyCode::Char('4'));
        press(&mut store, KeyCode::Left);
        press(&mut store, KeyCode::PageUp);
        assert_eq!(store.state().deck.navigator.current_index(), 1);
        assert_eq!(store.state().deck.navigator.last_direction(), Direction::Backward);
    }

    #[test]
    fn test_ten_rights_saturate_at_last_slide() {
        let mut store = store();
        for _ in 0..10 {
            press(&mut store, KeyCode::Right);
        }
        assert_eq!(store.state().deck.navigator.current_index(), 6);
        assert!(store.state().deck.navigator.is_at_end());
    }

    #[test]
    fn test_digit_beyond_deck_is_ignored() {
        let mut store = store();
        press(&mut store, KeyCode::Char('3'));
        press(&mut store, KeyCode::Char('9'));
        assert_eq!(store.state().deck.navigator.current_index(), 2);
    }

    #[test]
    fn test_gg_and_shift_g() {
        let mut store = store();
        press(&mut store, KeyCode::Char('G'));
        assert_eq!(store.state().deck.navigator.current_index(), 6);

        press(&mut store, KeyCode::Char('g'));
        assert_eq!(store.state().deck.navigator.current_index(), 6);
        press(&mut store, KeyCode::Char('g'));
        assert_eq!(store.state().deck.navigator.current_index(), 0);
    }

    #[test]
    fn test_help_overlay_blocks_navigation() {
        let mut store = store();
        press(&mut store, KeyCode::Char('?'));
        assert!(store.state().help_visible);

        press(&mut store, KeyCode::Right);
        press(&mut store, KeyCode::Char('2'));
        assert_eq!(store.state().deck.navigator.current_index(), 0);

        press(&mut store, KeyCode::Esc);
        assert!(!store.state().help_visible);
        assert!(store.state().running);

        press(&mut store, KeyCode::Right);
        assert_eq!(store.state().deck.navigator.current_index(), 1);
    }

    #[test]
    fn test_q_quits() {
        let mut store = store();
        press(&mut store, KeyCode::Char('q'));
        assert!(!store.state().running);
    }

    #[test]
    fn test_digit_slide_index() {
        let one = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        let zero = KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE);
        let ctrl_two = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::CONTROL);
        assert_eq!(digit_slide_index(&one), Some(0));
        assert_eq!(digit_slide_index(&zero), None);
        assert_eq!(digit_slide_index(&ctrl_two), None);
    }
}
