use crate::actions::Action;
use crate::state::{DeckState, SlideTransition};
use deck_navigator::NavigationEvent;

/// Reducer for slide navigation and the slide-in transition
pub fn reduce(mut state: DeckState, action: &Action) -> DeckState {
    let event = match action {
        Action::SlideNext => state.navigator.next(),
        Action::SlidePrevious => state.navigator.previous(),
        Action::SlideFirst => state.navigator.first(),
        Action::SlideLast => state.navigator.last(),
        Action::SlideJumpTo(index) => match state.navigator.jump_to(*index) {
            Ok(event) => event,
            Err(e) => {
                log::error!("Cannot jump to slide: {}", e);
                return state;
            }
        },
        Action::Tick => {
            state.transition = state.transition.and_then(SlideTransition::tick);
            return state;
        }
        _ => return state,
    };

    start_transition(&mut state, &event);
    state
}

/// Replay the slide-in transition whenever the visible slide changed
fn start_transition(state: &mut DeckState, event: &NavigationEvent) {
    if event.moved() {
        log::debug!(
            "Slide {} -> {} ({})",
            event.from,
            event.to,
            event.direction
        );
        state.transition = SlideTransition::start(event.direction, state.transition_frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use deck_navigator::Direction;
    use pretty_assertions::assert_eq;

    fn deck() -> DeckState {
        AppState::default().deck
    }

    fn run(actions: &[Action]) -> DeckState {
        actions.iter().fold(deck(), |state, action| reduce(state, action))
    }

    #[test]
    fn test_next_from_start() {
        let state = run(&[Action::SlideNext]);
        assert_eq!(state.navigator.current_index(), 1);
        assert_eq!(state.navigator.last_direction(), Direction::Forward);
    }

    #[test]
    fn test_previous_at_start_keeps_index_but_records_direction() {
        let state = run(&[Action::SlidePrevious]);
        assert_eq!(state.navigator.current_index(), 0);
        assert_eq!(state.navigator.last_direction(), Direction::Backward);
        assert_eq!(state.transition, None);
    }

    #[test]
    fn test_next_at_end_saturates() {
        let state = run(&[Action::SlideLast, Action::SlideNext]);
        assert_eq!(state.navigator.current_index(), 6);
        assert_eq!(state.navigator.last_direction(), Direction::Forward);
    }

    #[test]
    fn test_jump_direction_follows_target() {
        let state = run(&[Action::SlideJumpTo(5), Action::SlideJumpTo(2)]);
        assert_eq!(state.navigator.current_index(), 2);
        assert_eq!(state.navigator.last_direction(), Direction::Backward);
    }

    #[test]
    fn test_out_of_range_jump_leaves_state_unchanged() {
        let before = run(&[Action::SlideJumpTo(3)]);
        let after = reduce(before.clone(), &Action::SlideJumpTo(42));
        assert_eq!(after.navigator.state(), before.navigator.state());
        assert_eq!(after.transition, before.transition);
    }

    #[test]
    fn test_transition_starts_on_move_and_ticks_out() {
        let state = run(&[Action::SlideNext]);
        let transition = state.transition.unwrap();
        assert_eq!(transition.direction, Direction::Forward);
        assert_eq!(transition.remaining, state.transition_frames);

        let frames = usize::from(state.transition_frames);
        let state = (0..frames).fold(state, |state, _| reduce(state, &Action::Tick));
        assert_eq!(state.transition, None);
    }

    #[test]
    fn test_no_transition_when_disabled() {
        let mut state = deck();
        state.transition_frames = 0;
        let state = reduce(state, &Action::SlideNext);
        assert_eq!(state.navigator.current_index(), 1);
        assert_eq!(state.transition, None);
    }

    #[test]
    fn test_unrelated_actions_are_ignored() {
        let state = reduce(deck(), &Action::HelpToggle);
        assert_eq!(state.navigator.current_index(), 0);
    }
}
