//! Application State

use deck_config::AppConfig;
use deck_navigator::{Direction, NavigationError, Navigator};
use ratatui::layout::Rect;

use crate::keymap::{default_keymap, Keymap};
use crate::slides::{pitch_deck, SlideRenderer};

/// Slide-in animation replayed whenever the current slide changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub direction: Direction,
    /// Frames left to play; the transition is over at 0
    pub remaining: u8,
    pub total: u8,
}

impl SlideTransition {
    /// Start a transition, or nothing when transitions are disabled
    pub fn start(direction: Direction, total: u8) -> Option<Self> {
        (total > 0).then_some(Self {
            direction,
            remaining: total,
            total,
        })
    }

    /// Advance one frame, returning None once finished
    pub fn tick(self) -> Option<Self> {
        let remaining = self.remaining.saturating_sub(1);
        (remaining > 0).then_some(Self { remaining, ..self })
    }

    /// Horizontal offset of the entering slide for a body `width` columns wide
    ///
    /// Starts at a quarter of the width and shrinks linearly to zero.
    pub fn offset(&self, width: u16) -> u16 {
        if self.total == 0 {
            return 0;
        }
        let max_offset = u32::from(width / 4);
        (max_offset * u32::from(self.remaining) / u32::from(self.total)) as u16
    }
}

/// Deck navigation plus its cosmetic transition
#[derive(Debug, Clone)]
pub struct DeckState {
    pub navigator: Navigator<SlideRenderer>,
    pub transition: Option<SlideTransition>,
    /// Frames per transition, from config
    pub transition_frames: u8,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub deck: DeckState,
    pub help_visible: bool,
    /// Last known terminal area, used for mouse hit-testing
    pub viewport: Rect,
    pub theme: deck_theme::Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Build the initial state for `config`
    pub fn new(config: AppConfig) -> Result<Self, NavigationError> {
        let mut navigator = Navigator::new(pitch_deck()?);
        if config.start_slide != 0 {
            if let Err(e) = navigator.jump_to(config.start_slide) {
                log::warn!("Ignoring start_slide from config: {}", e);
            }
        }

        Ok(Self {
            running: true,
            deck: DeckState {
                navigator,
                transition: None,
                transition_frames: config.transition_frames,
            },
            help_visible: false,
            viewport: Rect::default(),
            theme: deck_theme::Theme::default(),
            keymap: default_keymap(),
            config,
        })
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default()).expect("pitch deck is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_slide_from_config() {
        let config = AppConfig {
            start_slide: 4,
            ..AppConfig::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.deck.navigator.current_index(), 4);
    }

    #[test]
    fn test_out_of_range_start_slide_is_ignored() {
        let config = AppConfig {
            start_slide: 42,
            ..AppConfig::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.deck.navigator.current_index(), 0);
    }

    #[test]
    fn test_transition_runs_for_configured_frames() {
        let mut transition = SlideTransition::start(Direction::Forward, 3);
        let mut frames = 0;
        while let Some(t) = transition {
            frames += 1;
            transition = t.tick();
        }
        assert_eq!(frames, 3);
    }

    #[test]
    fn test_zero_frames_disables_transition() {
        assert_eq!(SlideTransition::start(Direction::Backward, 0), None);
    }

    #[test]
    fn test_offset_shrinks_to_zero() {
        let t = SlideTransition {
            direction: Direction::Forward,
            remaining: 4,
            total: 4,
        };
        assert_eq!(t.offset(80), 20);
        assert_eq!(SlideTransition { remaining: 2, ..t }.offset(80), 10);
        assert_eq!(SlideTransition { remaining: 0, ..t }.offset(80), 0);
    }
}
