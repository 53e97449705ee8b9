//! Command identifiers
//!
//! Commands are the semantic actions a viewer can trigger from the keyboard.
//! Keybindings refer to them by ID, which keeps the keymap serializable.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::actions::Action;

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `SlideNext` -> `"slide_next"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommandId {
    // === Slides ===
    /// Advance to the next slide
    SlideNext,
    /// Go back to the previous slide
    SlidePrevious,
    /// Jump to the first slide
    SlideFirst,
    /// Jump to the last slide
    SlideLast,

    // === Help ===
    /// Show or hide the key bindings overlay
    HelpToggle,

    // === General ===
    /// Close the help overlay, or quit
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::SlideNext => Action::SlideNext,
            Self::SlidePrevious => Action::SlidePrevious,
            Self::SlideFirst => Action::SlideFirst,
            Self::SlideLast => Action::SlideLast,
            Self::HelpToggle => Action::HelpToggle,
            Self::GlobalClose => Action::GlobalClose,
            Self::GlobalQuit => Action::GlobalQuit,
        }
    }

    /// Short description for the help overlay
    pub fn description(self) -> &'static str {
        match self {
            Self::SlideNext => "Next slide",
            Self::SlidePrevious => "Previous slide",
            Self::SlideFirst => "First slide",
            Self::SlideLast => "Last slide",
            Self::HelpToggle => "Toggle this help",
            Self::GlobalClose => "Close help / quit",
            Self::GlobalQuit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_snake_case() {
        assert_eq!(CommandId::SlidePrevious.to_string(), "slide_previous");
        assert_eq!(CommandId::HelpToggle.to_string(), "help_toggle");
    }

    #[test]
    fn test_slide_commands_map_to_slide_actions() {
        assert_eq!(CommandId::SlideNext.to_action(), Action::SlideNext);
        assert_eq!(CommandId::SlideLast.to_action(), Action::SlideLast);
        assert_eq!(CommandId::GlobalClose.to_action(), Action::GlobalClose);
    }
}
