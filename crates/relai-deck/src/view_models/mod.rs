//! View models
//!
//! Pre-computes presentation data from `AppState` so views only draw.

use crate::command_id::CommandId;
use crate::state::AppState;

const NAVIGATION_HINT: &str = "Use arrow keys or click to navigate";

/// Header: deck title and slide counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub title: &'static str,
    /// Zero-padded, 1-based (e.g., "03 / 07")
    pub counter: String,
}

impl HeaderViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let navigator = &state.deck.navigator;
        Self {
            title: "RELAI PITCH DECK",
            counter: format!("{:02} / {:02}", navigator.current_index() + 1, navigator.len()),
        }
    }
}

/// One progress indicator dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotViewModel {
    pub label: String,
    pub active: bool,
}

/// Footer: hint pill, previous/next affordances and the progress indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterViewModel {
    pub hint: Option<&'static str>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub dots: Vec<DotViewModel>,
}

impl FooterViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let navigator = &state.deck.navigator;
        let current = navigator.current_index();
        let dots = navigator
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| DotViewModel {
                label: slide.label.clone(),
                active: index == current,
            })
            .collect();

        Self {
            hint: state.config.show_navigation_hint.then_some(NAVIGATION_HINT),
            previous_enabled: !navigator.is_at_start(),
            next_enabled: !navigator.is_at_end(),
            dots,
        }
    }
}

/// Help overlay rows: key hint and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpViewModel {
    pub rows: Vec<(String, &'static str)>,
}

impl HelpViewModel {
    pub fn from_state(state: &AppState) -> Self {
        const LISTED: [CommandId; 7] = [
            CommandId::SlideNext,
            CommandId::SlidePrevious,
            CommandId::SlideFirst,
            CommandId::SlideLast,
            CommandId::HelpToggle,
            CommandId::GlobalClose,
            CommandId::GlobalQuit,
        ];

        let mut rows: Vec<(String, &'static str)> = LISTED
            .iter()
            .filter_map(|command| {
                state
                    .keymap
                    .compact_hint_for_command(*command)
                    .map(|hint| (hint, command.description()))
            })
            .collect();

        rows.push((
            format!("1-{}", state.deck.navigator.len().min(9)),
            "Jump to slide",
        ));
        rows.push(("Click".to_string(), "Dots, ‹ and › in the footer"));

        Self { rows }
    }
}
