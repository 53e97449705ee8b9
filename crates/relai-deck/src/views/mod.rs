use deck_navigator::Direction;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};

use crate::state::{AppState, SlideTransition};
use crate::view_models::{FooterViewModel, HeaderViewModel, HelpViewModel};

pub mod footer;
mod header;
mod help_overlay;

use footer::{footer_height, FooterLayout};

/// Screen regions of the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: FooterLayout,
}

pub fn deck_layout(area: Rect, slide_count: usize, show_hint: bool) -> DeckLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height(show_hint)),
    ])
    .areas(area);

    DeckLayout {
        header,
        body,
        footer: FooterLayout::compute(footer, slide_count, show_hint),
    }
}

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let navigator = &state.deck.navigator;
    let layout = deck_layout(area, navigator.len(), state.config.show_navigation_hint);

    f.render_widget(Block::default().style(theme.background()), area);

    header::render(&HeaderViewModel::from_state(state), theme, layout.header, f);

    let body = match state.deck.transition {
        Some(transition) => shifted_body(layout.body, &transition),
        None => layout.body,
    };
    navigator.current_slide().renderer.render(theme, body, f);
    if state.deck.transition.is_some() {
        f.buffer_mut()
            .set_style(layout.body, Style::default().add_modifier(Modifier::DIM));
    }

    footer::render(&FooterViewModel::from_state(state), &layout.footer, theme, f);

    // Help overlay sits on top of everything
    if state.help_visible {
        help_overlay::render(&HelpViewModel::from_state(state), theme, area, f);
    }
}

/// Body area displaced towards the side the slide enters from
fn shifted_body(body: Rect, transition: &SlideTransition) -> Rect {
    let offset = transition.offset(body.width);
    match transition.direction {
        Direction::Forward => Rect {
            x: body.x + offset,
            width: body.width - offset,
            ..body
        },
        Direction::Backward => Rect {
            width: body.width - offset,
            ..body
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render(state, f.area(), f))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_layout_reserves_header_and_footer() {
        let layout = deck_layout(Rect::new(0, 0, 80, 24), 7, true);
        assert_eq!(layout.header, Rect::new(0, 0, 80, 2));
        assert_eq!(layout.body, Rect::new(0, 2, 80, 17));
        assert_eq!(layout.footer.bar, Rect::new(20, 20, 40, 3));
    }

    #[test]
    fn test_render_shows_counter_and_hint() {
        let state = AppState::default();
        let text = draw(&state, 100, 30);
        assert!(text.contains("RELAI PITCH DECK"));
        assert!(text.contains("01 / 07"));
        assert!(text.contains("Use arrow keys or click to navigate"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut state = AppState::default();
        state.help_visible = true;
        let text = draw(&state, 100, 30);
        assert!(text.contains("Key Bindings"));
        assert!(text.contains("Next slide"));
    }

    #[test]
    fn test_render_mid_transition_in_both_directions() {
        let mut state = AppState::default();
        state.deck.navigator.jump_to(2).unwrap();
        for direction in [Direction::Forward, Direction::Backward] {
            state.deck.transition = SlideTransition::start(direction, 6);
            let text = draw(&state, 80, 24);
            assert!(text.contains("03 / 07"));
        }
    }

    #[test]
    fn test_shifted_body_moves_towards_entry_side() {
        let body = Rect::new(0, 2, 80, 20);
        let forward = SlideTransition::start(Direction::Forward, 4).unwrap();
        let backward = SlideTransition::start(Direction::Backward, 4).unwrap();

        assert_eq!(shifted_body(body, &forward), Rect::new(20, 2, 60, 20));
        assert_eq!(shifted_body(body, &backward), Rect::new(0, 2, 60, 20));
    }
}
