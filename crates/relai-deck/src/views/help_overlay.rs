//! Key bindings help overlay

use deck_theme::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::view_models::HelpViewModel;

pub fn render(vm: &HelpViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    // Dim everything underneath
    f.buffer_mut().set_style(
        area,
        Style::default().bg(Color::Black).add_modifier(Modifier::DIM),
    );

    let hint_width = vm
        .rows
        .iter()
        .map(|(hint, _)| hint.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = vm
        .rows
        .iter()
        .map(|(hint, description)| {
            Line::from(vec![
                Span::styled(format!("{:>width$}", hint, width = hint_width), theme.key_hint()),
                Span::raw("   "),
                Span::styled(*description, theme.key_description()),
            ])
        })
        .collect();

    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(6);
    let height = (lines.len() as u16).saturating_add(4);

    let [panel] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(panel);

    f.render_widget(Clear, panel);

    let block = Block::default()
        .title(Line::from(Span::styled(" Key Bindings ", theme.header_title())))
        .title_bottom(Line::from(vec![
            Span::styled(" ?", theme.key_hint()),
            Span::styled(" or ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" to close ", theme.muted()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.card_border())
        .style(theme.card_background())
        .padding(Padding::new(2, 2, 1, 1));

    f.render_widget(Paragraph::new(lines).block(block), panel);
}
