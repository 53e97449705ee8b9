use deck_theme::{Accent, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::view_models::HeaderViewModel;

/// Rows taken by the header including its bottom rule
pub const HEADER_HEIGHT: u16 = 2;

pub fn render(vm: &HeaderViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.card_border())
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let counter_width = vm.counter.chars().count() as u16;
    let [title_area, counter_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(counter_width)]).areas(inner);

    let title = Line::from(vec![
        Span::styled("◢◤ ", theme.accent_icon(Accent::Cyan)),
        Span::styled(vm.title, theme.header_title()),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    let counter = Paragraph::new(Span::styled(vm.counter.as_str(), theme.faint()))
        .alignment(Alignment::Right);
    f.render_widget(counter, counter_area);
}
