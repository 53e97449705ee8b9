//! Footer: hint pill and control bar
//!
//! `FooterLayout` is shared by the renderer and by mouse hit-testing, so a
//! click lands on exactly the cells that were drawn for a control.

use deck_theme::Theme;
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::view_models::FooterViewModel;

/// Width of one indicator cell; cells are separated by one column
const DOT_WIDTH: u16 = 3;
const BUTTON_WIDTH: u16 = 3;
const MIN_BAR_WIDTH: u16 = 40;

/// Rows the footer occupies for the given hint setting
pub fn footer_height(show_hint: bool) -> u16 {
    // hint pill, bordered bar (3), bottom margin
    u16::from(show_hint) + 3 + 1
}

/// What a click in the footer hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterHit {
    Previous,
    Next,
    Dot(usize),
}

/// Positions of every footer element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLayout {
    pub hint: Option<Rect>,
    pub bar: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

impl FooterLayout {
    pub fn compute(area: Rect, slide_count: usize, show_hint: bool) -> Self {
        let hint_height = u16::from(show_hint);
        let hint = show_hint.then(|| Rect {
            height: hint_height.min(area.height),
            ..area
        });

        let count = u16::try_from(slide_count).unwrap_or(u16::MAX);
        let dots_width = count
            .saturating_mul(DOT_WIDTH + 1)
            .saturating_sub(1);
        let bar_width = dots_width
            .saturating_add(2 * BUTTON_WIDTH + 6)
            .max(MIN_BAR_WIDTH)
            .min(area.width);
        let bar = Rect {
            x: area.x + (area.width - bar_width) / 2,
            y: area.y + hint_height.min(area.height),
            width: bar_width,
            height: 3.min(area.height.saturating_sub(hint_height)),
        };

        // Single content row inside the border and one column of padding
        let inner = bar.inner(Margin::new(2, 1));
        let row = Rect { height: inner.height.min(1), ..inner };

        let previous = Rect {
            width: BUTTON_WIDTH.min(row.width),
            ..row
        };
        let next = Rect {
            x: row.right().saturating_sub(BUTTON_WIDTH).max(row.x),
            width: BUTTON_WIDTH.min(row.width),
            ..row
        };

        let dots_x = row.x + row.width.saturating_sub(dots_width) / 2;
        let dots = (0..count)
            .map(|i| {
                let cell = Rect {
                    x: dots_x.saturating_add(i.saturating_mul(DOT_WIDTH + 1)),
                    width: DOT_WIDTH,
                    ..row
                };
                cell.intersection(row)
            })
            .collect();

        Self {
            hint,
            bar,
            previous,
            next,
            dots,
        }
    }

    /// Which control, if any, covers the cell at (`column`, `row`)
    pub fn hit(&self, column: u16, row: u16) -> Option<FooterHit> {
        let position = Position::new(column, row);
        if let Some(index) = self.dots.iter().position(|dot| dot.contains(position)) {
            return Some(FooterHit::Dot(index));
        }
        if self.previous.contains(position) {
            return Some(FooterHit::Previous);
        }
        if self.next.contains(position) {
            return Some(FooterHit::Next);
        }
        None
    }
}

pub fn render(vm: &FooterViewModel, layout: &FooterLayout, theme: &Theme, f: &mut Frame) {
    if let (Some(hint), Some(area)) = (vm.hint, layout.hint) {
        let pill = Paragraph::new(Line::from(vec![
            Span::styled("( ", theme.faint()),
            Span::styled(hint, theme.muted()),
            Span::styled(" )", theme.faint()),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(pill, area);
    }

    let bar = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.card_border())
        .style(theme.control_bar());
    f.render_widget(bar, layout.bar);

    f.render_widget(
        Paragraph::new(Span::styled(" ‹ ", theme.control_button(vm.previous_enabled))),
        layout.previous,
    );
    f.render_widget(
        Paragraph::new(Span::styled(" › ", theme.control_button(vm.next_enabled))),
        layout.next,
    );

    for (dot, cell) in vm.dots.iter().zip(&layout.dots) {
        let symbol = if dot.active { "━━━" } else { " ● " };
        f.render_widget(
            Paragraph::new(Span::styled(symbol, theme.indicator(dot.active))),
            *cell,
        );
    }
}
