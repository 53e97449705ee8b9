//! Shared slide layout: eyebrow, title, subtitle and a grid of cards

use deck_theme::{Accent, Theme};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Maximum width of the slide column, wider terminals get side margins
const MAX_CONTENT_WIDTH: u16 = 110;

/// What sits above the slide title
#[derive(Debug, Clone, Copy)]
pub enum Eyebrow {
    /// "RelAI x402 Protocol" wordmark
    Brand,
    /// Section heading in the brand gradient with an underline bar
    Section(&'static str),
    /// Small uppercase label
    Label(&'static str),
}

/// Header block of a slide
#[derive(Debug, Clone, Copy)]
pub struct SlideShell {
    pub eyebrow: Eyebrow,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub show_logo: bool,
}

/// A feature card: icon, heading and a short paragraph
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub icon: &'static str,
    pub accent: Accent,
    pub title: &'static str,
    pub body: &'static str,
}

/// Horizontally centered column no wider than `MAX_CONTENT_WIDTH`
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect { x, width, ..area }
}

/// Render the shell header and return the remaining area below it
pub fn render_shell(shell: &SlideShell, theme: &Theme, area: Rect, f: &mut Frame) -> Rect {
    let column = content_column(area);
    let lines = shell_lines(shell, theme);

    let inner_width = column.width.saturating_sub(4).max(1);
    let height = wrapped_height(&lines, inner_width).min(column.height);

    let [header, rest] =
        Layout::vertical([Constraint::Length(height), Constraint::Min(0)]).areas(column);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(2)));
    f.render_widget(paragraph, header);

    rest
}

fn shell_lines(shell: &SlideShell, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if shell.show_logo {
        lines.push(logo_line(theme));
        lines.push(Line::default());
    }

    match shell.eyebrow {
        Eyebrow::Brand => {
            let mut spans = vec![Span::styled("RelAI ", theme.title())];
            spans.extend(theme.gradient_spans("x402 Protocol", Modifier::BOLD));
            lines.push(Line::from(spans));
            lines.push(theme.gradient_bar(20));
        }
        Eyebrow::Section(text) => {
            lines.push(Line::from(theme.gradient_spans(text, Modifier::BOLD)));
            lines.push(theme.gradient_bar(20));
        }
        Eyebrow::Label(text) => {
            lines.push(Line::styled(spaced_uppercase(text), theme.eyebrow()));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(shell.title, theme.title()));
    lines.push(Line::default());
    lines.push(Line::styled(shell.subtitle, theme.muted()));
    lines.push(Line::default());
    lines
}

/// The RelAI mark used in place of the logo image
pub fn logo_line(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("◢◤", theme.accent_icon(Accent::Cyan)),
        Span::styled(" RelAI", theme.header_title()),
    ])
}

/// "Roadmap" -> "R O A D M A P", mimicking wide letter spacing
pub fn spaced_uppercase(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay `cards` out in a grid with `columns` columns
pub fn render_cards(cards: &[Card], columns: usize, theme: &Theme, area: Rect, f: &mut Frame) {
    let area = content_column(area);
    let columns = effective_columns(columns, area.width);
    let rows = cards.len().div_ceil(columns);
    if rows == 0 || area.height == 0 {
        return;
    }

    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
    for (row_index, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::horizontal(vec![Constraint::Fill(1); columns])
            .spacing(1)
            .split(row_area.inner(ratatui::layout::Margin::new(1, 0)));
        for (col_index, cell) in col_areas.iter().enumerate() {
            if let Some(card) = cards.get(row_index * columns + col_index) {
                render_card(card, theme, *cell, f);
            }
        }
    }
}

/// Narrow terminals fall back to a single column, like the page on mobile
fn effective_columns(requested: usize, width: u16) -> usize {
    if width < 60 {
        1
    } else {
        requested.max(1)
    }
}

fn render_card(card: &Card, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.card_border())
        .style(theme.card_background())
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", card.icon), theme.accent_icon(card.accent)),
            Span::styled(card.title, theme.card_title()),
        ]),
        Line::styled(card.body, theme.body()),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}

/// Number of rows `lines` occupy when word-wrapped to `width`
///
/// Approximates ratatui's word wrapper by wrapping at character width,
/// which never underestimates by more than a line per paragraph.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| {
            let w = line.width();
            if w == 0 {
                1
            } else {
                w.div_ceil(width) + usize::from(w > width)
            }
        })
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_uppercase() {
        assert_eq!(spaced_uppercase("Roadmap"), "R O A D M A P");
        assert_eq!(spaced_uppercase(""), "");
    }

    #[test]
    fn test_content_column_is_centered_and_capped() {
        let column = content_column(Rect::new(0, 0, 200, 10));
        assert_eq!(column.width, MAX_CONTENT_WIDTH);
        assert_eq!(column.x, 45);

        let narrow = content_column(Rect::new(3, 1, 40, 10));
        assert_eq!(narrow, Rect::new(3, 1, 40, 10));
    }

    #[test]
    fn test_narrow_terminals_use_one_column() {
        assert_eq!(effective_columns(3, 50), 1);
        assert_eq!(effective_columns(3, 100), 3);
        assert_eq!(effective_columns(0, 100), 1);
    }

    #[test]
    fn test_wrapped_height_counts_empty_lines() {
        let lines = vec![Line::from("abcd"), Line::default(), Line::from("abcdefgh")];
        assert_eq!(wrapped_height(&lines, 10), 3);
        // "abcdefgh" at width 4 wraps to two rows, plus one spare for word breaks
        assert_eq!(wrapped_height(&lines, 4), 1 + 1 + 3);
    }
}
