//! Hero and Closing slides, both centered compositions without the shell

use std::sync::OnceLock;

use deck_theme::{Accent, Theme};
use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::shell::{content_column, wrapped_height};

const WORDMARK: &str = "RelAI";

/// FIGlet rendering of the wordmark, computed once
fn wordmark_lines() -> &'static [String] {
    static LINES: OnceLock<Vec<String>> = OnceLock::new();
    LINES.get_or_init(|| {
        let figure = FIGfont::standard()
            .ok()
            .and_then(|font| font.convert(WORDMARK).map(|figure| figure.to_string()));
        match figure {
            Some(text) => text
                .lines()
                .map(|line| line.trim_end().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
            None => {
                log::warn!("FIGlet font unavailable, using plain wordmark");
                Vec::new()
            }
        }
    })
}

/// Color a FIGlet block column by column along the brand gradient
fn gradient_figlet(lines: &[String], theme: &Theme) -> Vec<Line<'static>> {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let denom = width.saturating_sub(1).max(1) as f32;
    lines
        .iter()
        .map(|line| {
            let mut spans: Vec<Span<'static>> = line
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    let style = Style::default()
                        .fg(theme.gradient_at(i as f32 / denom))
                        .add_modifier(Modifier::BOLD);
                    Span::styled(c.to_string(), style)
                })
                .collect();
            // Pad so every row centers identically
            let pad = width - line.chars().count();
            spans.push(Span::raw(" ".repeat(pad)));
            Line::from(spans)
        })
        .collect()
}

fn product_heading(theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("RelAI ", theme.title())];
    spans.extend(theme.gradient_spans("Micropayments", Modifier::BOLD));
    Line::from(spans)
}

/// Render `lines` centered both ways inside `area`
fn render_centered(lines: Vec<Line<'static>>, area: Rect, f: &mut Frame) {
    let column = content_column(area);
    let height = wrapped_height(&lines, column.width).min(column.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, middle);
}

pub fn render_hero(theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("RELAI", theme.accent_icon(Accent::Cyan)),
            Span::styled("  ·  ", theme.faint()),
            Span::styled("X402 PROTOCOL", theme.faint()),
        ]),
        Line::default(),
    ];

    let wordmark = wordmark_lines();
    let wordmark_width = wordmark.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if !wordmark.is_empty() && (wordmark_width as u16) < area.width {
        lines.extend(gradient_figlet(wordmark, theme));
        lines.push(Line::default());
    }

    lines.push(product_heading(theme));
    lines.push(theme.gradient_bar(24));
    lines.push(Line::default());
    lines.push(Line::styled(
        "The instant micropayment layer for APIs. No subscriptions, no middlemen, \
         just pay per call for every request.",
        theme.muted(),
    ));

    render_centered(lines, area, f);
}

pub fn render_closing(theme: &Theme, area: Rect, f: &mut Frame) {
    let lines = vec![
        product_heading(theme),
        Line::default(),
        Line::styled(
            "Let's make every API call a revenue event. Reach out to talk about integrating \
             RelAI and the x402 protocol into your stack.",
            theme.muted(),
        ),
        Line::default(),
        Line::default(),
        Line::from(vec![
            Span::styled("◎ ", theme.accent_icon(Accent::Cyan)),
            Span::styled("relai.fi", theme.muted()),
            Span::styled("   │   ", theme.faint()),
            Span::styled("X ", theme.text()),
            Span::styled("@relayaisolana", theme.muted()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("✉ ", theme.text()),
            Span::styled("hello@relai.fi", theme.muted()),
        ]),
    ];

    render_centered(lines, area, f);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_figlet_pads_rows_to_equal_width() {
        let theme = Theme::default();
        let rows = vec!["abc".to_string(), "a".to_string()];
        let lines = gradient_figlet(&rows, &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width(), 3);
        assert_eq!(lines[1].width(), 3);
    }

    #[test]
    fn test_product_heading_text() {
        let theme = Theme::default();
        let heading = product_heading(&theme);
        let text: String = heading.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "RelAI Micropayments");
    }
}
