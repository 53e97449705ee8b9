use ratatui::{
    prelude::*,
    style::palette::tailwind,
};

/// Accent colour families used by slide cards and roadmap phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Emerald,
    Fuchsia,
    Amber,
    Rose,
}

/// Deck theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_card: Color,
    pub bg_control_bar: Color,

    // Text colors
    pub text_primary: Color,
    pub text_body: Color,
    pub text_muted: Color,
    pub text_faint: Color,

    // Brand gradient stops (left to right)
    pub gradient_start: Color,
    pub gradient_mid: Color,
    pub gradient_end: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_eyebrow: Color,
    pub accent_cyan: Color,
    pub accent_emerald: Color,
    pub accent_fuchsia: Color,
    pub accent_amber: Color,
    pub accent_rose: Color,

    // Borders
    pub border: Color,

    // Progress indicator
    pub indicator_active: Color,
    pub indicator_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_card: tailwind::SLATE.c900,
            bg_control_bar: Color::Rgb(5, 8, 39),

            // Text
            text_primary: tailwind::SLATE.c50,
            text_body: tailwind::ZINC.c300,
            text_muted: tailwind::ZINC.c400,
            text_faint: tailwind::ZINC.c500,

            // Gradient
            gradient_start: tailwind::FUCHSIA.c400,
            gradient_mid: tailwind::PINK.c400,
            gradient_end: tailwind::SKY.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_eyebrow: tailwind::SKY.c300,
            accent_cyan: tailwind::CYAN.c300,
            accent_emerald: tailwind::EMERALD.c300,
            accent_fuchsia: tailwind::FUCHSIA.c300,
            accent_amber: tailwind::AMBER.c300,
            accent_rose: tailwind::ROSE.c300,

            // Borders
            border: tailwind::SLATE.c700,

            // Indicator
            indicator_active: tailwind::CYAN.c400,
            indicator_inactive: tailwind::ZINC.c700,
        }
    }

    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Cyan => self.accent_cyan,
            Accent::Emerald => self.accent_emerald,
            Accent::Fuchsia => self.accent_fuchsia,
            Accent::Amber => self.accent_amber,
            Accent::Rose => self.accent_rose,
        }
    }

    // Prebuilt styles for common use cases

    /// Full-screen background
    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary).fg(self.text_primary)
    }

    /// Style for card backgrounds
    pub fn card_background(&self) -> Style {
        Style::default().bg(self.bg_card)
    }

    /// Style for card borders
    pub fn card_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border tinted with an accent, used by roadmap phases
    pub fn accent_border(&self, accent: Accent) -> Style {
        Style::default().fg(self.accent(accent))
    }

    /// Style for icons and badges in an accent colour
    pub fn accent_icon(&self, accent: Accent) -> Style {
        Style::default()
            .fg(self.accent(accent))
            .add_modifier(Modifier::BOLD)
    }

    /// Small uppercase label above a slide title
    pub fn eyebrow(&self) -> Style {
        Style::default()
            .fg(self.accent_eyebrow)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for slide titles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for card headings
    pub fn card_title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "→" in the help overlay)
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_body)
    }

    /// Style for the deck name in the header
    pub fn header_title(&self) -> Style {
        Style::default()
            .fg(self.accent_cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for paragraph text inside cards
    pub fn body(&self) -> Style {
        Style::default().fg(self.text_body)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the faintest text (slide counter, separators)
    pub fn faint(&self) -> Style {
        Style::default().fg(self.text_faint)
    }

    /// Style for the footer control bar
    pub fn control_bar(&self) -> Style {
        Style::default().bg(self.bg_control_bar).fg(self.text_body)
    }

    /// Style for a chevron button, dimmed when disabled
    pub fn control_button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.text_body).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_faint).add_modifier(Modifier::DIM)
        }
    }

    /// Style for a progress indicator dot
    pub fn indicator(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.indicator_active)
        } else {
            Style::default().fg(self.indicator_inactive)
        }
    }

    /// Color at position `t` (0.0..=1.0) along the brand gradient
    pub fn gradient_at(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            lerp_color(self.gradient_start, self.gradient_mid, t * 2.0)
        } else {
            lerp_color(self.gradient_mid, self.gradient_end, (t - 0.5) * 2.0)
        }
    }

    /// Split `text` into one span per character, coloured along the brand gradient
    pub fn gradient_spans(&self, text: &str, modifier: Modifier) -> Vec<Span<'static>> {
        let count = text.chars().count();
        let denom = count.saturating_sub(1).max(1) as f32;
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let style = Style::default()
                    .fg(self.gradient_at(i as f32 / denom))
                    .add_modifier(modifier);
                Span::styled(c.to_string(), style)
            })
            .collect()
    }

    /// A short gradient underline bar, as drawn beneath section headings
    pub fn gradient_bar(&self, width: usize) -> Line<'static> {
        Line::from(self.gradient_spans(&"━".repeat(width), Modifier::empty()))
    }
}

/// Linear interpolation between two RGB colors; non-RGB colors snap to `a`
fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints_match_stops() {
        let theme = Theme::dark();
        assert_eq!(theme.gradient_at(0.0), theme.gradient_start);
        assert_eq!(theme.gradient_at(0.5), theme.gradient_mid);
        assert_eq!(theme.gradient_at(1.0), theme.gradient_end);
    }

    #[test]
    fn test_gradient_spans_one_per_char() {
        let theme = Theme::dark();
        let spans = theme.gradient_spans("x402", Modifier::BOLD);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].style.fg, Some(theme.gradient_start));
        assert_eq!(spans[3].style.fg, Some(theme.gradient_end));
    }

    #[test]
    fn test_gradient_single_char_does_not_divide_by_zero() {
        let theme = Theme::dark();
        let spans = theme.gradient_spans("R", Modifier::empty());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg, Some(theme.gradient_start));
    }

    #[test]
    fn test_lerp_non_rgb_snaps_to_first() {
        assert_eq!(lerp_color(Color::Red, Color::Rgb(1, 2, 3), 0.7), Color::Red);
    }
}
