//! Slide content
//!
//! The deck is a fixed list of seven slides. Each descriptor carries a
//! `SlideRenderer` that draws the slide body into the area it is given.

use deck_navigator::{NavigationError, SlideDeck, SlideDescriptor};
use deck_theme::Theme;
use ratatui::{layout::Rect, Frame};

mod bookends;
mod features;
mod roadmap;
mod shell;

/// Draws one slide body
#[derive(Clone, Copy)]
pub struct SlideRenderer(fn(&Theme, Rect, &mut Frame));

impl SlideRenderer {
    pub fn render(&self, theme: &Theme, area: Rect, f: &mut Frame) {
        (self.0)(theme, area, f)
    }
}

impl std::fmt::Debug for SlideRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SlideRenderer")
    }
}

/// Build the RelAI pitch deck in presentation order
pub fn pitch_deck() -> Result<SlideDeck<SlideRenderer>, NavigationError> {
    let renderers: [(&str, fn(&Theme, Rect, &mut Frame)); 7] = [
        ("Intro", bookends::render_hero),
        ("Cover", features::render_cover),
        ("Problem", features::render_problem),
        ("Vision", features::render_vision),
        ("How it works", features::render_how_it_works),
        ("Roadmap", roadmap::render_roadmap),
        ("Closing", bookends::render_closing),
    ];

    let slides = renderers
        .into_iter()
        .enumerate()
        .map(|(id, (label, render))| SlideDescriptor::new(id, label, SlideRenderer(render)))
        .collect();

    SlideDeck::new(slides)
}
