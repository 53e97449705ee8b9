//! Roadmap slide: six phases laid out three per row

use deck_theme::{Accent, Theme};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::shell::{content_column, render_shell, Eyebrow, SlideShell};

const ROADMAP: SlideShell = SlideShell {
    eyebrow: Eyebrow::Label("Roadmap"),
    title: "Building the future of API monetization",
    subtitle: "Our path to becoming the default payment layer for APIs.",
    show_logo: false,
};

#[derive(Debug, Clone, Copy)]
struct Phase {
    badge: &'static str,
    status: &'static str,
    accent: Accent,
    heading: &'static str,
    items: &'static [&'static str],
}

const PHASES: [Phase; 6] = [
    Phase {
        badge: "P1",
        status: "Done",
        accent: Accent::Emerald,
        heading: "Launch & Foundation",
        items: &[
            "Token launch & DEX listing",
            "Live API payment utility (beta)",
            "First API integrations",
            "Strategic partnerships",
        ],
    },
    Phase {
        badge: "P2",
        status: "Done",
        accent: Accent::Cyan,
        heading: "Growth & Adoption",
        items: &[
            "SDK & dev tools release",
            "Multi-network support (Solana, Base, Polygon, SEI EVM, Peaq, Ethereum)",
            "Multi-facilitator support (Thirdweb, Dexter, PayAI)",
            "Open public API registration",
        ],
    },
    Phase {
        badge: "Q1",
        status: "2026",
        accent: Accent::Fuchsia,
        heading: "Strategic Expansion",
        items: &[
            "Tier-1 strategic partnerships (Solana & EVM)",
            "Staking & yield farming launch",
            "Native payment facilitator release",
            "Hackathon & grant applications",
            "ERC-8004 integration",
        ],
    },
    Phase {
        badge: "Q2",
        status: "2026",
        accent: Accent::Amber,
        heading: "Revenue & Growth",
        items: &[
            "Premium & Enterprise tiers revenue activation",
            "AI agent-to-agent payments",
            "Tier 2 CEX listing applications",
            "VC & funding program applications",
            "Coordinated Marketing Campaigns",
        ],
    },
    Phase {
        badge: "Q3",
        status: "2026",
        accent: Accent::Cyan,
        heading: "Ecosystem & Mobile",
        items: &[
            "Governance DAO live",
            "Ecosystem Fund for RelAI-based startups",
            "Mobile App development (Seeker, Android, iOS)",
        ],
    },
    Phase {
        badge: "Q4",
        status: "2026",
        accent: Accent::Emerald,
        heading: "Institutional Scale",
        items: &[
            "Start-up company establishment",
            "Enterprise off-chain payment integrations",
            "Major Tier-1 CEX listings & institutional onboarding",
        ],
    },
];

pub fn render_roadmap(theme: &Theme, area: Rect, f: &mut Frame) {
    let body = content_column(render_shell(&ROADMAP, theme, area, f));
    let columns = if body.width < 60 { 1 } else { 3 };
    let rows = PHASES.len().div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(body);
    for (row_index, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::horizontal(vec![Constraint::Fill(1); columns])
            .spacing(1)
            .split(row_area.inner(Margin::new(1, 0)));
        for (col_index, cell) in col_areas.iter().enumerate() {
            if let Some(phase) = PHASES.get(row_index * columns + col_index) {
                render_phase(phase, theme, *cell, f);
            }
        }
    }
}

fn render_phase(phase: &Phase, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent_border(phase.accent))
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}]", phase.badge), theme.accent_icon(phase.accent)),
            Span::raw(" "),
            Span::styled(phase.status, theme.accent_border(phase.accent)),
        ]),
        Line::styled(phase.heading, theme.card_title()),
    ];
    lines.extend(phase.items.iter().map(|item| {
        Line::from(vec![
            Span::styled("• ", theme.accent_icon(phase.accent)),
            Span::styled(*item, theme.body()),
        ])
    }));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}
