//! Cover, Problem, Vision and How-it-works slides

use deck_theme::{Accent, Theme};
use ratatui::{layout::Rect, Frame};

use super::shell::{render_cards, render_shell, Card, Eyebrow, SlideShell};

const COVER: SlideShell = SlideShell {
    eyebrow: Eyebrow::Brand,
    title: "Monetize your APIs with instant micropayments",
    subtitle: "RelAI turns every API request into a revenue event with on chain micropayments. \
               No subscriptions, no middlemen, just instant settlement for every call.",
    show_logo: true,
};

const COVER_CARDS: [Card; 3] = [
    Card {
        icon: "¤",
        accent: Accent::Emerald,
        title: "Pay per call",
        body: "Pay from one cent per request with near real time settlement instead of monthly invoices.",
    },
    Card {
        icon: "◎",
        accent: Accent::Cyan,
        title: "Multi-chain support",
        body: "High throughput and low fees across multiple networks make true micropayments finally practical.",
    },
    Card {
        icon: "▦",
        accent: Accent::Fuchsia,
        title: "Built for AI and data",
        body: "Designed for AI and data heavy workloads where every call matters.",
    },
];

const PROBLEM: SlideShell = SlideShell {
    eyebrow: Eyebrow::Section("Problem"),
    title: "API monetization is stuck in the subscription era",
    subtitle: "Developers love APIs, but paying and getting paid for them is still slow, manual and gated.",
    show_logo: true,
};

const PROBLEM_CARDS: [Card; 4] = [
    Card {
        icon: "⊡",
        accent: Accent::Cyan,
        title: "Subscription lock in",
        body: "Heavy subscriptions and enterprise contracts even for small or experimental use cases.",
    },
    Card {
        icon: "△",
        accent: Accent::Amber,
        title: "Friction everywhere",
        body: "Long onboarding with KYC, invoices, regional restrictions and minimum commitments.",
    },
    Card {
        icon: "⊘",
        accent: Accent::Rose,
        title: "No per call primitive",
        body: "There is no native way to charge per request at internet scale using existing payment rails.",
    },
    Card {
        icon: "☰",
        accent: Accent::Cyan,
        title: "Long tail left out",
        body: "Indie developers and niche APIs struggle to monetize at all, despite real usage.",
    },
];

const VISION: SlideShell = SlideShell {
    eyebrow: Eyebrow::Section("Vision"),
    title: "An API liquidity layer for the internet",
    subtitle: "Every API becomes a liquid, programmable revenue stream that any app, agent or protocol can tap into.",
    show_logo: true,
};

const VISION_CARDS: [Card; 4] = [
    Card {
        icon: "¤",
        accent: Accent::Emerald,
        title: "Every call is value",
        body: "Each API call carries a tiny on chain payment, turning usage directly into revenue.",
    },
    Card {
        icon: "⋈",
        accent: Accent::Cyan,
        title: "Shared liquidity layer",
        body: "APIs plug into a common liquidity layer instead of rebuilding billing and payments from scratch.",
    },
    Card {
        icon: "◉",
        accent: Accent::Fuchsia,
        title: "Native to agents and AI",
        body: "Agents and AI systems can consume APIs autonomously without manual billing flows.",
    },
    Card {
        icon: "≋",
        accent: Accent::Cyan,
        title: "Transparent and composable",
        body: "Pricing and usage are transparent, verifiable and easily composed across protocols.",
    },
];

const HOW_IT_WORKS: SlideShell = SlideShell {
    eyebrow: Eyebrow::Section("How it works"),
    title: "From HTTP 402 to on chain micropayments",
    subtitle: "RelAI wraps your existing API behind an x402 aware gateway that verifies payment \
               before forwarding the request.",
    show_logo: true,
};

const HOW_IT_WORKS_CARDS: [Card; 4] = [
    Card {
        icon: "⌘",
        accent: Accent::Cyan,
        title: "1. Publish your spec",
        body: "Upload your OpenAPI definition, set prices per endpoint and list your API on the RelAI marketplace.",
    },
    Card {
        icon: "⇄",
        accent: Accent::Cyan,
        title: "2. Call through x402",
        body: "Clients send normal HTTP requests that include a signed micropayment using the x402 protocol.",
    },
    Card {
        icon: "✓",
        accent: Accent::Emerald,
        title: "3. Verify and route",
        body: "RelAI verifies the payment on chain in a few hundred milliseconds and then forwards the request to your API.",
    },
    Card {
        icon: "ϟ",
        accent: Accent::Amber,
        title: "4. Instant settlement",
        body: "Revenue is streamed directly to your wallet with transparent, on chain accounting for every call.",
    },
];

pub fn render_cover(theme: &Theme, area: Rect, f: &mut Frame) {
    let body = render_shell(&COVER, theme, area, f);
    render_cards(&COVER_CARDS, 3, theme, body, f);
}

pub fn render_problem(theme: &Theme, area: Rect, f: &mut Frame) {
    let body = render_shell(&PROBLEM, theme, area, f);
    render_cards(&PROBLEM_CARDS, 2, theme, body, f);
}

pub fn render_vision(theme: &Theme, area: Rect, f: &mut Frame) {
    let body = render_shell(&VISION, theme, area, f);
    render_cards(&VISION_CARDS, 2, theme, body, f);
}

pub fn render_how_it_works(theme: &Theme, area: Rect, f: &mut Frame) {
    let body = render_shell(&HOW_IT_WORKS, theme, area, f);
    render_cards(&HOW_IT_WORKS_CARDS, 2, theme, body, f);
}
