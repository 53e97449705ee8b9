use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

mod actions;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod slides;
mod state;
mod store;
mod terminal;
mod view_models;
mod views;

use actions::Action;
use deck_config::AppConfig;
use middleware::{keyboard::KeyboardMiddleware, logging::LoggingMiddleware, mouse::MouseMiddleware};
use state::AppState;
use store::Store;
use terminal::{DeckTerminal, TerminalSession};

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting relai-deck, logging to {}", log_file.display());

    let config = AppConfig::load();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mouse = config.mouse;

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(config)?);

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(MouseMiddleware::new()));

    let mut session = TerminalSession::start(mouse)?;
    let result = run_app(session.terminal(), &mut store, tick_rate);
    drop(session);

    if let Err(e) = &result {
        log::error!("Exiting with error: {:#}", e);
    } else {
        log::info!("Exiting relai-deck");
    }
    result
}

fn run_app(terminal: &mut DeckTerminal, store: &mut Store, tick_rate: Duration) -> Result<()> {
    loop {
        let completed = terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Mouse hit-testing needs the area that was actually drawn
        let area = completed.area;
        if area != store.state().viewport {
            store.dispatch(Action::GlobalViewportResized(area));
        }

        if !store.state().running {
            break;
        }

        if event::poll(tick_rate)? {
            if let Some(action) = translate_event(event::read()?) {
                store.dispatch(action);
            }
        } else if store.state().deck.transition.is_some() {
            store.dispatch(Action::Tick);
        }
    }

    Ok(())
}

/// Map a terminal event to the raw action it stands for
fn translate_event(event: Event) -> Option<Action> {
    match event {
        // Only process key press events (ignore key release)
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::GlobalKeyPressed(key)),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Action::GlobalMouseClicked { column, row }),
        Event::Resize(width, height) => {
            Some(Action::GlobalViewportResized(Rect::new(0, 0, width, height)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_translate_key_press_only() {
        let press = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };

        assert_eq!(
            translate_event(Event::Key(press)),
            Some(Action::GlobalKeyPressed(press))
        );
        assert_eq!(translate_event(Event::Key(release)), None);
    }

    #[test]
    fn test_translate_left_click_and_resize() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };

        assert_eq!(
            translate_event(Event::Mouse(click)),
            Some(Action::GlobalMouseClicked { column: 12, row: 3 })
        );
        assert_eq!(translate_event(Event::Mouse(right_click)), None);
        assert_eq!(
            translate_event(Event::Resize(100, 30)),
            Some(Action::GlobalViewportResized(Rect::new(0, 0, 100, 30)))
        );
    }
}
