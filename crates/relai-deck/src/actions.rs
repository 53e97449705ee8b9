use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Actions represent all possible state changes in the application.
/// Actions are prefixed by scope to indicate which part of the app they affect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// ## Global actions (raw input and lifecycle)
    GlobalKeyPressed(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    GlobalMouseClicked { column: u16, row: u16 },
    /// Terminal size changed (or was measured at startup)
    GlobalViewportResized(Rect),
    /// Close the help overlay, or quit when nothing is open
    GlobalClose,
    GlobalQuit,

    /// Periodic tick for transition frames
    Tick,

    /// ## Slide navigation (semantic)
    SlideNext,
    SlidePrevious,
    SlideFirst,
    SlideLast,
    /// Jump to a 0-based slide index
    SlideJumpTo(usize),

    /// ## Help overlay
    HelpToggle,
}
