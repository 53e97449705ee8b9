pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Slides
        KeyBinding::new("right", "→", SlideNext),
        KeyBinding::new("pagedown", "PgDn", SlideNext),
        KeyBinding::new("l", "l", SlideNext),
        KeyBinding::new("space", "Space", SlideNext),
        KeyBinding::new("left", "←", SlidePrevious),
        KeyBinding::new("pageup", "PgUp", SlidePrevious),
        KeyBinding::new("h", "h", SlidePrevious),
        KeyBinding::new("home", "Home", SlideFirst),
        KeyBinding::new("g g", "gg", SlideFirst),
        KeyBinding::new("end", "End", SlideLast),
        KeyBinding::new("G", "G", SlideLast),
        // Help
        KeyBinding::new("?", "?", HelpToggle),
        // General
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("q", "q", GlobalQuit),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_binding_parses() {
        assert_eq!(default_keymap().bindings().count(), 15);
    }

    #[test]
    fn test_arrow_and_page_keys_navigate() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::SlideNext),
            Some("→/PgDn/l/Space".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::SlidePrevious),
            Some("←/PgUp/h".to_string())
        );
    }
}
