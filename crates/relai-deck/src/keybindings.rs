//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations, and two-key sequences such as "g g".
//!
//! # Design
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `ParsedKeyPattern`: The matchable form of a textual pattern (e.g., "ctrl+c", "g g")
//! - `Keymap`: Collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a sequence stays pending
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+c", "g g", "pagedown"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "g g", "PgDn"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g" -> press 'g', then 'g')
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "l", "?", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Special keys: "left", "right", "pageup", "pagedown", "home", "end", "space", "esc"
/// - Two-key sequence: "g g" (space-separated)
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        if parts.len() == 2 && parts[0].chars().count() == 1 && parts[1].chars().count() == 1 {
            let first = parts[0].chars().next()?;
            let second = parts[1].chars().next()?;
            return Some(ParsedKeyPattern::Sequence { first, second });
        }
        return None;
    }

    // Uppercase letters come with SHIFT modifier from the terminal
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// First key of a sequence that is waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_fresh(&self) -> bool {
        self.timestamp.elapsed() < SEQUENCE_TIMEOUT
    }
}

/// Result of matching one key event against the keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// The key (or the sequence it completed) maps to these commands
    Commands(Vec<CommandId>),
    /// The key starts a sequence; wait for the next key
    Pending(char),
    NoMatch,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap, dropping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparsable key binding '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Try to match a key event against the keymap
    ///
    /// A fresh pending key is tried as the start of a sequence first; if the
    /// sequence does not complete, the key is matched on its own.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        // Plain character press (no ctrl/alt), usable in sequences
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| p.is_fresh()), current_char) {
            let completed = self.bindings.iter().find_map(|(binding, pattern)| match pattern {
                ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current =>
                {
                    Some(binding.command)
                }
                _ => None,
            });
            if let Some(command) = completed {
                return KeyMatch::Commands(vec![command]);
            }
        }

        let mut matches = Vec::new();
        let mut starts_sequence = None;

        for (binding, pattern) in &self.bindings {
            match pattern {
                ParsedKeyPattern::Single { code, modifiers } => {
                    // BackTab arrives with or without SHIFT depending on the terminal
                    let key_matches = if *code == KeyCode::BackTab {
                        key.code == KeyCode::BackTab
                    } else if let KeyCode::Char(c) = code {
                        // Symbols like '?' may carry SHIFT depending on the layout
                        let pressed = if c.is_ascii_alphanumeric() || *c == ' ' {
                            key.modifiers
                        } else {
                            key.modifiers - KeyModifiers::SHIFT
                        };
                        key.code == *code && pressed == *modifiers
                    } else {
                        key.code == *code && key.modifiers == *modifiers
                    };
                    if key_matches {
                        matches.push(binding.command);
                    }
                }
                ParsedKeyPattern::Sequence { first, .. } => {
                    if starts_sequence.is_none() && current_char == Some(*first) {
                        starts_sequence = Some(*first);
                    }
                }
            }
        }

        if !matches.is_empty() {
            return KeyMatch::Commands(matches);
        }
        match starts_sequence {
            Some(c) => KeyMatch::Pending(c),
            None => KeyMatch::NoMatch,
        }
    }

    /// Get all bindings (for displaying in the help overlay)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Get a compact hint string for a command (e.g., "→/l" for SlideNext)
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("right", "→", SlideNext),
            KeyBinding::new("pagedown", "PgDn", SlideNext),
            KeyBinding::new("l", "l", SlideNext),
            KeyBinding::new("left", "←", SlidePrevious),
            KeyBinding::new("g g", "g g", SlideFirst),
            KeyBinding::new("G", "G", SlideLast),
            KeyBinding::new("q", "q", GlobalClose),
            KeyBinding::new("esc", "Esc", GlobalClose),
            KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
        ])
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_special_keys_match() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&press(KeyCode::PageDown, KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::SlideNext])
        );
        assert_eq!(
            keymap.match_key(&press(KeyCode::Left, KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::SlidePrevious])
        );
    }

    #[test]
    fn test_modifier_must_match_exactly() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL), None),
            KeyMatch::Commands(vec![CommandId::GlobalQuit])
        );
        assert_eq!(
            keymap.match_key(&press(KeyCode::Right, KeyModifiers::ALT), None),
            KeyMatch::NoMatch
        );
    }

    #[test]
    fn test_sequence_starts_and_completes() {
        let keymap = test_keymap();
        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(keymap.match_key(&g, None), KeyMatch::Pending('g'));

        let pending = PendingKey::new('g');
        assert_eq!(
            keymap.match_key(&g, Some(&pending)),
            KeyMatch::Commands(vec![CommandId::SlideFirst])
        );
    }

    #[test]
    fn test_stale_pending_key_is_ignored() {
        let keymap = test_keymap();
        let Some(timestamp) = Instant::now().checked_sub(SEQUENCE_TIMEOUT * 2) else {
            // Monotonic clock too close to its origin to build a stale instant
            return;
        };
        let stale = PendingKey { key: 'g', timestamp };

        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&g, Some(&stale)), KeyMatch::Pending('g'));
    }

    #[test]
    fn test_broken_sequence_falls_back_to_single_key() {
        let keymap = test_keymap();
        let pending = PendingKey::new('g');
        assert_eq!(
            keymap.match_key(&press(KeyCode::Char('l'), KeyModifiers::NONE), Some(&pending)),
            KeyMatch::Commands(vec![CommandId::SlideNext])
        );
    }

    #[test]
    fn test_uppercase_key_pattern_parsing() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT,
            })
        );
        assert_eq!(
            parse_key_pattern("g"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE,
            })
        );
    }

    #[test]
    fn test_invalid_patterns_are_rejected() {
        assert_eq!(parse_key_pattern("g g g"), None);
        assert_eq!(parse_key_pattern("ctrl+nosuchkey"), None);
        assert_eq!(
            parse_key_pattern("space"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers::NONE,
            })
        );
    }

    #[test]
    fn test_compact_hint_joins_and_deduplicates() {
        let keymap = Keymap::new(vec![
            KeyBinding::new("right", "→", CommandId::SlideNext),
            KeyBinding::new("l", "l", CommandId::SlideNext),
            KeyBinding::new("shift+right", "→", CommandId::SlideNext),
        ]);
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::SlideNext),
            Some("→/l".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::HelpToggle), None);
    }

    #[test]
    fn test_symbol_matches_with_or_without_shift() {
        let keymap = Keymap::new(vec![KeyBinding::new("?", "?", CommandId::HelpToggle)]);
        for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            assert_eq!(
                keymap.match_key(&press(KeyCode::Char('?'), modifiers), None),
                KeyMatch::Commands(vec![CommandId::HelpToggle])
            );
        }
    }
}
