//! Highscore name entry as a key-driven state machine.
//!
//! The box is fed one [`NameKey`] at a time by whatever owns the frame loop;
//! it never blocks and never draws.
//!
//! | Key         | `Editing` behaviour                                  |
//! |-------------|------------------------------------------------------|
//! | `Char(c)`   | appended if ASCII and fewer than 22 chars are held    |
//! | `Backspace` | drops the last char; no-op when empty                |
//! | `Enter`     | → `Submitted(buffer)`, or `"Anonymous"` when blank   |
//! | `Escape`    | → `Cancelled`                                        |
//!
//! Once submitted or cancelled, further keys are ignored.

use crate::constants::{ANONYMOUS_NAME, HIGHSCORE_NAME_MAX};
use bevy::prelude::*;

/// A discrete key event relevant to name entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKey {
    Char(char),
    Backspace,
    Enter,
    Escape,
}

const LETTER_KEYS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

impl NameKey {
    /// Translate a physical key press.  Letters are lower case unless `shift`
    /// is held; keys that cannot appear in a name map to `None`.
    pub fn from_key_code(key: KeyCode, shift: bool) -> Option<Self> {
        match key {
            KeyCode::Enter | KeyCode::NumpadEnter => return Some(NameKey::Enter),
            KeyCode::Escape => return Some(NameKey::Escape),
            KeyCode::Backspace => return Some(NameKey::Backspace),
            KeyCode::Space => return Some(NameKey::Char(' ')),
            KeyCode::Minus => return Some(NameKey::Char(if shift { '_' } else { '-' })),
            KeyCode::Period => return Some(NameKey::Char('.')),
            _ => {}
        }

        if let Some(i) = LETTER_KEYS.iter().position(|k| *k == key) {
            let c = char::from(b'a' + i as u8);
            return Some(NameKey::Char(if shift { c.to_ascii_uppercase() } else { c }));
        }
        DIGIT_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|i| NameKey::Char(char::from(b'0' + i as u8)))
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum NameEntry {
    Editing { buffer: String },
    Submitted(String),
    Cancelled,
}

impl Default for NameEntry {
    fn default() -> Self {
        NameEntry::Editing {
            buffer: String::new(),
        }
    }
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key.  Returns `true` if this key finished the entry.
    pub fn handle(&mut self, key: NameKey) -> bool {
        let NameEntry::Editing { buffer } = self else {
            return false;
        };

        match key {
            NameKey::Char(c) => {
                if c.is_ascii() && buffer.len() < HIGHSCORE_NAME_MAX {
                    buffer.push(c);
                }
                false
            }
            NameKey::Backspace => {
                buffer.pop();
                false
            }
            NameKey::Enter => {
                let name = if buffer.trim().is_empty() {
                    ANONYMOUS_NAME.to_string()
                } else {
                    std::mem::take(buffer)
                };
                *self = NameEntry::Submitted(name);
                true
            }
            NameKey::Escape => {
                *self = NameEntry::Cancelled;
                true
            }
        }
    }

    /// Text currently shown in the input box.
    pub fn display_text(&self) -> &str {
        match self {
            NameEntry::Editing { buffer } => buffer,
            NameEntry::Submitted(name) => name,
            NameEntry::Cancelled => ANONYMOUS_NAME,
        }
    }

    pub fn is_done(&self) -> bool {
        !matches!(self, NameEntry::Editing { .. })
    }

    /// The name to record, once entry has finished.
    pub fn resolved_name(&self) -> Option<&str> {
        match self {
            NameEntry::Editing { .. } => None,
            NameEntry::Submitted(name) => Some(name),
            NameEntry::Cancelled => Some(ANONYMOUS_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(entry: &mut NameEntry, text: &str) {
        for c in text.chars() {
            entry.handle(NameKey::Char(c));
        }
    }

    #[test]
    fn typing_then_enter_submits() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "Neil");
        assert_eq!(entry.display_text(), "Neil");
        assert!(entry.handle(NameKey::Enter));
        assert_eq!(entry.resolved_name(), Some("Neil"));
    }

    #[test]
    fn characters_past_the_limit_are_dropped() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(entry.display_text(), "abcdefghijklmnopqrstuv");
        assert_eq!(entry.display_text().len(), HIGHSCORE_NAME_MAX);
    }

    #[test]
    fn non_ascii_is_ignored() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "Jé✓n");
        assert_eq!(entry.display_text(), "Jn");
    }

    #[test]
    fn backspace_on_empty_is_a_no_op() {
        let mut entry = NameEntry::new();
        assert!(!entry.handle(NameKey::Backspace));
        assert_eq!(entry, NameEntry::new());

        type_str(&mut entry, "ab");
        entry.handle(NameKey::Backspace);
        assert_eq!(entry.display_text(), "a");
    }

    #[test]
    fn escape_substitutes_anonymous() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "Yuri");
        assert!(entry.handle(NameKey::Escape));
        assert_eq!(entry, NameEntry::Cancelled);
        assert_eq!(entry.resolved_name(), Some("Anonymous"));
    }

    #[test]
    fn blank_submission_is_anonymous() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "   ");
        entry.handle(NameKey::Enter);
        assert_eq!(entry.resolved_name(), Some("Anonymous"));
    }

    #[test]
    fn keys_after_completion_are_ignored() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "Sally");
        entry.handle(NameKey::Enter);
        assert!(!entry.handle(NameKey::Char('x')));
        assert!(!entry.handle(NameKey::Escape));
        assert_eq!(entry.resolved_name(), Some("Sally"));
        assert!(entry.is_done());
    }

    #[test]
    fn key_codes_map_to_name_keys() {
        assert_eq!(NameKey::from_key_code(KeyCode::KeyA, false), Some(NameKey::Char('a')));
        assert_eq!(NameKey::from_key_code(KeyCode::KeyZ, true), Some(NameKey::Char('Z')));
        assert_eq!(NameKey::from_key_code(KeyCode::Digit7, true), Some(NameKey::Char('7')));
        assert_eq!(NameKey::from_key_code(KeyCode::Space, false), Some(NameKey::Char(' ')));
        assert_eq!(NameKey::from_key_code(KeyCode::Enter, false), Some(NameKey::Enter));
        assert_eq!(NameKey::from_key_code(KeyCode::Escape, false), Some(NameKey::Escape));
        assert_eq!(NameKey::from_key_code(KeyCode::Backspace, false), Some(NameKey::Backspace));
        assert_eq!(NameKey::from_key_code(KeyCode::F1, false), None);
    }

    #[test]
    fn unfinished_entry_has_no_name() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "Val");
        assert!(!entry.is_done());
        assert_eq!(entry.resolved_name(), None);
    }
}
