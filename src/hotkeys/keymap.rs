//! Key bindings and the focus/modifier guard.

use serde::{Deserialize, Serialize};

use crate::chapters::Direction;

/// A key press as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key identifier, e.g. `n` or `ArrowRight`
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// A press of `key` with no modifiers held.
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            alt: false,
            meta: false,
            shift: false,
        }
    }

    /// Whether a shortcut modifier (ctrl, alt, meta) is held.
    ///
    /// Shift is not one: it is already part of `key` (`N` vs `n`).
    pub fn has_shortcut_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Kind of element holding keyboard focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FocusTarget {
    /// Nothing in particular focused (the page body)
    #[default]
    Body,
    /// A single-line text input
    Input,
    /// A multi-line text area
    #[value(name = "textarea")]
    TextArea,
    /// An editable rich-text element
    #[value(name = "contenteditable")]
    ContentEditable,
    /// Any other focused element (buttons, the player, links)
    Other,
}

impl FocusTarget {
    /// Whether keys typed now are text entry rather than shortcuts.
    pub fn is_text_entry(self) -> bool {
        matches!(
            self,
            FocusTarget::Input | FocusTarget::TextArea | FocusTarget::ContentEditable
        )
    }
}

/// Errors in a key binding configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    #[error("key binding for '{direction}' is empty")]
    Empty { direction: Direction },

    #[error("'{key}' is bound to both next and prev")]
    Conflict { key: String },
}

/// Keys bound to each direction. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub next: String,
    pub prev: String,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            next: "n".to_string(),
            prev: "p".to_string(),
        }
    }
}

impl Keymap {
    /// Reject bindings that could never work as intended.
    pub fn validate(&self) -> Result<(), KeymapError> {
        if self.next.is_empty() {
            return Err(KeymapError::Empty {
                direction: Direction::Next,
            });
        }
        if self.prev.is_empty() {
            return Err(KeymapError::Empty {
                direction: Direction::Prev,
            });
        }
        if self.next == self.prev {
            return Err(KeymapError::Conflict {
                key: self.next.clone(),
            });
        }
        Ok(())
    }

    /// Direction requested by `event`, if it is a chapter hotkey press.
    ///
    /// Presses with ctrl, alt or meta held belong to other shortcuts, and
    /// presses while a text field has focus are typing; both are ignored.
    pub fn direction_for(&self, event: &KeyEvent, focus: FocusTarget) -> Option<Direction> {
        if event.has_shortcut_modifier() || focus.is_text_entry() {
            return None;
        }
        super::direction_of(&event.key, self)
    }
}
