//! Key handling for chapter navigation.
//!
//! Maps key presses to a [`Direction`] and runs the navigator. Hosts call
//! [`dispatch`] from their key handler, ahead of the page's own handlers, and
//! suppress default handling when it returns [`KeyOutcome::Handled`].

mod keymap;

pub use keymap::{FocusTarget, KeyEvent, Keymap, KeymapError};

use crate::chapters::{ChapterNavigator, Direction};
use crate::document::Document;

/// Result of offering a key event to the chapter hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A chapter transition was attempted; suppress default handling
    Handled,
    /// Not ours, or nothing to move to; let the page handle the key
    PassThrough,
}

/// Offer `event` to the chapter hotkeys.
///
/// # Arguments
/// * `event` - The key press, with its modifier flags
/// * `focus` - What kind of element had focus when the key was pressed
/// * `keymap` - Keys bound to next and previous chapter
/// * `navigator` - Navigator the resolved direction is handed to
///
/// # Returns
/// [`KeyOutcome::Handled`] if a chapter transition was attempted
pub fn dispatch<D: Document>(
    event: &KeyEvent,
    focus: FocusTarget,
    keymap: &Keymap,
    navigator: &mut ChapterNavigator<'_, D>,
) -> KeyOutcome {
    let Some(direction) = keymap.direction_for(event, focus) else {
        return KeyOutcome::PassThrough;
    };
    if navigator.handle(direction) {
        KeyOutcome::Handled
    } else {
        KeyOutcome::PassThrough
    }
}

/// Direction bound to a key, ignoring modifiers and focus.
pub fn direction_of(key: &str, keymap: &Keymap) -> Option<Direction> {
    if key == keymap.next {
        Some(Direction::Next)
    } else if key == keymap.prev {
        Some(Direction::Prev)
    } else {
        None
    }
}
