//! Playback surface used for direct seeking.
//!
//! When the host page has a seekable media element, chapters are reached by
//! moving its position instead of clicking links.

mod simulated;

pub use simulated::SimulatedPlayer;

/// A seekable, playable media element.
pub trait PlaybackEngine {
    /// Current position in seconds (fractional).
    fn current_time(&self) -> f64;

    /// Move the position to `seconds`.
    fn seek(&mut self, seconds: f64);

    /// Whether playback is paused.
    fn is_paused(&self) -> bool;

    /// Resume playback.
    fn resume(&mut self);
}
