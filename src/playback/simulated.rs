//! In-memory playback engine.

use super::PlaybackEngine;

/// A player that only tracks position and pause state.
///
/// Used by the CLI when a position is given on the command line, and by
/// tests to observe seeks.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPlayer {
    position: f64,
    paused: bool,
    seeks: Vec<f64>,
}

impl SimulatedPlayer {
    /// Create a paused player at `position` seconds.
    pub fn paused_at(position: f64) -> Self {
        Self {
            position,
            paused: true,
            seeks: Vec::new(),
        }
    }

    /// Create a playing player at `position` seconds.
    pub fn playing_at(position: f64) -> Self {
        Self {
            paused: false,
            ..Self::paused_at(position)
        }
    }

    /// Positions passed to [`PlaybackEngine::seek`], oldest first.
    pub fn seeks(&self) -> &[f64] {
        &self.seeks
    }
}

impl PlaybackEngine for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, seconds: f64) {
        self.position = seconds;
        self.seeks.push(seconds);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn resume(&mut self) {
        self.paused = false;
    }
}
