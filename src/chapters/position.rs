//! Current playback position lookup.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::playback::PlaybackEngine;
use crate::timestamp;

/// Where to read the position when no playback engine is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Selector of the element showing the current time, e.g. `1:05`
    pub time_display: String,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            time_display: ".ytp-time-current".to_string(),
        }
    }
}

/// Resolves the current position in whole seconds.
///
/// The engine's reading wins when there is an engine. Otherwise the time
/// display is parsed, and a missing or unreadable display counts as 0.
pub struct PositionResolver<'a, D: Document> {
    document: &'a D,
    player: Option<&'a dyn PlaybackEngine>,
    config: &'a PositionConfig,
}

impl<'a, D: Document> PositionResolver<'a, D> {
    pub fn new(
        document: &'a D,
        player: Option<&'a dyn PlaybackEngine>,
        config: &'a PositionConfig,
    ) -> Self {
        Self {
            document,
            player,
            config,
        }
    }

    pub fn resolve(&self) -> u64 {
        match self.player {
            Some(player) => floor_seconds(player.current_time()),
            None => self.from_display(),
        }
    }

    fn from_display(&self) -> u64 {
        let Some(display) = self.document.query(&self.config.time_display) else {
            tracing::debug!("No time display found, assuming position 0");
            return 0;
        };
        let text = self.document.text(&display);
        timestamp::parse_seconds(text.trim()).unwrap_or(0)
    }
}

/// Whole seconds of a fractional position. NaN and negative readings are 0,
/// positive infinity is past every chapter.
fn floor_seconds(position: f64) -> u64 {
    if position.is_nan() || position <= 0.0 {
        0
    } else if position.is_infinite() {
        u64::MAX
    } else {
        position.floor() as u64
    }
}
