//! Next/previous chapter navigation.
//!
//! Each call collects the timeline and the current position afresh, picks
//! the target chapter and moves there. With a playback engine the move is a
//! seek; without one the chapter link is activated, and when that is not
//! possible its address is followed.

use serde::{Deserialize, Serialize};

use crate::chapters::collector::ChapterCollector;
use crate::chapters::position::PositionResolver;
use crate::chapters::timeline::{ChapterEntry, Direction};
use crate::config::Config;
use crate::document::Document;
use crate::playback::PlaybackEngine;

/// How a chapter is reached once chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Added to the chapter offset when seeking, so the landing position is
    /// not read back as still being before the chapter
    pub seek_offset: f64,
    /// Resume playback after seeking if it was paused
    pub resume_after_seek: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            seek_offset: 0.01,
            resume_after_seek: true,
        }
    }
}

/// What was done to reach a chapter.
#[derive(Debug, Clone, PartialEq)]
pub enum JumpAction {
    /// The playback engine was moved to `position`
    Seek { position: f64 },
    /// The chapter link was activated
    Activated,
    /// The chapter link's address was followed
    Followed { address: String },
    /// Activation failed and the address could not be followed
    Failed,
}

/// A transition to a chapter that was attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct Jump {
    pub label: String,
    pub seconds: u64,
    pub action: JumpAction,
}

/// Moves between chapters of one document.
pub struct ChapterNavigator<'a, D: Document> {
    document: &'a D,
    player: Option<&'a mut dyn PlaybackEngine>,
    config: &'a Config,
}

impl<'a, D: Document> ChapterNavigator<'a, D> {
    /// Navigator for a page without a seekable player.
    pub fn new(document: &'a D, config: &'a Config) -> Self {
        Self {
            document,
            player: None,
            config,
        }
    }

    /// Seek with `player` instead of activating links.
    pub fn with_player(mut self, player: &'a mut dyn PlaybackEngine) -> Self {
        self.player = Some(player);
        self
    }

    /// Move one chapter in `direction`.
    ///
    /// Returns true when a transition was attempted; the host should then
    /// suppress its default handling of the key.
    pub fn handle(&mut self, direction: Direction) -> bool {
        self.handle_detailed(direction).is_some()
    }

    /// Like [`handle`](Self::handle), reporting the chapter and what was done.
    ///
    /// # Arguments
    /// * `direction` - Whether to move to the next or the previous chapter
    ///
    /// # Returns
    /// The chapter moved to and the [`JumpAction`] taken, or `None` when the
    /// page has no chapters or none lies in `direction`.
    pub fn handle_detailed(&mut self, direction: Direction) -> Option<Jump> {
        let timeline = ChapterCollector::new(self.document, &self.config.collector).collect();
        if timeline.is_empty() {
            tracing::debug!("No chapters on the page, ignoring {}", direction);
            return None;
        }

        let current = PositionResolver::new(
            self.document,
            self.player.as_deref(),
            &self.config.position,
        )
        .resolve();

        let Some(entry) = timeline.target(direction, current) else {
            tracing::debug!("No {} chapter from {}s", direction, current);
            return None;
        };
        tracing::debug!(
            "Moving {} from {}s to chapter {} ({}s)",
            direction,
            current,
            entry.label,
            entry.seconds
        );

        let action = self.execute(entry);
        Some(Jump {
            label: entry.label.clone(),
            seconds: entry.seconds,
            action,
        })
    }

    fn execute(&mut self, entry: &ChapterEntry<D::Element>) -> JumpAction {
        if let Some(player) = self.player.as_deref_mut() {
            let settings = &self.config.navigation;
            let position = entry.seconds as f64 + settings.seek_offset;
            player.seek(position);
            if settings.resume_after_seek && player.is_paused() {
                player.resume();
            }
            return JumpAction::Seek { position };
        }

        match self.document.activate(&entry.target.element) {
            Ok(()) => return JumpAction::Activated,
            Err(e) => tracing::debug!("Activating chapter {} failed: {}", entry.label, e),
        }

        let Some(address) = entry.target.address.as_deref() else {
            tracing::warn!("Chapter {} has no address to follow", entry.label);
            return JumpAction::Failed;
        };
        match self.document.follow(address) {
            Ok(()) => JumpAction::Followed {
                address: address.to_string(),
            },
            Err(e) => {
                tracing::warn!("Following {} failed: {}", address, e);
                JumpAction::Failed
            }
        }
    }
}
