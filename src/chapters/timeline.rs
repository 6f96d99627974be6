//! Chapter entries and the ordered timeline built from them.

use std::fmt;
use std::str::FromStr;

/// Requested navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move to the first chapter strictly after the current position
    Next,
    /// Move to the last chapter strictly before the current position
    Prev,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Prev => write!(f, "prev"),
        }
    }
}

/// Error for a string that names no direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}' (expected 'next' or 'prev')")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Direction::Next),
            "prev" | "previous" => Ok(Direction::Prev),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Where a chapter leads when it cannot be reached by seeking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTarget<E> {
    /// The link element, for direct activation
    pub element: E,
    /// The link's navigable address, for fallback navigation
    pub address: Option<String>,
}

/// One discovered chapter marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry<E> {
    /// The matched label text, e.g. `3:45`
    pub label: String,
    /// Offset from the start of the video
    pub seconds: u64,
    pub target: ChapterTarget<E>,
}

/// Chapters ordered by strictly increasing `seconds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<E> {
    entries: Vec<ChapterEntry<E>>,
}

impl<E> Timeline<E> {
    /// Sort entries by offset and keep one entry per distinct offset.
    ///
    /// The sort is stable, so among entries sharing an offset the one that
    /// came first in `entries` is kept.
    pub fn from_entries(mut entries: Vec<ChapterEntry<E>>) -> Self {
        entries.sort_by_key(|entry| entry.seconds);
        entries.dedup_by_key(|entry| entry.seconds);
        Self { entries }
    }

    pub fn entries(&self) -> &[ChapterEntry<E>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First chapter with an offset strictly greater than `current`.
    pub fn next_after(&self, current: u64) -> Option<&ChapterEntry<E>> {
        self.entries.iter().find(|entry| entry.seconds > current)
    }

    /// Last chapter with an offset strictly less than `current`.
    pub fn prev_before(&self, current: u64) -> Option<&ChapterEntry<E>> {
        self.entries
            .iter()
            .take_while(|entry| entry.seconds < current)
            .last()
    }

    /// Chapter to move to from `current` in `direction`.
    pub fn target(&self, direction: Direction, current: u64) -> Option<&ChapterEntry<E>> {
        match direction {
            Direction::Next => self.next_after(current),
            Direction::Prev => self.prev_before(current),
        }
    }
}
