//! Chapter navigation.
//!
//! # Architecture
//!
//! A navigation request runs through three stages, all rebuilt per call:
//! - `collector`: finds timestamp links and builds the [`Timeline`]
//! - `position`: reads the current playback position
//! - `navigator`: picks the target chapter and moves there
//!
//! Shared types (entries, timeline, direction) live in `timeline`.

mod collector;
mod navigator;
mod position;
mod timeline;

pub use collector::{ChapterCollector, CollectorConfig};
pub use navigator::{ChapterNavigator, Jump, JumpAction, NavigationConfig};
pub use position::{PositionConfig, PositionResolver};
pub use timeline::{ChapterEntry, ChapterTarget, Direction, ParseDirectionError, Timeline};
