//! chapnav - chapter hotkeys for video pages
//!
//! Finds the timestamp links a video page carries in its description and
//! comments, orders them into a chapter timeline, and moves playback to the
//! next or previous chapter on a key press.
//!
//! The host supplies the page as a [`document::Document`] and, when it has
//! one, a seekable [`playback::PlaybackEngine`]:
//!
//! ```
//! use chapnav::chapters::{ChapterNavigator, Direction};
//! use chapnav::document::MemoryDocument;
//! use chapnav::playback::SimulatedPlayer;
//! use chapnav::Config;
//!
//! let mut page = MemoryDocument::new();
//! let description = page.container("#description");
//! page.link_in(description, "0:10", None);
//! page.link_in(description, "1:00", None);
//!
//! let config = Config::default();
//! let mut player = SimulatedPlayer::playing_at(30.0);
//! let moved = ChapterNavigator::new(&page, &config)
//!     .with_player(&mut player)
//!     .handle(Direction::Next);
//!
//! assert!(moved);
//! assert_eq!(player.seeks(), &[60.01]);
//! ```

pub mod chapters;
pub mod cli;
pub mod config;
pub mod document;
pub mod hotkeys;
pub mod logging;
pub mod playback;
pub mod timestamp;

pub use chapters::{ChapterNavigator, Direction, Timeline};
pub use config::Config;
