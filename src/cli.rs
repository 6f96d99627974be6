//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::hotkeys::{FocusTarget, KeyEvent};
use crate::timestamp;

#[derive(Debug, Parser)]
#[command(
    name = "chapnav",
    version,
    about = "Jump between the timestamp chapters of a video page",
    long_about = "Jump between the timestamp chapters of a video page.\n\n\
        Chapters are the timestamp links (0:00, 1:05, 1:02:03) found in a page's \
        description and comments. chapnav reads a saved HTML snapshot of the page \
        and shows where the next/prev hotkeys would take you."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); CHAPNAV_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the chapters found in a saved page
    Scan {
        /// HTML snapshot of the watch page
        page: PathBuf,
        /// Print the chapters as JSON
        #[arg(long)]
        json: bool,
    },
    /// Jump to the next chapter
    Next(NavigateArgs),
    /// Jump to the previous chapter
    Prev(NavigateArgs),
    /// Offer a key press to the chapter hotkeys
    Press(PressArgs),
    /// Convert a timestamp such as 1:02:03 to seconds
    Parse {
        /// Timestamp to convert
        timestamp: String,
    },
    /// Show or create the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// HTML snapshot of the watch page
    pub page: PathBuf,
    /// Playback position (seconds or timestamp); seeks a simulated player
    /// instead of following chapter links
    #[arg(long, value_name = "TIME", value_parser = parse_position)]
    pub at: Option<f64>,
}

#[derive(Debug, Args)]
pub struct PressArgs {
    /// HTML snapshot of the watch page
    pub page: PathBuf,
    /// Key identifier, as a browser reports it (n, p, ArrowRight, ...)
    pub key: String,
    /// Hold ctrl
    #[arg(long)]
    pub ctrl: bool,
    /// Hold alt
    #[arg(long)]
    pub alt: bool,
    /// Hold meta
    #[arg(long)]
    pub meta: bool,
    /// Hold shift
    #[arg(long)]
    pub shift: bool,
    /// Element holding keyboard focus
    #[arg(long, value_enum, default_value_t = FocusTarget::Body)]
    pub focus: FocusTarget,
    /// Playback position (seconds or timestamp); seeks a simulated player
    #[arg(long, value_name = "TIME", value_parser = parse_position)]
    pub at: Option<f64>,
}

impl PressArgs {
    pub fn key_event(&self) -> KeyEvent {
        KeyEvent {
            key: self.key.clone(),
            ctrl: self.ctrl,
            alt: self.alt,
            meta: self.meta,
            shift: self.shift,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration if no config file exists
    Init,
}

/// Parse a playback position: fractional seconds (`65.5`) or a timestamp (`1:05`).
pub fn parse_position(value: &str) -> Result<f64, String> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<f64>() {
        if seconds.is_finite() && seconds >= 0.0 {
            return Ok(seconds);
        }
        return Err(format!("'{}' is not a valid position", value));
    }
    timestamp::parse_seconds(value)
        .map(|seconds| seconds as f64)
        .ok_or_else(|| format!("'{}' is neither seconds nor a timestamp", value))
}
