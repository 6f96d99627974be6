//! Next/prev command handlers

use std::process::ExitCode;

use anyhow::Result;

use chapnav::chapters::{ChapterNavigator, Jump, JumpAction};
use chapnav::cli::NavigateArgs;
use chapnav::playback::SimulatedPlayer;
use chapnav::timestamp::format_seconds;
use chapnav::Direction;

/// Move one chapter in `direction`.
///
/// Exits 0 when a transition was attempted and 1 when there was nowhere to go.
#[cfg(not(tarpaulin_include))]
pub fn handle(direction: Direction, args: &NavigateArgs) -> Result<ExitCode> {
    let (config, page) = super::load(&args.page)?;
    let mut player = args.at.map(SimulatedPlayer::playing_at);

    let mut navigator = ChapterNavigator::new(&page, &config);
    if let Some(player) = player.as_mut() {
        navigator = navigator.with_player(player);
    }

    match navigator.handle_detailed(direction) {
        Some(jump) => {
            println!("{}", describe(&jump));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No {} chapter", direction);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// One-line summary of a jump.
pub fn describe(jump: &Jump) -> String {
    let chapter = format!("chapter {} ({})", jump.label, format_seconds(jump.seconds));
    match &jump.action {
        JumpAction::Seek { position } => format!("Seek to {} at {:.2}s", chapter, position),
        JumpAction::Activated => format!("Activated {}", chapter),
        JumpAction::Followed { address } => format!("Follow {}: {}", chapter, address),
        JumpAction::Failed => format!("Could not reach {}", chapter),
    }
}
