//! Press command handler

use std::process::ExitCode;

use anyhow::Result;

use chapnav::chapters::ChapterNavigator;
use chapnav::cli::PressArgs;
use chapnav::hotkeys::{self, KeyOutcome};
use chapnav::playback::SimulatedPlayer;

/// Offer a key press to the hotkeys, printing whether it was handled.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PressArgs) -> Result<ExitCode> {
    let (config, page) = super::load(&args.page)?;
    let mut player = args.at.map(SimulatedPlayer::playing_at);

    let mut navigator = ChapterNavigator::new(&page, &config);
    if let Some(player) = player.as_mut() {
        navigator = navigator.with_player(player);
    }

    let outcome = hotkeys::dispatch(&args.key_event(), args.focus, &config.keys, &mut navigator);
    match outcome {
        KeyOutcome::Handled => println!("handled"),
        KeyOutcome::PassThrough => println!("pass-through"),
    }
    Ok(ExitCode::SUCCESS)
}
