//! chapnav CLI entry point

mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use chapnav::cli::{Cli, Commands, ConfigCommands};
use chapnav::{logging, Direction};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Scan { page, json } => commands::scan::handle(&page, json),
        Commands::Next(args) => commands::navigate::handle(Direction::Next, &args),
        Commands::Prev(args) => commands::navigate::handle(Direction::Prev, &args),
        Commands::Press(args) => commands::press::handle(&args),
        Commands::Parse { timestamp } => Ok(commands::parse::handle(&timestamp)),
        Commands::Config(cmd) => {
            match cmd {
                ConfigCommands::Show => commands::config::handle_show()?,
                ConfigCommands::Path => commands::config::handle_path()?,
                ConfigCommands::Init => commands::config::handle_init()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "chapnav", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
