//! Parse command handler

use std::process::ExitCode;

use chapnav::timestamp;

/// Print the seconds a timestamp stands for.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str) -> ExitCode {
    match timestamp::parse_seconds(text.trim()) {
        Some(seconds) => {
            println!("{}", seconds);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Not a timestamp: {}", text);
            ExitCode::FAILURE
        }
    }
}
