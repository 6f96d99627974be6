//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

/// Directory holding the HTML page fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture file.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// A chapnav command isolated from the user's config and log settings.
///
/// The config path points at a file that does not exist, so defaults apply.
pub fn chapnav() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chapnav"));
    cmd.env("CHAPNAV_CONFIG", fixtures_dir().join("missing-config.toml"))
        .env_remove("CHAPNAV_LOG");
    cmd
}
