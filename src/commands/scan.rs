//! Scan command handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use chapnav::chapters::ChapterCollector;

/// One chapter as printed by `scan --json`.
#[derive(Debug, Serialize)]
struct ChapterRow<'a> {
    label: &'a str,
    seconds: u64,
    address: Option<&'a str>,
}

/// List the chapters of a page snapshot.
#[cfg(not(tarpaulin_include))]
pub fn handle(page: &Path, json: bool) -> Result<ExitCode> {
    let (config, html) = super::load(page)?;
    let timeline = ChapterCollector::new(&html, &config.collector).collect();

    let rows = timeline
        .entries()
        .iter()
        .map(|entry| ChapterRow {
            label: &entry.label,
            seconds: entry.seconds,
            address: entry.target.address.as_deref(),
        })
        .collect::<Vec<_>>();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    if rows.is_empty() {
        println!("No chapters found in {}", page.display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} chapters in {}", rows.len(), page.display());
    for row in &rows {
        println!(
            "  {:>8}  {:>6}s  {}",
            row.label,
            row.seconds,
            row.address.unwrap_or("-")
        );
    }
    Ok(ExitCode::SUCCESS)
}
