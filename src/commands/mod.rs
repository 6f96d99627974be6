//! Subcommand handlers

pub mod config;
pub mod navigate;
pub mod parse;
pub mod press;
pub mod scan;

use std::path::Path;

use anyhow::{Context, Result};

use chapnav::document::HtmlPage;
use chapnav::Config;

/// Load the user config and the page snapshot it describes how to read.
pub fn load(page: &Path) -> Result<(Config, HtmlPage)> {
    let config = Config::load().context("Failed to load config")?;
    let mut html = HtmlPage::load(page, &config.page.link_selector)?;
    if let Some(base) = &config.page.base_url {
        html = html.with_base_url(base)?;
    }
    Ok((config, html))
}
