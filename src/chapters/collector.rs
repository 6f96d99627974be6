//! Chapter discovery from timestamp-labelled links.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::chapters::timeline::{ChapterEntry, ChapterTarget, Timeline};
use crate::document::Document;
use crate::timestamp;

/// Where to look for chapter links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Container selectors scanned first, in order. When none of them yields
    /// a link, every link of the page is scanned instead.
    pub containers: Vec<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            containers: [
                "#description",
                "ytd-watch-metadata",
                "ytd-video-secondary-info-renderer",
                "ytd-expander",
                "ytd-comments",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Builds a fresh [`Timeline`] from a document on every call.
pub struct ChapterCollector<'a, D: Document> {
    document: &'a D,
    config: &'a CollectorConfig,
}

impl<'a, D: Document> ChapterCollector<'a, D> {
    pub fn new(document: &'a D, config: &'a CollectorConfig) -> Self {
        Self { document, config }
    }

    /// Scan the document and return its chapters.
    ///
    /// Links whose trimmed text is not a timestamp are skipped.
    ///
    /// # Returns
    /// Chapters in ascending order with one entry per offset. An empty
    /// timeline means the page has no chapters (yet).
    pub fn collect(&self) -> Timeline<D::Element> {
        let candidates = self.candidates();

        let entries = candidates
            .into_iter()
            .filter_map(|element| self.entry_for(element))
            .collect::<Vec<_>>();
        let found = entries.len();

        let timeline = Timeline::from_entries(entries);
        tracing::debug!(
            "Collected {} chapters ({} timestamp links)",
            timeline.len(),
            found
        );
        timeline
    }

    /// Links from the configured containers, each element once, falling
    /// back to every link of the page.
    fn candidates(&self) -> Vec<D::Element> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for selector in &self.config.containers {
            let Some(container) = self.document.query(selector) else {
                continue;
            };
            for link in self.document.links_within(&container) {
                if seen.insert(link.clone()) {
                    candidates.push(link);
                }
            }
        }

        if candidates.is_empty() {
            tracing::debug!("No links in chapter containers, scanning the whole page");
            candidates = self.document.all_links();
        }

        candidates
    }

    fn entry_for(&self, element: D::Element) -> Option<ChapterEntry<D::Element>> {
        let text = self.document.text(&element);
        let label = text.trim();
        if !timestamp::is_timestamp(label) {
            return None;
        }
        let seconds = timestamp::parse_seconds(label)?;

        Some(ChapterEntry {
            label: label.to_string(),
            seconds,
            target: ChapterTarget {
                address: self.document.address(&element),
                element,
            },
        })
    }
}
