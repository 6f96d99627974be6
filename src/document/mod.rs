//! Read-only query surface over a page.
//!
//! Chapter markers live in the page as link labels. The navigator never
//! touches a concrete DOM; it talks to a [`Document`], which a host
//! implements for its environment.
//!
//! - `html`: [`HtmlPage`], a document over a saved HTML snapshot
//! - `memory`: [`MemoryDocument`], an in-memory document for tests and embedding

mod html;
pub mod memory;

pub use html::{ElementId, HtmlPage, PageError};
pub use memory::MemoryDocument;

use std::hash::Hash;

/// A page that can be searched for chapter links and acted upon.
///
/// Elements are opaque handles. Two handles compare equal exactly when they
/// refer to the same element, which is what candidate deduplication relies on.
pub trait Document {
    /// Handle to one element of the page.
    type Element: Clone + Eq + Hash;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All link-like elements contained in `element`, in document order.
    fn links_within(&self, element: &Self::Element) -> Vec<Self::Element>;

    /// All link-like elements of the page, in document order.
    fn all_links(&self) -> Vec<Self::Element>;

    /// Text content of `element`, untrimmed.
    fn text(&self, element: &Self::Element) -> String;

    /// Navigable address of a link, if it has one.
    fn address(&self, element: &Self::Element) -> Option<String>;

    /// Simulate a user click on `element`.
    fn activate(&self, element: &Self::Element) -> Result<(), ActivationError>;

    /// Navigate the page to `address`.
    fn follow(&self, address: &str) -> Result<(), ActivationError>;
}

/// Error from acting on a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    /// The document cannot perform this action at all
    #[error("action not supported by this document")]
    NotSupported,
    /// The action was attempted and failed
    #[error("action failed: {0}")]
    Failed(String),
}
