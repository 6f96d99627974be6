//! Document backed by a saved HTML snapshot of a watch page.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{ActivationError, Document};

/// Errors that can occur while loading a page snapshot.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read page: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid link selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Handle to an element of an [`HtmlPage`]: its position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A parsed HTML snapshot.
///
/// A snapshot cannot be clicked, so [`Document::activate`] always reports
/// [`ActivationError::NotSupported`]. Followed addresses are recorded and can
/// be read back with [`HtmlPage::followed`].
pub struct HtmlPage {
    html: Html,
    link_selector: Selector,
    base_url: Option<Url>,
    followed: RefCell<Vec<String>>,
}

impl HtmlPage {
    /// Parse a page from markup, treating elements matching `link_selector` as links.
    pub fn parse(markup: &str, link_selector: &str) -> Result<Self, PageError> {
        let link_selector =
            Selector::parse(link_selector).map_err(|e| PageError::InvalidSelector {
                selector: link_selector.to_string(),
                message: format!("{:?}", e),
            })?;

        Ok(Self {
            html: Html::parse_document(markup),
            link_selector,
            base_url: None,
            followed: RefCell::new(Vec::new()),
        })
    }

    /// Read and parse a page from disk.
    pub fn load(path: &Path, link_selector: &str) -> Result<Self, PageError> {
        if !path.exists() {
            return Err(PageError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let markup = fs::read_to_string(path)?;
        Self::parse(&markup, link_selector)
    }

    /// Resolve link addresses against `base`, the way a browser resolves `href`.
    ///
    /// # Arguments
    /// * `base` - Absolute URL of the page, e.g. `https://www.youtube.com/watch?v=abc`
    ///
    /// # Returns
    /// The page, or [`PageError::InvalidBaseUrl`] if `base` is not an absolute URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, PageError> {
        let url = Url::parse(base).map_err(|source| PageError::InvalidBaseUrl {
            url: base.to_string(),
            source,
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Addresses passed to [`Document::follow`], oldest first.
    pub fn followed(&self) -> Vec<String> {
        self.followed.borrow().clone()
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.elements().nth(id.0)
    }

    fn resolve(&self, href: &str) -> String {
        let Some(base) = &self.base_url else {
            return href.to_string();
        };
        match base.join(href) {
            Ok(url) => url.into(),
            Err(e) => {
                tracing::debug!("Keeping unresolvable href {:?}: {}", href, e);
                href.to_string()
            }
        }
    }
}

impl Document for HtmlPage {
    type Element = ElementId;

    fn query(&self, selector: &str) -> Option<ElementId> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::debug!("Ignoring invalid selector {:?}: {:?}", selector, e);
                return None;
            }
        };
        self.elements()
            .position(|element| selector.matches(&element))
            .map(ElementId)
    }

    fn links_within(&self, container: &ElementId) -> Vec<ElementId> {
        let Some(container) = self.element(*container) else {
            return Vec::new();
        };
        let container_id = container.id();

        self.elements()
            .enumerate()
            .filter(|(_, element)| {
                self.link_selector.matches(element)
                    && element.ancestors().any(|node| node.id() == container_id)
            })
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn all_links(&self) -> Vec<ElementId> {
        self.elements()
            .enumerate()
            .filter(|(_, element)| self.link_selector.matches(element))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn text(&self, element: &ElementId) -> String {
        self.element(*element)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    fn address(&self, element: &ElementId) -> Option<String> {
        let href = self.element(*element)?.value().attr("href")?;
        Some(self.resolve(href))
    }

    fn activate(&self, _element: &ElementId) -> Result<(), ActivationError> {
        Err(ActivationError::NotSupported)
    }

    fn follow(&self, address: &str) -> Result<(), ActivationError> {
        self.followed.borrow_mut().push(address.to_string());
        Ok(())
    }
}
