//! In-memory document for tests and embedding.
//!
//! Pages are assembled with a small builder: named containers holding
//! links, links outside any container, and an optional element with the
//! player's current-time text. Every activation and followed address is
//! recorded so callers can assert on side effects.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{ActivationError, Document};

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    text: String,
    address: Option<String>,
    is_link: bool,
}

/// A page held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    /// selector → element, first registration wins
    selectors: HashMap<String, NodeId>,
    /// container → links it contains, in insertion order
    children: HashMap<NodeId, Vec<NodeId>>,
    activation_fails: bool,
    activation_disabled: bool,
    activated: RefCell<Vec<NodeId>>,
    followed: RefCell<Vec<String>>,
}

impl MemoryDocument {
    /// Create an empty page where links can be activated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container reachable through `selector`.
    pub fn container(&mut self, selector: &str) -> NodeId {
        let id = self.push(Node {
            text: String::new(),
            address: None,
            is_link: false,
        });
        self.selectors.entry(selector.to_string()).or_insert(id);
        id
    }

    /// Add a link inside `container`.
    pub fn link_in(&mut self, container: NodeId, text: &str, address: Option<&str>) -> NodeId {
        let id = self.link(text, address);
        self.children.entry(container).or_default().push(id);
        id
    }

    /// Add a link that belongs to no container.
    pub fn link(&mut self, text: &str, address: Option<&str>) -> NodeId {
        self.push(Node {
            text: text.to_string(),
            address: address.map(str::to_string),
            is_link: true,
        })
    }

    /// Place an existing link in another container as well.
    pub fn also_in(&mut self, container: NodeId, link: NodeId) {
        self.children.entry(container).or_default().push(link);
    }

    /// Add a plain text element reachable through `selector`.
    pub fn text_element(&mut self, selector: &str, text: &str) -> NodeId {
        let id = self.push(Node {
            text: text.to_string(),
            address: None,
            is_link: false,
        });
        self.selectors.entry(selector.to_string()).or_insert(id);
        id
    }

    /// Make every activation fail, as if the click handler threw.
    pub fn fail_activation(&mut self) {
        self.activation_fails = true;
    }

    /// Make activation unavailable, as for a page that cannot be clicked.
    pub fn disable_activation(&mut self) {
        self.activation_disabled = true;
    }

    /// Elements activated so far, oldest first.
    pub fn activated(&self) -> Vec<NodeId> {
        self.activated.borrow().clone()
    }

    /// Addresses followed so far, oldest first.
    pub fn followed(&self) -> Vec<String> {
        self.followed.borrow().clone()
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.selectors.get(selector).copied()
    }

    fn links_within(&self, element: &NodeId) -> Vec<NodeId> {
        self.children.get(element).cloned().unwrap_or_default()
    }

    fn all_links(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_link)
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn text(&self, element: &NodeId) -> String {
        self.node(element)
            .map(|node| node.text.clone())
            .unwrap_or_default()
    }

    fn address(&self, element: &NodeId) -> Option<String> {
        self.node(element)?.address.clone()
    }

    fn activate(&self, element: &NodeId) -> Result<(), ActivationError> {
        if self.activation_disabled {
            return Err(ActivationError::NotSupported);
        }
        if self.activation_fails {
            return Err(ActivationError::Failed("click handler threw".to_string()));
        }
        self.activated.borrow_mut().push(*element);
        Ok(())
    }

    fn follow(&self, address: &str) -> Result<(), ActivationError> {
        self.followed.borrow_mut().push(address.to_string());
        Ok(())
    }
}
