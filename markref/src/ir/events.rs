//! Defines the flat event stream representation of a markup document.

use crate::ir::node::Node;

/// Represents a single event in the markup stream.
///
/// Streams are expected to be balanced (every `Open` has a matching `Close`),
/// but nothing downstream checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(Node),
    Text(Node),
    Close(Node),
}

impl Event {
    /// Shorthand for `Event::Open(Node::element(tag))`.
    pub fn open(tag: &str) -> Self {
        Event::Open(Node::element(tag))
    }

    /// Shorthand for `Event::Close(Node::element(tag))`.
    pub fn close(tag: &str) -> Self {
        Event::Close(Node::element(tag))
    }

    /// Shorthand for a text event with no owning tag.
    pub fn text(value: &str) -> Self {
        Event::Text(Node::text_node(value))
    }

    pub fn node(&self) -> &Node {
        match self {
            Event::Open(node) | Event::Text(node) | Event::Close(node) => node,
        }
    }

    /// The normalised tag name used for exclusion checks.
    pub fn tag(&self) -> &str {
        self.node().tag()
    }
}
