//! A single markup node as seen by the sinks.

use std::collections::HashMap;

/// Immutable view of one markup event.
///
/// The tag name is trimmed and lower-cased on construction, so sinks can match
/// on literals like `"a"` or `"h2"` without normalising themselves. Attribute
/// lookups never fail: a missing attribute reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    tag: String,
    text: String,
    attributes: HashMap<String, String>,
}

impl Node {
    /// Create a node with a tag and a text value.
    pub fn new(tag: impl AsRef<str>, text: impl Into<String>) -> Self {
        Node {
            tag: tag.as_ref().trim().to_lowercase(),
            text: text.into(),
            attributes: HashMap::new(),
        }
    }

    /// Create an element node (no text value).
    pub fn element(tag: impl AsRef<str>) -> Self {
        Self::new(tag, String::new())
    }

    /// Create a text node with no owning tag.
    pub fn text_node(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    /// Add an attribute, replacing any previous value for the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The normalised tag name (empty for plain text nodes).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The text value (empty for element nodes).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value, or `""` when the attribute is absent.
    pub fn attr(&self, name: &str) -> &str {
        self.attributes.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
