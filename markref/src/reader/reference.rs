//! Footer references.

use serde::Serialize;
use std::fmt;

/// What a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Link,
    Image,
    #[serde(rename = "youtube")]
    YouTube,
    Vimeo,
    Unknown,
}

impl ReferenceKind {
    /// Only links and images can be pruned; embeds are always kept.
    pub fn is_prunable(self) -> bool {
        matches!(self, ReferenceKind::Link | ReferenceKind::Image)
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Link => "link",
            ReferenceKind::Image => "image",
            ReferenceKind::YouTube => "youtube",
            ReferenceKind::Vimeo => "vimeo",
            ReferenceKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One `  [id]: url` entry from the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub(crate) id: u32,
    pub(crate) url: String,
    pub(crate) kind: ReferenceKind,
    pub(crate) titles: Vec<String>,
}

impl Reference {
    pub(crate) fn new(id: u32, url: impl Into<String>, kind: ReferenceKind) -> Self {
        Reference {
            id,
            url: url.into(),
            kind,
            titles: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// Every citation text seen for this reference, duplicates included.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

/// Formats the reference as a footer line, without the trailing newline.
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  [{}]: {}", self.id, self.url)
    }
}
