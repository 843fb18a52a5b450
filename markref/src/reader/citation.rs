//! Citation syntax for one reference id.
//!
//! A citation is either a link `[title][id]` or an image `![alt][id]`. Titles
//! and alt text may contain backslash-escaped brackets but no bare ones. All
//! reading and rewriting of citations goes through this module so parse-time
//! cleaning and removal can never disagree about what a citation is.

use regex::Regex;

/// Compiled citation patterns for a single reference id.
#[derive(Debug, Clone)]
pub struct CitationPatterns {
    id: u32,
    image: Regex,
    link: Regex,
}

/// Result of stripping citations from a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    /// Alt texts of removed images, then titles of expanded links, in order.
    pub titles: Vec<String>,
}

const LABEL: &str = r"(?:[^\[\]]|\\\[|\\\])*";

impl CitationPatterns {
    pub fn new(id: u32) -> Self {
        let image = format!(r"!\[(?P<label>{LABEL})\]\[{id}\]");
        let link = format!(r"\[(?P<label>{LABEL})\]\[{id}\]");
        CitationPatterns {
            id,
            image: Regex::new(&image).expect("citation pattern is valid"),
            link: Regex::new(&link).expect("citation pattern is valid"),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// True if `text` contains an image citation of this id.
    pub fn has_image(&self, text: &str) -> bool {
        self.image.is_match(text)
    }

    /// True if `text` contains a link citation of this id with a non-blank
    /// title.
    pub fn has_titled_link(&self, text: &str) -> bool {
        self.link
            .captures_iter(text)
            .any(|caps| !caps["label"].trim().is_empty())
    }

    /// The literal empty-title link citation, `[][id]`.
    pub fn empty_link(&self) -> String {
        format!("[][{}]", self.id)
    }
}

/// Remove image citations and expand link citations to their titles.
///
/// Images go first so that the link pattern never sees the bracket pair
/// inside `![alt][id]`.
pub fn strip_citations(text: &str, patterns: &CitationPatterns) -> Stripped {
    let mut titles = Vec::new();

    let without_images = patterns.image.replace_all(text, |caps: &regex::Captures| {
        titles.push(caps["label"].to_string());
        String::new()
    });
    let expanded = patterns
        .link
        .replace_all(&without_images, |caps: &regex::Captures| {
            titles.push(caps["label"].to_string());
            caps["label"].to_string()
        });

    Stripped {
        text: expanded.into_owned(),
        titles,
    }
}

/// Drop every empty-title link citation of this id.
pub fn strip_empty_links(text: &str, patterns: &CitationPatterns) -> String {
    text.replace(&patterns.empty_link(), "")
}
