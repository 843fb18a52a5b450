//! Fragment sink
//!
//! Breaks a document into typed text fragments: the whole body, each
//! paragraph, and each sentence of each paragraph. Downstream indexers use
//! these instead of the rendered Markdown.

use crate::ir::Node;
use crate::sink::Sink;
use crate::sinks::{is_block_close, TAG_BLACKLIST};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.?!:;]*[.?!:;]?").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Title,
    Body,
    Paragraph,
    Sentence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Fragment {
            kind,
            text: text.into(),
        }
    }
}

/// Configuration for the fragment sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentOptions {
    /// Title fragment used when the document supplies none
    pub default_title: String,

    /// Sentences of this many characters or fewer are dropped
    pub min_sentence_length: usize,
}

impl Default for FragmentOptions {
    fn default() -> Self {
        Self {
            default_title: "Untitled".to_string(),
            min_sentence_length: 3,
        }
    }
}

#[derive(Debug, Default)]
pub struct FragmentSink {
    options: FragmentOptions,
    body: String,
    paragraph: String,
    fragments: Vec<Fragment>,
}

impl FragmentSink {
    pub fn new(options: FragmentOptions) -> Self {
        FragmentSink {
            options,
            ..Default::default()
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// All fragments of one kind, in document order.
    pub fn fragments_of(&self, kind: FragmentKind) -> Vec<&Fragment> {
        self.fragments.iter().filter(|f| f.kind == kind).collect()
    }

    fn close_paragraph(&mut self) {
        let text = self.paragraph.trim();
        if !text.is_empty() {
            self.fragments.push(Fragment::new(FragmentKind::Paragraph, text));
            for sentence in split_sentences(text, self.options.min_sentence_length) {
                self.fragments
                    .push(Fragment::new(FragmentKind::Sentence, sentence));
            }
        }
        self.paragraph.clear();
    }
}

impl Sink for FragmentSink {
    fn name(&self) -> &str {
        "fragments"
    }

    fn exclude_tags(&self) -> Vec<String> {
        TAG_BLACKLIST
            .iter()
            .filter(|tag| !matches!(**tag, "head" | "meta"))
            .map(|tag| tag.to_string())
            .collect()
    }

    fn open(&mut self) {
        self.body.clear();
        self.paragraph.clear();
        self.fragments.clear();
    }

    fn on_text(&mut self, node: &Node) {
        if matches!(node.tag(), "meta" | "head") {
            return;
        }
        self.body.push_str(node.text());
        self.paragraph.push_str(node.text());
    }

    fn on_close(&mut self, node: &Node) {
        if is_block_close(node.tag()) || node.tag() == "hr" {
            self.close_paragraph();
        }
    }

    fn close(&mut self) {
        self.close_paragraph();
        let body = std::mem::take(&mut self.body);
        self.fragments.push(Fragment::new(FragmentKind::Body, body));

        if !self.fragments.iter().any(|f| f.kind == FragmentKind::Title) {
            let title = self.options.default_title.clone();
            self.fragments.push(Fragment::new(FragmentKind::Title, title));
        }
    }

    /// Fragments as a JSON array.
    fn output(&self) -> String {
        serde_json::to_string_pretty(&self.fragments).unwrap_or_default()
    }
}

/// Split a block of text into sentences longer than `min_length`.
///
/// Sentences end at `.`, `?`, `!`, `:` or `;`; a trailing piece without
/// punctuation still counts. Pieces are trimmed before the length check.
pub fn split_sentences(text: &str, min_length: usize) -> Vec<String> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|sentence| sentence.chars().count() > min_length)
        .map(str::to_string)
        .collect()
}
