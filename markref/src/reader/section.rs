//! Typed blocks of Markdown.

use super::citation::{strip_citations, CitationPatterns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Paragraph,
    Heading,
    Bullet,
    Quote,
    Line,
}

impl SectionKind {
    /// Classify a trimmed, non-empty line.
    pub fn classify(line: &str) -> SectionKind {
        if line == "---" {
            return SectionKind::Line;
        }
        match line.chars().next() {
            Some('#') => SectionKind::Heading,
            Some('-') => SectionKind::Bullet,
            Some('>') => SectionKind::Quote,
            _ => SectionKind::Paragraph,
        }
    }
}

/// One block of the document.
///
/// `raw` is the Markdown as written (and as rewritten by reference removal),
/// `clean` is the human readable text with markers and citations removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    raw: String,
    clean: String,
}

impl Section {
    pub fn new(kind: SectionKind, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let clean = clean_markers(kind, &raw);
        Section { kind, raw, clean }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn clean(&self) -> &str {
        &self.clean
    }

    /// Append another bullet line; `clean` is rebuilt from the merged text.
    pub(crate) fn push_bullet(&mut self, line: &str) {
        self.raw.push('\n');
        self.raw.push_str(line);
        self.clean = clean_markers(self.kind, &self.raw);
    }

    /// Rewrite citations of one reference in `clean`, returning the titles.
    pub(crate) fn clean_citations(&mut self, patterns: &CitationPatterns) -> Vec<String> {
        let stripped = strip_citations(&self.clean, patterns);
        self.clean = stripped.text;
        stripped.titles
    }

    /// Rewrite citations of one reference in `raw`.
    pub(crate) fn remove_citations(&mut self, patterns: &CitationPatterns) {
        self.raw = strip_citations(&self.raw, patterns).text;
    }

    pub(crate) fn set_raw(&mut self, raw: String) {
        self.raw = raw;
    }
}

/// Strip the block markers of `kind` from `raw`.
fn clean_markers(kind: SectionKind, raw: &str) -> String {
    match kind {
        SectionKind::Paragraph => raw.to_string(),
        SectionKind::Line => String::new(),
        SectionKind::Quote => raw.strip_prefix('>').unwrap_or(raw).trim().to_string(),
        SectionKind::Bullet => raw
            .split('\n')
            .map(|line| line.strip_prefix('-').unwrap_or(line).trim())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string(),
        SectionKind::Heading => {
            let mut text = raw;
            while text.len() >= 2 && text.starts_with('#') && text.ends_with('#') {
                text = &text[1..text.len() - 1];
            }
            text.trim_start_matches('#').trim().to_string()
        }
    }
}
