//! Markdown reader and reference engine
//!
//! Reads Markdown in the dialect written by the Markdown sink back into an
//! ordered list of [`Section`]s plus the footer reference table, and writes it
//! out again after references have been edited.
//!
//! Parsing
//!
//!     1. `\r` is dropped.
//!     2. Footer lines (`  [id]: url`, one or two digit ids) are collected and removed
//!        from the body. Every reference starts as a link and becomes an image when the
//!        text contains `![alt][id]`. A repeated id is an error.
//!     3. Remaining lines are trimmed, blank ones dropped, and each line becomes a
//!        section by its first character. Consecutive bullet lines merge.
//!     4. Each section's `clean` text has its citations rewritten: images vanish, links
//!        become their titles. Titles are recorded on the reference.
//!
//! Pruning
//!
//!     A link stays alive while some section still cites it with a non-blank title, an
//!     image while any section still cites it, anything else forever. Removing a dead
//!     reference rewrites the citing text, which can leave an enclosing link with an
//!     empty title (`[![logo][2]][1]` becomes `[][1]`), so pruning repeats until a pass
//!     removes nothing.

mod citation;
mod reference;
mod section;

pub use citation::{strip_citations, CitationPatterns, Stripped};
pub use reference::{Reference, ReferenceKind};
pub use section::{Section, SectionKind};

use crate::error::MarkrefError;
use citation::strip_empty_links;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Pass cap for [`MarkdownDocument::prune_dead_references`].
pub const DEFAULT_MAX_PRUNE_PASSES: usize = 64;

static FOOTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s+?\[(?P<id>\d{1,2})\]:\s+?(?P<url>.*?)$").expect("valid regex")
});

/// Any `][id]` citation tail, used to find citations without a reference.
static CITATION_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\[(?P<id>\d+)\]").expect("valid regex"));

/// A parsed Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    sections: Vec<Section>,
    references: BTreeMap<u32, Reference>,
}

impl MarkdownDocument {
    /// Parse Markdown text.
    ///
    /// Fails only when the footer declares the same id twice.
    pub fn parse(markdown: &str) -> Result<Self, MarkrefError> {
        let text = markdown.replace('\r', "");

        let mut document = MarkdownDocument {
            sections: Vec::new(),
            references: read_footer(&text)?,
        };
        let body = FOOTER.replace_all(&text, "");
        document.read_sections(body.trim());
        document.clean_sections();

        let orphans = document.orphan_citations();
        if !orphans.is_empty() {
            tracing::warn!(ids = ?orphans, "citations without a footer reference");
        }
        tracing::debug!(
            sections = document.sections.len(),
            references = document.references.len(),
            "markdown parsed"
        );
        Ok(document)
    }

    fn read_sections(&mut self, body: &str) {
        for line in body.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let kind = SectionKind::classify(line);
            match self.sections.last_mut() {
                Some(last) if kind == SectionKind::Bullet && last.kind() == SectionKind::Bullet => {
                    last.push_bullet(line);
                }
                _ => self.sections.push(Section::new(kind, line)),
            }
        }
    }

    fn clean_sections(&mut self) {
        for reference in self.references.values_mut() {
            let patterns = CitationPatterns::new(reference.id);
            for section in &mut self.sections {
                let titles = section.clean_citations(&patterns);
                reference.titles.extend(titles);
            }
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// References in ascending id order.
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.references.values()
    }

    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    pub fn reference(&self, id: u32) -> Result<&Reference, MarkrefError> {
        self.references
            .get(&id)
            .ok_or(MarkrefError::UnknownReferenceId(id))
    }

    pub fn references_of_kind(&self, kind: ReferenceKind) -> Vec<&Reference> {
        self.references
            .values()
            .filter(|reference| reference.kind == kind)
            .collect()
    }

    /// Ids cited in some section's `raw` text that have no footer entry.
    pub fn orphan_citations(&self) -> Vec<u32> {
        let cited: BTreeSet<u32> = self
            .sections
            .iter()
            .flat_map(|section| CITATION_TAIL.captures_iter(section.raw()))
            .filter_map(|caps| caps["id"].parse().ok())
            .collect();
        cited
            .into_iter()
            .filter(|id| !self.references.contains_key(id))
            .collect()
    }

    /// Point a reference at a new url. Returns false for unknown ids.
    pub fn set_reference_url(&mut self, id: u32, url: impl Into<String>) -> bool {
        match self.references.get_mut(&id) {
            Some(reference) => {
                reference.url = url.into();
                true
            }
            None => false,
        }
    }

    /// Change what a reference points at. Returns false for unknown ids.
    pub fn set_reference_kind(&mut self, id: u32, kind: ReferenceKind) -> bool {
        match self.references.get_mut(&id) {
            Some(reference) => {
                reference.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Remove a reference, turning its links into plain titles and dropping
    /// its images. Returns `None` when the id is unknown.
    pub fn remove_reference(&mut self, id: u32) -> Option<Reference> {
        let reference = self.references.remove(&id)?;
        let patterns = CitationPatterns::new(id);
        for section in &mut self.sections {
            section.remove_citations(&patterns);
        }
        tracing::debug!(id, url = %reference.url, "reference removed");
        Some(reference)
    }

    /// Remove every reference no longer cited, repeating until nothing changes.
    ///
    /// Returns the number of references removed.
    pub fn prune_dead_references(&mut self) -> usize {
        self.prune_dead_references_with_limit(DEFAULT_MAX_PRUNE_PASSES)
    }

    /// Like [`prune_dead_references`](Self::prune_dead_references), but stops
    /// after `max_passes` passes even if the last one still removed something.
    pub fn prune_dead_references_with_limit(&mut self, max_passes: usize) -> usize {
        let mut removed = 0;

        for pass in 1..=max_passes {
            let ids: Vec<u32> = self.references.keys().copied().collect();
            let mut removed_this_pass = 0;

            for id in ids {
                let Some(kind) = self.references.get(&id).map(Reference::kind) else {
                    continue;
                };
                if !kind.is_prunable() {
                    continue;
                }
                let patterns = CitationPatterns::new(id);
                if kind == ReferenceKind::Link {
                    self.strip_empty_links(&patterns);
                }
                if self.is_live(kind, &patterns) {
                    continue;
                }
                self.remove_reference(id);
                removed_this_pass += 1;
            }

            removed += removed_this_pass;
            if removed_this_pass == 0 {
                tracing::debug!(passes = pass, removed, "dead references pruned");
                return removed;
            }
        }

        tracing::warn!(
            max_passes,
            removed,
            "reference pruning stopped at the pass limit"
        );
        removed
    }

    fn strip_empty_links(&mut self, patterns: &CitationPatterns) {
        for section in &mut self.sections {
            if section.raw().contains(&patterns.empty_link()) {
                let raw = strip_empty_links(section.raw(), patterns);
                section.set_raw(raw);
            }
        }
    }

    fn is_live(&self, kind: ReferenceKind, patterns: &CitationPatterns) -> bool {
        match kind {
            ReferenceKind::Link => self
                .sections
                .iter()
                .any(|section| patterns.has_titled_link(section.raw())),
            ReferenceKind::Image => self
                .sections
                .iter()
                .any(|section| patterns.has_image(section.raw())),
            _ => true,
        }
    }

    /// Regenerate Markdown from the current sections and references.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let raw = section.raw().trim();
            if raw.is_empty() {
                continue;
            }
            out.push_str(raw);
            out.push_str("\n\n");
        }
        for reference in self.references.values() {
            out.push_str(&reference.to_string());
            out.push('\n');
        }

        let mut out = out.trim().to_string();
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// The readable text of every section, each followed by a blank line.
    pub fn clean_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(section.clean());
            out.push_str("\n\n");
        }
        out
    }
}

fn read_footer(text: &str) -> Result<BTreeMap<u32, Reference>, MarkrefError> {
    let mut references = BTreeMap::new();

    for caps in FOOTER.captures_iter(text) {
        let Ok(id) = caps["id"].parse::<u32>() else {
            continue;
        };
        let url = caps["url"].trim().to_string();
        if references.contains_key(&id) {
            return Err(MarkrefError::DuplicateReferenceId { id, url });
        }

        let kind = if CitationPatterns::new(id).has_image(text) {
            ReferenceKind::Image
        } else {
            ReferenceKind::Link
        };
        references.insert(id, Reference::new(id, url, kind));
    }

    Ok(references)
}

impl FromStr for MarkdownDocument {
    type Err = MarkrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}
