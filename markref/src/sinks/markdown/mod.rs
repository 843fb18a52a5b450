//! Markdown sink
//!
//! Renders the event stream as the small Markdown dialect the reader parses
//! back.
//!
//! # Element Mapping Table
//!
//! | Markup                      | Markdown                | Notes                                  |
//! |-----------------------------|-------------------------|----------------------------------------|
//! | `p`, `br`                   | blank line after        |                                        |
//! | `h1`, `h2`                  | `#text#`, `##text##`    |                                        |
//! | `h3` .. `h9`                | `###text###`            | Deeper levels collapse to three        |
//! | `strong`, `b`               | `**text**`              |                                        |
//! | `italic`, `em`, `i`         | `*text*`                |                                        |
//! | `blockquote`                | `>text`                 |                                        |
//! | `li`                        | `- text`                | Lists are flat                         |
//! | `hr`                        | `---`                   |                                        |
//! | `a href=url`                | `[text][n]`             | `n` is the url's footer position       |
//! | `img src=url alt=text`      | `![text][n]`            | Shares numbering with links            |
//!
//! # References
//!
//!     Every distinct url gets one footer entry, numbered by first appearance. Anchors are
//!     pushed on a stack when they open and popped when they close, so an image nested in
//!     a link (or a link in a link) still closes with the right number. The footer is
//!     appended by `close()` as `  [n]: url` lines.

mod normalize;
mod tables;

pub use normalize::normalize;
pub use tables::{close_mapping, escape_text, open_mapping};

use crate::ir::Node;
use crate::sink::Sink;
use crate::sinks::blacklist;

/// Sink that renders Markdown with a footer reference table.
///
/// References are numbered without limit, but [`MarkdownDocument`] only reads
/// footer ids of one or two digits back; citations past `[99]` come back as
/// orphan citations.
///
/// [`MarkdownDocument`]: crate::reader::MarkdownDocument
#[derive(Debug, Default)]
pub struct MarkdownSink {
    buffer: String,
    references: Vec<String>,
    /// Open anchors; `None` for anchors without an `href`.
    anchor_stack: Vec<Option<usize>>,
    closed: bool,
}

impl MarkdownSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Urls in footer order; position + 1 is the reference number.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Register a url (once) and return its 1-based reference number.
    fn reference_number(&mut self, url: &str) -> usize {
        match self.references.iter().position(|known| known == url) {
            Some(index) => index + 1,
            None => {
                self.references.push(url.to_string());
                self.references.len()
            }
        }
    }

    fn write_footer(&mut self) {
        if self.references.is_empty() {
            return;
        }
        self.buffer.push('\n');
        for (index, url) in self.references.iter().enumerate() {
            self.buffer.push_str(&format!("[{}]: {}\n", index + 1, url));
        }
    }
}

impl Sink for MarkdownSink {
    fn name(&self) -> &str {
        "markdown"
    }

    fn exclude_tags(&self) -> Vec<String> {
        blacklist()
    }

    fn open(&mut self) {
        self.buffer.clear();
        self.references.clear();
        self.anchor_stack.clear();
        self.closed = false;
    }

    fn on_open(&mut self, node: &Node) {
        self.buffer.push_str(open_mapping(node.tag()));

        match node.tag() {
            "a" => {
                let number = node
                    .has("href")
                    .then(|| self.reference_number(node.attr("href")));
                self.anchor_stack.push(number);
            }
            "img" if node.has("src") => {
                let number = self.reference_number(node.attr("src"));
                self.buffer.push_str(&escape_text(node.attr("alt")));
                self.buffer.push_str(&format!("][{number}]"));
            }
            _ => {}
        }
    }

    fn on_text(&mut self, node: &Node) {
        self.buffer.push_str(&escape_text(node.text()));
    }

    fn on_close(&mut self, node: &Node) {
        self.buffer.push_str(close_mapping(node.tag()));

        if node.tag() == "a" {
            if let Some(Some(number)) = self.anchor_stack.pop() {
                self.buffer.push_str(&format!("[{number}]"));
            }
        }
    }

    fn close(&mut self) {
        if self.closed {
            tracing::warn!("markdown sink closed twice; ignoring");
            return;
        }
        self.closed = true;

        self.buffer.push('\n');
        self.write_footer();
        self.buffer = normalize(&self.buffer);
        tracing::debug!(
            references = self.references.len(),
            bytes = self.buffer.len(),
            "markdown rendered"
        );
    }

    fn output(&self) -> String {
        self.buffer.clone()
    }
}
