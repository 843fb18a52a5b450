//! Plain text sink
//!
//! Drops all markup and keeps the text, breaking lines after block-level
//! closers. Nothing is escaped.

use crate::ir::Node;
use crate::sink::Sink;
use crate::sinks::{blacklist, is_block_close};
use serde::{Deserialize, Serialize};

/// Configuration for the plain text sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOptions {
    /// Break lines after blocks; when false a single space is used instead
    pub line_feeds: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { line_feeds: true }
    }
}

#[derive(Debug, Default)]
pub struct TextSink {
    options: TextOptions,
    buffer: String,
}

impl TextSink {
    pub fn new(options: TextOptions) -> Self {
        TextSink {
            options,
            buffer: String::new(),
        }
    }

    /// Text sink that joins blocks with spaces.
    pub fn single_line() -> Self {
        Self::new(TextOptions { line_feeds: false })
    }
}

impl Sink for TextSink {
    fn name(&self) -> &str {
        "text"
    }

    fn exclude_tags(&self) -> Vec<String> {
        blacklist()
    }

    fn open(&mut self) {
        self.buffer.clear();
    }

    fn on_text(&mut self, node: &Node) {
        self.buffer.push_str(node.text());
    }

    fn on_close(&mut self, node: &Node) {
        let separator = match node.tag() {
            "hr" => "\n\n",
            tag if is_block_close(tag) => "\n",
            _ => return,
        };
        if self.options.line_feeds {
            self.buffer.push_str(separator);
        } else {
            self.buffer.push(' ');
        }
    }

    fn close(&mut self) {}

    fn output(&self) -> String {
        self.buffer.clone()
    }
}
