//! HTML to Markdown conversion with reference-consistent Markdown editing
//!
//!     This crate has two halves that meet at the Markdown text:
//!         - A streaming conversion engine that walks a flat stream of markup events once and
//!           feeds it to any number of sinks (Markdown, plain text, fragments), each one
//!           filtering the tags it wants to see.
//!         - A reference engine that reads previously generated Markdown back into typed
//!           sections plus its footer reference table, lets callers edit or drop references,
//!           and regenerates Markdown where every citation still resolves.
//!
//!     The engine never parses HTML itself. Markup comes in as events (see ./ir), produced by
//!     the html5ever adapter in ./html or by hand in tests. This keeps the sinks trivially
//!     testable: a sink only ever sees Open / Text / Close.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # MarkrefError
//!     ├── ir                      # Node + Event, the only input the engine understands
//!     ├── sink.rs                 # Sink trait, the contract every renderer implements
//!     ├── engine.rs               # convert(): one pass, N sinks, per-sink exclusions
//!     ├── sinks
//!     │   ├── markdown            # Markdown renderer (tag tables, references, post-pass)
//!     │   ├── text.rs             # Plain text renderer
//!     │   └── fragment.rs         # Paragraph / sentence fragment extractor
//!     ├── registry.rs             # SinkRegistry for selecting sinks by name
//!     ├── html                    # html5ever → events adapter
//!     └── reader                  # Markdown → sections + references, and back
//!
//! Round Tripping
//!
//!     The Markdown written by the Markdown sink is exactly the dialect the reader parses:
//!     `#` headings, `- ` bullets, `>` quotes, `---` rules, `[title][n]` links, `![alt][n]`
//!     images and a footer of `  [n]: url` lines. Parsing then regenerating without edits
//!     gives back the same sections and reference table.
//!
pub mod engine;
pub mod error;
pub mod html;
pub mod ir;
pub mod reader;
pub mod registry;
pub mod sink;
pub mod sinks;

pub use engine::convert;
pub use error::MarkrefError;
pub use ir::{Event, Node};
pub use reader::{MarkdownDocument, Reference, ReferenceKind, Section, SectionKind};
pub use registry::SinkRegistry;
pub use sink::Sink;
pub use sinks::{FragmentSink, MarkdownSink, TextSink};

/// Converts HTML (or plain text) straight to Markdown.
///
/// Shorthand for running a single [`MarkdownSink`] through [`html::convert_html`].
pub fn html_to_markdown(source: &str) -> String {
    let mut sink = MarkdownSink::new();
    html::convert_html(&mut [&mut sink], source);
    sink.output()
}

/// Converts HTML (or plain text) to unformatted text, one block per line.
pub fn html_to_text(source: &str) -> String {
    let mut sink = TextSink::default();
    html::convert_html(&mut [&mut sink], source);
    sink.output()
}
