//! HTML event source
//!
//! The conversion engine only understands [`Event`] streams. This module is
//! the adapter that gets real-world HTML into that shape: the input is first
//! normalised by [`clean_html`], parsed with html5ever into an rcdom tree, and
//! the `<body>` subtree is flattened into Open / Text / Close events.

mod clean;
mod walker;

pub use clean::{clean_html, is_html};
pub use walker::parse_events;

use crate::engine::convert;
use crate::ir::Event;
use crate::sink::Sink;

/// Clean, parse and convert `source` through every sink in one pass.
pub fn convert_html(sinks: &mut [&mut dyn Sink], source: &str) {
    let cleaned = clean_html(source);
    let events: Vec<Event> = parse_events(&cleaned);
    tracing::debug!(
        input_bytes = source.len(),
        events = events.len(),
        "html parsed"
    );
    convert(sinks, events);
}
