//! Conversion engine
//!
//! Drives a markup event stream through any number of sinks in a single pass.
//!
//! Every sink sees event *i* before any sink sees event *i + 1*, and sinks are
//! always visited in slice order. Exclusion is per sink: a sink that excludes
//! `script` misses that tag's events while its neighbours still receive them.

use crate::ir::Event;
use crate::sink::Sink;
use std::collections::HashSet;

/// Feed `events` to every sink.
///
/// Calls `open` on each sink, dispatches every event to the sinks that do not
/// exclude its tag, then calls `close` on each sink. Unbalanced streams are
/// passed through as-is.
pub fn convert<I>(sinks: &mut [&mut dyn Sink], events: I)
where
    I: IntoIterator<Item = Event>,
{
    for sink in sinks.iter_mut() {
        sink.open();
    }

    let exclusions = exclusion_sets(sinks);
    tracing::debug!(sinks = sinks.len(), "conversion started");

    let mut count = 0usize;
    for event in events {
        count += 1;
        let tag = event.tag();
        for (sink, excluded) in sinks.iter_mut().zip(&exclusions) {
            if excluded.contains(tag) {
                continue;
            }
            match &event {
                Event::Text(node) => sink.on_text(node),
                Event::Open(node) => sink.on_open(node),
                Event::Close(node) => sink.on_close(node),
            }
        }
    }

    for sink in sinks.iter_mut() {
        sink.close();
    }
    tracing::debug!(events = count, "conversion finished");
}

/// Compute each sink's normalised exclusion set, indexed like `sinks`.
fn exclusion_sets(sinks: &[&mut dyn Sink]) -> Vec<HashSet<String>> {
    sinks
        .iter()
        .map(|sink| {
            sink.exclude_tags()
                .iter()
                .map(|tag| tag.trim().to_lowercase())
                .collect()
        })
        .collect()
}
