//! Sink trait definition
//!
//! This module defines the contract every renderer implements. The conversion
//! engine depends only on this trait, so new sinks plug in without touching it.

use crate::ir::Node;

/// Trait for document sinks
///
/// A sink owns its own buffers for the lifetime of one conversion: `open`
/// resets state, the three `on_*` handlers receive events in document order,
/// and `close` finalizes. Events whose tag appears in [`Sink::exclude_tags`]
/// are never delivered to that sink.
///
/// # Examples
///
/// ```ignore
/// struct CountingSink(usize);
///
/// impl Sink for CountingSink {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn open(&mut self) {
///         self.0 = 0;
///     }
///
///     fn on_text(&mut self, node: &Node) {
///         self.0 += node.text().len();
///     }
///
///     fn close(&mut self) {}
///
///     fn output(&self) -> String {
///         self.0.to_string()
///     }
/// }
/// ```
pub trait Sink {
    /// The name of this sink (e.g., "markdown", "text")
    fn name(&self) -> &str;

    /// Tags this sink never wants to see.
    ///
    /// Read once per conversion; names are compared after trimming and
    /// lower-casing.
    fn exclude_tags(&self) -> Vec<String> {
        Vec::new()
    }

    /// Prepare for a new document.
    fn open(&mut self);

    /// Handle an opening tag.
    fn on_open(&mut self, _node: &Node) {}

    /// Handle a text node.
    fn on_text(&mut self, _node: &Node) {}

    /// Handle a closing tag.
    fn on_close(&mut self, _node: &Node) {}

    /// Finish the current document.
    fn close(&mut self);

    /// The rendered result of the last conversion.
    fn output(&self) -> String;
}
