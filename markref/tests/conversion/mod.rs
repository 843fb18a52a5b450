//! Conversion tests
//!
//! End to end HTML → sink output, plus CommonMark checks on the Markdown.

mod commonmark;
mod html;
