//! Sink implementations
//!
//! This module contains every renderer that can be driven by the conversion
//! engine. All of them share the same tag blacklist (with the fragment sink
//! letting a couple of head tags through).

pub mod fragment;
pub mod markdown;
pub mod text;

pub use fragment::{Fragment, FragmentKind, FragmentOptions, FragmentSink};
pub use markdown::MarkdownSink;
pub use text::{TextOptions, TextSink};

use serde::{Deserialize, Serialize};

/// Non-content tags ignored by the Markdown and plain text sinks.
pub const TAG_BLACKLIST: &[&str] = &[
    "applet", "head", "base", "basefont", "button", "canvas", "command", "datalist", "embed",
    "iframe", "input", "select", "form", "label", "map", "link", "menu", "meta", "noscript",
    "object", "script", "style", "textarea", "video",
];

/// Tags that end a block of text for the plain text and fragment sinks.
pub(crate) fn is_block_close(tag: &str) -> bool {
    matches!(tag, "p" | "br" | "h1" | "h2" | "h3" | "h4" | "li")
}

/// Options for every configurable sink, used by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SinkOptions {
    pub text: TextOptions,
    pub fragments: FragmentOptions,
}

pub(crate) fn blacklist() -> Vec<String> {
    TAG_BLACKLIST.iter().map(|tag| tag.to_string()).collect()
}
