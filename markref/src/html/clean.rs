//! Input normalisation ahead of parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// True when `source` looks like markup: at least two characters, starting
/// with `<`.
pub fn is_html(source: &str) -> bool {
    source.len() > 1 && source.starts_with('<')
}

/// Prepare raw input for the HTML parser.
///
/// Markup is trimmed and wrapped in a single `<div>`. Anything else is treated
/// as plain text: each line has its whitespace collapsed and becomes its own
/// `<p>`, with blank lines dropped.
pub fn clean_html(source: &str) -> String {
    let source = source.trim();
    if is_html(source) {
        return format!("<div>{source}</div>");
    }

    let mut html = String::new();
    for line in source.split('\n') {
        let line = collapse_whitespace(line);
        if line.is_empty() {
            continue;
        }
        html.push_str("<p>");
        html.push_str(&line);
        html.push_str("</p>");
    }
    html
}

fn collapse_whitespace(line: &str) -> String {
    let spaced = line.replace(['\n', '\r', '\t'], " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}
