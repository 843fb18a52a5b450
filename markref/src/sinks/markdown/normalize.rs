//! Final line-level cleanup of the Markdown buffer.

use once_cell::sync::Lazy;
use regex::Regex;

/// An image citation that starts a line and is followed by more text.
static LEADING_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<image>!\[.*?\]\[\d+\])(?P<paragraph>.+)$").expect("valid regex")
});

/// A footer reference definition, before indentation.
static FOOTER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\d+\]:").expect("valid regex"));

/// Normalise blank lines, bullets and footer indentation.
///
/// Every line is trimmed and empty lines are dropped. Bullet lines are kept
/// together, a blank line separates a list from whatever follows it, footer
/// lines get a two space indent, and every other line is followed by exactly
/// one blank line.
pub fn normalize(buffer: &str) -> String {
    let mut out = String::with_capacity(buffer.len());
    let mut previous_was_bullet = false;

    for line in buffer.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line = split_leading_image(trimmed);
        let is_bullet = line.starts_with("- ");
        let is_footer = FOOTER_LINE.is_match(&line);

        if is_footer {
            out.push_str("  ");
        }
        if previous_was_bullet && !is_bullet {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');
        if !is_bullet && !is_footer {
            out.push('\n');
        }
        previous_was_bullet = is_bullet;
    }

    out
}

/// Put an image that opens a paragraph on its own line.
fn split_leading_image(line: &str) -> String {
    match LEADING_IMAGE.captures(line) {
        Some(caps) => {
            let paragraph = caps["paragraph"].trim_start();
            if paragraph.is_empty() {
                return line.to_string();
            }
            format!("{}\n\n{}", &caps["image"], paragraph)
        }
        None => line.to_string(),
    }
}
