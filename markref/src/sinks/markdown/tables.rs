//! Static tag and character mapping tables for the Markdown sink.

/// Markdown emitted for an opening tag. Unmapped tags render as nothing.
pub fn open_mapping(tag: &str) -> &'static str {
    match tag {
        "p" => "",
        "italic" | "em" | "i" => "*",
        "strong" | "b" => "**",
        "h1" => "\n\n#",
        "h2" => "\n\n##",
        "h3" | "h4" | "h5" | "h6" | "h7" | "h8" | "h9" => "\n\n###",
        "blockquote" => ">",
        "li" => "\n- ",
        "a" => "[",
        "img" => "![",
        _ => "",
    }
}

/// Markdown emitted for a closing tag. Unmapped tags render as nothing.
pub fn close_mapping(tag: &str) -> &'static str {
    match tag {
        "p" | "br" => "\n\n",
        "italic" | "em" | "i" => "*",
        "strong" | "b" => "**",
        "h1" => "#\n\n",
        "h2" => "##\n\n",
        "h3" | "h4" | "h5" | "h6" | "h7" | "h8" | "h9" => "###\n\n",
        "hr" => "\n---\n\n",
        "li" => "\n",
        "a" => "]",
        _ => "",
    }
}

/// Typographic entities replaced by plain ASCII, both as numeric entity text
/// and as the decoded characters.
const TYPOGRAPHY: &[(&str, &str)] = &[
    ("&#8216;", "'"),
    ("&#8217;", "'"),
    ("&#8212;", "--"),
    ("&#8220;", "\""),
    ("&#8221;", "\""),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("\u{2014}", "--"),
    ("\u{201C}", "\""),
    ("\u{201D}", "\""),
];

/// Escape Markdown-significant characters in body or alt text.
///
/// `*`, `[`, `]` and `#` are backslash-escaped; curly quotes and em-dashes
/// become ASCII.
pub fn escape_text(text: &str) -> String {
    let mut plain = text.to_string();
    for (from, to) in TYPOGRAPHY {
        if plain.contains(from) {
            plain = plain.replace(from, to);
        }
    }

    let mut result = String::with_capacity(plain.len() + plain.len() / 10);
    for c in plain.chars() {
        if matches!(c, '*' | '[' | ']' | '#') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
