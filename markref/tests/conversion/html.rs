//! HTML fixtures through every built-in sink.

use crate::common::fixture;
use insta::assert_snapshot;
use markref::html::convert_html;
use markref::sinks::{Fragment, FragmentKind, FragmentOptions, FragmentSink};
use markref::{html_to_markdown, html_to_text, MarkdownSink, Sink, SinkRegistry, TextSink};

#[test]
fn test_article_to_markdown() {
    let markdown = html_to_markdown(&fixture("article.html"));
    assert_eq!(markdown, fixture("article.md"));
}

#[test]
fn test_article_to_text() {
    let text = html_to_text(&fixture("article.html"));
    assert_eq!(text, fixture("article.txt"));
}

#[test]
fn test_all_sinks_in_one_pass() {
    let html = fixture("article.html");
    let mut markdown = MarkdownSink::new();
    let mut text = TextSink::default();
    let mut fragments = FragmentSink::new(FragmentOptions {
        default_title: "Border attack".to_string(),
        min_sentence_length: 3,
    });

    convert_html(&mut [&mut markdown, &mut text, &mut fragments], &html);

    assert_eq!(markdown.output(), fixture("article.md"));
    assert_eq!(text.output(), fixture("article.txt"));

    let paragraphs: Vec<&str> = fragments
        .fragments_of(FragmentKind::Paragraph)
        .iter()
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(
        paragraphs,
        vec![
            "Border attack",
            "Militants struck two buses near the border, state television reported.",
            "Background",
            "The area has seen frequent attacks. Read the full report or the live coverage.",
            "Seven soldiers kidnapped in May",
            "Talks suspended",
            "We will respond.",
            "Copyright \u{201C}News\u{201D} 2013",
        ]
    );
    assert_eq!(
        fragments.fragments_of(FragmentKind::Title),
        vec![&Fragment::new(FragmentKind::Title, "Border attack")]
    );
}

#[test]
fn test_registry_matches_direct_sinks() {
    let registry = SinkRegistry::default();
    let html = fixture("article.html");

    let markdown = registry
        .convert_html(&html, "markdown")
        .expect("markdown sink is registered");
    assert_eq!(markdown, fixture("article.md"));

    let json = registry
        .convert_html(&html, "fragments")
        .expect("fragment sink is registered");
    let fragments: Vec<Fragment> = serde_json::from_str(&json).expect("fragments are json");
    assert_eq!(fragments.last().map(|f| f.kind), Some(FragmentKind::Title));
}

#[test]
fn test_nested_image_link() {
    let markdown = html_to_markdown(
        r#"<p><a href="http://site.example"><img src="http://site.example/logo.png" alt="Logo"></a> Home</p>"#,
    );
    assert_snapshot!(markdown.lines().next().unwrap_or_default(), @"[![Logo][2]][1] Home");
}

#[test]
fn test_plain_text_input() {
    let markdown = html_to_markdown("First   line\n\n\tSecond line *starred*\n");
    assert_eq!(markdown, "First line\n\nSecond line \\*starred\\*\n\n");
}
