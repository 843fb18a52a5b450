//! The generated Markdown must read as reference-style links and images to a
//! CommonMark parser, not just to our own reader.

use crate::common::fixture;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use markref::html_to_markdown;

#[derive(Debug, PartialEq)]
enum Target {
    Link(String),
    Image(String),
}

fn collect_targets<'a>(node: &'a AstNode<'a>, targets: &mut Vec<Target>) {
    match &node.data.borrow().value {
        NodeValue::Link(link) => targets.push(Target::Link(link.url.clone())),
        NodeValue::Image(link) => targets.push(Target::Image(link.url.clone())),
        _ => {}
    }
    for child in node.children() {
        collect_targets(child, targets);
    }
}

fn targets(markdown: &str) -> Vec<Target> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &ComrakOptions::default());
    let mut targets = Vec::new();
    collect_targets(root, &mut targets);
    targets
}

#[test]
fn test_article_references_resolve() {
    let markdown = html_to_markdown(&fixture("article.html"));
    assert_eq!(
        targets(&markdown),
        vec![
            Target::Image("http://img.example.com/map.png".to_string()),
            Target::Link("http://news.example.com/tv".to_string()),
            Target::Link("http://news.example.com/report".to_string()),
            Target::Link("http://news.example.com/tv".to_string()),
        ]
    );
}

#[test]
fn test_emphasis_survives() {
    let markdown = html_to_markdown("<p><strong>bold</strong> and <em>soft</em></p>");
    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &ComrakOptions::default());

    let paragraph = root.first_child().expect("paragraph");
    let kinds: Vec<&str> = paragraph
        .children()
        .map(|child| match child.data.borrow().value {
            NodeValue::Strong => "strong",
            NodeValue::Emph => "emph",
            NodeValue::Text(_) => "text",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["strong", "text", "emph"]);
}

#[test]
fn test_escaped_brackets_are_not_links() {
    let markdown = html_to_markdown("<p>[not a link][1]</p>");
    assert!(targets(&markdown).is_empty());
}
