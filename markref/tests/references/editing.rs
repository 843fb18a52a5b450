use crate::common::fixture;
use markref::{html_to_markdown, MarkdownDocument, MarkrefError, ReferenceKind, SectionKind};

fn article() -> MarkdownDocument {
    MarkdownDocument::parse(&fixture("article.md")).expect("article parses")
}

#[test]
fn test_article_round_trip() {
    let doc = article();
    assert_eq!(doc.to_markdown(), fixture("article.md"));

    let kinds: Vec<SectionKind> = doc.sections().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Heading,
            SectionKind::Paragraph,
            SectionKind::Paragraph,
            SectionKind::Heading,
            SectionKind::Paragraph,
            SectionKind::Bullet,
            SectionKind::Quote,
            SectionKind::Line,
            SectionKind::Paragraph,
        ]
    );
}

#[test]
fn test_converted_html_reads_back() {
    let markdown = html_to_markdown(&fixture("article.html"));
    let doc = MarkdownDocument::parse(&markdown).expect("generated markdown parses");
    let again = MarkdownDocument::parse(&doc.to_markdown()).expect("regenerated markdown parses");
    assert_eq!(doc, again);
}

#[test]
fn test_article_references() {
    let doc = article();
    assert_eq!(doc.reference_count(), 3);
    assert_eq!(
        doc.reference(1).map(|r| r.kind()),
        Ok(ReferenceKind::Image)
    );

    let tv = doc.reference(2).expect("reference 2");
    assert_eq!(tv.kind(), ReferenceKind::Link);
    assert_eq!(tv.titles(), ["state television", "live coverage"]);
    assert!(doc.orphan_citations().is_empty());
}

#[test]
fn test_article_clean_text() {
    let doc = article();
    let clean: Vec<&str> = doc.sections().iter().map(|s| s.clean()).collect();
    assert_eq!(clean[0], "Border attack");
    assert_eq!(clean[1], "");
    assert_eq!(
        clean[2],
        "Militants struck two buses near the border, state television reported."
    );
    assert_eq!(clean[5], "Seven soldiers kidnapped in May\nTalks **suspended**");
    assert_eq!(clean[6], "We will respond.");
}

#[test]
fn test_remove_link_used_twice() {
    let mut doc = article();
    let removed = doc.remove_reference(2).expect("reference 2 exists");
    assert_eq!(removed.url(), "http://news.example.com/tv");

    let markdown = doc.to_markdown();
    assert!(markdown.contains("the border, state television reported."));
    assert!(markdown.contains("or the live coverage."));
    assert!(!markdown.contains("[2]"));
    assert_eq!(doc.prune_dead_references(), 0);
}

#[test]
fn test_remove_image() {
    let mut doc = article();
    doc.remove_reference(1);
    let markdown = doc.to_markdown();
    assert!(markdown.starts_with("#Border attack#\n\nMilitants struck"));
    assert!(!markdown.contains("map.png"));
}

#[test]
fn test_set_url_only_touches_footer() {
    let mut doc = article();
    let before = doc.to_markdown();
    assert!(doc.set_reference_url(3, "https://archive.example.com/report"));
    let after = doc.to_markdown();

    let changed: Vec<(&str, &str)> = before
        .lines()
        .zip(after.lines())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(
        changed,
        vec![(
            "  [3]: http://news.example.com/report",
            "  [3]: https://archive.example.com/report"
        )]
    );
}

#[test]
fn test_prune_empty_links() {
    let mut doc = MarkdownDocument::parse(&fixture("empty_links.md")).expect("parses");
    assert_eq!(doc.sections().len(), 2);
    assert_eq!(doc.reference_count(), 3);

    assert_eq!(doc.prune_dead_references(), 2);
    assert_eq!(doc.reference_count(), 1);
    assert_eq!(doc.to_markdown(), fixture("empty_links.pruned.md"));
}

#[test]
fn test_duplicate_footer_fails() {
    let markdown = format!("{}  [3]: http://elsewhere.example\n", fixture("article.md"));
    assert!(matches!(
        MarkdownDocument::parse(&markdown),
        Err(MarkrefError::DuplicateReferenceId { id: 3, .. })
    ));
}
