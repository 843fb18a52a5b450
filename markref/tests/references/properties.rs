//! Property tests over generated Markdown documents.

use markref::reader::{strip_citations, CitationPatterns};
use markref::{MarkdownDocument, MarkrefError};
use proptest::prelude::*;

fn citation() -> impl Strategy<Value = String> {
    (1u32..=4, "[a-z]{0,6}", any::<bool>()).prop_map(|(id, title, image)| {
        if image {
            format!("![{title}][{id}]")
        } else {
            format!("[{title}][{id}]")
        }
    })
}

fn line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "#", "- ", ">"]),
        "[a-z]{1,8}( [a-z]{1,8}){0,3}",
        prop::option::of(citation()),
    )
        .prop_map(|(prefix, words, citation)| match citation {
            Some(citation) => format!("{prefix}{words} {citation}"),
            None => format!("{prefix}{words}"),
        })
}

/// Markdown with one to seven blocks and a footer for some of ids 1..=4.
fn document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(line(), 1..8),
        prop::collection::btree_set(1u32..=4, 0..=4),
    )
        .prop_map(|(lines, ids)| {
            let mut markdown = lines.join("\n\n");
            markdown.push_str("\n\n");
            for id in ids {
                markdown.push_str(&format!("  [{id}]: http://example.com/{id}\n"));
            }
            markdown
        })
}

fn cites(raw: &str, id: u32) -> bool {
    let patterns = CitationPatterns::new(id);
    strip_citations(raw, &patterns).text != raw
}

proptest! {
    #[test]
    fn prop_rendered_footer_ids_are_distinct(markdown in document()) {
        let doc = MarkdownDocument::parse(&markdown).expect("generated markdown parses");
        let rendered = doc.to_markdown();
        let footer_ids: Vec<u32> = rendered
            .lines()
            .filter_map(|line| line.strip_prefix("  ["))
            .filter_map(|rest| rest.split_once("]:"))
            .filter_map(|(id, _)| id.parse().ok())
            .collect();

        let mut distinct = footer_ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), footer_ids.len());

        let expected: Vec<u32> = doc.references().map(|r| r.id()).collect();
        prop_assert_eq!(footer_ids, expected);
    }

    #[test]
    fn prop_duplicate_footer_id_fails(markdown in document(), id in 1u32..=4) {
        let markdown = format!(
            "{markdown}  [{id}]: http://first.example\n  [{id}]: http://second.example\n"
        );
        let is_duplicate = matches!(
            MarkdownDocument::parse(&markdown),
            Err(MarkrefError::DuplicateReferenceId { .. })
        );
        prop_assert!(is_duplicate);
    }

    #[test]
    fn prop_render_then_parse_is_stable(markdown in document()) {
        let doc = MarkdownDocument::parse(&markdown).expect("generated markdown parses");
        let again = MarkdownDocument::parse(&doc.to_markdown()).expect("rendered markdown parses");
        prop_assert_eq!(&doc, &again);
        prop_assert_eq!(doc.to_markdown(), again.to_markdown());
    }

    #[test]
    fn prop_prune_is_idempotent(markdown in document()) {
        let mut doc = MarkdownDocument::parse(&markdown).expect("generated markdown parses");
        doc.prune_dead_references();
        let once = doc.clone();

        prop_assert_eq!(doc.prune_dead_references(), 0);
        prop_assert_eq!(&doc, &once);
    }

    #[test]
    fn prop_removed_reference_leaves_no_citation(markdown in document()) {
        let mut doc = MarkdownDocument::parse(&markdown).expect("generated markdown parses");
        let ids: Vec<u32> = doc.references().map(|r| r.id()).collect();

        for id in ids {
            prop_assert!(doc.remove_reference(id).is_some());
            for section in doc.sections() {
                prop_assert!(!cites(section.raw(), id), "{} still cites {}", section.raw(), id);
            }
            let footer = format!("  [{id}]:");
            prop_assert!(!doc.to_markdown().contains(&footer));
        }
        prop_assert_eq!(doc.reference_count(), 0);
    }

    #[test]
    fn prop_set_url_changes_one_footer_line(markdown in document()) {
        let mut doc = MarkdownDocument::parse(&markdown).expect("generated markdown parses");
        let Some(id) = doc.references().map(|r| r.id()).next() else {
            return Ok(());
        };

        let before = doc.to_markdown();
        prop_assert!(doc.set_reference_url(id, "http://moved.example"));
        let after = doc.to_markdown();

        let changed: Vec<(&str, &str)> = before
            .lines()
            .zip(after.lines())
            .filter(|(a, b)| a != b)
            .collect();
        prop_assert_eq!(changed.len(), 1);
        prop_assert_eq!(changed[0].1, format!("  [{id}]: http://moved.example"));
    }
}
