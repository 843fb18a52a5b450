//! Flattens an html5ever rcdom tree into the engine's event stream.

use crate::ir::{Event, Node};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose text content is raw, not markup. Text inside them carries
/// the element's tag so that sinks excluding the element also miss its text.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Parse `html` and return the events of its `<body>` in document order.
///
/// Comments, doctypes and processing instructions produce nothing. Every
/// element yields an Open and a Close event, void elements included.
/// Whitespace-only text spanning a line break is layout between blocks and is
/// skipped.
pub fn parse_events(html: &str) -> Vec<Event> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());

    let mut events = Vec::new();
    if let Some(body) = find_first_element(&dom.document, "body") {
        for child in body.children.borrow().iter() {
            walk(child, "", &mut events);
        }
    }
    events
}

fn walk(handle: &Handle, parent: &str, events: &mut Vec<Event>) {
    match handle.data {
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let tag: &str = &name.local;
            let mut node = Node::element(tag);
            for attr in attrs.borrow().iter() {
                node = node.with_attribute(&*attr.name.local, attr.value.to_string());
            }
            events.push(Event::Open(node));

            for child in handle.children.borrow().iter() {
                walk(child, tag, events);
            }

            events.push(Event::close(tag));
        }
        NodeData::Text { ref contents } => {
            let text = contents.borrow();
            if text.trim().is_empty() && text.contains('\n') {
                return;
            }
            let owner = if RAW_TEXT_ELEMENTS.contains(&parent) {
                parent
            } else {
                ""
            };
            events.push(Event::Text(Node::new(owner, text.to_string())));
        }
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}

fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if let NodeData::Element { name: ref qname, .. } = handle.data {
        if qname.local.as_ref() == name {
            return Some(handle.clone());
        }
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }
    None
}
