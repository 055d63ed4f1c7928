//! Edge case tests for domkit-dom
//!
//! Detached subtrees, re-parenting, class/attribute reflection and event
//! dispatch corner cases.

use domkit_dom::{Document, DomError, Event, EventType, NodeId, SubmitOutcome};
use std::cell::Cell;
use std::rc::Rc;

fn element(doc: &mut Document, parent: NodeId, tag: &str, id: &str) -> NodeId {
    let node = doc.create_element(tag).unwrap();
    doc.set_attribute(node, "id", id).unwrap();
    doc.append_child(parent, node).unwrap();
    node
}

#[test]
fn test_lookup_inside_detached_subtree_fails() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let outer = element(&mut doc, body, "div", "outer");
    let inner = element(&mut doc, outer, "span", "inner");

    doc.remove(outer).unwrap();

    assert_eq!(doc.get_element_by_id("inner"), None);
    assert!(!doc.is_connected(inner));
    // Subtree is intact, only unlinked from the document
    assert_eq!(doc.parent(inner), Some(outer));

    doc.append_child(body, outer).unwrap();
    assert_eq!(doc.get_element_by_id("inner"), Some(inner));
}

#[test]
fn test_remove_unknown_node() {
    let mut doc = Document::default();
    assert_eq!(doc.remove(NodeId::NONE), Err(DomError::NotFound(NodeId::NONE)));
}

#[test]
fn test_class_attribute_round_trip() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let err = element(&mut doc, body, "p", "error-message");
    doc.set_attribute(err, "class", "error hidden").unwrap();

    doc.remove_class(err, "hidden").unwrap();
    assert_eq!(doc.get_attribute(err, "class"), Some("error"));
    assert!(!doc.has_class(err, "hidden"));

    doc.add_class(err, "hidden").unwrap();
    assert_eq!(doc.get_attribute(err, "class"), Some("error hidden"));

    doc.remove_attribute(err, "class");
    assert!(doc.class_list(err).unwrap().is_empty());
}

#[test]
fn test_text_content_replaces_element_children() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let target = element(&mut doc, body, "div", "dynamic-content");
    let child = element(&mut doc, target, "p", "para");

    doc.set_text_content(target, "hello").unwrap();

    assert_eq!(doc.text_content(target), "hello");
    assert_eq!(doc.get_element_by_id("para"), None);
    assert_eq!(doc.parent(child), None);
}

#[test]
fn test_input_value_is_independent_of_attribute() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let input = element(&mut doc, body, "input", "user-input");
    doc.set_attribute(input, "value", "initial").unwrap();

    assert_eq!(doc.value(input), Some("initial"));
    doc.set_value(input, "typed").unwrap();
    assert_eq!(doc.value(input), Some("typed"));
    assert_eq!(doc.get_attribute(input, "value"), Some("initial"));

    let text = doc.create_text_node("x");
    assert_eq!(doc.value(text), None);
}

#[test]
fn test_non_bubbling_dispatch_stays_on_target() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let target = element(&mut doc, body, "div", "t");
    let body_hits = Rc::new(Cell::new(0));

    let hits = Rc::clone(&body_hits);
    doc.add_event_listener(body, EventType::Input, move |_, _| hits.set(hits.get() + 1));

    let mut event = Event::new(EventType::Input, target);
    event.bubbles = false;
    doc.dispatch_event(event);
    assert_eq!(body_hits.get(), 0);

    doc.dispatch_event(Event::new(EventType::Input, target));
    assert_eq!(body_hits.get(), 1);
}

#[test]
fn test_submit_listener_sees_form_as_current_target() {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let form = element(&mut doc, body, "form", "user-form");
    let seen = Rc::new(Cell::new(NodeId::NONE));

    let slot = Rc::clone(&seen);
    doc.add_event_listener(form, EventType::Submit, move |_, ev| {
        slot.set(ev.current_target.unwrap_or(NodeId::NONE));
        ev.prevent_default();
    });

    assert_eq!(doc.request_submit(form), Ok(SubmitOutcome::Prevented));
    assert_eq!(seen.get(), form);
    assert!(doc.navigations().is_empty());
}

#[test]
fn test_content_loaded_fires_on_document() {
    let mut doc = Document::default();
    let fired = Rc::new(Cell::new(false));

    let flag = Rc::clone(&fired);
    doc.add_event_listener(NodeId::ROOT, EventType::DOMContentLoaded, move |_, _| flag.set(true));

    let event = doc.content_loaded();
    assert!(fired.get());
    assert_eq!(event.target, NodeId::ROOT);
}
