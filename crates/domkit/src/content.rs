//! Content Mutators
//!
//! Replace, remove and append content on elements found by id.

use domkit_dom::{Document, NodeId};

use crate::create_element;

/// Replace the text of `#element_id` with `text`.
///
/// Returns the element, or `None` when no element has that id.
pub fn add_element_to_dom(doc: &mut Document, element_id: &str, text: &str) -> Option<NodeId> {
    let Some(node) = doc.get_element_by_id(element_id) else {
        tracing::trace!(element_id, "add_element_to_dom: no such element");
        return None;
    };
    doc.set_text_content(node, text).ok()?;
    Some(node)
}

/// Detach `#element_id` from its parent.
///
/// Returns the detached element, or `None` when no element has that id.
pub fn remove_element_from_dom(doc: &mut Document, element_id: &str) -> Option<NodeId> {
    let Some(node) = doc.get_element_by_id(element_id) else {
        tracing::trace!(element_id, "remove_element_from_dom: no such element");
        return None;
    };
    doc.remove(node).ok()?;
    Some(node)
}

/// Append a `<p>` holding `text` to `#element_id`.
///
/// Unlike [`add_element_to_dom`] this accumulates one paragraph per call.
/// Returns the new paragraph, or `None` when no element has that id.
pub fn simulate_click(doc: &mut Document, element_id: &str, text: &str) -> Option<NodeId> {
    let Some(container) = doc.get_element_by_id(element_id) else {
        tracing::trace!(element_id, "simulate_click: no such container");
        return None;
    };
    let paragraph = create_element(doc, "p", std::iter::empty::<(&str, &str)>(), text).ok()?;
    doc.append_child(container, paragraph).ok()?;
    Some(paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Document {
        domkit_html::parse(
            r#"<div id="dynamic-content"><span>old</span></div>
               <section id="panel"><p>keep</p></section>"#,
        )
    }

    #[test]
    fn test_add_overwrites() {
        let mut doc = page();
        let target = add_element_to_dom(&mut doc, "dynamic-content", "first").unwrap();
        add_element_to_dom(&mut doc, "dynamic-content", "second");

        assert_eq!(doc.text_content(target), "second");
        assert_eq!(doc.tree().children(target).count(), 1);
    }

    #[test]
    fn test_add_same_value_is_idempotent() {
        let mut doc = page();
        let target = add_element_to_dom(&mut doc, "dynamic-content", "same").unwrap();
        add_element_to_dom(&mut doc, "dynamic-content", "same");

        assert_eq!(doc.text_content(target), "same");
    }

    #[test]
    fn test_repeated_updates_keep_arena_flat() {
        let mut doc = domkit_html::parse(
            r#"<div id="dynamic-content"></div><p id="error-message" class="hidden"></p>"#,
        );
        let round = |doc: &mut Document| {
            add_element_to_dom(doc, "dynamic-content", "same").unwrap();
            crate::display_error(doc, "error-message", "Input cannot be empty").unwrap();
            crate::clear_error(doc, "error-message").unwrap();
        };

        round(&mut doc);
        let settled = doc.tree().len();
        for _ in 0..1000 {
            round(&mut doc);
        }

        assert_eq!(doc.tree().len(), settled);
        let target = doc.get_element_by_id("dynamic-content").unwrap();
        assert_eq!(doc.text_content(target), "same");
    }

    #[test]
    fn test_remove_detaches() {
        let mut doc = page();
        let panel = remove_element_from_dom(&mut doc, "panel").unwrap();

        assert_eq!(doc.parent(panel), None);
        assert_eq!(doc.get_element_by_id("panel"), None);
        assert_eq!(remove_element_from_dom(&mut doc, "panel"), None);
    }

    #[test]
    fn test_simulate_click_accumulates() {
        let mut doc = page();
        let container = doc.get_element_by_id("panel").unwrap();
        for _ in 0..3 {
            simulate_click(&mut doc, "panel", "Button Clicked!").unwrap();
        }

        let paragraphs: Vec<NodeId> = doc.tree().children(container).map(|(id, _)| id).collect();
        assert_eq!(paragraphs.len(), 4);
        for &p in &paragraphs[1..] {
            assert_eq!(doc.tag_name(p), Some("p"));
            assert_eq!(doc.text_content(p), "Button Clicked!");
        }
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut doc = page();
        let before = doc.tree().len();

        assert_eq!(add_element_to_dom(&mut doc, "nope", "x"), None);
        assert_eq!(remove_element_from_dom(&mut doc, "nope"), None);
        assert_eq!(simulate_click(&mut doc, "nope", "x"), None);
        assert_eq!(doc.tree().len(), before);
    }
}
