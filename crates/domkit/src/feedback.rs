//! Error Display
//!
//! Inline error messages whose visibility lives entirely on the element.
//! How "visible" maps onto markup is a [`Presentation`]; the default is the
//! `hidden` class marker the host stylesheet hides.

use domkit_dom::{Document, DomResult, NodeId};

/// Maps a boolean visibility onto an element
pub trait Presentation {
    fn set_visible(&self, doc: &mut Document, node: NodeId, visible: bool) -> DomResult<()>;

    fn is_visible(&self, doc: &Document, node: NodeId) -> bool;
}

/// Visibility through the presence of a CSS class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMarker {
    class: String,
}

impl ClassMarker {
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into() }
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Default for ClassMarker {
    fn default() -> Self {
        Self::new("hidden")
    }
}

impl Presentation for ClassMarker {
    fn set_visible(&self, doc: &mut Document, node: NodeId, visible: bool) -> DomResult<()> {
        if visible {
            doc.remove_class(node, &self.class)?;
        } else {
            doc.add_class(node, &self.class)?;
        }
        Ok(())
    }

    fn is_visible(&self, doc: &Document, node: NodeId) -> bool {
        !doc.has_class(node, &self.class)
    }
}

/// Visibility through the HTML `hidden` attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HiddenAttribute;

impl Presentation for HiddenAttribute {
    fn set_visible(&self, doc: &mut Document, node: NodeId, visible: bool) -> DomResult<()> {
        doc.toggle_attribute(node, "hidden", Some(!visible))?;
        Ok(())
    }

    fn is_visible(&self, doc: &Document, node: NodeId) -> bool {
        !doc.has_attribute(node, "hidden")
    }
}

/// Show/clear an error message on an element found by id
#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay<P = ClassMarker> {
    presentation: P,
}

impl<P: Presentation> ErrorDisplay<P> {
    pub fn new(presentation: P) -> Self {
        Self { presentation }
    }

    /// Set the message and make the element visible
    pub fn show(&self, doc: &mut Document, element_id: &str, message: &str) -> Option<NodeId> {
        let Some(node) = doc.get_element_by_id(element_id) else {
            tracing::trace!(element_id, "display_error: no such element");
            return None;
        };
        doc.set_text_content(node, message).ok()?;
        self.presentation.set_visible(doc, node, true).ok()?;
        Some(node)
    }

    /// Empty the message and hide the element
    pub fn clear(&self, doc: &mut Document, element_id: &str) -> Option<NodeId> {
        let Some(node) = doc.get_element_by_id(element_id) else {
            tracing::trace!(element_id, "clear_error: no such element");
            return None;
        };
        doc.set_text_content(node, "").ok()?;
        self.presentation.set_visible(doc, node, false).ok()?;
        Some(node)
    }

    /// `None` when no element has that id
    pub fn is_visible(&self, doc: &Document, element_id: &str) -> Option<bool> {
        let node = doc.get_element_by_id(element_id)?;
        Some(self.presentation.is_visible(doc, node))
    }
}

/// Show `message` in `#element_id` and drop its `hidden` class
pub fn display_error(doc: &mut Document, element_id: &str, message: &str) -> Option<NodeId> {
    ErrorDisplay::<ClassMarker>::default().show(doc, element_id, message)
}

/// Empty `#element_id` and add its `hidden` class back
pub fn clear_error(doc: &mut Document, element_id: &str) -> Option<NodeId> {
    ErrorDisplay::<ClassMarker>::default().clear(doc, element_id)
}
