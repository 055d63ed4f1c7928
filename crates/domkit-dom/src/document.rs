//! Document - High-level document API
//!
//! Wraps the arena tree with the platform-facing operations (id lookup,
//! attribute and class access, text content, form values) and owns the
//! event listeners registered against its nodes.

use crate::events::ListenerStore;
use crate::tree::validate_attribute_name;
use crate::{DOMTokenList, DomError, DomResult, DomTree, ElementData, Event, EventType, ListenerId, NodeId};
use std::rc::Rc;

/// Result of requesting a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A listener called `prevent_default`
    Prevented,
    /// Default action ran and was recorded as a navigation
    Navigated,
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    listeners: ListenerStore,
    navigations: Vec<NodeId>,
}

impl Document {
    /// Create a document with `html > head + body`
    pub fn new(url: &str) -> Self {
        let mut document = Self::empty(url);
        let tree = &mut document.tree;
        let html = tree.create_parsed_element("html");
        let head = tree.create_parsed_element("head");
        let body = tree.create_parsed_element("body");

        tree.link_last_child(NodeId::ROOT, html);
        tree.link_last_child(html, head);
        tree.link_last_child(html, body);

        document.finalize();
        document
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            listeners: ListenerStore::default(),
            navigations: Vec::new(),
        }
    }

    /// Locate html/head/body after a tree builder has filled the document
    pub fn finalize(&mut self) {
        self.html_element = self.child_with_tag(NodeId::ROOT, "html").unwrap_or(NodeId::NONE);
        self.head_element = self.child_with_tag(self.html_element, "head").unwrap_or(NodeId::NONE);
        self.body_element = self.child_with_tag(self.html_element, "body").unwrap_or(NodeId::NONE);
    }

    fn child_with_tag(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.tag_name() == tag))
            .map(|(id, _)| id)
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        self.html_element.to_option()
    }

    /// Get <head> element
    pub fn head(&self) -> Option<NodeId> {
        self.head_element.to_option()
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        self.body_element.to_option()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// First connected element, in tree order, whose `id` equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(self.tree.root())
            .find(|&node| self.tree.element(node).and_then(ElementData::id) == Some(id))
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> DomResult<NodeId> {
        self.tree.create_element(tag)
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.tree.create_text(text)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(parent, child)
    }

    /// Detach `node` from its parent (`Element.remove()`)
    pub fn remove(&mut self, node: NodeId) -> DomResult<()> {
        self.tree.detach(node)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.tree.is_connected(node)
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.tree.element(node).map(ElementData::tag_name)
    }

    /// Set an attribute; the name is validated and ASCII-lowercased
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        validate_attribute_name(name)?;
        let name = name.to_ascii_lowercase();
        self.tree.expect_element_mut(node)?.set_attribute(&name, value);
        Ok(())
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree
            .element(node)?
            .get_attribute(&name.to_ascii_lowercase())
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.get_attribute(node, name).is_some()
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.tree
            .element_mut(node)
            .is_some_and(|e| e.remove_attribute(&name))
    }

    /// Toggle a boolean attribute, returns whether it is now present
    pub fn toggle_attribute(&mut self, node: NodeId, name: &str, force: Option<bool>) -> DomResult<bool> {
        validate_attribute_name(name)?;
        let name = name.to_ascii_lowercase();
        Ok(self.tree.expect_element_mut(node)?.toggle_attribute(&name, force))
    }

    pub fn class_list(&self, node: NodeId) -> Option<&DOMTokenList> {
        self.tree.element(node).map(ElementData::class_list)
    }

    pub fn has_class(&self, node: NodeId, token: &str) -> bool {
        self.class_list(node).is_some_and(|list| list.contains(token))
    }

    /// `classList.add`
    pub fn add_class(&mut self, node: NodeId, token: &str) -> DomResult<bool> {
        Ok(self.tree.expect_element_mut(node)?.add_class(token))
    }

    /// `classList.remove`
    pub fn remove_class(&mut self, node: NodeId, token: &str) -> DomResult<bool> {
        Ok(self.tree.expect_element_mut(node)?.remove_class(token))
    }

    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        self.tree.set_text_content(node, text)
    }

    /// Form-control value
    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.tree.element(node).map(ElementData::value)
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) -> DomResult<()> {
        self.tree.expect_element_mut(node)?.set_value(value);
        Ok(())
    }

    /// Register a listener for `event_type` on `node`
    pub fn add_event_listener<F>(&mut self, node: NodeId, event_type: EventType, listener: F) -> ListenerId
    where
        F: Fn(&mut Document, &mut Event) + 'static,
    {
        let id = self.listeners.add(node, event_type, Rc::new(listener));
        tracing::trace!(%node, event = %event_type, ?id, "listener added");
        id
    }

    /// Unregister a listener; false if it was already gone
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self, node: NodeId, event_type: EventType) -> usize {
        self.listeners.count_for(node, event_type)
    }

    /// Run listeners on the target, then on its ancestors for bubbling events
    pub fn dispatch_event(&mut self, mut event: Event) -> Event {
        // The propagation path is fixed before any listener runs.
        let mut path = vec![event.target];
        if event.bubbles {
            let mut cursor = self.tree.parent(event.target);
            while let Some(node) = cursor {
                path.push(node);
                cursor = self.tree.parent(node);
            }
        }
        tracing::trace!(event = %event.event_type, target = %event.target, depth = path.len(), "dispatch");

        for node in path {
            event.current_target = Some(node);
            for (id, handler) in self.listeners.snapshot(node, event.event_type) {
                if !self.listeners.contains(id) {
                    continue;
                }
                handler(self, &mut event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        event.current_target = None;
        event
    }

    /// Simulate a user click, submitting the owning form for submit controls
    pub fn click(&mut self, node: NodeId) -> Event {
        let event = self.dispatch_event(Event::new(EventType::Click, node));
        if !event.is_default_prevented() && self.is_submit_control(node) {
            if let Some(form) = self.form_owner(node) {
                self.submit_form(form);
            }
        }
        event
    }

    /// `form.requestSubmit()`
    pub fn request_submit(&mut self, form: NodeId) -> DomResult<SubmitOutcome> {
        match self.tag_name(form) {
            Some("form") => Ok(self.submit_form(form)),
            Some(_) => Err(DomError::InvalidNodeType(form)),
            None => match self.tree.get(form) {
                Some(_) => Err(DomError::InvalidNodeType(form)),
                None => Err(DomError::NotFound(form)),
            },
        }
    }

    fn submit_form(&mut self, form: NodeId) -> SubmitOutcome {
        let event = self.dispatch_event(Event::new(EventType::Submit, form));
        if event.is_default_prevented() {
            SubmitOutcome::Prevented
        } else {
            tracing::debug!(%form, "form submission navigated");
            self.navigations.push(form);
            SubmitOutcome::Navigated
        }
    }

    /// Forms whose submission was not prevented, in order
    pub fn navigations(&self) -> &[NodeId] {
        &self.navigations
    }

    /// Fire `DOMContentLoaded` at the document node
    pub fn content_loaded(&mut self) -> Event {
        self.dispatch_event(Event::new(EventType::DOMContentLoaded, NodeId::ROOT))
    }

    /// Nearest ancestor `<form>`
    pub fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        let mut cursor = self.tree.parent(node);
        while let Some(current) = cursor {
            if self.tag_name(current) == Some("form") {
                return Some(current);
            }
            cursor = self.tree.parent(current);
        }
        None
    }

    /// Buttons default to `type=submit`; inputs must opt in
    pub fn is_submit_control(&self, node: NodeId) -> bool {
        let Some(elem) = self.tree.element(node) else {
            return false;
        };
        let kind = elem.get_attribute("type").map(str::to_ascii_lowercase);
        match elem.tag_name() {
            "button" => kind.as_deref().is_none_or(|t| t == "submit"),
            "input" => kind.as_deref() == Some("submit"),
            _ => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
