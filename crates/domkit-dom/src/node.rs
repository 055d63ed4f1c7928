//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the owning arena rather
//! than through pointers, so the tree can be mutated without `Rc` cycles.

use crate::{DOMTokenList, NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a comment node
    pub fn comment(content: String) -> Self {
        Self::with_data(NodeData::Comment(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Elements and the document may hold children
    #[inline]
    pub fn can_have_children(&self) -> bool {
        matches!(self.data, NodeData::Element(_) | NodeData::Document)
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    tag: String,
    attrs: NamedNodeMap,
    class_list: DOMTokenList,
    /// Dirty form-control value; `None` falls back to the `value` attribute
    value: Option<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            class_list: DOMTokenList::new(),
            value: None,
        }
    }

    /// Lower-cased local name
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attrs
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    /// Set an attribute; `class` also re-tokenizes the class list
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.class_list = DOMTokenList::from_string(value);
        }
        self.attrs.set_attribute(name, value);
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        if name == "class" {
            self.class_list = DOMTokenList::new();
        }
        self.attrs.remove_named_item(name).is_some()
    }

    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        if name == "class" && !force.unwrap_or(!self.attrs.has_attribute(name)) {
            self.class_list = DOMTokenList::new();
        }
        self.attrs.toggle_attribute(name, force)
    }

    /// Cached `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attrs.get_attribute("id")
    }

    pub fn class_list(&self) -> &DOMTokenList {
        &self.class_list
    }

    /// Add a class and reflect it into the `class` attribute
    pub fn add_class(&mut self, token: &str) -> bool {
        let changed = self.class_list.add(token);
        self.sync_class_attribute();
        changed
    }

    /// Remove a class and reflect it into the `class` attribute
    pub fn remove_class(&mut self, token: &str) -> bool {
        let changed = self.class_list.remove(token);
        self.sync_class_attribute();
        changed
    }

    fn sync_class_attribute(&mut self) {
        // A missing attribute stays missing while the list is empty.
        if self.class_list.is_empty() && !self.attrs.has_attribute("class") {
            return;
        }
        let value = self.class_list.value();
        self.attrs.set_attribute("class", &value);
    }

    /// Current form-control value
    pub fn value(&self) -> &str {
        match &self.value {
            Some(v) => v,
            None => self.attrs.get_attribute("value").unwrap_or(""),
        }
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}
