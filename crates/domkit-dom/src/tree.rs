//! DOM Tree (arena-based allocation)
//!
//! Detaching only unlinks a node, so a `NodeId` stays valid for the
//! lifetime of the tree. The one exception is text that `set_text_content`
//! replaces: those text nodes go on a free list and their slots are handed
//! out again by `create_text`.

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    /// Text node slots released by `set_text_content`
    free_text: Vec<NodeId>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            free_text: Vec::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound(id))
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element after validating the tag name
    pub fn create_element(&mut self, tag: &str) -> DomResult<NodeId> {
        validate_tag_name(tag)?;
        Ok(self.push(Node::element(tag)))
    }

    /// Create a detached element without name checks.
    ///
    /// For tree builders whose tokenizer already produced a conforming name.
    pub fn create_parsed_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node, reusing a released slot if any
    pub fn create_text(&mut self, text: &str) -> NodeId {
        match self.free_text.pop() {
            Some(id) => {
                self.nodes[id.index()] = Node::text(text.to_string());
                id
            }
            None => self.push(Node::text(text.to_string())),
        }
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text.to_string()))
    }

    /// Element data, if `id` is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Mutable element data, if `id` is an element
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Element data or the matching error
    pub fn expect_element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType(id))
    }

    /// Parent of `id`, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// Iterate direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Pre-order walk of everything below `id` (excluding `id`)
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            let before = stack.len();
            stack.extend(self.children(current).map(|(c, _)| c));
            stack[before..].reverse();
            Some(current)
        })
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Check whether the node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.is_inclusive_ancestor(self.root(), id)
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.can_have_children() {
            return Err(DomError::HierarchyRequest("parent cannot have children"));
        }
        if matches!(self.node(child)?.data, NodeData::Document) {
            return Err(DomError::HierarchyRequest("document cannot be a child"));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest("child is an ancestor of parent"));
        }

        self.detach(child)?;
        self.link_last_child(parent, child);
        Ok(child)
    }

    /// Link a detached `child` after `parent`'s last child.
    ///
    /// Callers guarantee both ids exist and the hierarchy is valid.
    pub(crate) fn link_last_child(&mut self, parent: NodeId, child: NodeId) {
        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Unlink a node from its parent; no-op if already detached
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.node(id)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(t)) | Some(NodeData::Comment(t)) => t.clone(),
            Some(_) => self
                .descendants(id)
                .filter_map(|d| self.get(d).and_then(Node::as_text))
                .collect(),
            None => String::new(),
        }
    }

    /// Replace all children with a single text node (none for "").
    ///
    /// Text children removed here are recycled, so their ids must not be
    /// held across the call.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        match &mut self.node_mut(id)?.data {
            NodeData::Text(t) | NodeData::Comment(t) => {
                *t = text.to_string();
                return Ok(());
            }
            _ => {}
        }

        let children: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();

        // A lone text child is rewritten in place.
        if let [only] = children[..] {
            if !text.is_empty() {
                if let NodeData::Text(t) = &mut self.nodes[only.index()].data {
                    *t = text.to_string();
                    return Ok(());
                }
            }
        }

        for child in children {
            self.detach(child)?;
            if self.nodes[child.index()].is_text() {
                self.free_text.push(child);
            }
        }
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.link_last_child(id, text_node);
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

fn has_forbidden_char(name: &str, extra: &[char]) -> bool {
    name.chars()
        .any(|c| c.is_ascii_whitespace() || matches!(c, '\0' | '/' | '>' | '<') || extra.contains(&c))
}

/// Tag names must start with an ASCII letter
pub(crate) fn validate_tag_name(tag: &str) -> DomResult<()> {
    let starts_alpha = tag.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_alpha || has_forbidden_char(tag, &[]) {
        return Err(DomError::InvalidCharacter(tag.to_string()));
    }
    Ok(())
}

pub(crate) fn validate_attribute_name(name: &str) -> DomResult<()> {
    if name.is_empty() || has_forbidden_char(name, &['=', '"', '\'']) {
        return Err(DomError::InvalidCharacter(name.to_string()));
    }
    Ok(())
}
