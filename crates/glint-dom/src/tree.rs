//! DOM Tree (arena-based allocation)
//!
//! Nodes live in a single `Vec` and never move. Removing a node only
//! unlinks it, so ids handed out earlier stay valid for the tree's lifetime.

use crate::{HTML_NAMESPACE, InternedString, Node, NodeData, NodeId, QualName, StringInterner};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    pub(crate) nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
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

    /// Number of nodes ever allocated, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    /// Move a detached node into the arena
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached HTML element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let ns = self.interner.intern(HTML_NAMESPACE);
        let local = self.interner.intern(&tag.to_ascii_lowercase());
        self.push(Node::element(QualName::new(ns, local)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// An attached child is detached from its old parent first. Invalid ids
    /// and appends that would create a cycle are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || self.is_inclusive_ancestor(child, parent) {
            return;
        }
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = node;
        while let Some(n) = self.get(cur) {
            if cur == ancestor {
                return true;
            }
            cur = n.parent;
        }
        false
    }

    /// Check whether `id` sits inside a `<template>` element's contents.
    ///
    /// Template contents are kept in the tree for serialization but are
    /// inert: selectors and element lookups don't see them.
    pub fn in_template_contents(&self, id: NodeId) -> bool {
        let mut cur = self.get(id).map_or(NodeId::NONE, |n| n.parent);
        while let Some(n) = self.get(cur) {
            if self.tag_name(cur) == Some("template") {
                return true;
            }
            cur = n.parent;
        }
        false
    }

    /// Unlink a node from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
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
    }

    /// Detach every child of `parent` (`innerHTML = ''`). Returns how many were removed.
    pub fn remove_children(&mut self, parent: NodeId) -> usize {
        let mut removed = 0;
        while let Some(first) = self.get(parent).map(|n| n.first_child).filter(|c| c.is_valid()) {
            self.detach(first);
            removed += 1;
        }
        removed
    }

    /// Iterate the direct children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate every descendant of `root` in document order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root,
            next: self.get(root).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Lowercase local name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.resolve(elem.name.local))
    }

    /// Read an attribute by name
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(name)?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Set an attribute, keeping the id and class caches in step
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let ns = self.interner.intern("");
        let local = self.interner.intern(name);
        let cached_id = (name == "id").then(|| self.interner.intern(value));
        let classes: Option<Vec<InternedString>> = (name == "class").then(|| {
            value.split_whitespace().map(|c| self.interner.intern(c)).collect()
        });

        let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) else {
            return;
        };
        if cached_id.is_some() {
            elem.id = cached_id;
        }
        if let Some(classes) = classes {
            elem.classes = classes;
        }
        elem.set_attr(QualName::new(ns, local), value.to_string());
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|(_, node)| match &node.data {
                NodeData::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
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
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order (document order) iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl<'a> Descendants<'a> {
    fn advance(&self, from: NodeId) -> NodeId {
        let Some(node) = self.tree.get(from) else {
            return NodeId::NONE;
        };
        if node.first_child.is_valid() {
            return node.first_child;
        }

        let mut cur = from;
        while cur != self.root {
            let Some(node) = self.tree.get(cur) else {
                break;
            };
            if node.next_sibling.is_valid() {
                return node.next_sibling;
            }
            cur = node.parent;
        }
        NodeId::NONE
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = self.advance(id);
        Some((id, node))
    }
}
