//! Document - High-level document API

use crate::{CompoundSelector, DomTree, InlineStyle, InternedString, NodeId, SelectorError};
use url::Url;

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty `html > (head, body)` skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (document node only)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate `html`, `head` and `body` after the tree has been built
    pub fn finalize(&mut self) {
        let html = self.tree.children(self.tree.root())
            .find(|(id, _)| self.tree.tag_name(*id) == Some("html"))
            .map(|(id, _)| id);
        let Some(html) = html else {
            tracing::debug!("Document {} has no <html> element", self.url);
            return;
        };
        self.html_element = html;

        for (id, _) in self.tree.children(html) {
            match self.tree.tag_name(id) {
                Some("head") => self.head_element = id,
                Some("body") => self.body_element = id,
                _ => {}
            }
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Resolve a possibly relative reference against the document URL
    pub fn resolve_url(&self, reference: &str) -> Result<Url, url::ParseError> {
        match Url::parse(&self.url) {
            Ok(base) => base.join(reference),
            Err(_) => Url::parse(reference),
        }
    }

    /// Get document title
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }

        self.tree.children(self.head_element)
            .find(|(id, _)| self.tree.tag_name(*id) == Some("title"))
            .map(|(id, _)| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let target = self.tree.interner().lookup(id)?;
        self.find_element_with_id(target)
    }

    fn find_element_with_id(&self, target: InternedString) -> Option<NodeId> {
        self.tree.descendants(self.tree.root())
            .find(|(_, node)| node.as_element().is_some_and(|e| e.id == Some(target)))
            .map(|(id, _)| id)
    }

    /// All elements matching a compound selector, in document order
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = CompoundSelector::parse(selector)?;
        Ok(selector.select_all(&self.tree, self.tree.root()))
    }

    /// Check whether `node` has a descendant element with the given tag,
    /// ignoring template contents
    pub fn contains_element(&self, node: NodeId, tag: &str) -> bool {
        self.tree.descendants(node)
            .any(|(id, _)| {
                self.tree.tag_name(id).is_some_and(|t| t.eq_ignore_ascii_case(tag))
                    && !self.tree.in_template_contents(id)
            })
    }

    /// Parsed view of an element's `style` attribute
    pub fn style(&self, node: NodeId) -> InlineStyle {
        self.tree.get_attribute(node, "style")
            .map(InlineStyle::parse)
            .unwrap_or_default()
    }

    /// Read a single inline style property
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<String> {
        self.style(node).get(property).map(str::to_string)
    }

    /// Set a single inline style property, rewriting the `style` attribute
    pub fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) {
        let mut style = self.style(node);
        style.set(property, value);
        self.tree.set_attribute(node, "style", &style.to_string());
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
