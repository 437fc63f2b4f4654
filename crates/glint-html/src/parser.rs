//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena DOM.

use crate::ParseError;
use glint_dom::{Document, DomTree, ElementData, Node, NodeData, NodeId, QualName};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root);
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node (and its subtree) into the arena under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                let name = tree.interner_mut().intern(name);
                let id = tree.push(Node::with_data(NodeData::Doctype {
                    name,
                    public_id: public_id.to_string(),
                    system_id: system_id.to_string(),
                }));
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let id = tree.create_text(&contents.borrow());
                tree.append_child(parent, id);
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, template_contents, .. } => {
                let ns = tree.interner_mut().intern(&name.ns);
                let local = tree.interner_mut().intern(&name.local);
                let mut elem = ElementData::new(QualName::new(ns, local));

                for attr in attrs.borrow().iter() {
                    let attr_ns = tree.interner_mut().intern(&attr.name.ns);
                    let attr_local = tree.interner_mut().intern(&attr.name.local);
                    let value = attr.value.to_string();

                    match &*attr.name.local {
                        "id" => elem.id = Some(tree.interner_mut().intern(&value)),
                        "class" => {
                            for class in value.split_whitespace() {
                                elem.classes.push(tree.interner_mut().intern(class));
                            }
                        }
                        _ => {}
                    }

                    elem.set_attr(QualName::new(attr_ns, attr_local), value);
                }

                let id = tree.push(Node::with_data(NodeData::Element(elem)));
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }

                // html5ever keeps <template> contents in a separate fragment
                if let Some(contents) = template_contents.borrow().as_ref() {
                    self.convert_node(contents, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { target, contents } => {
                let target = tree.interner_mut().intern(target);
                let id = tree.push(Node::with_data(NodeData::ProcessingInstruction {
                    target,
                    data: contents.to_string(),
                }));
                tree.append_child(parent, id);
            }
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
