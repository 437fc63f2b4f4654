//! Glint DOM - Document Object Model
//!
//! Arena-allocated DOM tree used by the icon hydrator.

mod interner;
mod node;
mod tree;
mod document;
mod query;
mod style;

pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use tree::{Children, Descendants, DomTree};
pub use document::Document;
pub use query::{AttrMatch, CompoundSelector, SelectorError};
pub use style::InlineStyle;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Null node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Qualified name (namespace + local name), both interned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualName {
    pub ns: InternedString,
    pub local: InternedString,
}

impl QualName {
    pub fn new(ns: InternedString, local: InternedString) -> Self {
        Self { ns, local }
    }
}

/// HTML namespace URI
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
