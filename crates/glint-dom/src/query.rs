//! Element queries
//!
//! Compound selectors such as `span.icon[data-icon]`. Combinators are not
//! supported; matching walks the tree in document order.

use crate::{DomTree, NodeId};

/// Selector parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("expected a name at offset {offset}")]
    ExpectedName { offset: usize },

    #[error("unterminated attribute selector")]
    UnterminatedAttr,
}

/// Attribute condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    /// `[name]`
    Exists(String),
    /// `[name=value]`
    Equals(String, String),
}

/// A single compound selector: optional tag, then any mix of `.class`,
/// `#id` and `[attr]` parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrMatch>,
}

impl CompoundSelector {
    /// Selector for elements with `class` that declare `attr`
    pub fn class_with_attr(class: &str, attr: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            attrs: vec![AttrMatch::Exists(attr.to_string())],
            ..Default::default()
        }
    }

    /// Parse a compound selector string
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut cursor = Cursor { input, pos: 0 };
        let mut selector = Self::default();

        if cursor.eat('*') {
            // universal: no tag constraint
        } else if cursor.peek().is_some_and(is_name_char) {
            selector.tag = Some(cursor.name()?.to_ascii_lowercase());
        }

        while let Some(c) = cursor.peek() {
            match c {
                '.' => {
                    cursor.bump();
                    selector.classes.push(cursor.name()?.to_string());
                }
                '#' => {
                    cursor.bump();
                    selector.id = Some(cursor.name()?.to_string());
                }
                '[' => {
                    cursor.bump();
                    selector.attrs.push(cursor.attr()?);
                }
                other => {
                    return Err(SelectorError::UnexpectedChar { found: other, offset: cursor.pos });
                }
            }
        }

        Ok(selector)
    }

    /// Check whether an element matches every part of the selector
    pub fn matches(&self, tree: &DomTree, id: NodeId) -> bool {
        let Some(elem) = tree.get(id).and_then(|n| n.as_element()) else {
            return false;
        };

        if let Some(tag) = &self.tag {
            if !tree.resolve(elem.name.local).eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(want) = &self.id {
            if elem.id.map(|i| tree.resolve(i)) != Some(want.as_str()) {
                return false;
            }
        }

        for class in &self.classes {
            match tree.interner().lookup(class) {
                Some(interned) if elem.has_class(interned) => {}
                _ => return false,
            }
        }

        self.attrs.iter().all(|cond| match cond {
            AttrMatch::Exists(name) => tree.get_attribute(id, name).is_some(),
            AttrMatch::Equals(name, value) => tree.get_attribute(id, name) == Some(value.as_str()),
        })
    }

    /// All matching descendants of `root`, in document order.
    /// Template contents are skipped.
    pub fn select_all(&self, tree: &DomTree, root: NodeId) -> Vec<NodeId> {
        tree.descendants(root)
            .filter(|(id, node)| node.is_element() && self.matches(tree, *id))
            .filter(|(id, _)| !tree.in_template_contents(*id))
            .map(|(id, _)| id)
            .collect()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn name(&mut self) -> Result<&'a str, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        if start == self.pos {
            return Err(SelectorError::ExpectedName { offset: start });
        }
        let input = self.input;
        Ok(&input[start..self.pos])
    }

    /// Parse the rest of `[name]` or `[name=value]` after the opening bracket
    fn attr(&mut self) -> Result<AttrMatch, SelectorError> {
        self.skip_ws();
        let name = self.name()?.to_ascii_lowercase();
        self.skip_ws();

        match self.bump() {
            Some(']') => Ok(AttrMatch::Exists(name)),
            Some('=') => {
                self.skip_ws();
                let value = match self.peek() {
                    Some(q @ ('"' | '\'')) => {
                        self.bump();
                        let start = self.pos;
                        while self.peek().is_some_and(|c| c != q) {
                            self.bump();
                        }
                        let input = self.input;
                        let value = &input[start..self.pos];
                        if !self.eat(q) {
                            return Err(SelectorError::UnterminatedAttr);
                        }
                        value
                    }
                    _ => self.name()?,
                };
                self.skip_ws();
                if !self.eat(']') {
                    return Err(SelectorError::UnterminatedAttr);
                }
                Ok(AttrMatch::Equals(name, value.to_string()))
            }
            Some(found) => Err(SelectorError::UnexpectedChar { found, offset: self.pos - found.len_utf8() }),
            None => Err(SelectorError::UnterminatedAttr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        let sel = CompoundSelector::parse("span.icon.big#logo[data-icon]").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("span"));
        assert_eq!(sel.id.as_deref(), Some("logo"));
        assert_eq!(sel.classes, vec!["icon", "big"]);
        assert_eq!(sel.attrs, vec![AttrMatch::Exists("data-icon".to_string())]);
    }

    #[test]
    fn test_parse_attr_value() {
        let sel = CompoundSelector::parse(r#"[type="text"]"#).unwrap();
        assert_eq!(sel.attrs, vec![AttrMatch::Equals("type".to_string(), "text".to_string())]);

        let sel = CompoundSelector::parse("[role=img]").unwrap();
        assert_eq!(sel.attrs, vec![AttrMatch::Equals("role".to_string(), "img".to_string())]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(CompoundSelector::parse("  "), Err(SelectorError::Empty));
        assert!(matches!(CompoundSelector::parse("div span"), Err(SelectorError::UnexpectedChar { found: ' ', .. })));
        assert!(matches!(CompoundSelector::parse("."), Err(SelectorError::ExpectedName { .. })));
        assert_eq!(CompoundSelector::parse("[data-icon"), Err(SelectorError::UnterminatedAttr));
    }

    #[test]
    fn test_universal() {
        let sel = CompoundSelector::parse("*").unwrap();
        assert_eq!(sel, CompoundSelector::default());
    }

    #[test]
    fn test_matches_class_with_attr() {
        let mut tree = DomTree::new();
        let a = tree.create_element("span");
        let b = tree.create_element("span");
        tree.append_child(tree.root(), a);
        tree.append_child(tree.root(), b);
        tree.set_attribute(a, "class", "icon");
        tree.set_attribute(a, "data-icon", "/a.png");
        tree.set_attribute(b, "class", "icon");

        let sel = CompoundSelector::class_with_attr("icon", "data-icon");
        assert!(sel.matches(&tree, a));
        assert!(!sel.matches(&tree, b));
        assert_eq!(sel.select_all(&tree, tree.root()), vec![a]);
    }
}
