//! Inline style declarations
//!
//! Parsed view of an element's `style` attribute. The attribute stays the
//! source of truth: reads parse it, writes serialize back into it.

use std::fmt;

/// Ordered `property: value` declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value. Malformed declarations are dropped.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        for decl in text.split(';') {
            let Some((property, value)) = decl.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            style.set(property, value);
        }
        style
    }

    /// Get a property value (property names are case-insensitive)
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, keeping its original position if already declared
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(decl) => decl.1 = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}
