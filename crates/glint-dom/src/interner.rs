//! String Interner
//!
//! Tag names, attribute names and class tokens repeat across a page, so
//! they are stored once and referenced by a 4-byte ID.

use std::collections::HashMap;

/// Interned string ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// Names every hydrated page touches.
const PRELUDE: &[&str] = &[
    "",
    "http://www.w3.org/1999/xhtml",
    "html", "head", "body", "div", "span", "i", "a", "img", "p", "li",
    "id", "class", "style", "src", "alt", "title", "data-icon",
];

/// Deduplicating string store
#[derive(Debug)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    /// Create an interner with the prelude names already present
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(64),
            map: HashMap::with_capacity(64),
        };
        for name in PRELUDE {
            interner.intern(name);
        }
        interner
    }

    /// Intern a string, returning the existing ID when already present
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.into());
        self.map.insert(s.into(), idx);
        InternedString(idx)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map(|s| &**s).unwrap_or("")
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
