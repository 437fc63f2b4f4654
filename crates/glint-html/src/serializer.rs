//! HTML Serialization (innerHTML/outerHTML)
//!
//! Follows the HTML fragment serialization rules closely enough for
//! round-tripping hydrated markup: void elements get no end tag, raw text
//! elements are not escaped, and every attribute is written quoted.

use glint_dom::{DomTree, NodeData, NodeId};

/// HTML serializer
pub struct HtmlSerializer {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are written unescaped.
/// `noscript` is here because html5ever parses with scripting enabled.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_children(tree, node_id, &mut output, 0);
        output
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output, 0);
        output
    }

    fn newline(&self, output: &mut String, depth: usize) {
        if self.pretty_print && !output.is_empty() {
            output.push('\n');
            for _ in 0..depth {
                output.push_str(&self.indent);
            }
        }
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String, depth: usize) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                self.serialize_children(tree, node_id, output, depth);
            }
            NodeData::Element(elem) => {
                let tag = tree.resolve(elem.name.local);

                self.newline(output, depth);
                output.push('<');
                output.push_str(tag);
                for attr in &elem.attrs {
                    output.push(' ');
                    output.push_str(tree.resolve(attr.name.local));
                    output.push_str("=\"");
                    escape_attribute(&attr.value, output);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                if RAW_TEXT_ELEMENTS.contains(&tag) {
                    self.serialize_children_raw(tree, node_id, output);
                } else {
                    self.serialize_children(tree, node_id, output, depth + 1);
                    if tree.get(node.last_child).is_some_and(|n| n.is_element()) {
                        self.newline(output, depth);
                    }
                }

                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeData::Text(text) => {
                escape_text(&text.content, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            NodeData::Doctype { name, public_id, system_id } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(tree.resolve(*name));
                if !public_id.is_empty() {
                    output.push_str(" PUBLIC \"");
                    output.push_str(public_id);
                    output.push('"');
                    if !system_id.is_empty() {
                        output.push_str(" \"");
                        output.push_str(system_id);
                        output.push('"');
                    }
                } else if !system_id.is_empty() {
                    output.push_str(" SYSTEM \"");
                    output.push_str(system_id);
                    output.push('"');
                }
                output.push('>');
            }
            NodeData::ProcessingInstruction { target, data } => {
                output.push_str("<?");
                output.push_str(tree.resolve(*target));
                if !data.is_empty() {
                    output.push(' ');
                    output.push_str(data);
                }
                output.push('>');
            }
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String, depth: usize) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output, depth);
        }
    }

    fn serialize_children_raw(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (_, child) in tree.children(parent_id) {
            if let NodeData::Text(text) = &child.data {
                output.push_str(&text.content);
            }
        }
    }
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlParser;

    #[test]
    fn test_serialize_void_and_empty_attr() {
        let doc = HtmlParser::new()
            .parse(r#"<span class="icon"><img src="/a.png" alt=""></span>"#)
            .unwrap();
        let html = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
        assert_eq!(html, r#"<span class="icon"><img src="/a.png" alt=""></span>"#);
    }

    #[test]
    fn test_escaping() {
        let doc = HtmlParser::new()
            .parse(r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#)
            .unwrap();
        let html = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
        assert_eq!(html, r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#);
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let doc = HtmlParser::new()
            .parse("<body><script>if (a < b) {}</script></body>")
            .unwrap();
        let html = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
        assert_eq!(html, "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_noscript_fallback_not_escaped() {
        let doc = HtmlParser::new()
            .parse(r#"<body><noscript><img src="/fallback.png"></noscript><xmp><b>x</b></xmp></body>"#)
            .unwrap();
        let html = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
        assert_eq!(html, r#"<noscript><img src="/fallback.png"></noscript><xmp><b>x</b></xmp>"#);
    }

    #[test]
    fn test_legacy_doctype_ids_kept() {
        let html = concat!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
            "<html><head></head><body></body></html>",
        );
        let doc = HtmlParser::new().parse(html).unwrap();
        let tree = doc.tree();
        assert_eq!(HtmlSerializer::new().serialize_outer(tree, tree.root()), html);

        let doc = HtmlParser::new()
            .parse(r#"<!DOCTYPE html SYSTEM "about:legacy-compat"><p>x</p>"#)
            .unwrap();
        let out = HtmlSerializer::new().serialize_outer(doc.tree(), doc.tree().root());
        assert!(out.starts_with(r#"<!DOCTYPE html SYSTEM "about:legacy-compat"><html>"#));
    }

    #[test]
    fn test_pretty_print() {
        let doc = HtmlParser::new().parse("<div><span>x</span></div>").unwrap();
        let html = HtmlSerializer::pretty().serialize_inner(doc.tree(), doc.body());
        assert_eq!(html, "<div>\n  <span>x</span>\n</div>");
    }
}
