//! Comprehensive tests for glint-html
//!
//! Parsing edge cases and serialization of the resulting tree.

use glint_html::{parse, HtmlParser, HtmlSerializer};

fn body_html(html: &str) -> String {
    let doc = parse(html).unwrap();
    HtmlSerializer::new().serialize_inner(doc.tree(), doc.body())
}

#[test]
fn test_parse_empty() {
    let doc = HtmlParser::new().parse("").unwrap();
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
    assert!(doc.body().is_valid());
}

#[test]
fn test_parse_text_only() {
    let doc = parse("Hello World").unwrap();
    assert_eq!(doc.tree().text_content(doc.body()), "Hello World");
}

#[test]
fn test_parse_self_closing_tags() {
    assert_eq!(
        body_html(r#"<br><hr><img src="test.png"><input type="text">"#),
        r#"<br><hr><img src="test.png"><input type="text">"#
    );
}

#[test]
fn test_parse_malformed_html() {
    assert_eq!(
        body_html("<div><span class=icon data-icon=/a.png>x</div>"),
        r#"<div><span class="icon" data-icon="/a.png">x</span></div>"#
    );
}

#[test]
fn test_uppercase_tags_and_attrs_normalized() {
    assert_eq!(
        body_html(r#"<SPAN CLASS="icon" DATA-ICON="/A.png"></SPAN>"#),
        r#"<span class="icon" data-icon="/A.png"></span>"#
    );
}

#[test]
fn test_whitespace_text_round_trips() {
    assert_eq!(
        body_html("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>"),
        "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>"
    );
    assert_eq!(body_html("<p><b>Hello</b> <i>world</i></p>"), "<p><b>Hello</b> <i>world</i></p>");
    assert_eq!(body_html("<pre>  a\n   b</pre>"), "<pre>  a\n   b</pre>");
}

#[test]
fn test_template_contents_round_trip() {
    let html = r#"<template><span class="icon" data-icon="/t.png"></span></template>"#;
    let doc = parse(&format!("<body>{html}</body>")).unwrap();
    assert_eq!(HtmlSerializer::new().serialize_inner(doc.tree(), doc.body()), html);
}

#[test]
fn test_comments_preserved() {
    assert_eq!(body_html("<div><!-- icon --></div>"), "<div><!-- icon --></div>");
}

#[test]
fn test_document_url_and_title() {
    let doc = HtmlParser::new()
        .parse_with_url("<title> Icons </title>", "https://example.com/index.html")
        .unwrap();
    assert_eq!(doc.url(), "https://example.com/index.html");
    assert_eq!(doc.title(), "Icons");
}

#[test]
fn test_full_document_outer_html() {
    let html = "<!DOCTYPE html><html><head></head><body><p>x</p></body></html>";
    let doc = parse(html).unwrap();
    let tree = doc.tree();
    assert_eq!(HtmlSerializer::new().serialize_outer(tree, tree.root()), html);
}

#[test]
fn test_query_after_parse() {
    let doc = parse(r#"<i class="icon" data-icon="a"></i><i class="icon"></i><b class="icon" data-icon="b"></b>"#).unwrap();
    let found = doc.query_selector_all(".icon[data-icon]").unwrap();
    let srcs: Vec<&str> = found.iter().map(|&id| doc.tree().get_attribute(id, "data-icon").unwrap()).collect();
    assert_eq!(srcs, vec!["a", "b"]);
}
