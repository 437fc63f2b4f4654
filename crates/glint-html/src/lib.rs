//! Glint HTML
//!
//! HTML5 parsing built on html5ever, plus innerHTML/outerHTML serialization.

mod parser;
mod serializer;

pub use glint_dom::Document;
pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
