//! domkit HTML loader
//!
//! Turns host page markup into a [`domkit_dom::Document`] using html5ever.

mod parser;

pub use parser::HtmlParser;

use domkit_dom::Document;

/// Parse an HTML string into a document at `about:blank`
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}
