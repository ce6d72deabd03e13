#![forbid(unsafe_code)]

//! Thin entry points over roxmltree.

use sigtuna_core::{Error, Result};

/// Parse an XML document.
pub fn parse_document(text: &str) -> Result<roxmltree::Document<'_>> {
    roxmltree::Document::parse(text).map_err(|e| Error::XmlParse(e.to_string()))
}

/// Find the first descendant element with the given namespace and local name.
pub fn find_element<'a>(
    doc: &'a roxmltree::Document<'a>,
    ns: &str,
    local_name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    doc.descendants().find(|n| {
        n.is_element()
            && n.tag_name().name() == local_name
            && n.tag_name().namespace().unwrap_or("") == ns
    })
}
