#![forbid(unsafe_code)]

//! Opaque wrapper preserving unrecognized XML markup for round-tripping.

use crate::node::{XmlChild, XmlNode};

/// An arbitrary XML element kept verbatim.
///
/// Composite elements wrap any child they do not recognize in a `Chunk` so
/// that foreign content survives a parse/serialize round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    node: XmlNode,
}

impl Chunk {
    /// Wrap an already-owned element.
    pub fn new(node: XmlNode) -> Self {
        Self { node }
    }

    /// Capture a parsed element, including all of its attributes and
    /// descendants.
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            node: XmlNode::from_node(node),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.node.namespace()
    }

    pub fn local_name(&self) -> &str {
        self.node.local_name()
    }

    pub fn node(&self) -> &XmlNode {
        &self.node
    }

    /// Emptiness rule for opaque content: an element with no attributes
    /// and no child nodes other than whitespace text. Composites that skip
    /// empty extension content during serialization use this predicate.
    pub fn is_empty_element(&self) -> bool {
        self.node.attributes().is_empty()
            && self
                .node
                .children()
                .iter()
                .all(|c| matches!(c, XmlChild::Text(t) if t.trim().is_empty()))
    }

    pub fn to_xml(&self) -> XmlNode {
        self.node.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(xml: &str) -> Chunk {
        let doc = roxmltree::Document::parse(xml).unwrap();
        Chunk::from_node(doc.root_element())
    }

    #[test]
    fn test_capture_preserves_markup() {
        let xml = "<f:Thing xmlns:f=\"urn:foreign\" a=\"1\"><f:Sub>text</f:Sub></f:Thing>";
        let c = chunk(xml);
        assert_eq!(c.namespace(), Some("urn:foreign"));
        assert_eq!(c.local_name(), "Thing");
        assert_eq!(c.to_xml().render(), xml);
    }

    #[test]
    fn test_empty_element_predicate() {
        assert!(chunk("<a/>").is_empty_element());
        assert!(chunk("<a>  </a>").is_empty_element());
        assert!(!chunk("<a b=\"c\"/>").is_empty_element());
        assert!(!chunk("<a>text</a>").is_empty_element());
        assert!(!chunk("<a><b/></a>").is_empty_element());
    }
}
