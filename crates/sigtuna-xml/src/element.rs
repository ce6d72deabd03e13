#![forbid(unsafe_code)]

//! The parse/serialize contract every XML-mapped type implements.

use crate::node::XmlNode;
use sigtuna_core::{Error, Result};

/// Contract for types that map to a single XML element.
///
/// `from_xml` either produces a fully valid value or fails; no
/// partially-constructed value escapes. `to_xml` is pure tree construction
/// with no side effects, so `render(from_xml(x)) == x` byte-for-byte
/// whenever `x` was itself produced by [`XmlElement::render`].
pub trait XmlElement: Sized {
    const NAMESPACE: &'static str;
    const PREFIX: &'static str;
    const LOCAL_NAME: &'static str;

    /// Parse a value out of an XML element.
    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self>;

    /// Serialize to a detached element. Attach with [`XmlNode::append`].
    fn to_xml(&self) -> XmlNode;

    /// Check that a node carries this type's qualified name.
    fn expect_element(node: &roxmltree::Node<'_, '_>) -> Result<()> {
        let tag = node.tag_name();
        if tag.name() != Self::LOCAL_NAME {
            return Err(Error::MalformedElement(format!(
                "expected {}:{}, got local name \"{}\"",
                Self::PREFIX,
                Self::LOCAL_NAME,
                tag.name(),
            )));
        }
        if tag.namespace() != Some(Self::NAMESPACE) {
            return Err(Error::MalformedElement(format!(
                "expected namespace \"{}\" on {}, got \"{}\"",
                Self::NAMESPACE,
                Self::LOCAL_NAME,
                tag.namespace().unwrap_or(""),
            )));
        }
        Ok(())
    }

    /// A fresh element under this type's qualified name.
    fn element() -> XmlNode {
        XmlNode::new(Some(Self::NAMESPACE), Some(Self::PREFIX), Self::LOCAL_NAME)
    }

    /// Serialize to a string.
    fn render(&self) -> String {
        self.to_xml().render()
    }
}

/// Fetch a mandatory attribute.
pub fn required_attribute(node: roxmltree::Node<'_, '_>, name: &str) -> Result<String> {
    node.attribute(name).map(str::to_owned).ok_or_else(|| {
        Error::MissingAttribute(format!(
            "{} on {}",
            name,
            node.tag_name().name()
        ))
    })
}

/// Fetch an optional attribute.
pub fn optional_attribute(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_owned)
}

/// Direct child elements in document order, skipping text and comments.
pub fn element_children<'a, 'input: 'a>(
    node: roxmltree::Node<'a, 'input>,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}
