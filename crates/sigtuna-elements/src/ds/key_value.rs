#![forbid(unsafe_code)]

use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, Chunk, XmlElement, XmlNode};

/// A `ds:KeyValue` element: exactly one child carrying a raw public key
/// (RSAKeyValue, DSAKeyValue, or any other single element).
///
/// The child is kept opaque; decoding key material is a backend concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    value: Chunk,
}

impl KeyValue {
    pub fn new(value: Chunk) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Chunk {
        &self.value
    }
}

impl XmlElement for KeyValue {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::KEY_VALUE;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let mut children = element_children(node).map(Chunk::from_node);
        match (children.next(), children.next()) {
            (Some(value), None) => Ok(Self::new(value)),
            _ => Err(Error::MalformedElement(
                "ds:KeyValue must contain exactly one child element".into(),
            )),
        }
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.append(self.value.to_xml());
        e
    }
}
