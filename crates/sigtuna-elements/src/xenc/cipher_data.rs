#![forbid(unsafe_code)]

use crate::xenc::CipherValue;
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, Chunk, XmlElement, XmlNode};

/// The payload of a `xenc:CipherData` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherContent {
    /// Inline base64 ciphertext.
    Value(CipherValue),
    /// A `xenc:CipherReference` pointing at external ciphertext. Kept
    /// opaque; dereferencing is out of scope.
    Reference(Chunk),
}

/// A `xenc:CipherData` element: exactly one `xenc:CipherValue` or
/// `xenc:CipherReference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherData {
    content: CipherContent,
}

impl CipherData {
    pub fn new(content: CipherContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &CipherContent {
        &self.content
    }

    /// The inline cipher value, if this is not a reference.
    pub fn cipher_value(&self) -> Option<&CipherValue> {
        match &self.content {
            CipherContent::Value(value) => Some(value),
            CipherContent::Reference(_) => None,
        }
    }
}

impl XmlElement for CipherData {
    const NAMESPACE: &'static str = ns::ENC;
    const PREFIX: &'static str = ns::ENC_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::CIPHER_DATA;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let child = element_children(node).next().ok_or_else(|| {
            Error::MalformedElement(
                "xenc:CipherData requires a CipherValue or CipherReference child".into(),
            )
        })?;

        let content = if child.tag_name().namespace() == Some(ns::ENC)
            && child.tag_name().name() == ns::node::CIPHER_VALUE
        {
            CipherContent::Value(CipherValue::from_xml(child)?)
        } else if child.tag_name().namespace() == Some(ns::ENC)
            && child.tag_name().name() == ns::node::CIPHER_REFERENCE
        {
            CipherContent::Reference(Chunk::from_node(child))
        } else {
            return Err(Error::MalformedElement(format!(
                "unexpected child \"{}\" in xenc:CipherData",
                child.tag_name().name(),
            )));
        };
        Ok(Self::new(content))
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        match &self.content {
            CipherContent::Value(value) => e.append(value.to_xml()),
            CipherContent::Reference(chunk) => e.append(chunk.to_xml()),
        }
        e
    }
}
