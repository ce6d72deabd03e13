#![forbid(unsafe_code)]

use crate::xenc::EncryptedType;
use sigtuna_core::{ns, Result};
use sigtuna_xml::{XmlElement, XmlNode};

/// A `xenc:EncryptedData` element: encrypted content plus the metadata
/// needed to decrypt it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    inner: EncryptedType,
}

impl EncryptedData {
    pub fn new(inner: EncryptedType) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &EncryptedType {
        &self.inner
    }
}

impl std::ops::Deref for EncryptedData {
    type Target = EncryptedType;

    fn deref(&self) -> &EncryptedType {
        &self.inner
    }
}

impl XmlElement for EncryptedData {
    const NAMESPACE: &'static str = ns::ENC;
    const PREFIX: &'static str = ns::ENC_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::ENCRYPTED_DATA;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        Ok(Self::new(EncryptedType::parse_parts(node)?))
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        self.inner.write_attrs(&mut e);
        self.inner.write_children(&mut e);
        e
    }
}
