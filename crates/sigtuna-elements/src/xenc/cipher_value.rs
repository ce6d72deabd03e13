#![forbid(unsafe_code)]

use crate::encoding::{decode_base64, is_plausible_base64};
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{XmlElement, XmlNode};

/// A `xenc:CipherValue` element: base64-encoded ciphertext.
///
/// Construction checks that the text is plausibly base64 without decoding;
/// [`CipherValue::decode`] produces the raw bytes on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherValue {
    value: String,
}

impl CipherValue {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() || !is_plausible_base64(&value) {
            return Err(Error::InvalidArgument(
                "xenc:CipherValue content is not base64".into(),
            ));
        }
        Ok(Self { value })
    }

    /// Encode raw ciphertext bytes into a new element.
    pub fn encode(data: &[u8]) -> Self {
        use base64::Engine;
        Self {
            value: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decode the ciphertext bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode_base64(&self.value)
    }
}

impl XmlElement for CipherValue {
    const NAMESPACE: &'static str = ns::ENC;
    const PREFIX: &'static str = ns::ENC_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::CIPHER_VALUE;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        Self::new(node.text().unwrap_or(""))
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.set_text(&self.value);
        e
    }
}
