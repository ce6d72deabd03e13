#![forbid(unsafe_code)]

use crate::ds::KeyInfo;
use crate::xenc::{CipherData, EncryptionMethod};
use sigtuna_core::{ns, Result};
use sigtuna_xml::{element_children, optional_attribute, XmlElement, XmlNode};

/// The structure shared by `xenc:EncryptedData` and `xenc:EncryptedKey`.
///
/// Holds the mandatory `xenc:CipherData`, the optional method and key
/// info children, and the four optional attributes of the EncryptedType
/// schema type. The concrete element wrappers own the qualified name and
/// any extra fields.
///
/// Children outside this set (`xenc:EncryptionProperties`, foreign
/// markup) are dropped on parse rather than preserved as opaque chunks;
/// the EncryptedType content model is treated as closed, unlike the
/// extensible composites `ds:KeyInfo` and `ds:X509Data`. Serialization
/// therefore only ever emits children this type parsed or was built
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedType {
    cipher_data: CipherData,
    encryption_method: Option<EncryptionMethod>,
    key_info: Option<KeyInfo>,
    id: Option<String>,
    type_uri: Option<String>,
    mime_type: Option<String>,
    encoding: Option<String>,
}

impl EncryptedType {
    pub fn new(
        cipher_data: CipherData,
        encryption_method: Option<EncryptionMethod>,
        key_info: Option<KeyInfo>,
    ) -> Self {
        Self {
            cipher_data,
            encryption_method,
            key_info,
            id: None,
            type_uri: None,
            mime_type: None,
            encoding: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.type_uri = Some(type_uri.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn cipher_data(&self) -> &CipherData {
        &self.cipher_data
    }

    pub fn encryption_method(&self) -> Option<&EncryptionMethod> {
        self.encryption_method.as_ref()
    }

    pub fn key_info(&self) -> Option<&KeyInfo> {
        self.key_info.as_ref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn type_uri(&self) -> Option<&str> {
        self.type_uri.as_deref()
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Parse the shared attributes and children out of a concrete
    /// EncryptedData or EncryptedKey element. The caller has already
    /// checked the qualified name.
    pub(crate) fn parse_parts(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        let mut encryption_method = None;
        let mut key_info = None;
        let mut cipher_data = None;
        for child in element_children(node) {
            match (child.tag_name().namespace(), child.tag_name().name()) {
                (Some(ns::ENC), ns::node::ENCRYPTION_METHOD) => {
                    encryption_method = Some(EncryptionMethod::from_xml(child)?);
                }
                (Some(ns::DSIG), ns::node::KEY_INFO) => {
                    key_info = Some(KeyInfo::from_xml(child)?);
                }
                (Some(ns::ENC), ns::node::CIPHER_DATA) => {
                    cipher_data = Some(CipherData::from_xml(child)?);
                }
                _ => {}
            }
        }
        let cipher_data = cipher_data.ok_or_else(|| {
            sigtuna_core::Error::MalformedElement(format!(
                "{} requires a xenc:CipherData child",
                node.tag_name().name(),
            ))
        })?;

        let mut parsed = Self::new(cipher_data, encryption_method, key_info);
        parsed.id = optional_attribute(node, ns::attr::ID);
        parsed.type_uri = optional_attribute(node, ns::attr::TYPE);
        parsed.mime_type = optional_attribute(node, ns::attr::MIME_TYPE);
        parsed.encoding = optional_attribute(node, ns::attr::ENCODING);
        Ok(parsed)
    }

    /// Write the shared attributes onto the wrapper element.
    pub(crate) fn write_attrs(&self, e: &mut XmlNode) {
        if let Some(id) = &self.id {
            e.set_attribute(ns::attr::ID, id);
        }
        if let Some(type_uri) = &self.type_uri {
            e.set_attribute(ns::attr::TYPE, type_uri);
        }
        if let Some(mime_type) = &self.mime_type {
            e.set_attribute(ns::attr::MIME_TYPE, mime_type);
        }
        if let Some(encoding) = &self.encoding {
            e.set_attribute(ns::attr::ENCODING, encoding);
        }
    }

    /// Write EncryptionMethod, KeyInfo and CipherData in schema order.
    pub(crate) fn write_children(&self, e: &mut XmlNode) {
        if let Some(method) = &self.encryption_method {
            e.append(method.to_xml());
        }
        if let Some(key_info) = &self.key_info {
            e.append(key_info.to_xml());
        }
        e.append(self.cipher_data.to_xml());
    }
}
