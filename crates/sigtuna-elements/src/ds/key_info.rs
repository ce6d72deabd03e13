#![forbid(unsafe_code)]

use crate::ds::{KeyName, KeyValue, RetrievalMethod, X509Data};
use crate::xenc::{EncryptedData, EncryptedKey};
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, optional_attribute, Chunk, XmlElement, XmlNode};

/// One child of a `ds:KeyInfo` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInfoEntry {
    KeyName(KeyName),
    KeyValue(KeyValue),
    RetrievalMethod(RetrievalMethod),
    X509Data(X509Data),
    EncryptedData(EncryptedData),
    EncryptedKey(EncryptedKey),
    /// Anything else: unknown names inside a recognized namespace, or
    /// truly foreign content.
    Other(Chunk),
}

impl KeyInfoEntry {
    /// The namespace this entry serializes under, used to split entries
    /// into the DSig group and the rest.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::KeyName(_)
            | Self::KeyValue(_)
            | Self::RetrievalMethod(_)
            | Self::X509Data(_) => Some(ns::DSIG),
            Self::EncryptedData(_) | Self::EncryptedKey(_) => Some(ns::ENC),
            Self::Other(chunk) => chunk.namespace(),
        }
    }

    fn to_xml(&self) -> XmlNode {
        match self {
            Self::KeyName(e) => e.to_xml(),
            Self::KeyValue(e) => e.to_xml(),
            Self::RetrievalMethod(e) => e.to_xml(),
            Self::X509Data(e) => e.to_xml(),
            Self::EncryptedData(e) => e.to_xml(),
            Self::EncryptedKey(e) => e.to_xml(),
            Self::Other(chunk) => chunk.to_xml(),
        }
    }
}

/// A `ds:KeyInfo` element.
///
/// Must contain at least one child. Children are stored in two groups:
/// DSig-namespaced entries first, everything else after; serialization
/// emits the groups back to back. The optional `Id` attribute is kept but
/// its uniqueness is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    dsig_elements: Vec<KeyInfoEntry>,
    elements: Vec<KeyInfoEntry>,
    id: Option<String>,
}

impl KeyInfo {
    pub fn new(info: Vec<KeyInfoEntry>, id: Option<String>) -> Result<Self> {
        if info.is_empty() {
            return Err(Error::InvalidArgument("ds:KeyInfo cannot be empty".into()));
        }

        let mut dsig_elements = Vec::new();
        let mut elements = Vec::new();
        for entry in info {
            if entry.namespace() == Some(ns::DSIG) {
                dsig_elements.push(entry);
            } else {
                elements.push(entry);
            }
        }

        Ok(Self {
            dsig_elements,
            elements,
            id,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// DSig-namespaced entries, in document order within the group.
    pub fn dsig_elements(&self) -> &[KeyInfoEntry] {
        &self.dsig_elements
    }

    /// All other entries, including XML-Enc and foreign content.
    pub fn elements(&self) -> &[KeyInfoEntry] {
        &self.elements
    }

    /// All entries in serialization order.
    pub fn info(&self) -> impl Iterator<Item = &KeyInfoEntry> {
        self.dsig_elements.iter().chain(&self.elements)
    }
}

impl XmlElement for KeyInfo {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::KEY_INFO;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let id = optional_attribute(node, ns::attr::ID);

        // Every child is classified; a foreign-namespace child never
        // terminates the scan, so later siblings always survive the
        // round trip.
        let mut info = Vec::new();
        for child in element_children(node) {
            let entry = match child.tag_name().namespace() {
                Some(ns::DSIG) => match child.tag_name().name() {
                    ns::node::KEY_NAME => KeyInfoEntry::KeyName(KeyName::from_xml(child)?),
                    ns::node::KEY_VALUE => KeyInfoEntry::KeyValue(KeyValue::from_xml(child)?),
                    ns::node::RETRIEVAL_METHOD => {
                        KeyInfoEntry::RetrievalMethod(RetrievalMethod::from_xml(child)?)
                    }
                    ns::node::X509_DATA => KeyInfoEntry::X509Data(X509Data::from_xml(child)?),
                    _ => KeyInfoEntry::Other(Chunk::from_node(child)),
                },
                Some(ns::ENC) => match child.tag_name().name() {
                    ns::node::ENCRYPTED_DATA => {
                        KeyInfoEntry::EncryptedData(EncryptedData::from_xml(child)?)
                    }
                    ns::node::ENCRYPTED_KEY => {
                        KeyInfoEntry::EncryptedKey(EncryptedKey::from_xml(child)?)
                    }
                    _ => KeyInfoEntry::Other(Chunk::from_node(child)),
                },
                _ => KeyInfoEntry::Other(Chunk::from_node(child)),
            };
            info.push(entry);
        }

        Self::new(info, id)
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        if let Some(id) = &self.id {
            e.set_attribute(ns::attr::ID, id);
        }
        for entry in self.info() {
            e.append(entry.to_xml());
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_xml::parse_document;

    const DSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";

    fn foreign_chunk(xml: &str) -> Chunk {
        let doc = roxmltree::Document::parse(xml).unwrap();
        Chunk::from_node(doc.root_element())
    }

    #[test]
    fn test_empty_key_info_rejected() {
        assert!(matches!(
            KeyInfo::new(Vec::new(), None).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        let xml = format!("<ds:KeyInfo xmlns:ds=\"{DSIG_NS}\"/>");
        let doc = parse_document(&xml).unwrap();
        assert!(KeyInfo::from_xml(doc.root_element()).is_err());
    }

    #[test]
    fn test_single_typed_child_suffices() {
        let key_info = KeyInfo::new(
            vec![KeyInfoEntry::KeyName(KeyName::new("testkey"))],
            Some("abc123".into()),
        )
        .unwrap();
        assert_eq!(key_info.id(), Some("abc123"));
        assert_eq!(key_info.dsig_elements().len(), 1);
        assert!(key_info.elements().is_empty());
    }

    #[test]
    fn test_single_foreign_child_suffices() {
        let chunk = foreign_chunk("<f:Key xmlns:f=\"urn:foreign\">x</f:Key>");
        let key_info = KeyInfo::new(vec![KeyInfoEntry::Other(chunk)], None).unwrap();
        assert!(key_info.dsig_elements().is_empty());
        assert_eq!(key_info.elements().len(), 1);
    }

    #[test]
    fn test_dispatch_by_namespace_and_name() {
        let xml = format!(
            "<ds:KeyInfo xmlns:ds=\"{DSIG_NS}\" Id=\"ki\">\
             <ds:KeyName>k1</ds:KeyName>\
             <ds:MgmtData>legacy</ds:MgmtData>\
             <f:Custom xmlns:f=\"urn:foreign\">x</f:Custom>\
             <ds:X509Data><ds:X509Certificate>MTIzNA==</ds:X509Certificate></ds:X509Data>\
             </ds:KeyInfo>"
        );
        let doc = parse_document(&xml).unwrap();
        let key_info = KeyInfo::from_xml(doc.root_element()).unwrap();

        // KeyName, unknown-DSig MgmtData and X509Data land in the DSig
        // group; the foreign child goes to the other group. The sibling
        // after the foreign child is not dropped.
        assert_eq!(key_info.dsig_elements().len(), 3);
        assert!(matches!(
            key_info.dsig_elements()[0],
            KeyInfoEntry::KeyName(_)
        ));
        assert!(matches!(key_info.dsig_elements()[1], KeyInfoEntry::Other(_)));
        assert!(matches!(
            key_info.dsig_elements()[2],
            KeyInfoEntry::X509Data(_)
        ));
        assert_eq!(key_info.elements().len(), 1);
    }

    #[test]
    fn test_serialization_groups_dsig_first() {
        let chunk = foreign_chunk("<f:Custom xmlns:f=\"urn:foreign\">x</f:Custom>");
        let key_info = KeyInfo::new(
            vec![
                KeyInfoEntry::Other(chunk),
                KeyInfoEntry::KeyName(KeyName::new("k1")),
            ],
            None,
        )
        .unwrap();
        let rendered = key_info.render();
        let key_name_at = rendered.find("ds:KeyName").unwrap();
        let custom_at = rendered.find("f:Custom").unwrap();
        assert!(key_name_at < custom_at);
    }

    #[test]
    fn test_round_trip() {
        let key_info = KeyInfo::new(
            vec![
                KeyInfoEntry::KeyName(KeyName::new("testkey")),
                KeyInfoEntry::Other(foreign_chunk(
                    "<f:Custom xmlns:f=\"urn:foreign\" a=\"1\"><f:Sub/></f:Custom>",
                )),
            ],
            Some("ki-1".into()),
        )
        .unwrap();

        let rendered = key_info.render();
        let doc = parse_document(&rendered).unwrap();
        let reparsed = KeyInfo::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.id(), Some("ki-1"));
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn test_encrypted_key_dispatch() {
        let xml = format!(
            "<ds:KeyInfo xmlns:ds=\"{DSIG_NS}\">\
             <xenc:EncryptedKey xmlns:xenc=\"http://www.w3.org/2001/04/xmlenc#\">\
             <xenc:CipherData><xenc:CipherValue>c2VjcmV0</xenc:CipherValue>\
             </xenc:CipherData></xenc:EncryptedKey></ds:KeyInfo>"
        );
        let doc = parse_document(&xml).unwrap();
        let key_info = KeyInfo::from_xml(doc.root_element()).unwrap();
        assert!(key_info.dsig_elements().is_empty());
        assert!(matches!(
            key_info.elements()[0],
            KeyInfoEntry::EncryptedKey(_)
        ));

        let rendered = key_info.render();
        let doc = parse_document(&rendered).unwrap();
        assert_eq!(KeyInfo::from_xml(doc.root_element()).unwrap().render(), rendered);
    }
}
