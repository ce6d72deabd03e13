#![forbid(unsafe_code)]

use crate::xenc::{CarriedKeyName, EncryptedType, ReferenceList};
use sigtuna_core::{ns, Result};
use sigtuna_xml::{element_children, optional_attribute, XmlElement, XmlNode};

/// A `xenc:EncryptedKey` element: a session key encrypted for transport,
/// extending the EncryptedType shape with `Recipient`, a reference list
/// and a carried key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedKey {
    inner: EncryptedType,
    recipient: Option<String>,
    reference_list: Option<ReferenceList>,
    carried_key_name: Option<CarriedKeyName>,
}

impl EncryptedKey {
    pub fn new(inner: EncryptedType) -> Self {
        Self {
            inner,
            recipient: None,
            reference_list: None,
            carried_key_name: None,
        }
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn with_reference_list(mut self, reference_list: ReferenceList) -> Self {
        self.reference_list = Some(reference_list);
        self
    }

    pub fn with_carried_key_name(mut self, name: CarriedKeyName) -> Self {
        self.carried_key_name = Some(name);
        self
    }

    pub fn inner(&self) -> &EncryptedType {
        &self.inner
    }

    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }

    pub fn reference_list(&self) -> Option<&ReferenceList> {
        self.reference_list.as_ref()
    }

    pub fn carried_key_name(&self) -> Option<&CarriedKeyName> {
        self.carried_key_name.as_ref()
    }
}

impl std::ops::Deref for EncryptedKey {
    type Target = EncryptedType;

    fn deref(&self) -> &EncryptedType {
        &self.inner
    }
}

impl XmlElement for EncryptedKey {
    const NAMESPACE: &'static str = ns::ENC;
    const PREFIX: &'static str = ns::ENC_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::ENCRYPTED_KEY;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let inner = EncryptedType::parse_parts(node)?;
        let recipient = optional_attribute(node, ns::attr::RECIPIENT);

        let mut reference_list = None;
        let mut carried_key_name = None;
        for child in element_children(node) {
            match (child.tag_name().namespace(), child.tag_name().name()) {
                (Some(ns::ENC), ns::node::REFERENCE_LIST) => {
                    reference_list = Some(ReferenceList::from_xml(child)?);
                }
                (Some(ns::ENC), ns::node::CARRIED_KEY_NAME) => {
                    carried_key_name = Some(CarriedKeyName::from_xml(child)?);
                }
                _ => {}
            }
        }

        Ok(Self {
            inner,
            recipient,
            reference_list,
            carried_key_name,
        })
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        self.inner.write_attrs(&mut e);
        if let Some(recipient) = &self.recipient {
            e.set_attribute(ns::attr::RECIPIENT, recipient);
        }
        self.inner.write_children(&mut e);
        if let Some(reference_list) = &self.reference_list {
            e.append(reference_list.to_xml());
        }
        if let Some(name) = &self.carried_key_name {
            e.append(name.to_xml());
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xenc::{
        CipherContent, CipherData, CipherValue, DataReference, EncryptionMethod,
    };
    use sigtuna_core::algorithm;
    use sigtuna_xml::parse_document;

    const ENC_NS: &str = "http://www.w3.org/2001/04/xmlenc#";

    fn cipher_data() -> CipherData {
        CipherData::new(CipherContent::Value(CipherValue::new("c2VjcmV0").unwrap()))
    }

    #[test]
    fn test_marshalling_full() {
        let key = EncryptedKey::new(
            EncryptedType::new(
                cipher_data(),
                Some(EncryptionMethod::new(algorithm::RSA_OAEP, Vec::new()).unwrap()),
                None,
            )
            .with_id("ek-1"),
        )
        .with_recipient("https://sp.example.org")
        .with_reference_list(
            ReferenceList::new(vec![DataReference::new("#ed1", Vec::new())], Vec::new())
                .unwrap(),
        )
        .with_carried_key_name(CarriedKeyName::new("session"));

        assert_eq!(
            key.render(),
            format!(
                "<xenc:EncryptedKey xmlns:xenc=\"{ENC_NS}\" Id=\"ek-1\" \
                 Recipient=\"https://sp.example.org\">\
                 <xenc:EncryptionMethod Algorithm=\"{}\"/>\
                 <xenc:CipherData><xenc:CipherValue>c2VjcmV0</xenc:CipherValue>\
                 </xenc:CipherData>\
                 <xenc:ReferenceList><xenc:DataReference URI=\"#ed1\"/>\
                 </xenc:ReferenceList>\
                 <xenc:CarriedKeyName>session</xenc:CarriedKeyName>\
                 </xenc:EncryptedKey>",
                algorithm::RSA_OAEP
            )
        );
    }

    #[test]
    fn test_unmarshalling() {
        let xml = format!(
            "<xenc:EncryptedKey xmlns:xenc=\"{ENC_NS}\" Recipient=\"r1\">\
             <xenc:CipherData><xenc:CipherValue>c2VjcmV0</xenc:CipherValue>\
             </xenc:CipherData>\
             <xenc:CarriedKeyName>session</xenc:CarriedKeyName></xenc:EncryptedKey>"
        );
        let doc = parse_document(&xml).unwrap();
        let key = EncryptedKey::from_xml(doc.root_element()).unwrap();
        assert_eq!(key.recipient(), Some("r1"));
        assert_eq!(key.carried_key_name().unwrap().value(), "session");
        assert!(key.reference_list().is_none());

        let rendered = key.render();
        let doc = parse_document(&rendered).unwrap();
        let reparsed = EncryptedKey::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn test_cipher_data_required() {
        let xml = format!("<xenc:EncryptedKey xmlns:xenc=\"{ENC_NS}\" Recipient=\"r1\"/>");
        let doc = parse_document(&xml).unwrap();
        assert!(EncryptedKey::from_xml(doc.root_element()).is_err());
    }
}
