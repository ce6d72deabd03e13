#![forbid(unsafe_code)]

use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, required_attribute, Chunk, XmlElement, XmlNode};

/// A `xenc:EncryptionMethod` element.
///
/// Unlike `ds:SignatureMethod` there is no fixed whitelist here; the
/// algorithm URI only has to be non-empty. Children such as
/// `xenc:KeySize` or `xenc:OAEPparams` are kept opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionMethod {
    algorithm: String,
    elements: Vec<Chunk>,
}

impl EncryptionMethod {
    pub fn new(algorithm: impl Into<String>, elements: Vec<Chunk>) -> Result<Self> {
        let algorithm = algorithm.into();
        if algorithm.is_empty() {
            return Err(Error::InvalidArgument(
                "xenc:EncryptionMethod requires a non-empty Algorithm".into(),
            ));
        }
        Ok(Self {
            algorithm,
            elements,
        })
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn elements(&self) -> &[Chunk] {
        &self.elements
    }
}

impl XmlElement for EncryptionMethod {
    const NAMESPACE: &'static str = ns::ENC;
    const PREFIX: &'static str = ns::ENC_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::ENCRYPTION_METHOD;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let algorithm = required_attribute(node, ns::attr::ALGORITHM)?;
        let elements = element_children(node).map(Chunk::from_node).collect();
        Self::new(algorithm, elements)
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.set_attribute(ns::attr::ALGORITHM, &self.algorithm);
        for chunk in &self.elements {
            if chunk.is_empty_element() {
                continue;
            }
            e.append(chunk.to_xml());
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_core::algorithm;
    use sigtuna_xml::parse_document;

    #[test]
    fn test_marshalling() {
        let method = EncryptionMethod::new(algorithm::AES256_GCM, Vec::new()).unwrap();
        assert_eq!(
            method.render(),
            "<xenc:EncryptionMethod xmlns:xenc=\"http://www.w3.org/2001/04/xmlenc#\" \
             Algorithm=\"http://www.w3.org/2009/xmlenc11#aes256-gcm\"/>"
        );
    }

    #[test]
    fn test_empty_algorithm_rejected() {
        assert!(matches!(
            EncryptionMethod::new("", Vec::new()).unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_missing_algorithm_attribute() {
        let doc = parse_document(
            "<xenc:EncryptionMethod xmlns:xenc=\"http://www.w3.org/2001/04/xmlenc#\"/>",
        )
        .unwrap();
        assert!(matches!(
            EncryptionMethod::from_xml(doc.root_element()).unwrap_err(),
            Error::MissingAttribute(_)
        ));
    }

    #[test]
    fn test_children_preserved() {
        let xml = format!(
            "<xenc:EncryptionMethod xmlns:xenc=\"http://www.w3.org/2001/04/xmlenc#\" \
             Algorithm=\"{}\"><xenc:KeySize>256</xenc:KeySize></xenc:EncryptionMethod>",
            algorithm::AES256_CBC
        );
        let doc = parse_document(&xml).unwrap();
        let method = EncryptionMethod::from_xml(doc.root_element()).unwrap();
        assert_eq!(method.elements().len(), 1);
        assert_eq!(method.elements()[0].local_name(), "KeySize");

        let rendered = method.render();
        let doc = parse_document(&rendered).unwrap();
        let reparsed = EncryptionMethod::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.render(), rendered);
    }
}
