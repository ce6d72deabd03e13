#![forbid(unsafe_code)]

use sigtuna_core::{algorithm, ns, Error, Result};
use sigtuna_xml::{element_children, required_attribute, Chunk, XmlElement, XmlNode};

/// A `ds:SignatureMethod` element.
///
/// The `Algorithm` attribute is restricted to the twelve RSA/HMAC
/// signature URIs in [`algorithm::SIGNATURE_METHODS`]; any other URI fails
/// construction. Child content is preserved opaquely; empty children are
/// skipped when serializing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMethod {
    algorithm: String,
    elements: Vec<Chunk>,
}

impl SignatureMethod {
    pub fn new(algorithm: impl Into<String>, elements: Vec<Chunk>) -> Result<Self> {
        let algorithm = algorithm.into();
        if !algorithm::SIGNATURE_METHODS.contains(&algorithm.as_str()) {
            return Err(Error::InvalidArgument(format!(
                "invalid signature method: {algorithm}"
            )));
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

impl XmlElement for SignatureMethod {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::SIGNATURE_METHOD;

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
            if !chunk.is_empty_element() {
                e.append(chunk.to_xml());
            }
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_xml::parse_document;

    #[test]
    fn test_all_supported_algorithms_accepted() {
        for uri in algorithm::SIGNATURE_METHODS {
            assert!(
                SignatureMethod::new(uri, Vec::new()).is_ok(),
                "rejected {uri}"
            );
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        for uri in [
            "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha256",
            "http://example.com/custom-sig",
            "",
        ] {
            let err = SignatureMethod::new(uri, Vec::new()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "accepted {uri}");
        }
    }

    #[test]
    fn test_marshalling() {
        let method = SignatureMethod::new(algorithm::RSA_SHA256, Vec::new()).unwrap();
        assert_eq!(
            method.render(),
            "<ds:SignatureMethod xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\" \
             Algorithm=\"http://www.w3.org/2001/04/xmldsig-more#rsa-sha256\"/>"
        );
    }

    #[test]
    fn test_round_trip_with_child_content() {
        let xml = "<ds:SignatureMethod xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\" \
                   Algorithm=\"http://www.w3.org/2000/09/xmldsig#hmac-sha1\">\
                   <ds:HMACOutputLength>128</ds:HMACOutputLength></ds:SignatureMethod>";
        let doc = parse_document(xml).unwrap();
        let method = SignatureMethod::from_xml(doc.root_element()).unwrap();
        assert_eq!(method.algorithm(), algorithm::HMAC_SHA1);
        assert_eq!(method.elements().len(), 1);

        let rendered = method.render();
        let doc = parse_document(&rendered).unwrap();
        let reparsed = SignatureMethod::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn test_empty_children_skipped() {
        let xml = "<ds:SignatureMethod xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\" \
                   Algorithm=\"http://www.w3.org/2000/09/xmldsig#rsa-sha1\">\
                   <ds:HMACOutputLength/></ds:SignatureMethod>";
        let doc = parse_document(xml).unwrap();
        let method = SignatureMethod::from_xml(doc.root_element()).unwrap();
        assert_eq!(method.elements().len(), 1);
        assert_eq!(
            method.render(),
            "<ds:SignatureMethod xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\" \
             Algorithm=\"http://www.w3.org/2000/09/xmldsig#rsa-sha1\"/>"
        );
    }

    #[test]
    fn test_missing_algorithm_attribute() {
        let doc =
            parse_document("<ds:SignatureMethod xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\"/>")
                .unwrap();
        let err = SignatureMethod::from_xml(doc.root_element()).unwrap_err();
        assert!(matches!(err, Error::MissingAttribute(_)));
    }
}
