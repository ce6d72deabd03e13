#![forbid(unsafe_code)]

use crate::ds::{X509Certificate, X509IssuerSerial, X509SubjectName};
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, Chunk, XmlElement, XmlNode};

/// One entry of a `ds:X509Data` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum X509DataEntry {
    Certificate(X509Certificate),
    IssuerSerial(X509IssuerSerial),
    SubjectName(X509SubjectName),
    /// Any other child, including unknown DSig-namespaced names.
    Other(Chunk),
}

impl X509DataEntry {
    fn to_xml(&self) -> XmlNode {
        match self {
            Self::Certificate(c) => c.to_xml(),
            Self::IssuerSerial(i) => i.to_xml(),
            Self::SubjectName(s) => s.to_xml(),
            Self::Other(chunk) => chunk.to_xml(),
        }
    }
}

/// A `ds:X509Data` element.
///
/// Entries are stored in document order and re-serialize interleaved
/// exactly as parsed. At least one entry is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509Data {
    data: Vec<X509DataEntry>,
}

impl X509Data {
    pub fn new(data: Vec<X509DataEntry>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::InvalidArgument("ds:X509Data cannot be empty".into()));
        }
        Ok(Self { data })
    }

    pub fn data(&self) -> &[X509DataEntry] {
        &self.data
    }
}

impl XmlElement for X509Data {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::X509_DATA;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;

        let mut data = Vec::new();
        for child in element_children(node) {
            let entry = if child.tag_name().namespace() == Some(ns::DSIG) {
                match child.tag_name().name() {
                    ns::node::X509_CERTIFICATE => {
                        X509DataEntry::Certificate(X509Certificate::from_xml(child)?)
                    }
                    ns::node::X509_ISSUER_SERIAL => {
                        X509DataEntry::IssuerSerial(X509IssuerSerial::from_xml(child)?)
                    }
                    ns::node::X509_SUBJECT_NAME => {
                        X509DataEntry::SubjectName(X509SubjectName::from_xml(child)?)
                    }
                    _ => X509DataEntry::Other(Chunk::from_node(child)),
                }
            } else {
                X509DataEntry::Other(Chunk::from_node(child))
            };
            data.push(entry);
        }

        Self::new(data)
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        for entry in &self.data {
            e.append(entry.to_xml());
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_xml::parse_document;

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            X509Data::new(Vec::new()).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        let doc =
            parse_document("<ds:X509Data xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\"/>")
                .unwrap();
        assert!(X509Data::from_xml(doc.root_element()).is_err());
    }

    #[test]
    fn test_dispatch_and_document_order() {
        let xml = "<ds:X509Data xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\">\
                   <ds:X509SubjectName>CN=test</ds:X509SubjectName>\
                   <ds:X509SKI>MTIzNA==</ds:X509SKI>\
                   <ds:X509Certificate>MTIzNDU2Nzg=</ds:X509Certificate></ds:X509Data>";
        let doc = parse_document(xml).unwrap();
        let x509_data = X509Data::from_xml(doc.root_element()).unwrap();

        assert_eq!(x509_data.data().len(), 3);
        assert!(matches!(x509_data.data()[0], X509DataEntry::SubjectName(_)));
        // Unknown DSig-namespaced name stays opaque, not an error.
        assert!(matches!(x509_data.data()[1], X509DataEntry::Other(_)));
        assert!(matches!(x509_data.data()[2], X509DataEntry::Certificate(_)));

        let rendered = x509_data.render();
        let doc = parse_document(&rendered).unwrap();
        let reparsed = X509Data::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn test_foreign_child_preserved() {
        let xml = "<ds:X509Data xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\">\
                   <f:Extra xmlns:f=\"urn:foreign\">keep me</f:Extra></ds:X509Data>";
        let doc = parse_document(xml).unwrap();
        let x509_data = X509Data::from_xml(doc.root_element()).unwrap();
        assert!(matches!(x509_data.data()[0], X509DataEntry::Other(_)));
        assert!(x509_data.render().contains("keep me"));
    }
}
