#![forbid(unsafe_code)]

use crate::ds::X509IssuerName;
use crate::macros::text_element;
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, XmlElement, XmlNode};

text_element!(
    /// A `ds:X509SerialNumber` element: the certificate serial as a
    /// decimal string.
    X509SerialNumber,
    ns::DSIG,
    ns::DSIG_PREFIX,
    ns::node::X509_SERIAL_NUMBER
);

/// A `ds:X509IssuerSerial` element: issuer name plus serial number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509IssuerSerial {
    issuer_name: X509IssuerName,
    serial_number: X509SerialNumber,
}

impl X509IssuerSerial {
    pub fn new(issuer_name: X509IssuerName, serial_number: X509SerialNumber) -> Self {
        Self {
            issuer_name,
            serial_number,
        }
    }

    pub fn issuer_name(&self) -> &X509IssuerName {
        &self.issuer_name
    }

    pub fn serial_number(&self) -> &X509SerialNumber {
        &self.serial_number
    }
}

impl XmlElement for X509IssuerSerial {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::X509_ISSUER_SERIAL;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;

        let mut issuer_name = None;
        let mut serial_number = None;
        for child in element_children(node) {
            if child.tag_name().namespace() != Some(ns::DSIG) {
                continue;
            }
            match child.tag_name().name() {
                ns::node::X509_ISSUER_NAME => {
                    issuer_name = Some(X509IssuerName::from_xml(child)?);
                }
                ns::node::X509_SERIAL_NUMBER => {
                    serial_number = Some(X509SerialNumber::from_xml(child)?);
                }
                _ => {}
            }
        }

        let issuer_name = issuer_name.ok_or_else(|| {
            Error::MalformedElement("ds:X509IssuerSerial is missing ds:X509IssuerName".into())
        })?;
        let serial_number = serial_number.ok_or_else(|| {
            Error::MalformedElement("ds:X509IssuerSerial is missing ds:X509SerialNumber".into())
        })?;
        Ok(Self::new(issuer_name, serial_number))
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.append(self.issuer_name.to_xml());
        e.append(self.serial_number.to_xml());
        e
    }
}
