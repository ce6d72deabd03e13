#![forbid(unsafe_code)]

use crate::encoding::is_plausible_base64;
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{XmlElement, XmlNode};

/// A `ds:X509Certificate` element: a base64-encoded DER certificate.
///
/// The content is checked for base64 *plausibility* only (alphabet,
/// grouping, padding position). It is never decoded or verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509Certificate {
    certificate: String,
}

impl X509Certificate {
    pub fn new(certificate: impl Into<String>) -> Result<Self> {
        let certificate = certificate.into();
        if certificate.is_empty() {
            return Err(Error::InvalidArgument(
                "ds:X509Certificate cannot be empty".into(),
            ));
        }
        if !is_plausible_base64(&certificate) {
            return Err(Error::InvalidArgument(
                "ds:X509Certificate is not a valid base64 encoded string".into(),
            ));
        }
        Ok(Self { certificate })
    }

    pub fn certificate(&self) -> &str {
        &self.certificate
    }
}

impl XmlElement for X509Certificate {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::X509_CERTIFICATE;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        Self::new(node.text().unwrap_or(""))
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.set_text(&self.certificate);
        e
    }
}
