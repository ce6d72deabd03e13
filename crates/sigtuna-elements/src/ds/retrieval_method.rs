#![forbid(unsafe_code)]

use crate::ds::Transforms;
use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{
    element_children, optional_attribute, required_attribute, XmlElement, XmlNode,
};

/// A `ds:RetrievalMethod` element: a reference to key material stored
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalMethod {
    uri: String,
    type_uri: Option<String>,
    transforms: Option<Transforms>,
}

impl RetrievalMethod {
    pub fn new(
        uri: impl Into<String>,
        type_uri: Option<String>,
        transforms: Option<Transforms>,
    ) -> Result<Self> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(Error::InvalidArgument(
                "ds:RetrievalMethod requires a non-empty URI".into(),
            ));
        }
        Ok(Self {
            uri,
            type_uri,
            transforms,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn type_uri(&self) -> Option<&str> {
        self.type_uri.as_deref()
    }

    pub fn transforms(&self) -> Option<&Transforms> {
        self.transforms.as_ref()
    }
}

impl XmlElement for RetrievalMethod {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::RETRIEVAL_METHOD;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let uri = required_attribute(node, ns::attr::URI)?;
        let type_uri = optional_attribute(node, ns::attr::TYPE);

        let transforms = element_children(node)
            .find(|n| {
                n.tag_name().namespace() == Some(ns::DSIG)
                    && n.tag_name().name() == ns::node::TRANSFORMS
            })
            .map(Transforms::from_xml)
            .transpose()?;

        Self::new(uri, type_uri, transforms)
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.set_attribute(ns::attr::URI, &self.uri);
        if let Some(type_uri) = &self.type_uri {
            e.set_attribute(ns::attr::TYPE, type_uri);
        }
        if let Some(transforms) = &self.transforms {
            e.append(transforms.to_xml());
        }
        e
    }
}
