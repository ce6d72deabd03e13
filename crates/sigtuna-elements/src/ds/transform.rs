#![forbid(unsafe_code)]

use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, required_attribute, Chunk, XmlElement, XmlNode};

/// A `ds:Transform` element.
///
/// The `Algorithm` attribute only needs to be non-empty; transform URIs
/// are an open set. Children named `ds:XPath` are split off into their own
/// group and always serialize before the remaining children. Empty
/// children are skipped when serializing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    algorithm: String,
    xpath_elements: Vec<Chunk>,
    elements: Vec<Chunk>,
}

impl Transform {
    pub fn new(algorithm: impl Into<String>, elements: Vec<Chunk>) -> Result<Self> {
        let algorithm = algorithm.into();
        if algorithm.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot set an empty algorithm on ds:Transform".into(),
            ));
        }

        let mut xpath_elements = Vec::new();
        let mut other_elements = Vec::new();
        for chunk in elements {
            if chunk.namespace() == Some(ns::DSIG) && chunk.local_name() == ns::node::XPATH {
                xpath_elements.push(chunk);
            } else {
                other_elements.push(chunk);
            }
        }

        Ok(Self {
            algorithm,
            xpath_elements,
            elements: other_elements,
        })
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The `ds:XPath` children, in document order.
    pub fn xpath_elements(&self) -> &[Chunk] {
        &self.xpath_elements
    }

    /// All non-XPath children, in document order.
    pub fn elements(&self) -> &[Chunk] {
        &self.elements
    }
}

impl XmlElement for Transform {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::TRANSFORM;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let algorithm = required_attribute(node, ns::attr::ALGORITHM)?;
        let elements = element_children(node).map(Chunk::from_node).collect();
        Self::new(algorithm, elements)
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        e.set_attribute(ns::attr::ALGORITHM, &self.algorithm);
        for chunk in self.xpath_elements.iter().chain(&self.elements) {
            if !chunk.is_empty_element() {
                e.append(chunk.to_xml());
            }
        }
        e
    }
}
