#![forbid(unsafe_code)]

use crate::ds::Transform;
use sigtuna_core::{ns, Result};
use sigtuna_xml::{element_children, XmlElement, XmlNode};

/// A `ds:Transforms` element: an ordered list of `ds:Transform` children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transforms {
    transforms: Vec<Transform>,
}

impl Transforms {
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }
}

impl XmlElement for Transforms {
    const NAMESPACE: &'static str = ns::DSIG;
    const PREFIX: &'static str = ns::DSIG_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::TRANSFORMS;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let transforms = element_children(node)
            .filter(|n| {
                n.tag_name().namespace() == Some(ns::DSIG)
                    && n.tag_name().name() == ns::node::TRANSFORM
            })
            .map(Transform::from_xml)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(transforms))
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        for transform in &self.transforms {
            e.append(transform.to_xml());
        }
        e
    }
}
