#![forbid(unsafe_code)]

//! XML tree abstraction for the Sigtuna XML Security object model.
//!
//! Parsing goes through `roxmltree`; serialization builds an owned
//! [`XmlNode`] tree and renders it deterministically, so that anything this
//! library serializes can be re-parsed and re-serialized byte-for-byte.

pub mod chunk;
pub mod document;
pub mod element;
pub mod node;

pub use chunk::Chunk;
pub use document::{find_element, parse_document};
pub use element::{element_children, optional_attribute, required_attribute, XmlElement};
pub use node::{XmlAttr, XmlChild, XmlNode};
