#![forbid(unsafe_code)]

//! Typed representations of XML-DSig (`ds:`) and XML-Enc (`xenc:`)
//! elements.
//!
//! Each type implements [`sigtuna_xml::XmlElement`]: parsing validates the
//! qualified name and the element's structural invariants, serialization
//! reconstructs the element in a fixed order. Children a composite does
//! not recognize are preserved as opaque [`sigtuna_xml::Chunk`]s.

pub mod ds;
pub mod xenc;

mod encoding;
mod macros;
