#![forbid(unsafe_code)]

use sigtuna_core::{ns, Error, Result};
use sigtuna_xml::{element_children, required_attribute, Chunk, XmlElement, XmlNode};

macro_rules! reference_element {
    ($(#[$meta:meta])* $name:ident, $local:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            uri: String,
            elements: Vec<Chunk>,
        }

        impl $name {
            pub fn new(uri: impl Into<String>, elements: Vec<Chunk>) -> Self {
                Self {
                    uri: uri.into(),
                    elements,
                }
            }

            pub fn uri(&self) -> &str {
                &self.uri
            }

            /// Opaque children, typically a `ds:Transforms`.
            pub fn elements(&self) -> &[Chunk] {
                &self.elements
            }
        }

        impl XmlElement for $name {
            const NAMESPACE: &'static str = ns::ENC;
            const PREFIX: &'static str = ns::ENC_PREFIX;
            const LOCAL_NAME: &'static str = $local;

            fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
                Self::expect_element(&node)?;
                let uri = required_attribute(node, ns::attr::URI)?;
                let elements = element_children(node).map(Chunk::from_node).collect();
                Ok(Self::new(uri, elements))
            }

            fn to_xml(&self) -> XmlNode {
                let mut e = Self::element();
                e.set_attribute(ns::attr::URI, &self.uri);
                for chunk in &self.elements {
                    if chunk.is_empty_element() {
                        continue;
                    }
                    e.append(chunk.to_xml());
                }
                e
            }
        }
    };
}

reference_element!(
    /// A `xenc:DataReference`: points at an `xenc:EncryptedData` whose key
    /// the surrounding `xenc:EncryptedKey` carries.
    DataReference,
    ns::node::DATA_REFERENCE
);

reference_element!(
    /// A `xenc:KeyReference`: points at an `xenc:EncryptedKey` encrypted
    /// with the surrounding key.
    KeyReference,
    ns::node::KEY_REFERENCE
);

/// A `xenc:ReferenceList` element. At least one reference of either kind
/// is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceList {
    data_references: Vec<DataReference>,
    key_references: Vec<KeyReference>,
}

impl ReferenceList {
    pub fn new(
        data_references: Vec<DataReference>,
        key_references: Vec<KeyReference>,
    ) -> Result<Self> {
        if data_references.is_empty() && key_references.is_empty() {
            return Err(Error::InvalidArgument(
                "xenc:ReferenceList cannot be empty".into(),
            ));
        }
        Ok(Self {
            data_references,
            key_references,
        })
    }

    pub fn data_references(&self) -> &[DataReference] {
        &self.data_references
    }

    pub fn key_references(&self) -> &[KeyReference] {
        &self.key_references
    }
}

impl XmlElement for ReferenceList {
    const NAMESPACE: &'static str = ns::ENC;
    const PREFIX: &'static str = ns::ENC_PREFIX;
    const LOCAL_NAME: &'static str = ns::node::REFERENCE_LIST;

    fn from_xml(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Self::expect_element(&node)?;
        let mut data_references = Vec::new();
        let mut key_references = Vec::new();
        for child in element_children(node) {
            match (child.tag_name().namespace(), child.tag_name().name()) {
                (Some(ns::ENC), ns::node::DATA_REFERENCE) => {
                    data_references.push(DataReference::from_xml(child)?);
                }
                (Some(ns::ENC), ns::node::KEY_REFERENCE) => {
                    key_references.push(KeyReference::from_xml(child)?);
                }
                _ => {}
            }
        }
        Self::new(data_references, key_references)
    }

    fn to_xml(&self) -> XmlNode {
        let mut e = Self::element();
        for reference in &self.data_references {
            e.append(reference.to_xml());
        }
        for reference in &self.key_references {
            e.append(reference.to_xml());
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_xml::parse_document;

    const ENC_NS: &str = "http://www.w3.org/2001/04/xmlenc#";

    #[test]
    fn test_data_reference_with_transforms_child() {
        let xml = format!(
            "<xenc:DataReference xmlns:xenc=\"{ENC_NS}\" URI=\"#Encrypted_DATA_ID\">\
             <ds:Transforms xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\">\
             <ds:Transform Algorithm=\"http://www.w3.org/TR/1999/REC-xpath-19991116\">\
             <ds:XPath xmlns:xenc=\"{ENC_NS}\">\
             self::xenc:EncryptedData[@Id=\"example1\"]</ds:XPath>\
             </ds:Transform></ds:Transforms></xenc:DataReference>"
        );
        let doc = parse_document(&xml).unwrap();
        let reference = DataReference::from_xml(doc.root_element()).unwrap();
        assert_eq!(reference.uri(), "#Encrypted_DATA_ID");
        assert_eq!(reference.elements().len(), 1);
        assert_eq!(reference.elements()[0].local_name(), "Transforms");

        let rendered = reference.render();
        let doc = parse_document(&rendered).unwrap();
        let reparsed = DataReference::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn test_reference_uri_required() {
        let xml = format!("<xenc:KeyReference xmlns:xenc=\"{ENC_NS}\"/>");
        let doc = parse_document(&xml).unwrap();
        assert!(matches!(
            KeyReference::from_xml(doc.root_element()).unwrap_err(),
            Error::MissingAttribute(_)
        ));
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            ReferenceList::new(Vec::new(), Vec::new()).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        let xml = format!("<xenc:ReferenceList xmlns:xenc=\"{ENC_NS}\"/>");
        let doc = parse_document(&xml).unwrap();
        assert!(ReferenceList::from_xml(doc.root_element()).is_err());
    }

    #[test]
    fn test_list_round_trip() {
        let list = ReferenceList::new(
            vec![DataReference::new("#ed1", Vec::new())],
            vec![KeyReference::new("#ek1", Vec::new())],
        )
        .unwrap();
        let rendered = list.render();
        assert_eq!(
            rendered,
            format!(
                "<xenc:ReferenceList xmlns:xenc=\"{ENC_NS}\">\
                 <xenc:DataReference URI=\"#ed1\"/>\
                 <xenc:KeyReference URI=\"#ek1\"/></xenc:ReferenceList>"
            )
        );

        let doc = parse_document(&rendered).unwrap();
        let reparsed = ReferenceList::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.data_references().len(), 1);
        assert_eq!(reparsed.key_references().len(), 1);
        assert_eq!(reparsed.render(), rendered);
    }
}
