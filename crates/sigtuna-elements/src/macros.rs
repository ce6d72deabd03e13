#![forbid(unsafe_code)]

//! Declaration macro for string-leaf elements.

/// Declare an element type holding a single opaque text value.
///
/// The value is not validated; types that constrain their content
/// (X509Certificate, CipherValue) are written by hand.
macro_rules! text_element {
    ($(#[$meta:meta])* $name:ident, $ns:expr, $prefix:expr, $local:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            value: String,
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    value: value.into(),
                }
            }

            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl sigtuna_xml::XmlElement for $name {
            const NAMESPACE: &'static str = $ns;
            const PREFIX: &'static str = $prefix;
            const LOCAL_NAME: &'static str = $local;

            fn from_xml(node: roxmltree::Node<'_, '_>) -> sigtuna_core::Result<Self> {
                Self::expect_element(&node)?;
                Ok(Self {
                    value: node.text().unwrap_or("").to_owned(),
                })
            }

            fn to_xml(&self) -> sigtuna_xml::XmlNode {
                let mut e = Self::element();
                e.set_text(&self.value);
                e
            }
        }
    };
}

pub(crate) use text_element;
