#![forbid(unsafe_code)]

use crate::macros::text_element;
use sigtuna_core::ns;

text_element!(
    /// A `xenc:CarriedKeyName` element: a human-readable name for the key
    /// carried by an `xenc:EncryptedKey`.
    CarriedKeyName,
    ns::ENC,
    ns::ENC_PREFIX,
    ns::node::CARRIED_KEY_NAME
);

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_xml::{parse_document, XmlElement};

    #[test]
    fn test_round_trip() {
        let name = CarriedKeyName::new("Sally Doe");
        let rendered = name.render();
        assert_eq!(
            rendered,
            "<xenc:CarriedKeyName xmlns:xenc=\"http://www.w3.org/2001/04/xmlenc#\">\
             Sally Doe</xenc:CarriedKeyName>"
        );

        let doc = parse_document(&rendered).unwrap();
        let reparsed = CarriedKeyName::from_xml(doc.root_element()).unwrap();
        assert_eq!(reparsed.value(), "Sally Doe");
    }
}
