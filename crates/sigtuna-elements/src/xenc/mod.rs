#![forbid(unsafe_code)]

//! XML Encryption (`xenc:`) element types.

mod carried_key_name;
mod cipher_data;
mod cipher_value;
mod encrypted_data;
mod encrypted_key;
mod encrypted_type;
mod encryption_method;
mod reference_list;

pub use carried_key_name::CarriedKeyName;
pub use cipher_data::{CipherContent, CipherData};
pub use cipher_value::CipherValue;
pub use encrypted_data::EncryptedData;
pub use encrypted_key::EncryptedKey;
pub use encrypted_type::EncryptedType;
pub use encryption_method::EncryptionMethod;
pub use reference_list::{DataReference, KeyReference, ReferenceList};
