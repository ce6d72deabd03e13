#![forbid(unsafe_code)]

pub use sigtuna_core as core;
pub use sigtuna_xml as xml;
pub use sigtuna_elements as elements;
pub use sigtuna_keys as keys;
pub use sigtuna_crypto as crypto;
