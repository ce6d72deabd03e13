#![forbid(unsafe_code)]

//! Encryption backends.
//!
//! The [`EncryptionBackend`] trait is the seam between the XML object
//! model and actual cryptography: callers select an algorithm by its URI
//! and hand over opaque [`sigtuna_keys::Key`] material. The default
//! [`RustCryptoBackend`] covers the W3C block ciphers and RSA key
//! transport.

mod backend;
mod block;
mod transport;

pub use backend::{EncryptionBackend, RustCryptoBackend, SelectedCipher};
pub use block::BlockCipher;
pub use transport::KeyTransport;
