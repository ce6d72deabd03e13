#![forbid(unsafe_code)]

//! The encryption backend contract and its RustCrypto implementation.

use crate::{BlockCipher, KeyTransport};
use sigtuna_core::Result;
use sigtuna_keys::Key;

/// The cipher a backend is currently configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedCipher {
    Block(BlockCipher),
    Transport(KeyTransport),
}

impl SelectedCipher {
    pub fn uri(&self) -> &'static str {
        match self {
            Self::Block(cipher) => cipher.uri(),
            Self::Transport(transport) => transport.uri(),
        }
    }
}

/// The seam between the XML object model and actual cryptography.
///
/// `set_cipher` selects an algorithm by its URI and must either succeed
/// or leave the backend's configuration untouched. `encrypt` and
/// `decrypt` interpret the key according to the selected cipher: raw
/// bytes for block ciphers, PEM documents for key transport.
pub trait EncryptionBackend {
    fn set_cipher(&mut self, uri: &str) -> Result<()>;
    fn encrypt(&self, key: &Key, plaintext: &[u8]) -> Result<Vec<u8>>;
    fn decrypt(&self, key: &Key, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Backend built on the RustCrypto crates. Starts out configured for
/// AES-256-CBC.
#[derive(Debug, Clone, Copy)]
pub struct RustCryptoBackend {
    cipher: SelectedCipher,
}

impl RustCryptoBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cipher(&self) -> SelectedCipher {
        self.cipher
    }
}

impl Default for RustCryptoBackend {
    fn default() -> Self {
        Self {
            cipher: SelectedCipher::Block(BlockCipher::Aes256Cbc),
        }
    }
}

impl EncryptionBackend for RustCryptoBackend {
    fn set_cipher(&mut self, uri: &str) -> Result<()> {
        // Resolve fully before assigning, so a bad URI leaves the
        // previous selection in place.
        let cipher = match BlockCipher::from_uri(uri) {
            Ok(block) => SelectedCipher::Block(block),
            Err(_) => SelectedCipher::Transport(KeyTransport::from_uri(uri)?),
        };
        self.cipher = cipher;
        Ok(())
    }

    fn encrypt(&self, key: &Key, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self.cipher {
            SelectedCipher::Block(cipher) => cipher.encrypt(key.material(), plaintext),
            SelectedCipher::Transport(transport) => transport.encrypt(key.material(), plaintext),
        }
    }

    fn decrypt(&self, key: &Key, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self.cipher {
            SelectedCipher::Block(cipher) => cipher.decrypt(key.material(), ciphertext),
            SelectedCipher::Transport(transport) => transport.decrypt(key.material(), ciphertext),
        }
    }
}
