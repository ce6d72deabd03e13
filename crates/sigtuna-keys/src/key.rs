#![forbid(unsafe_code)]

use std::path::Path;

use rand::RngCore;
use sigtuna_core::{Error, Result};

/// Opaque key material.
///
/// Equality compares the raw bytes. `Debug` prints only the length so key
/// material never leaks into logs or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    material: Vec<u8>,
}

impl Key {
    pub fn new(material: Vec<u8>) -> Self {
        Self { material }
    }

    /// Wrap a string, e.g. a PEM document or a passphrase.
    pub fn from_string(material: impl Into<String>) -> Self {
        Self {
            material: material.into().into_bytes(),
        }
    }

    /// Load key material from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let material = std::fs::read(path).map_err(|e| {
            Error::InvalidArgument(format!(
                "cannot read key from file \"{}\": {e}",
                path.display()
            ))
        })?;
        Ok(Self { material })
    }

    /// Generate `len` random bytes from the OS RNG, e.g. a fresh session
    /// key sized to a block cipher.
    pub fn generate(len: usize) -> Self {
        let mut material = vec![0u8; len];
        rand::rngs::OsRng.fill_bytes(&mut material);
        Self { material }
    }

    pub fn material(&self) -> &[u8] {
        &self.material
    }

    pub fn len(&self) -> usize {
        self.material.len()
    }

    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("len", &self.material.len())
            .finish()
    }
}

impl From<Vec<u8>> for Key {
    fn from(material: Vec<u8>) -> Self {
        Self::new(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let key = Key::from_string("secret");
        assert_eq!(key.material(), b"secret");
        assert_eq!(key.len(), 6);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("sigtuna-key-test.bin");
        std::fs::write(&path, b"filekey").unwrap();
        let key = Key::from_file(&path).unwrap();
        assert_eq!(key.material(), b"filekey");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_missing_file() {
        let err = Key::from_file("/nonexistent/sigtuna.key").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("/nonexistent/sigtuna.key"));
    }

    #[test]
    fn test_generate() {
        let key = Key::generate(32);
        assert_eq!(key.len(), 32);
        // Two fresh 32-byte keys colliding means the RNG is broken.
        assert_ne!(Key::generate(32), key);
    }

    #[test]
    fn test_debug_hides_material() {
        let key = Key::from_string("supersecret");
        let debug = format!("{key:?}");
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("11"));
    }
}
