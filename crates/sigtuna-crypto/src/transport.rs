#![forbid(unsafe_code)]

//! RSA key transport (PKCS#1 v1.5 and OAEP with MGF1/SHA-1).

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sigtuna_core::{algorithm, Error, Result};

/// One of the W3C key transport algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransport {
    RsaPkcs1,
    RsaOaepMgf1p,
}

impl KeyTransport {
    pub fn from_uri(uri: &str) -> Result<Self> {
        match uri {
            algorithm::RSA_PKCS1 => Ok(Self::RsaPkcs1),
            algorithm::RSA_OAEP => Ok(Self::RsaOaepMgf1p),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported key transport: {uri}"
            ))),
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Self::RsaPkcs1 => algorithm::RSA_PKCS1,
            Self::RsaOaepMgf1p => algorithm::RSA_OAEP,
        }
    }

    /// Encrypt with a PEM-encoded RSA public key.
    pub fn encrypt(&self, public_pem: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let public_key = parse_public_key(public_pem)?;
        let mut rng = rand::thread_rng();
        match self {
            Self::RsaPkcs1 => public_key
                .encrypt(&mut rng, Pkcs1v15Encrypt, data)
                .map_err(|e| Error::Runtime(format!("RSA PKCS#1 encrypt: {e}"))),
            Self::RsaOaepMgf1p => public_key
                .encrypt(&mut rng, Oaep::new::<sha1::Sha1>(), data)
                .map_err(|e| Error::Runtime(format!("RSA-OAEP encrypt: {e}"))),
        }
    }

    /// Decrypt with a PEM-encoded RSA private key.
    pub fn decrypt(&self, private_pem: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let private_key = parse_private_key(private_pem)?;
        match self {
            Self::RsaPkcs1 => private_key
                .decrypt(Pkcs1v15Encrypt, data)
                .map_err(|e| Error::Runtime(format!("RSA PKCS#1 decrypt: {e}"))),
            Self::RsaOaepMgf1p => private_key
                .decrypt(Oaep::new::<sha1::Sha1>(), data)
                .map_err(|e| Error::Runtime(format!("RSA-OAEP decrypt: {e}"))),
        }
    }
}

/// Parse a public key from PEM, accepting SubjectPublicKeyInfo and the
/// legacy PKCS#1 `RSA PUBLIC KEY` form.
fn parse_public_key(pem: &[u8]) -> Result<RsaPublicKey> {
    let text = std::str::from_utf8(pem)
        .map_err(|_| Error::Runtime("public key material is not valid PEM".into()))?;
    RsaPublicKey::from_public_key_pem(text)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(text))
        .map_err(|e| Error::Runtime(format!("cannot parse RSA public key: {e}")))
}

/// Parse a private key from PEM, accepting PKCS#8 and the legacy PKCS#1
/// `RSA PRIVATE KEY` form.
fn parse_private_key(pem: &[u8]) -> Result<RsaPrivateKey> {
    let text = std::str::from_utf8(pem)
        .map_err(|_| Error::Runtime("private key material is not valid PEM".into()))?;
    RsaPrivateKey::from_pkcs8_pem(text)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(text))
        .map_err(|e| Error::Runtime(format!("cannot parse RSA private key: {e}")))
}
