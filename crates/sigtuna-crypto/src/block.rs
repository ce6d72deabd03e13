#![forbid(unsafe_code)]

//! Block cipher implementations (AES-CBC, AES-GCM, 3DES-CBC).
//!
//! Encryption output is IV-or-nonce followed by ciphertext, the layout
//! `xenc:CipherValue` carries on the wire.

use sigtuna_core::{algorithm, Error, Result};

/// One of the W3C block encryption algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCipher {
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
    TripleDesCbc,
}

impl BlockCipher {
    /// Resolve an algorithm URI. Unknown URIs are an argument error, not
    /// a crypto failure.
    pub fn from_uri(uri: &str) -> Result<Self> {
        match uri {
            algorithm::AES128_CBC => Ok(Self::Aes128Cbc),
            algorithm::AES192_CBC => Ok(Self::Aes192Cbc),
            algorithm::AES256_CBC => Ok(Self::Aes256Cbc),
            algorithm::AES128_GCM => Ok(Self::Aes128Gcm),
            algorithm::AES192_GCM => Ok(Self::Aes192Gcm),
            algorithm::AES256_GCM => Ok(Self::Aes256Gcm),
            algorithm::TRIPLEDES_CBC => Ok(Self::TripleDesCbc),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported block cipher: {uri}"
            ))),
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Self::Aes128Cbc => algorithm::AES128_CBC,
            Self::Aes192Cbc => algorithm::AES192_CBC,
            Self::Aes256Cbc => algorithm::AES256_CBC,
            Self::Aes128Gcm => algorithm::AES128_GCM,
            Self::Aes192Gcm => algorithm::AES192_GCM,
            Self::Aes256Gcm => algorithm::AES256_GCM,
            Self::TripleDesCbc => algorithm::TRIPLEDES_CBC,
        }
    }

    /// The key length this cipher requires, in bytes.
    pub fn key_size(&self) -> usize {
        match self {
            Self::Aes128Cbc | Self::Aes128Gcm => 16,
            Self::Aes192Cbc | Self::Aes192Gcm | Self::TripleDesCbc => 24,
            Self::Aes256Cbc | Self::Aes256Gcm => 32,
        }
    }

    pub fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.check_key(key)?;
        match self {
            Self::Aes128Cbc | Self::Aes192Cbc | Self::Aes256Cbc => {
                cbc_encrypt(*self, key, plaintext)
            }
            Self::Aes128Gcm | Self::Aes192Gcm | Self::Aes256Gcm => {
                gcm_encrypt(*self, key, plaintext)
            }
            Self::TripleDesCbc => tdes_encrypt(key, plaintext),
        }
    }

    pub fn decrypt(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        self.check_key(key)?;
        match self {
            Self::Aes128Cbc | Self::Aes192Cbc | Self::Aes256Cbc => cbc_decrypt(*self, key, data),
            Self::Aes128Gcm | Self::Aes192Gcm | Self::Aes256Gcm => gcm_decrypt(*self, key, data),
            Self::TripleDesCbc => tdes_decrypt(key, data),
        }
    }

    fn check_key(&self, key: &[u8]) -> Result<()> {
        if key.len() != self.key_size() {
            return Err(Error::Runtime(format!(
                "{} expects a {} byte key, got {}",
                self.uri(),
                self.key_size(),
                key.len()
            )));
        }
        Ok(())
    }
}

// ── AES-CBC ──────────────────────────────────────────────────────────

fn cbc_encrypt(cipher: BlockCipher, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    use cbc::cipher::{BlockEncryptMut, KeyIvInit};
    use rand::RngCore;

    let mut iv = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut iv);

    // Padded up front, so the cipher itself runs with NoPadding.
    let mut buf = pkcs7_pad(plaintext, 16);
    let buf_len = buf.len();

    macro_rules! do_encrypt {
        ($aes:ty) => {{
            let enc = cbc::Encryptor::<$aes>::new_from_slices(key, &iv)
                .map_err(|e| Error::Runtime(format!("AES-CBC init: {e}")))?;
            enc.encrypt_padded_mut::<cbc::cipher::block_padding::NoPadding>(&mut buf, buf_len)
                .map_err(|e| Error::Runtime(format!("AES-CBC encrypt: {e}")))?;
        }};
    }

    match cipher {
        BlockCipher::Aes128Cbc => do_encrypt!(aes::Aes128),
        BlockCipher::Aes192Cbc => do_encrypt!(aes::Aes192),
        BlockCipher::Aes256Cbc => do_encrypt!(aes::Aes256),
        _ => unreachable!("not an AES-CBC cipher"),
    }

    let mut result = Vec::with_capacity(16 + buf.len());
    result.extend_from_slice(&iv);
    result.extend_from_slice(&buf);
    Ok(result)
}

fn cbc_decrypt(cipher: BlockCipher, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    use cbc::cipher::{BlockDecryptMut, KeyIvInit};

    if data.len() < 32 || data.len() % 16 != 0 {
        return Err(Error::Runtime("AES-CBC data has invalid length".into()));
    }

    let iv = &data[..16];
    let mut buf = data[16..].to_vec();

    macro_rules! do_decrypt {
        ($aes:ty) => {{
            let dec = cbc::Decryptor::<$aes>::new_from_slices(key, iv)
                .map_err(|e| Error::Runtime(format!("AES-CBC init: {e}")))?;
            dec.decrypt_padded_mut::<cbc::cipher::block_padding::NoPadding>(&mut buf)
                .map_err(|e| Error::Runtime(format!("AES-CBC decrypt: {e}")))?;
        }};
    }

    match cipher {
        BlockCipher::Aes128Cbc => do_decrypt!(aes::Aes128),
        BlockCipher::Aes192Cbc => do_decrypt!(aes::Aes192),
        BlockCipher::Aes256Cbc => do_decrypt!(aes::Aes256),
        _ => unreachable!("not an AES-CBC cipher"),
    }

    xmlenc_unpad(&buf, 16)
}

// ── AES-GCM ──────────────────────────────────────────────────────────

fn gcm_encrypt(cipher: BlockCipher, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    use aes_gcm::{aead::Aead, KeyInit, Nonce};
    use rand::RngCore;

    let mut nonce_bytes = [0u8; 12];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    macro_rules! do_encrypt {
        ($gcm:ty) => {{
            let gcm = <$gcm>::new_from_slice(key)
                .map_err(|e| Error::Runtime(format!("AES-GCM init: {e}")))?;
            gcm.encrypt(nonce, plaintext)
                .map_err(|e| Error::Runtime(format!("AES-GCM encrypt: {e}")))?
        }};
    }

    let ct = match cipher {
        BlockCipher::Aes128Gcm => do_encrypt!(aes_gcm::Aes128Gcm),
        BlockCipher::Aes192Gcm => {
            use aes_gcm::aead::consts::U12;
            do_encrypt!(aes_gcm::AesGcm<aes::Aes192, U12>)
        }
        BlockCipher::Aes256Gcm => do_encrypt!(aes_gcm::Aes256Gcm),
        _ => unreachable!("not an AES-GCM cipher"),
    };

    let mut result = Vec::with_capacity(12 + ct.len());
    result.extend_from_slice(&nonce_bytes);
    result.extend_from_slice(&ct);
    Ok(result)
}

fn gcm_decrypt(cipher: BlockCipher, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    use aes_gcm::{aead::Aead, KeyInit, Nonce};

    // 12 byte nonce plus at least the 16 byte tag.
    if data.len() < 28 {
        return Err(Error::Runtime("AES-GCM data too short".into()));
    }

    let nonce = Nonce::from_slice(&data[..12]);
    let ct_and_tag = &data[12..];

    macro_rules! do_decrypt {
        ($gcm:ty) => {{
            let gcm = <$gcm>::new_from_slice(key)
                .map_err(|e| Error::Runtime(format!("AES-GCM init: {e}")))?;
            gcm.decrypt(nonce, ct_and_tag)
                .map_err(|e| Error::Runtime(format!("AES-GCM decrypt: {e}")))
        }};
    }

    match cipher {
        BlockCipher::Aes128Gcm => do_decrypt!(aes_gcm::Aes128Gcm),
        BlockCipher::Aes192Gcm => {
            use aes_gcm::aead::consts::U12;
            do_decrypt!(aes_gcm::AesGcm<aes::Aes192, U12>)
        }
        BlockCipher::Aes256Gcm => do_decrypt!(aes_gcm::Aes256Gcm),
        _ => unreachable!("not an AES-GCM cipher"),
    }
}

// ── 3DES-CBC ─────────────────────────────────────────────────────────

fn tdes_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    use cbc::cipher::{BlockEncryptMut, KeyIvInit};
    use rand::RngCore;

    let mut iv = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut iv);

    let mut buf = pkcs7_pad(plaintext, 8);
    let buf_len = buf.len();

    let enc = cbc::Encryptor::<des::TdesEde3>::new_from_slices(key, &iv)
        .map_err(|e| Error::Runtime(format!("3DES init: {e}")))?;
    enc.encrypt_padded_mut::<cbc::cipher::block_padding::NoPadding>(&mut buf, buf_len)
        .map_err(|e| Error::Runtime(format!("3DES encrypt: {e}")))?;

    let mut result = Vec::with_capacity(8 + buf.len());
    result.extend_from_slice(&iv);
    result.extend_from_slice(&buf);
    Ok(result)
}

fn tdes_decrypt(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    use cbc::cipher::{BlockDecryptMut, KeyIvInit};

    if data.len() < 16 || data.len() % 8 != 0 {
        return Err(Error::Runtime("3DES data has invalid length".into()));
    }

    let iv = &data[..8];
    let mut buf = data[8..].to_vec();

    let dec = cbc::Decryptor::<des::TdesEde3>::new_from_slices(key, iv)
        .map_err(|e| Error::Runtime(format!("3DES init: {e}")))?;
    dec.decrypt_padded_mut::<cbc::cipher::block_padding::NoPadding>(&mut buf)
        .map_err(|e| Error::Runtime(format!("3DES decrypt: {e}")))?;

    xmlenc_unpad(&buf, 8)
}

// ── Padding ──────────────────────────────────────────────────────────

fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad_len = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    padded
}

/// Remove XML Encryption padding. The length lives in the last byte; the
/// filler bytes are not checked, which accepts both PKCS#7 and the ISO
/// 10126 style padding XML Encryption allows.
fn xmlenc_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return Err(Error::Runtime("invalid padding".into()));
    }
    Ok(data[..data.len() - pad_len].to_vec())
}
