//! Password-to-key derivation.
//!
//! A single unsalted SHA-256 of the passphrase, truncated to the requested
//! strength. Identical passphrases always yield identical keys, which
//! keeps ciphertext reproducible for a given password but also means
//! passphrase strength is NOT key strength: there is no salt and no
//! stretching, so this must not be treated as a hardened password KDF.
//! The construction is kept exactly as-is because changing it would
//! change every ciphertext derived from an existing passphrase.

use aes_engine::CipherKey;
use sha2::{Digest, Sha256};

use crate::error::{EnvelopeError, Result};

/// Supported derivation strengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key: the first half of the digest.
    Bits128,
    /// 256-bit key: the whole digest.
    Bits256,
}

impl KeySize {
    /// Parses a strength in bits, rejecting anything but 128 or 256.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Bits128),
            256 => Ok(KeySize::Bits256),
            _ => Err(EnvelopeError::UnsupportedKeySize { bits }),
        }
    }

    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits256 => 32,
        }
    }
}

/// Derives a cipher key from a passphrase.
pub fn derive_key(passphrase: &[u8], size: KeySize) -> CipherKey {
    let digest = Sha256::digest(passphrase);
    match size {
        KeySize::Bits128 => {
            let mut key = [0u8; 16];
            key.copy_from_slice(&digest[..16]);
            CipherKey::from(key)
        }
        KeySize::Bits256 => {
            let mut key = [0u8; 32];
            key.copy_from_slice(&digest);
            CipherKey::from(key)
        }
    }
}
