//! Error types for the envelope layer.

use thiserror::Error;

/// Errors surfaced by key handling, derivation, and decryption.
///
/// All are detected synchronously; nothing is retried or logged here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// Key material is neither 16 nor 32 bytes long.
    #[error("key must be 16 or 32 bytes, got {actual}")]
    InvalidKeySize {
        /// Length of the rejected key material.
        actual: usize,
    },
    /// Requested derivation strength is neither 128 nor 256 bits.
    #[error("unsupported key size: {bits} bits (expected 128 or 256)")]
    UnsupportedKeySize {
        /// The rejected strength in bits.
        bits: u32,
    },
    /// Ciphertext length is not a positive multiple of the block size.
    #[error("ciphertext length {len} is not a positive multiple of 16")]
    InvalidBlockLength {
        /// Length of the rejected ciphertext.
        len: usize,
    },
    /// Trailing padding failed validation after decryption.
    #[error("invalid padding")]
    InvalidPadding,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EnvelopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_length() {
        let err = EnvelopeError::InvalidKeySize { actual: 15 };
        assert_eq!(err.to_string(), "key must be 16 or 32 bytes, got 15");

        let err = EnvelopeError::InvalidBlockLength { len: 17 };
        assert_eq!(
            err.to_string(),
            "ciphertext length 17 is not a positive multiple of 16"
        );
    }
}
