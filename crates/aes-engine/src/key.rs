//! Key material and expanded round keys.

use crate::block::Block;

/// Master key for the two supported cipher strengths.
///
/// The variant fixes the round count: ten rounds for 128-bit keys,
/// fourteen for 256-bit keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherKey {
    /// 128-bit key.
    Aes128([u8; 16]),
    /// 256-bit key.
    Aes256([u8; 32]),
}

impl CipherKey {
    /// Number of cipher rounds (Nr) for this key size.
    pub fn rounds(&self) -> usize {
        match self {
            CipherKey::Aes128(_) => 10,
            CipherKey::Aes256(_) => 14,
        }
    }

    /// Number of 32-bit words in the master key (Nk).
    pub fn words(&self) -> usize {
        match self {
            CipherKey::Aes128(_) => 4,
            CipherKey::Aes256(_) => 8,
        }
    }

    /// Raw key bytes.
    pub fn bytes(&self) -> &[u8] {
        match self {
            CipherKey::Aes128(bytes) => bytes,
            CipherKey::Aes256(bytes) => bytes,
        }
    }
}

impl From<[u8; 16]> for CipherKey {
    fn from(value: [u8; 16]) -> Self {
        CipherKey::Aes128(value)
    }
}

impl From<[u8; 32]> for CipherKey {
    fn from(value: [u8; 32]) -> Self {
        CipherKey::Aes256(value)
    }
}

/// Expanded round keys: one block per round plus the initial key mix.
///
/// Derived once per key and never mutated afterwards, so a single value
/// can back any number of concurrent encrypt/decrypt calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    keys: Vec<Block>,
}

impl RoundKeys {
    pub(crate) fn new(keys: Vec<Block>) -> Self {
        debug_assert!(keys.len() == 11 || keys.len() == 15);
        Self { keys }
    }

    /// Round key for `round` (0..=rounds).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[round]
    }

    /// Number of cipher rounds these keys drive.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.keys.len() - 1
    }
}
