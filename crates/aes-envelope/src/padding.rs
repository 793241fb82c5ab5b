//! PKCS7 padding applied before chaining and stripped after decryption.

use aes_engine::BLOCK_SIZE;

use crate::error::{EnvelopeError, Result};

/// Pads `data` so its length is a positive multiple of the block size.
///
/// Every pad byte equals the pad length, so an already aligned input
/// still gains one full block; the length can then always be read back
/// from the final byte.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let fill = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + fill);
    padded.extend_from_slice(data);
    padded.resize(data.len() + fill, fill as u8);
    padded
}

/// Strips padding, validating the trailing byte run.
pub fn unpad(data: &[u8]) -> Result<Vec<u8>> {
    let fill = *data.last().ok_or(EnvelopeError::InvalidPadding)? as usize;
    if fill == 0 || fill > BLOCK_SIZE || fill > data.len() {
        return Err(EnvelopeError::InvalidPadding);
    }
    let (body, tail) = data.split_at(data.len() - fill);
    if tail.iter().any(|&byte| byte as usize != fill) {
        return Err(EnvelopeError::InvalidPadding);
    }
    Ok(body.to_vec())
}
