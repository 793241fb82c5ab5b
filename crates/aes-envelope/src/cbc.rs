//! Ciphertext chaining over pre-padded input.
//!
//! Both directions take an explicit IV so known-answer vectors stay
//! reproducible; drawing a fresh IV per message is the facade's job.
//! Encryption is inherently sequential (each block feeds the next);
//! decryption of block i needs only ciphertext block i-1, never its
//! plaintext.

use aes_engine::{decrypt_block, encrypt_block, xor_in_place, Block, RoundKeys, BLOCK_SIZE};

use crate::error::{EnvelopeError, Result};

/// Encrypts padded plaintext, chaining each block against the previous
/// ciphertext block (the IV for the first).
///
/// Expects input whose length is a positive multiple of the block size;
/// the facade pads before calling.
pub fn encrypt_blocks(padded: &[u8], iv: &Block, round_keys: &RoundKeys) -> Vec<u8> {
    debug_assert!(!padded.is_empty() && padded.len() % BLOCK_SIZE == 0);

    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut previous = *iv;
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = chunk.try_into().expect("chunks_exact yields full blocks");
        xor_in_place(&mut block, &previous);
        let encrypted = encrypt_block(&block, round_keys);
        ciphertext.extend_from_slice(&encrypted);
        previous = encrypted;
    }
    ciphertext
}

/// Decrypts ciphertext produced by [`encrypt_blocks`], leaving padding in
/// place for the caller.
///
/// Fails with `InvalidBlockLength` when the input is empty or not a
/// multiple of the block size.
pub fn decrypt_blocks(ciphertext: &[u8], iv: &Block, round_keys: &RoundKeys) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(EnvelopeError::InvalidBlockLength {
            len: ciphertext.len(),
        });
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut previous = *iv;
    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let block: Block = chunk.try_into().expect("chunks_exact yields full blocks");
        let mut decrypted = decrypt_block(&block, round_keys);
        xor_in_place(&mut decrypted, &previous);
        plaintext.extend_from_slice(&decrypted);
        previous = block;
    }
    Ok(plaintext)
}
