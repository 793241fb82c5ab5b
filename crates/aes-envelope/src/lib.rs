//! Password-based CBC envelope over the [`aes_engine`] block cipher.
//!
//! This crate layers everything a whole message needs around single-block
//! encryption: PKCS7 padding, ciphertext chaining with a fresh random IV,
//! single-hash password-to-key derivation, and a facade that ties them
//! together. Ciphertext is always returned alongside its IV; any
//! text-safe transport encoding of the pair is the caller's concern.
//!
//! # Example
//!
//! ```
//! use aes_envelope::{decrypt, derive_key, encrypt, KeySize};
//!
//! let key = derive_key(b"hunter2", KeySize::Bits256);
//! let (iv, ciphertext) = encrypt(b"attack at dawn", &key);
//! let plaintext = decrypt(&iv, &ciphertext, &key).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod envelope;
mod error;
mod kdf;
mod padding;

pub use crate::envelope::{
    decrypt, encrypt, encrypt_with_rng, key_from_slice, Cipher, Iv, PasswordCipher,
};
pub use crate::error::{EnvelopeError, Result};
pub use crate::kdf::{derive_key, KeySize};
