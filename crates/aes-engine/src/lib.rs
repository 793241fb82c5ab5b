//! Reference AES-128/256 block engine with observable round steps.
//!
//! The implementation mirrors the FIPS-197 specification and derives its
//! substitution tables and round constants from GF(2^8) arithmetic instead
//! of transcribing them. It provides:
//! - Key expansion for 128- and 256-bit keys.
//! - Single-block encryption and decryption.
//! - An optional per-operation observer for callers that replay rounds.
//!
//! The engine aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
mod round;
pub mod sbox;
mod schedule;
mod trace;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with};
pub use crate::key::{CipherKey, RoundKeys};
pub use crate::schedule::expand_key;
pub use crate::trace::{NullSink, Op, Step, StepLog, StepSink};
