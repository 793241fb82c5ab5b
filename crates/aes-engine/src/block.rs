//! Block representation helpers.

/// Width of the cipher block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Cipher block of 16 bytes.
///
/// While a block is being transformed it doubles as the 4x4 state matrix
/// in column-major order: `state[col * 4 + row]`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs `rhs` into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
