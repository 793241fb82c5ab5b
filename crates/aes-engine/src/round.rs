//! Round transformations over the 4x4 column-major state.

use crate::block::{xor_in_place, Block};
use crate::gf;
use crate::sbox::{inv_sbox, sbox};

/// The diffusion matrix applied by MixColumns.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Its inverse in GF(2^8).
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row r of the state left by r positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut shifted = [0u8; 16];
    for row in 0..4 {
        for col in 0..4 {
            shifted[col * 4 + row] = state[((col + row) % 4) * 4 + row];
        }
    }
    *state = shifted;
}

/// Rotates row r of the state right by r positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let mut shifted = [0u8; 16];
    for row in 0..4 {
        for col in 0..4 {
            shifted[col * 4 + row] = state[((col + 4 - row) % 4) * 4 + row];
        }
    }
    *state = shifted;
}

fn mix_with(state: &mut Block, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let base = col * 4;
        let input = [
            state[base],
            state[base + 1],
            state[base + 2],
            state[base + 3],
        ];
        for (row, coefficients) in matrix.iter().enumerate() {
            let mut acc = 0u8;
            for (coefficient, byte) in coefficients.iter().zip(input.iter()) {
                acc ^= gf::mul(*coefficient, *byte);
            }
            state[base + row] = acc;
        }
    }
}

/// Multiplies each column by the diffusion matrix.
#[inline]
pub fn mix_columns(state: &mut Block) {
    mix_with(state, &MIX);
}

/// Multiplies each column by the inverse diffusion matrix.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    mix_with(state, &INV_MIX);
}

/// XORs a round key into the state; self-inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
