//! Single-block encryption and decryption pipelines.

use crate::block::Block;
use crate::key::RoundKeys;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::trace::{NullSink, Op, Step, StepSink};

#[inline]
fn apply<S: StepSink>(
    sink: &mut S,
    round: usize,
    op: Op,
    state: &mut Block,
    transform: impl FnOnce(&mut Block),
) {
    let before = *state;
    transform(state);
    sink.record(Step {
        round,
        op,
        before,
        after: *state,
    });
}

/// Encrypts one block, reporting every operation to `sink`.
///
/// Round 0 is a bare key mix; the final round skips MixColumns.
pub fn encrypt_block_with<S: StepSink>(
    block: &Block,
    round_keys: &RoundKeys,
    sink: &mut S,
) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    apply(sink, 0, Op::AddRoundKey, &mut state, |s| {
        add_round_key(s, round_keys.get(0))
    });

    for round in 1..rounds {
        apply(sink, round, Op::SubBytes, &mut state, sub_bytes);
        apply(sink, round, Op::ShiftRows, &mut state, shift_rows);
        apply(sink, round, Op::MixColumns, &mut state, mix_columns);
        apply(sink, round, Op::AddRoundKey, &mut state, |s| {
            add_round_key(s, round_keys.get(round))
        });
    }

    apply(sink, rounds, Op::SubBytes, &mut state, sub_bytes);
    apply(sink, rounds, Op::ShiftRows, &mut state, shift_rows);
    apply(sink, rounds, Op::AddRoundKey, &mut state, |s| {
        add_round_key(s, round_keys.get(rounds))
    });

    state
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_block_with(block, round_keys, &mut NullSink)
}

/// Decrypts one block, reporting every operation to `sink`.
///
/// Applies the algebraic inverses in reverse order, consuming round keys
/// from last to first; the first decryption round skips InvMixColumns.
pub fn decrypt_block_with<S: StepSink>(
    block: &Block,
    round_keys: &RoundKeys,
    sink: &mut S,
) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    apply(sink, rounds, Op::AddRoundKey, &mut state, |s| {
        add_round_key(s, round_keys.get(rounds))
    });

    for round in (1..rounds).rev() {
        apply(sink, round, Op::InvShiftRows, &mut state, inv_shift_rows);
        apply(sink, round, Op::InvSubBytes, &mut state, inv_sub_bytes);
        apply(sink, round, Op::AddRoundKey, &mut state, |s| {
            add_round_key(s, round_keys.get(round))
        });
        apply(sink, round, Op::InvMixColumns, &mut state, inv_mix_columns);
    }

    apply(sink, 0, Op::InvShiftRows, &mut state, inv_shift_rows);
    apply(sink, 0, Op::InvSubBytes, &mut state, inv_sub_bytes);
    apply(sink, 0, Op::AddRoundKey, &mut state, |s| {
        add_round_key(s, round_keys.get(0))
    });

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    decrypt_block_with(block, round_keys, &mut NullSink)
}
