//! Rijndael key expansion.

use crate::block::Block;
use crate::gf;
use crate::key::{CipherKey, RoundKeys};
use crate::sbox::sbox;

type Word = [u8; 4];

fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

fn sub_word(word: Word) -> Word {
    [sbox(word[0]), sbox(word[1]), sbox(word[2]), sbox(word[3])]
}

fn xor_word(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a master key into Nr+1 round keys.
///
/// The first Nk words are the key itself. Every Nk-th word afterwards is
/// rotated, substituted, and mixed with a round constant; 256-bit keys
/// additionally substitute the word halfway through each Nk stride.
pub fn expand_key(key: &CipherKey) -> RoundKeys {
    let nk = key.words();
    let total_words = 4 * (key.rounds() + 1);

    let mut words: Vec<Word> = Vec::with_capacity(total_words);
    for chunk in key.bytes().chunks_exact(4) {
        let word: Word = chunk.try_into().expect("chunk length is four");
        words.push(word);
    }

    // Round constants are successive powers of x, produced as the
    // schedule walks rather than read from a table.
    let mut rcon = 1u8;
    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon;
            rcon = gf::xtime(rcon);
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words.push(xor_word(words[i - nk], temp));
    }

    let mut keys = Vec::with_capacity(total_words / 4);
    for group in words.chunks_exact(4) {
        let mut block: Block = [0u8; 16];
        for (slot, word) in group.iter().enumerate() {
            block[slot * 4..slot * 4 + 4].copy_from_slice(word);
        }
        keys.push(block);
    }
    RoundKeys::new(keys)
}
