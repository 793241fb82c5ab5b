//! Demonstrates a password-based encrypt/decrypt round trip.

use aes_envelope::{decrypt, derive_key, encrypt_with_rng, KeySize};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let key = derive_key(b"open sesame", KeySize::Bits256);
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);

    let message = b"the quick brown fox jumps over the lazy dog";
    let (iv, ciphertext) = encrypt_with_rng(message, &key, &mut rng);
    println!("iv:         {}", hex::encode(iv));
    println!("ciphertext: {}", hex::encode(&ciphertext));

    let recovered = decrypt(&iv, &ciphertext, &key).expect("ciphertext is untouched");
    assert_eq!(recovered, message);
    println!("example succeeded; plaintext recovered");
}
