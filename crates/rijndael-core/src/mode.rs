//! Block-sequence modes: independent per-block operation and ciphertext
//! chaining.
//!
//! The chained mode keeps this engine's historical behavior: block 0 is
//! enciphered with no feedback, i.e. there is no initialization vector. The
//! feedback XOR lands next to the round-0 key addition, which makes it
//! byte-identical to textbook CBC chaining, but the missing IV means the
//! output does not interoperate with a standards-compliant AES-CBC peer.
//! Encrypt and decrypt remain exact inverses of each other.

use crate::block::State;
use crate::cipher::{decrypt_block, encrypt_block};
use crate::key::ExpandedKey;

/// Encrypts each block independently, with no cross-block state.
pub fn encrypt_blocks(blocks: &[State], key: &ExpandedKey) -> Vec<State> {
    blocks.iter().map(|block| encrypt_block(*block, key)).collect()
}

/// Decrypts each block independently, with no cross-block state.
pub fn decrypt_blocks(blocks: &[State], key: &ExpandedKey) -> Vec<State> {
    blocks.iter().map(|block| decrypt_block(*block, key)).collect()
}

/// Encrypts a block sequence with ciphertext feedback.
///
/// Strictly sequential: block `i` folds in the finished ciphertext of block
/// `i - 1` before it is enciphered, so blocks cannot be reordered or
/// processed in parallel.
pub fn encrypt_cbc(blocks: &[State], key: &ExpandedKey) -> Vec<State> {
    let mut out = Vec::with_capacity(blocks.len());
    let mut prev: Option<State> = None;
    for block in blocks {
        let fed = match prev {
            Some(ciphertext) => block.xor(&ciphertext),
            None => *block,
        };
        let ciphertext = encrypt_block(fed, key);
        prev = Some(ciphertext);
        out.push(ciphertext);
    }
    out
}

/// Decrypts a chained block sequence.
///
/// Feedback always uses the ciphertext exactly as received; block `i` needs
/// only the original block `i - 1`, never any decrypted output, so the input
/// sequence must stay untouched while blocks are processed.
pub fn decrypt_cbc(blocks: &[State], key: &ExpandedKey) -> Vec<State> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let plain = decrypt_block(*block, key);
            if i == 0 {
                plain
            } else {
                plain.xor(&blocks[i - 1])
            }
        })
        .collect()
}
