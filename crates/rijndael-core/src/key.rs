//! Key sizes, the expanded key, and the Rijndael key schedule.

use core::convert::TryInto;

use crate::error::{Error, Result};
use crate::sbox::{sbox, RCON};

/// Supported key sizes and the cipher parameters each one fixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Selects the size for a raw key, rejecting unsupported lengths.
    pub fn for_key(key: &[u8]) -> Result<Self> {
        match key.len() {
            16 => Ok(KeySize::Aes128),
            24 => Ok(KeySize::Aes192),
            32 => Ok(KeySize::Aes256),
            other => Err(Error::InvalidKeyLength(other)),
        }
    }

    /// Number of cipher rounds after the initial key addition.
    pub fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes192 => 12,
            KeySize::Aes256 => 14,
        }
    }

    /// Key length in 4-byte words (Nk).
    pub fn key_words(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    /// Total expanded-key length in bytes: one 16-byte round key per round,
    /// plus the initial one.
    pub fn expanded_len(self) -> usize {
        16 * (self.rounds() + 1)
    }
}

/// Round-key material derived once from a raw key and read-only afterwards.
///
/// Bytes `[16r, 16r + 16)` form round key `r`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedKey {
    bytes: Vec<u8>,
    size: KeySize,
}

impl ExpandedKey {
    /// The key size the schedule was derived for.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of cipher rounds this key drives.
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// The full expanded byte sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The 16-byte round key for `round` (`0..=rounds`).
    pub fn round_key(&self, round: usize) -> &[u8; 16] {
        let start = 16 * round;
        self.bytes[start..start + 16]
            .try_into()
            .expect("round key slice is sixteen bytes")
    }
}

/// Expands a raw 16/24/32-byte key into the full round-key sequence.
///
/// Standard Rijndael schedule: the raw key seeds the sequence, then each new
/// 4-byte word is the word `Nk` positions back XORed with the previous word,
/// where the previous word first passes through the core transform (rotate,
/// substitute, round constant) at every multiple of `Nk`, or through a bare
/// substitution at the AES-256 half-way points.
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey> {
    let size = KeySize::for_key(key)?;
    let nk = size.key_words();
    let target = size.expanded_len();

    let mut bytes = key.to_vec();
    let mut word = nk;
    while bytes.len() < target {
        let mut w: [u8; 4] = bytes[bytes.len() - 4..]
            .try_into()
            .expect("tail slice is four bytes");
        if word % nk == 0 {
            w.rotate_left(1);
            for byte in w.iter_mut() {
                *byte = sbox(*byte);
            }
            w[0] ^= RCON[word / nk - 1];
        } else if nk == 8 && word % 8 == 4 {
            for byte in w.iter_mut() {
                *byte = sbox(*byte);
            }
        }
        let prev = bytes.len() - 4 * nk;
        for (i, byte) in w.iter_mut().enumerate() {
            *byte ^= bytes[prev + i];
        }
        bytes.extend_from_slice(&w);
        word += 1;
    }

    Ok(ExpandedKey { bytes, size })
}
