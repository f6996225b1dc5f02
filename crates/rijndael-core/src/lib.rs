//! Rijndael/AES block-cipher engine.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128/192/256.
//! - The four round transformations and their inverses, composed into
//!   single-block encryption and decryption.
//! - Independent and chained block-sequence modes, plus the hex block codec
//!   the CLI collaborator consumes.
//!
//! The chained mode preserves this engine's historical feedback behavior:
//! there is no initialization vector, so block 0 is enciphered bare and the
//! output is not interoperable with standard AES-CBC, although encrypt and
//! decrypt invert each other exactly.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; table lookups are not hardened against
//! cache-timing side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod codec;
mod error;
mod gf;
mod key;
mod mode;
mod round;
mod sbox;
mod trace;

pub use crate::block::State;
pub use crate::cipher::{
    decrypt_block, decrypt_block_traced, encrypt_block, encrypt_block_traced,
};
pub use crate::codec::{blocks_from_hex, blocks_to_hex};
pub use crate::error::{Error, Result};
pub use crate::key::{expand_key, ExpandedKey, KeySize};
pub use crate::mode::{decrypt_blocks, decrypt_cbc, encrypt_blocks, encrypt_cbc};
pub use crate::trace::{Stage, TraceEvent};
