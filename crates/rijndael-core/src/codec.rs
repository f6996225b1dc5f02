//! Hex-text chunking to and from block sequences.

use core::convert::TryInto;

use crate::block::State;
use crate::error::{Error, Result};

/// Parses a run of hex digit pairs into 16-byte blocks.
///
/// The text must be a positive multiple of 32 hex digits; no padding is
/// applied, a ragged trailing chunk is the caller's error.
pub fn blocks_from_hex(input: &str) -> Result<Vec<State>> {
    let bytes = hex::decode(input).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            Error::InvalidHexDigit { ch: c, index }
        }
        _ => Error::InvalidInputLength(input.len()),
    })?;
    if bytes.is_empty() || bytes.len() % 16 != 0 {
        return Err(Error::InvalidInputLength(input.len()));
    }

    Ok(bytes
        .chunks_exact(16)
        .map(|chunk| {
            let block: [u8; 16] = chunk.try_into().expect("chunk length is sixteen");
            State::from_bytes(&block)
        })
        .collect())
}

/// Renders blocks as one run of lowercase hex digit pairs, in block order,
/// reading each block column-major to match the round-key byte ordering.
pub fn blocks_to_hex(blocks: &[State]) -> String {
    let mut out = String::with_capacity(blocks.len() * 32);
    for block in blocks {
        out.push_str(&hex::encode(block.to_bytes()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_per_block() {
        let input = "00112233445566778899aabbccddeeff000102030405060708090a0b0c0d0e0f";
        let blocks = blocks_from_hex(input).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks_to_hex(&blocks), input);
    }

    #[test]
    fn output_is_lowercase() {
        let blocks = blocks_from_hex("00112233445566778899AABBCCDDEEFF").unwrap();
        assert_eq!(blocks_to_hex(&blocks), "00112233445566778899aabbccddeeff");
    }

    #[test]
    fn rejects_unaligned_length() {
        // 30 digits: valid hex pairs but one block short of alignment.
        let input = "001122334455667788990a0b0c0d0e";
        assert_eq!(
            blocks_from_hex(input),
            Err(Error::InvalidInputLength(30))
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(blocks_from_hex(""), Err(Error::InvalidInputLength(0)));
    }

    #[test]
    fn rejects_odd_digit_count() {
        let input = "00112233445566778899aabbccddeef";
        assert_eq!(
            blocks_from_hex(input),
            Err(Error::InvalidInputLength(31))
        );
    }

    #[test]
    fn reports_bad_digit_and_position() {
        let input = "00112233445566g78899aabbccddeeff";
        assert_eq!(
            blocks_from_hex(input),
            Err(Error::InvalidHexDigit { ch: 'g', index: 14 })
        );
    }

    #[test]
    fn parsed_blocks_feed_the_state_column_major() {
        let blocks = blocks_from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
        let state = blocks[0];
        assert_eq!(state.to_bytes()[5], 0x05);
    }
}
