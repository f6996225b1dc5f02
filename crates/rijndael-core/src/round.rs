//! Forward and inverse round transformations.
//!
//! All transforms are pure value-returning functions over [`State`]; the
//! cipher pipeline threads the state through them in sequence.

use crate::block::State;
use crate::gf::multiply;
use crate::sbox::{inv_sbox, sbox};

/// XORs a 16-byte round key into the state.
///
/// The round key is reshaped with the same column-major mapping as the block
/// codec, so key byte `k` meets state row `k % 4`, column `k / 4`.
pub(crate) fn add_round_key(state: State, round_key: &[u8; 16]) -> State {
    state.xor(&State::from_bytes(round_key))
}

/// Replaces every cell with its S-box substitute.
pub(crate) fn sub_bytes(mut state: State) -> State {
    for row in state.0.iter_mut() {
        for cell in row.iter_mut() {
            *cell = sbox(*cell);
        }
    }
    state
}

/// Replaces every cell with its inverse S-box substitute.
pub(crate) fn inv_sub_bytes(mut state: State) -> State {
    for row in state.0.iter_mut() {
        for cell in row.iter_mut() {
            *cell = inv_sbox(*cell);
        }
    }
    state
}

/// Rotates row `i` left by `i` cells.
pub(crate) fn shift_rows(mut state: State) -> State {
    for (i, row) in state.0.iter_mut().enumerate() {
        row.rotate_left(i);
    }
    state
}

/// Rotates row `i` right by `i` cells, undoing [`shift_rows`].
pub(crate) fn inv_shift_rows(mut state: State) -> State {
    for (i, row) in state.0.iter_mut().enumerate() {
        row.rotate_right(i);
    }
    state
}

/// Multiplies each column by the fixed MixColumns matrix over GF(2^8).
///
/// Columns are indexed directly in the row-major state; no transposition.
pub(crate) fn mix_columns(mut state: State) -> State {
    for c in 0..4 {
        let col = [state.0[0][c], state.0[1][c], state.0[2][c], state.0[3][c]];
        state.0[0][c] = multiply(2, col[0]) ^ multiply(3, col[1]) ^ col[2] ^ col[3];
        state.0[1][c] = col[0] ^ multiply(2, col[1]) ^ multiply(3, col[2]) ^ col[3];
        state.0[2][c] = col[0] ^ col[1] ^ multiply(2, col[2]) ^ multiply(3, col[3]);
        state.0[3][c] = multiply(3, col[0]) ^ col[1] ^ col[2] ^ multiply(2, col[3]);
    }
    state
}

/// Multiplies each column by the inverse MixColumns matrix over GF(2^8).
pub(crate) fn inv_mix_columns(mut state: State) -> State {
    for c in 0..4 {
        let col = [state.0[0][c], state.0[1][c], state.0[2][c], state.0[3][c]];
        state.0[0][c] =
            multiply(14, col[0]) ^ multiply(11, col[1]) ^ multiply(13, col[2]) ^ multiply(9, col[3]);
        state.0[1][c] =
            multiply(9, col[0]) ^ multiply(14, col[1]) ^ multiply(11, col[2]) ^ multiply(13, col[3]);
        state.0[2][c] =
            multiply(13, col[0]) ^ multiply(9, col[1]) ^ multiply(14, col[2]) ^ multiply(11, col[3]);
        state.0[3][c] =
            multiply(11, col[0]) ^ multiply(13, col[1]) ^ multiply(9, col[2]) ^ multiply(14, col[3]);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> State {
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(17).wrapping_add(3);
        }
        State::from_bytes(&bytes)
    }

    #[test]
    fn shift_rows_inverts() {
        let state = sample_state();
        assert_eq!(inv_shift_rows(shift_rows(state)), state);
        assert_eq!(shift_rows(inv_shift_rows(state)), state);
    }

    #[test]
    fn shift_rows_leaves_row_zero_alone() {
        let state = sample_state();
        let shifted = shift_rows(state);
        assert_eq!(shifted.0[0], state.0[0]);
        // Row 1 rotates left by one.
        assert_eq!(
            shifted.0[1],
            [state.0[1][1], state.0[1][2], state.0[1][3], state.0[1][0]]
        );
    }

    #[test]
    fn sub_bytes_inverts() {
        let state = sample_state();
        assert_eq!(inv_sub_bytes(sub_bytes(state)), state);
    }

    #[test]
    fn mix_columns_inverts() {
        let state = sample_state();
        assert_eq!(inv_mix_columns(mix_columns(state)), state);
    }

    #[test]
    fn mix_columns_matches_fips_column() {
        // FIPS-197 §5.1.3 example: column db 13 53 45 maps to 8e 4d a1 bc.
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        let mixed = mix_columns(State::from_bytes(&bytes));
        let out = mixed.to_bytes();
        assert_eq!(&out[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        // Zero columns are fixed points.
        assert_eq!(&out[4..], &[0u8; 12][..]);
    }

    #[test]
    fn add_round_key_is_self_inverse() {
        let state = sample_state();
        let round_key = [0x5au8; 16];
        assert_eq!(add_round_key(add_round_key(state, &round_key), &round_key), state);
    }
}
