//! Single-block encryption and decryption.

use crate::block::State;
use crate::key::ExpandedKey;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::trace::{Stage, TraceEvent, Tracer};

/// Encrypts one block under a pre-expanded key.
pub fn encrypt_block(state: State, key: &ExpandedKey) -> State {
    run_encrypt(state, key, &mut Tracer::disabled())
}

/// Decrypts one block under a pre-expanded key.
pub fn decrypt_block(state: State, key: &ExpandedKey) -> State {
    run_decrypt(state, key, &mut Tracer::disabled())
}

/// Encrypts one block, capturing the state after every transform stage.
pub fn encrypt_block_traced(state: State, key: &ExpandedKey) -> (State, Vec<TraceEvent>) {
    let mut tracer = Tracer::recording();
    let out = run_encrypt(state, key, &mut tracer);
    (out, tracer.into_events())
}

/// Decrypts one block, capturing the state after every transform stage.
pub fn decrypt_block_traced(state: State, key: &ExpandedKey) -> (State, Vec<TraceEvent>) {
    let mut tracer = Tracer::recording();
    let out = run_decrypt(state, key, &mut tracer);
    (out, tracer.into_events())
}

fn run_encrypt(mut state: State, key: &ExpandedKey, tracer: &mut Tracer) -> State {
    let rounds = key.rounds();

    state = add_round_key(state, key.round_key(0));
    tracer.record(0, Stage::AddRoundKey, &state);

    for round in 1..rounds {
        state = sub_bytes(state);
        tracer.record(round, Stage::SubBytes, &state);
        state = shift_rows(state);
        tracer.record(round, Stage::ShiftRows, &state);
        state = mix_columns(state);
        tracer.record(round, Stage::MixColumns, &state);
        state = add_round_key(state, key.round_key(round));
        tracer.record(round, Stage::AddRoundKey, &state);
    }

    // Final round skips MixColumns.
    state = sub_bytes(state);
    tracer.record(rounds, Stage::SubBytes, &state);
    state = shift_rows(state);
    tracer.record(rounds, Stage::ShiftRows, &state);
    state = add_round_key(state, key.round_key(rounds));
    tracer.record(rounds, Stage::AddRoundKey, &state);

    state
}

fn run_decrypt(mut state: State, key: &ExpandedKey, tracer: &mut Tracer) -> State {
    let rounds = key.rounds();

    state = add_round_key(state, key.round_key(rounds));
    tracer.record(rounds, Stage::AddRoundKey, &state);
    state = inv_shift_rows(state);
    tracer.record(rounds, Stage::InvShiftRows, &state);
    state = inv_sub_bytes(state);
    tracer.record(rounds, Stage::InvSubBytes, &state);

    for round in (1..rounds).rev() {
        state = add_round_key(state, key.round_key(round));
        tracer.record(round, Stage::AddRoundKey, &state);
        state = inv_mix_columns(state);
        tracer.record(round, Stage::InvMixColumns, &state);
        state = inv_shift_rows(state);
        tracer.record(round, Stage::InvShiftRows, &state);
        state = inv_sub_bytes(state);
        tracer.record(round, Stage::InvSubBytes, &state);
    }

    state = add_round_key(state, key.round_key(0));
    tracer.record(0, Stage::AddRoundKey, &state);

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::expand_key;
    use rand::RngCore;

    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    // FIPS-197 appendix C vectors: the key is always the byte ramp 00, 01, …
    const CIPHER_128: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];
    const CIPHER_192: [u8; 16] = [
        0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71,
        0x91,
    ];
    const CIPHER_256: [u8; 16] = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    fn ramp_key(len: u8) -> Vec<u8> {
        (0..len).collect()
    }

    #[test]
    fn encrypt_matches_fips_vectors() {
        for (key_len, expected) in [(16u8, CIPHER_128), (24, CIPHER_192), (32, CIPHER_256)] {
            let key = expand_key(&ramp_key(key_len)).unwrap();
            let ct = encrypt_block(State::from_bytes(&NIST_PLAIN), &key);
            assert_eq!(ct.to_bytes(), expected, "key length {key_len}");
        }
    }

    #[test]
    fn decrypt_matches_fips_vectors() {
        for (key_len, ciphertext) in [(16u8, CIPHER_128), (24, CIPHER_192), (32, CIPHER_256)] {
            let key = expand_key(&ramp_key(key_len)).unwrap();
            let pt = decrypt_block(State::from_bytes(&ciphertext), &key);
            assert_eq!(pt.to_bytes(), NIST_PLAIN, "key length {key_len}");
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for key_len in [16usize, 24, 32] {
            for _ in 0..50 {
                let mut key_bytes = vec![0u8; key_len];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key_bytes);
                rng.fill_bytes(&mut block);
                let key = expand_key(&key_bytes).unwrap();
                let state = State::from_bytes(&block);
                assert_eq!(decrypt_block(encrypt_block(state, &key), &key), state);
            }
        }
    }

    #[test]
    fn traced_variants_agree_with_plain_ones() {
        let key = expand_key(&ramp_key(16)).unwrap();
        let state = State::from_bytes(&NIST_PLAIN);

        let (ct, events) = encrypt_block_traced(state, &key);
        assert_eq!(ct, encrypt_block(state, &key));
        // One initial key addition, four stages per inner round, three in the
        // final round: 4 * rounds in total. Same count on the way back.
        assert_eq!(events.len(), 4 * key.rounds());
        assert_eq!(events.last().unwrap().state, ct);

        let (pt, events) = decrypt_block_traced(ct, &key);
        assert_eq!(pt, state);
        assert_eq!(events.len(), 4 * key.rounds());
        assert_eq!(events.last().unwrap().state, pt);
    }
}
