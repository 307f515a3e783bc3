// src/core/aes128.rs
// AES-128 (FIPS 197) with a mandatory per-round trace. The 16-byte state is a
// flat array in standard byte order (column-major: byte r + 4c holds row r of
// column c), mutated in place during a block and snapshotted into the trace
// after each transformation.

use serde::{Deserialize, Serialize};

use crate::core::error::{CryptoError, CryptoResult};

pub const BLOCK_SIZE: usize = 16;
const ROUNDS: usize = 10;
const EXPANDED_KEY_LEN: usize = BLOCK_SIZE * (ROUNDS + 1);

const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Block chaining mode. `Ecb` encrypts every block independently; `Cbc` XORs
/// each plaintext block with the previous ciphertext block, seeded by the IV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc { iv: [u8; BLOCK_SIZE] },
}

/// One round's worth of intermediate state, captured as space-separated hex.
///
/// Fields are `None` when the round does not perform that transformation:
/// round 0 of encryption only whitens, and column mixing is absent on rounds
/// 0 and 10 in both directions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u8,
    pub start_of_round: String,
    pub after_sub_bytes: Option<String>,
    pub after_shift_rows: Option<String>,
    pub after_mix_columns: Option<String>,
    pub round_key: String,
}

/// Ciphertext or plaintext bytes together with the full round trace
/// (11 snapshots per processed block).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AesOutput {
    pub bytes: Vec<u8>,
    pub rounds: Vec<RoundSnapshot>,
}

fn state_to_hex(state: &[u8; BLOCK_SIZE]) -> String {
    state
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn round_key_hex(expanded: &[u8; EXPANDED_KEY_LEN], round: usize) -> String {
    let mut key = [0u8; BLOCK_SIZE];
    key.copy_from_slice(&expanded[round * BLOCK_SIZE..(round + 1) * BLOCK_SIZE]);
    state_to_hex(&key)
}

// GF(2^8) multiplication ladder over the AES polynomial x^8+x^4+x^3+x+1.
fn mul2(x: u8) -> u8 {
    (x << 1) ^ (((x >> 7) & 1) * 0x1b)
}
fn mul3(x: u8) -> u8 {
    mul2(x) ^ x
}
fn mul9(x: u8) -> u8 {
    mul2(mul2(mul2(x))) ^ x
}
fn mul11(x: u8) -> u8 {
    mul2(mul2(mul2(x))) ^ mul2(x) ^ x
}
fn mul13(x: u8) -> u8 {
    mul2(mul2(mul2(x))) ^ mul2(mul2(x)) ^ x
}
fn mul14(x: u8) -> u8 {
    mul2(mul2(mul2(x))) ^ mul2(mul2(x)) ^ mul2(x)
}

fn sub_bytes(state: &mut [u8; BLOCK_SIZE]) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; BLOCK_SIZE]) {
    for b in state.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

// Cyclic left shift of row r by r positions (rows live at indices r, r+4,
// r+8, r+12 of the column-major state).
fn shift_rows(state: &mut [u8; BLOCK_SIZE]) {
    let t = *state;
    state[1] = t[5];
    state[5] = t[9];
    state[9] = t[13];
    state[13] = t[1];

    state[2] = t[10];
    state[6] = t[14];
    state[10] = t[2];
    state[14] = t[6];

    state[3] = t[15];
    state[7] = t[3];
    state[11] = t[7];
    state[15] = t[11];
}

fn inv_shift_rows(state: &mut [u8; BLOCK_SIZE]) {
    let t = *state;
    state[1] = t[13];
    state[5] = t[1];
    state[9] = t[5];
    state[13] = t[9];

    state[2] = t[10];
    state[6] = t[14];
    state[10] = t[2];
    state[14] = t[6];

    state[3] = t[7];
    state[7] = t[11];
    state[11] = t[15];
    state[15] = t[3];
}

fn mix_columns(state: &mut [u8; BLOCK_SIZE]) {
    for c in 0..4 {
        let a0 = state[4 * c];
        let a1 = state[4 * c + 1];
        let a2 = state[4 * c + 2];
        let a3 = state[4 * c + 3];

        state[4 * c] = mul2(a0) ^ mul3(a1) ^ a2 ^ a3;
        state[4 * c + 1] = a0 ^ mul2(a1) ^ mul3(a2) ^ a3;
        state[4 * c + 2] = a0 ^ a1 ^ mul2(a2) ^ mul3(a3);
        state[4 * c + 3] = mul3(a0) ^ a1 ^ a2 ^ mul2(a3);
    }
}

fn inv_mix_columns(state: &mut [u8; BLOCK_SIZE]) {
    for c in 0..4 {
        let a0 = state[4 * c];
        let a1 = state[4 * c + 1];
        let a2 = state[4 * c + 2];
        let a3 = state[4 * c + 3];

        state[4 * c] = mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3);
        state[4 * c + 1] = mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3);
        state[4 * c + 2] = mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3);
        state[4 * c + 3] = mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3);
    }
}

fn add_round_key(state: &mut [u8; BLOCK_SIZE], expanded: &[u8; EXPANDED_KEY_LEN], round: usize) {
    for (i, b) in state.iter_mut().enumerate() {
        *b ^= expanded[round * BLOCK_SIZE + i];
    }
}

/// Expand a 16-byte key into 11 round keys (176 bytes): word rotate + S-box
/// substitution + round-constant XOR on every 4th word.
fn expand_key(key: &[u8; BLOCK_SIZE]) -> [u8; EXPANDED_KEY_LEN] {
    let mut expanded = [0u8; EXPANDED_KEY_LEN];
    expanded[..BLOCK_SIZE].copy_from_slice(key);

    for i in (BLOCK_SIZE..EXPANDED_KEY_LEN).step_by(4) {
        let mut temp = [
            expanded[i - 4],
            expanded[i - 3],
            expanded[i - 2],
            expanded[i - 1],
        ];
        if i % BLOCK_SIZE == 0 {
            temp = [temp[1], temp[2], temp[3], temp[0]];
            for b in temp.iter_mut() {
                *b = SBOX[*b as usize];
            }
            temp[0] ^= RCON[i / BLOCK_SIZE - 1];
        }
        for j in 0..4 {
            expanded[i + j] = expanded[i - BLOCK_SIZE + j] ^ temp[j];
        }
    }
    expanded
}

/// PKCS#7: pad to a block multiple; an already-aligned input gains a full
/// extra block. The pad byte equals the pad length.
fn pad(plaintext: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
    let mut padded = plaintext.to_vec();
    padded.resize(plaintext.len() + pad_len, pad_len as u8);
    padded
}

/// Strip and validate PKCS#7 padding: pad byte in `[1, 16]` and every one of
/// the trailing `n` bytes equal to `n`.
fn unpad(padded: &[u8]) -> CryptoResult<Vec<u8>> {
    let pad_len = *padded.last().ok_or(CryptoError::Padding)? as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > padded.len() {
        return Err(CryptoError::Padding);
    }
    if padded[padded.len() - pad_len..]
        .iter()
        .any(|&b| b as usize != pad_len)
    {
        return Err(CryptoError::Padding);
    }
    Ok(padded[..padded.len() - pad_len].to_vec())
}

fn check_key(key: &[u8]) -> CryptoResult<[u8; BLOCK_SIZE]> {
    if key.len() != BLOCK_SIZE {
        return Err(CryptoError::KeyLength(key.len()));
    }
    let mut out = [0u8; BLOCK_SIZE];
    out.copy_from_slice(key);
    Ok(out)
}

// Run the forward round pipeline over one block, returning the final state
// and the 11 snapshots (round 0 is the whitening XOR alone).
fn encrypt_block_traced(
    mut state: [u8; BLOCK_SIZE],
    expanded: &[u8; EXPANDED_KEY_LEN],
) -> ([u8; BLOCK_SIZE], Vec<RoundSnapshot>) {
    let mut rounds = Vec::with_capacity(ROUNDS + 1);

    rounds.push(RoundSnapshot {
        round: 0,
        start_of_round: state_to_hex(&state),
        after_sub_bytes: None,
        after_shift_rows: None,
        after_mix_columns: None,
        round_key: round_key_hex(expanded, 0),
    });
    add_round_key(&mut state, expanded, 0);

    for round in 1..ROUNDS {
        let start = state_to_hex(&state);
        sub_bytes(&mut state);
        let after_sub = state_to_hex(&state);
        shift_rows(&mut state);
        let after_shift = state_to_hex(&state);
        mix_columns(&mut state);
        let after_mix = state_to_hex(&state);
        add_round_key(&mut state, expanded, round);

        rounds.push(RoundSnapshot {
            round: round as u8,
            start_of_round: start,
            after_sub_bytes: Some(after_sub),
            after_shift_rows: Some(after_shift),
            after_mix_columns: Some(after_mix),
            round_key: round_key_hex(expanded, round),
        });
    }

    let start = state_to_hex(&state);
    sub_bytes(&mut state);
    let after_sub = state_to_hex(&state);
    shift_rows(&mut state);
    let after_shift = state_to_hex(&state);
    add_round_key(&mut state, expanded, ROUNDS);

    rounds.push(RoundSnapshot {
        round: ROUNDS as u8,
        start_of_round: start,
        after_sub_bytes: Some(after_sub),
        after_shift_rows: Some(after_shift),
        after_mix_columns: None,
        round_key: round_key_hex(expanded, ROUNDS),
    });

    (state, rounds)
}

// Inverse pipeline, rounds 10 down to 0. Snapshots are recorded in
// processing order, so the trace runs 10, 9, ..., 0.
fn decrypt_block_traced(
    mut state: [u8; BLOCK_SIZE],
    expanded: &[u8; EXPANDED_KEY_LEN],
) -> ([u8; BLOCK_SIZE], Vec<RoundSnapshot>) {
    let mut rounds = Vec::with_capacity(ROUNDS + 1);

    rounds.push(RoundSnapshot {
        round: ROUNDS as u8,
        start_of_round: state_to_hex(&state),
        after_sub_bytes: None,
        after_shift_rows: None,
        after_mix_columns: None,
        round_key: round_key_hex(expanded, ROUNDS),
    });
    add_round_key(&mut state, expanded, ROUNDS);

    for round in (1..ROUNDS).rev() {
        let start = state_to_hex(&state);
        inv_shift_rows(&mut state);
        let after_shift = state_to_hex(&state);
        inv_sub_bytes(&mut state);
        let after_sub = state_to_hex(&state);
        add_round_key(&mut state, expanded, round);
        inv_mix_columns(&mut state);
        let after_mix = state_to_hex(&state);

        rounds.push(RoundSnapshot {
            round: round as u8,
            start_of_round: start,
            after_sub_bytes: Some(after_sub),
            after_shift_rows: Some(after_shift),
            after_mix_columns: Some(after_mix),
            round_key: round_key_hex(expanded, round),
        });
    }

    let start = state_to_hex(&state);
    inv_shift_rows(&mut state);
    let after_shift = state_to_hex(&state);
    inv_sub_bytes(&mut state);
    let after_sub = state_to_hex(&state);
    add_round_key(&mut state, expanded, 0);

    rounds.push(RoundSnapshot {
        round: 0,
        start_of_round: start,
        after_sub_bytes: Some(after_sub),
        after_shift_rows: Some(after_shift),
        after_mix_columns: None,
        round_key: round_key_hex(expanded, 0),
    });

    (state, rounds)
}

/// Encrypt a single pre-aligned block with no padding and no chaining
/// (the FIPS-197 vector entry point).
pub fn encrypt_block(
    block: &[u8; BLOCK_SIZE],
    key: &[u8; BLOCK_SIZE],
) -> ([u8; BLOCK_SIZE], Vec<RoundSnapshot>) {
    encrypt_block_traced(*block, &expand_key(key))
}

/// Decrypt a single block with no unpadding and no chaining.
pub fn decrypt_block(
    block: &[u8; BLOCK_SIZE],
    key: &[u8; BLOCK_SIZE],
) -> ([u8; BLOCK_SIZE], Vec<RoundSnapshot>) {
    decrypt_block_traced(*block, &expand_key(key))
}

/// Pad `plaintext`, then encrypt block by block in the selected mode.
pub fn encrypt(plaintext: &[u8], key: &[u8], mode: Mode) -> CryptoResult<AesOutput> {
    let key = check_key(key)?;
    let expanded = expand_key(&key);
    let padded = pad(plaintext);

    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut rounds = Vec::with_capacity(padded.len() / BLOCK_SIZE * (ROUNDS + 1));
    let mut previous = match mode {
        Mode::Cbc { iv } => Some(iv),
        Mode::Ecb => None,
    };

    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut state = [0u8; BLOCK_SIZE];
        state.copy_from_slice(chunk);
        if let Some(prev) = previous {
            for (b, p) in state.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
        }

        let (encrypted, block_rounds) = encrypt_block_traced(state, &expanded);
        rounds.extend(block_rounds);
        ciphertext.extend_from_slice(&encrypted);
        if previous.is_some() {
            previous = Some(encrypted);
        }
    }

    Ok(AesOutput { bytes: ciphertext, rounds })
}

/// Decrypt block by block in the selected mode, then strip padding.
pub fn decrypt(ciphertext: &[u8], key: &[u8], mode: Mode) -> CryptoResult<AesOutput> {
    let key = check_key(key)?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::BlockAlignment(ciphertext.len()));
    }
    let expanded = expand_key(&key);

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut rounds = Vec::with_capacity(ciphertext.len() / BLOCK_SIZE * (ROUNDS + 1));
    let mut previous = match mode {
        Mode::Cbc { iv } => Some(iv),
        Mode::Ecb => None,
    };

    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut state = [0u8; BLOCK_SIZE];
        state.copy_from_slice(chunk);
        let current = state;

        let (mut decrypted, block_rounds) = decrypt_block_traced(state, &expanded);
        rounds.extend(block_rounds);
        if let Some(prev) = previous {
            for (b, p) in decrypted.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            previous = Some(current);
        }
        plaintext.extend_from_slice(&decrypted);
    }

    Ok(AesOutput { bytes: unpad(&plaintext)?, rounds })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];

    #[test]
    fn key_schedule_last_round_key() {
        // Last round key from the FIPS-197 appendix C.1 trace (000102...0f key).
        let expanded = expand_key(&KEY);
        assert_eq!(
            &expanded[160..176],
            &[
                0x13, 0x11, 0x1d, 0x7f, 0xe3, 0x94, 0x4a, 0x17, 0xf3, 0x07, 0xa7, 0x8b, 0x4d, 0x2b,
                0x30, 0xc5
            ]
        );
    }

    #[test]
    fn pad_roundtrip_lengths() {
        for len in 0..48 {
            let data = vec![0x41u8; len];
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert!(padded.len() > data.len());
            assert_eq!(unpad(&padded).unwrap(), data);
        }
    }

    #[test]
    fn unpad_rejects_bad_values() {
        let mut block = vec![0u8; 16];
        block[15] = 0; // zero pad byte
        assert_eq!(unpad(&block).unwrap_err(), CryptoError::Padding);
        block[15] = 17; // beyond one block
        assert_eq!(unpad(&block).unwrap_err(), CryptoError::Padding);
        block[15] = 3;
        block[14] = 3;
        block[13] = 2; // trailing bytes disagree
        assert_eq!(unpad(&block).unwrap_err(), CryptoError::Padding);
    }

    #[test]
    fn shift_rows_inverts() {
        let mut state = [0u8; 16];
        for (i, b) in state.iter_mut().enumerate() {
            *b = i as u8;
        }
        let original = state;
        shift_rows(&mut state);
        assert_ne!(state, original);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn mix_columns_inverts() {
        let mut state = [0u8; 16];
        for (i, b) in state.iter_mut().enumerate() {
            *b = (i * 17) as u8;
        }
        let original = state;
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }
}
