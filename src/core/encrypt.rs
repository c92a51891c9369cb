use super::tables::SBOX;
use super::{add_round_key, dbl};

/// Forward AES round function. Encrypts one 16-byte block with the given round keys.
///
/// AddRoundKey with key 0, then SubBytes/ShiftRows/MixColumns/AddRoundKey for
/// every middle round, with MixColumns omitted from the final round.
#[inline(always)]
pub(crate) fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *plaintext;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state
}

/// SubBytes step: per-byte S-box substitution.
#[inline(always)]
pub(super) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step: row r of the column-major state rotates left by r positions.
#[inline(always)]
pub(super) fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns step. Each column is multiplied by the fixed matrix
/// `{02 03 01 01; 01 02 03 01; 01 01 02 03; 03 01 01 02}` over GF(2^8),
/// expressed through the shared-doubling identity 3x = dbl(x) ^ x.
#[inline(always)]
pub(super) fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = dbl(a ^ b) ^ b ^ c ^ d; /* 2a + 3b + 1c + 1d */
        state[i + 1] = dbl(b ^ c) ^ c ^ d ^ a; /* 1a + 2b + 3c + 1d */
        state[i + 2] = dbl(c ^ d) ^ d ^ a ^ b; /* 1a + 1b + 2c + 3d */
        state[i + 3] = dbl(d ^ a) ^ a ^ b ^ c; /* 3a + 1b + 1c + 2d */
    }
}
