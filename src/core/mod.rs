//! Core AES block transform. Encrypts and decrypts a single 16-byte block
//! (stored column-major) against a precomputed round-key schedule. Pure
//! functions; no state is carried between calls.

pub(crate) mod tables;

mod decrypt;
mod encrypt;

pub(crate) use decrypt::decrypt_block;
pub(crate) use encrypt::encrypt_block;

// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for i in 0..16 {
        state[i] ^= round_key[i];
    }
}

// GF(2^8) doubling, reduction polynomial x^8 + x^4 + x^3 + x + 1 (0x1B).
// Branch-free: the reduction mask is derived from the carried-out bit rather
// than tested with a conditional. Adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}
