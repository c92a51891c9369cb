use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::*;

/// Generates a random 16-byte IV for CBC mode. Returns Error if OsRng fails.
pub fn random_iv() -> Result<[u8; 16]> {
    let mut iv = [0u8; 16];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

#[inline(always)]
pub(crate) fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// PKCS#7 padding to the next 16-byte boundary. Aligned input gains a full
/// block of 0x10 bytes, so padding is always present and unambiguous.
pub(crate) fn pad(plaintext: &[u8]) -> Vec<u8> {
    let rem = plaintext.len() % 16;
    let pad_len = 16 - rem;

    let total_len = plaintext
        .len()
        .checked_add(pad_len)
        .expect("plaintext too large to pad");

    let mut out = vec![0u8; total_len];
    out[..plaintext.len()].copy_from_slice(plaintext);
    out[plaintext.len()..].fill(pad_len as u8);
    out
}

/// Remove and validate PKCS#7 padding. The last byte N must satisfy
/// 1 <= N <= 16 and the trailing N bytes must all equal N.
pub(crate) fn unpad(input: &mut Vec<u8>) -> Result<()> {
    let pad = match input.last() {
        Some(&b) => b as usize,
        None => {
            return Err(Error::InvalidPadding {
                context: "attempted to unpad empty input",
            });
        }
    };

    if pad == 0 || pad > 16 || pad > input.len() {
        return Err(Error::InvalidPadding {
            context: "padding length specified by last byte is out of range",
        });
    }

    let start = input.len() - pad;
    if !input[start..].iter().all(|&b| b as usize == pad) {
        return Err(Error::InvalidPadding {
            context: "trailing bytes do not all match the padding length",
        });
    }

    input.truncate(start);
    Ok(())
}
