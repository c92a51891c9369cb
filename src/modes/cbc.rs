use rayon::prelude::*;

use crate::core::{decrypt_block, encrypt_block};
use crate::modes::util::{PARALLEL_THRESHOLD, xor_block};

/// Core CBC encryption. Input must already be padded to a multiple of 16 bytes.
///
/// Strictly sequential: each block's input is the plaintext XORed with the
/// previous ciphertext block, so block i+1 cannot start until block i is done.
pub(crate) fn cbc_encrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    debug_assert!(input.len() % 16 == 0, "CBC input must be block aligned");

    let mut output = vec![0u8; input.len()];
    let mut feedback = *iv;

    for (out, block) in output.chunks_exact_mut(16).zip(input.chunks_exact(16)) {
        xor_block(&mut feedback, block);
        feedback = encrypt_block(&feedback, round_keys);
        out.copy_from_slice(&feedback);
    }

    output
}

/// Core CBC decryption. Input length must be a multiple of 16 bytes (validated
/// by the caller).
///
/// Unlike encryption, each block only needs the previous *ciphertext* block,
/// which is already in hand, so decryption of large inputs fans out over rayon.
pub(crate) fn cbc_decrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    debug_assert!(input.len() % 16 == 0, "CBC input must be block aligned");

    let mut output = vec![0u8; input.len()];

    if input.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(16)
            .zip(input.par_chunks_exact(16))
            .enumerate()
            .for_each(|(i, (out, block))| {
                let block: &[u8; 16] = block.try_into().unwrap(); // exact chunks guarantee safe unwrap
                let mut plain = decrypt_block(block, round_keys);
                let prev: &[u8] = if i == 0 { iv } else { &input[(i - 1) * 16..i * 16] };
                xor_block(&mut plain, prev);
                out.copy_from_slice(&plain);
            });
    } else {
        let mut feedback = *iv;
        for (out, block) in output.chunks_exact_mut(16).zip(input.chunks_exact(16)) {
            let block: &[u8; 16] = block.try_into().unwrap();
            let mut plain = decrypt_block(block, round_keys);
            xor_block(&mut plain, &feedback);
            feedback = *block;
            out.copy_from_slice(&plain);
        }
    }

    output
}
