use rayon::prelude::*;

use crate::core::{decrypt_block, encrypt_block};
use crate::modes::util::PARALLEL_THRESHOLD;

/// Core ECB encryption. Input must already be padded to a multiple of 16 bytes.
/// Blocks carry no inter-block dependency, so large inputs fan out over rayon.
pub(crate) fn ecb_encrypt(input: &[u8], round_keys: &[[u8; 16]]) -> Vec<u8> {
    debug_assert!(input.len() % 16 == 0, "ECB input must be block aligned");

    let mut output = vec![0u8; input.len()];

    if input.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(16)
            .zip(input.par_chunks_exact(16))
            .for_each(|(out, block)| {
                let block: &[u8; 16] = block.try_into().unwrap(); // exact chunks guarantee safe unwrap
                out.copy_from_slice(&encrypt_block(block, round_keys));
            });
    } else {
        for (out, block) in output.chunks_exact_mut(16).zip(input.chunks_exact(16)) {
            let block: &[u8; 16] = block.try_into().unwrap();
            out.copy_from_slice(&encrypt_block(block, round_keys));
        }
    }

    output
}

/// Core ECB decryption. Input length must be a multiple of 16 bytes (validated
/// by the caller before any block transform is attempted).
pub(crate) fn ecb_decrypt(input: &[u8], round_keys: &[[u8; 16]]) -> Vec<u8> {
    debug_assert!(input.len() % 16 == 0, "ECB input must be block aligned");

    let mut output = vec![0u8; input.len()];

    if input.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(16)
            .zip(input.par_chunks_exact(16))
            .for_each(|(out, block)| {
                let block: &[u8; 16] = block.try_into().unwrap();
                out.copy_from_slice(&decrypt_block(block, round_keys));
            });
    } else {
        for (out, block) in output.chunks_exact_mut(16).zip(input.chunks_exact(16)) {
            let block: &[u8; 16] = block.try_into().unwrap();
            out.copy_from_slice(&decrypt_block(block, round_keys));
        }
    }

    output
}
