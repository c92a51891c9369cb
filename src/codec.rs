//! Byte/word/hex conversion primitives shared by the cipher and exposed publicly.
//!
//! Note the two deliberate, divergent byte orders: [`int_to_bytes`] serializes a
//! scalar big-endian, while [`bytes_to_words`] assembles 32-bit words little-endian.
//! Call sites depend on each convention separately; they must not be unified.

use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes an unsigned integer in big-endian byte order into exactly `total_len` bytes.
///
/// When `total_len` exceeds 4, the encoding occupies the last 4 bytes and all
/// preceding bytes are zero. When `total_len` is smaller than the value needs,
/// the high-order bytes are silently dropped; sizing is the caller's responsibility.
pub fn int_to_bytes(value: u32, total_len: usize) -> Vec<u8> {
    let native = value.to_be_bytes();
    if total_len >= native.len() {
        let mut out = vec![0u8; total_len];
        out[total_len - native.len()..].copy_from_slice(&native);
        out
    } else {
        native[native.len() - total_len..].to_vec()
    }
}

/// Groups a byte sequence into consecutive 4-byte chunks and decodes each as a
/// little-endian 32-bit word (byte at chunk offset 0 is least significant).
/// The input length must be a multiple of 4.
pub fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidWordLength { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap())) // chunks_exact guarantees safe unwrap
        .collect())
}

/// Decodes hex text into bytes. Accepts an optional `0x`/`0X` prefix and digits
/// of either case. Odd-length or non-hex input returns an InvalidHex error.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex {
            context: "odd number of hex digits",
        });
    }

    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok(hex_nibble(pair[0])? << 4 | hex_nibble(pair[1])?))
        .collect()
}

/// Encodes bytes as lowercase hex, two digits per byte, no prefix or separators.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

fn hex_nibble(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(Error::InvalidHex {
            context: "non-hex digit",
        }),
    }
}
