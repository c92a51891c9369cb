use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Attempted to construct a CBC mode with an IV that is not exactly one block long.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// Provided ciphertext whose length is zero or not a multiple of the 16-byte block size.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Attempted to encrypt a plaintext that is not a multiple of 16 bytes with padding disabled.
    #[error("plaintext length {len} is not a multiple of 16 bytes (padding disabled)")]
    UnalignedPlaintext { len: usize },

    /// Decrypted final block did not carry valid PKCS#7 padding.
    #[error("invalid PKCS#7 padding ({context})")]
    InvalidPadding { context: &'static str },

    /// Provided a byte sequence whose length is not a multiple of the 4-byte word size.
    #[error("byte length {len} is not a multiple of the 4-byte word size")]
    InvalidWordLength { len: usize },

    /// Provided hex text with an odd number of digits or a non-hex character.
    #[error("malformed hex input ({context})")]
    InvalidHex { context: &'static str },

    /// Provided Base64 text that is empty or does not decode under the standard alphabet.
    #[error("malformed base64 input")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decrypted bytes requested as a string were not valid UTF-8.
    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key/IV generation")]
    Rng(#[from] rand_core::OsError),
}
