//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits,
//! and the [`KeySize`] selector for random generation.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Selects one of the three valid AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long. The key size determines the round count
/// (10, 12, or 14) of any [Cipher](crate::Cipher) built from it.
///
/// ## Examples
/// ```
/// # fn main() -> raes::Result<()> {
/// use raes::{Key, KeySize};
///
/// let random = Key::random(KeySize::Bits256)?;
/// assert_eq!(random.as_bytes().len(), 32);
///
/// let fixed = Key::try_from_slice(b"0123456789abcdef")?;
/// assert_eq!(fixed.as_bytes(), b"0123456789abcdef");
///
/// // Anything other than 16, 24, or 32 bytes is rejected at construction:
/// assert!(Key::try_from_slice(&[0u8; 20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        Ok(match size {
            KeySize::Bits128 => {
                let mut k = [0u8; 16];
                OsRng.try_fill_bytes(&mut k)?;
                Self { bytes: KeyBytes::K128(k) }
            }
            KeySize::Bits192 => {
                let mut k = [0u8; 24];
                OsRng.try_fill_bytes(&mut k)?;
                Self { bytes: KeyBytes::K192(k) }
            }
            KeySize::Bits256 => {
                let mut k = [0u8; 32];
                OsRng.try_fill_bytes(&mut k)?;
                Self { bytes: KeyBytes::K256(k) }
            }
        })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().unwrap()), // match condition guarantees safe unwrap
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().unwrap()),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().unwrap()),
            },
            _ => return Err(Error::InvalidKeyLength { len: bytes.len() }),
        })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}
