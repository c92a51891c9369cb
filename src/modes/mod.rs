//! Block chaining modes. The behavioral difference between ECB and CBC is only
//! whether a feedback register threads through sequential blocks, so modes are
//! a tagged enum dispatched over the shared block transform rather than a trait
//! hierarchy.

mod cbc;
mod ecb;
mod util;

pub(crate) use cbc::{cbc_decrypt, cbc_encrypt};
pub(crate) use ecb::{ecb_decrypt, ecb_encrypt};

use crate::error::{Error, Result};

/// Chaining mode for a [Cipher](crate::Cipher).
///
/// ECB encrypts every block independently and is vulnerable to pattern
/// emergence in the ciphertext; CBC XORs each plaintext block with the previous
/// ciphertext block (the IV for the first) before the block transform.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Ecb,
    Cbc { iv: [u8; 16] },
}

impl Mode {
    /// Builds a CBC mode from an IV slice, rejecting anything that is not
    /// exactly 16 bytes with an InvalidIvLength error.
    pub fn cbc(iv: &[u8]) -> Result<Self> {
        let iv: [u8; 16] = iv
            .try_into()
            .map_err(|_| Error::InvalidIvLength { len: iv.len() })?;
        Ok(Self::Cbc { iv })
    }
}

/// Padding policy for a [Cipher](crate::Cipher).
///
/// With `None`, plaintexts must already be a multiple of 16 bytes and decrypted
/// output is returned as-is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Padding {
    Pkcs7,
    None,
}
