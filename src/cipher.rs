use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::codec;
use crate::core::tables::{RCON, SBOX};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::modes::{Mode, Padding, cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt};
use crate::util::{pad, unpad, xor_words};

/// A reusable AES cipher bound to a key, chaining mode, and padding policy.
///
/// The key is expanded into round keys once at construction; the instance is
/// immutable afterwards, so a single cipher can serve any number of encrypt and
/// decrypt calls (including concurrently, behind a shared reference).
///
/// ## Examples
/// ```
/// # fn main() -> raes::Result<()> {
/// use raes::{Cipher, Key, Mode};
///
/// let key = Key::try_from_slice(b"secret0key000000")?;
/// let cipher = Cipher::new(&key, Mode::cbc(b"0123456789012345")?);
///
/// let ciphertext = cipher.encrypt(b"my secret string")?;
/// assert_eq!(ciphertext.len() % 16, 0);
/// assert_eq!(cipher.decrypt(&ciphertext)?, b"my secret string");
/// # Ok(())
/// # }
/// ```
pub struct Cipher {
    round_keys: Vec<[u8; 16]>,
    mode: Mode,
    padding: Padding,
}

impl Cipher {
    /// Builds a cipher with PKCS#7 padding, the default policy.
    pub fn new(key: &Key, mode: Mode) -> Self {
        Self::with_padding(key, mode, Padding::Pkcs7)
    }

    /// Builds a cipher with an explicit padding policy. With [`Padding::None`],
    /// plaintexts must already be a multiple of 16 bytes.
    pub fn with_padding(key: &Key, mode: Mode, padding: Padding) -> Self {
        Self {
            round_keys: Self::expand_key(key),
            mode,
            padding,
        }
    }

    /// Getter for internal round keys. Returned as a slice of 16-byte arrays.
    pub fn round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }

    /// Encrypts a byte sequence under the configured mode and padding.
    ///
    /// Output length is always a multiple of 16; identical inputs always yield
    /// identical ciphertext (no per-call randomness). A zero-length plaintext
    /// under PKCS#7 still produces exactly one ciphertext block.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let buf = match self.padding {
            Padding::Pkcs7 => pad(plaintext),
            Padding::None => {
                if plaintext.len() % 16 != 0 {
                    return Err(Error::UnalignedPlaintext {
                        len: plaintext.len(),
                    });
                }
                plaintext.to_vec()
            }
        };

        Ok(match &self.mode {
            Mode::Ecb => ecb_encrypt(&buf, &self.round_keys),
            Mode::Cbc { iv } => cbc_encrypt(&buf, &self.round_keys, iv),
        })
    }

    /// Decrypts a byte sequence under the configured mode and padding.
    ///
    /// Ciphertext whose length is zero or not a multiple of 16 is rejected
    /// before any block transform runs. Under PKCS#7, invalid recovered padding
    /// is an InvalidPadding error and no partial plaintext is returned.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
            return Err(Error::InvalidCiphertext {
                len: ciphertext.len(),
                context: "length must be a positive multiple of 16 bytes",
            });
        }

        let mut plaintext = match &self.mode {
            Mode::Ecb => ecb_decrypt(ciphertext, &self.round_keys),
            Mode::Cbc { iv } => cbc_decrypt(ciphertext, &self.round_keys, iv),
        };

        if let Padding::Pkcs7 = self.padding {
            unpad(&mut plaintext)?;
        }

        Ok(plaintext)
    }

    /// Encrypts a UTF-8 string and returns the ciphertext as lowercase hex.
    pub fn encrypt_to_hex(&self, text: &str) -> Result<String> {
        Ok(codec::to_hex(&self.encrypt(text.as_bytes())?))
    }

    /// Decrypts hex-encoded ciphertext (optional `0x` prefix) back to a UTF-8 string.
    pub fn decrypt_hex_to_string(&self, hex: &str) -> Result<String> {
        let plaintext = self.decrypt(&codec::parse_hex(hex)?)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Encrypts a UTF-8 string and returns the ciphertext as standard Base64.
    pub fn encrypt_to_base64(&self, text: &str) -> Result<String> {
        Ok(BASE64.encode(self.encrypt(text.as_bytes())?))
    }

    /// Decodes Base64 ciphertext and decrypts it to raw bytes.
    ///
    /// Empty or malformed Base64 fails with an InvalidBase64 error before the
    /// cipher runs; a well-formed payload with bad padding fails from `decrypt`.
    pub fn decrypt_base64(&self, base64: &str) -> Result<Vec<u8>> {
        if base64.is_empty() {
            return Err(Error::InvalidBase64(base64::DecodeError::InvalidLength(0)));
        }
        self.decrypt(&BASE64.decode(base64)?)
    }

    /// Decodes Base64 ciphertext and decrypts it back to a UTF-8 string.
    pub fn decrypt_base64_to_string(&self, base64: &str) -> Result<String> {
        Ok(String::from_utf8(self.decrypt_base64(base64)?)?)
    }

    /// AES key schedule. Returns a vector of 11, 13, or 15 round keys,
    /// corresponding with AES-128, AES-192, and AES-256. The extra round key is
    /// the initial one, which most documentation does not count since it is
    /// simply the original key.
    fn expand_key(key: &Key) -> Vec<[u8; 16]> {
        let key = key.as_bytes();

        // Variable names match FIPS-197: https://doi.org/10.6028/NIST.FIPS.197-upd1
        // Nk   number of 32-bit words comprising the key (4, 6, or 8)
        // Nr   number of rounds (Nk + 6)
        // Nw   total number of words produced by the schedule
        let nk = key.len() / 4;
        let nr = nk + 6;
        let nw = (nr + 1) * 4;

        let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

        // first nk words are the key itself
        for i in 0..key.len() {
            w[i / 4][i % 4] = key[i];
        }

        let mut temp = w[nk - 1];
        for i in nk..nw {
            if i % nk == 0 {
                // RotWord then SubWord, then Rcon folded into the first byte
                temp = [
                    SBOX[temp[1] as usize] ^ RCON[i / nk],
                    SBOX[temp[2] as usize],
                    SBOX[temp[3] as usize],
                    SBOX[temp[0] as usize],
                ];
            } else if nk == 8 && i % nk == 4 {
                // SubWord alone: the extra substitution unique to AES-256
                temp = [
                    SBOX[temp[0] as usize],
                    SBOX[temp[1] as usize],
                    SBOX[temp[2] as usize],
                    SBOX[temp[3] as usize],
                ];
            }

            // w[i] = temp ^ w[i - Nk]
            w[i] = xor_words(&temp, &w[i - nk]);
            temp = w[i];
        }

        // regroup words into 16-byte round keys, 4 words per round
        let mut round_keys = vec![[0u8; 16]; nr + 1];
        for round in 0..=nr {
            let base = round * 4;
            for col in 0..4 {
                round_keys[round][col * 4..col * 4 + 4].copy_from_slice(&w[base + col]);
            }
        }

        round_keys
    }
}
