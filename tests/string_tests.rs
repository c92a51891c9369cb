// Facade tests against fixed vectors plus the string/hex/Base64 paths.

use hex_literal::hex;
use md5::{Digest, Md5};

use raes::{Cipher, Error, Key, KeySize, Mode, Padding, Result, parse_hex, to_hex};

const VECTOR_KEY: &[u8] = b"secret0key000000";
const VECTOR_IV: &[u8] = b"0123456789012345";
const VECTOR_PLAINTEXT: &str = "my secret string";
const VECTOR_HEX: &str = "68f7ff8bdb61f625febdfe3d791ecf624daaed2e719a6de39112de8e0cc7349b";
const VECTOR_BASE64: &str = "aPf/i9th9iX+vf49eR7PYk2q7S5xmm3jkRLejgzHNJs=";

fn vector_cipher() -> Result<Cipher> {
    let key = Key::try_from_slice(VECTOR_KEY)?;
    Ok(Cipher::new(&key, Mode::cbc(VECTOR_IV)?))
}

#[test]
fn cbc_known_vector_hex() -> Result<()> {
    let cipher = vector_cipher()?;

    assert_eq!(cipher.encrypt_to_hex(VECTOR_PLAINTEXT)?, VECTOR_HEX);
    assert_eq!(cipher.decrypt_hex_to_string(VECTOR_HEX)?, VECTOR_PLAINTEXT);

    // hex input may carry a 0x prefix
    let prefixed = format!("0x{VECTOR_HEX}");
    assert_eq!(cipher.decrypt_hex_to_string(&prefixed)?, VECTOR_PLAINTEXT);
    Ok(())
}

#[test]
fn cbc_known_vector_bytes() -> Result<()> {
    let cipher = vector_cipher()?;

    let ciphertext = cipher.encrypt(VECTOR_PLAINTEXT.as_bytes())?;
    assert_eq!(
        ciphertext,
        hex!("68f7ff8bdb61f625febdfe3d791ecf624daaed2e719a6de39112de8e0cc7349b")
    );
    assert_eq!(cipher.decrypt(&ciphertext)?, VECTOR_PLAINTEXT.as_bytes());
    Ok(())
}

#[test]
fn cbc_known_vector_base64() -> Result<()> {
    let cipher = vector_cipher()?;

    assert_eq!(cipher.encrypt_to_base64(VECTOR_PLAINTEXT)?, VECTOR_BASE64);
    assert_eq!(
        cipher.decrypt_base64_to_string(VECTOR_BASE64)?,
        VECTOR_PLAINTEXT
    );
    Ok(())
}

#[test]
fn ecb_with_digest_derived_key_round_trips_empty_string() -> Result<()> {
    // the digest provider is an external collaborator; any 16-byte output works as a key
    let digest = Md5::digest(VECTOR_KEY);
    let key = Key::try_from_slice(digest.as_slice())?;
    let cipher = Cipher::new(&key, Mode::Ecb);

    let encrypted = cipher.encrypt_to_base64("")?;
    assert_eq!(cipher.decrypt_base64_to_string(&encrypted)?, "");

    // empty Base64 input must fail before reaching the cipher
    assert!(matches!(
        cipher.decrypt_base64(""),
        Err(Error::InvalidBase64(_))
    ));
    Ok(())
}

#[test]
fn malformed_base64_is_rejected() -> Result<()> {
    let cipher = vector_cipher()?;

    assert!(matches!(
        cipher.decrypt_base64("@@not base64@@"),
        Err(Error::InvalidBase64(_))
    ));
    assert!(matches!(
        cipher.decrypt_base64_to_string("aPf/"), // valid alphabet, 3 bytes: bad length for a cipher
        Err(Error::InvalidCiphertext { len: 3, .. })
    ));
    Ok(())
}

#[test]
fn zero_length_plaintext_is_one_padding_block() -> Result<()> {
    let cipher = vector_cipher()?;

    let ciphertext = cipher.encrypt(b"")?;
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(cipher.decrypt(&ciphertext)?, Vec::<u8>::new());
    Ok(())
}

#[test]
fn corrupting_final_block_breaks_padding() -> Result<()> {
    let cipher = vector_cipher()?;
    let plaintext = b"sixteen byte msg plus some tail";
    let ciphertext = cipher.encrypt(plaintext)?;

    let mut padding_errors = 0;
    let last = ciphertext.len() - 16;
    for offset in last..ciphertext.len() {
        for bit in 0..8 {
            let mut corrupted = ciphertext.clone();
            corrupted[offset] ^= 1 << bit;

            // only ~1/256 corruptions can slip past the padding check, and any
            // that do must still fail to reproduce the original plaintext
            match cipher.decrypt(&corrupted) {
                Err(Error::InvalidPadding { .. }) => padding_errors += 1,
                Err(other) => panic!("unexpected error kind: {other}"),
                Ok(recovered) => assert_ne!(recovered, plaintext),
            }
        }
    }

    assert!(
        padding_errors > 64,
        "padding corruption went mostly undetected ({padding_errors}/128)"
    );
    Ok(())
}

#[test]
fn round_trip_all_modes_and_key_sizes() -> Result<()> {
    let plaintext: Vec<u8> = (0..257u16).map(|i| i as u8).collect();

    for size in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256] {
        let key = Key::random(size)?;
        let iv = raes::random_iv()?;

        for mode in [Mode::Ecb, Mode::Cbc { iv }] {
            let cipher = Cipher::new(&key, mode);
            let ciphertext = cipher.encrypt(&plaintext)?;
            assert_eq!(ciphertext.len() % 16, 0);
            assert_eq!(cipher.decrypt(&ciphertext)?, plaintext);
        }
    }
    Ok(())
}

#[test]
fn large_input_round_trips_through_parallel_paths() -> Result<()> {
    // well past the 4 KiB threshold so the rayon paths are exercised
    let plaintext: Vec<u8> = (0..32 * 1024u32).map(|i| (i % 251) as u8).collect();
    let key = Key::try_from_slice(VECTOR_KEY)?;

    for mode in [Mode::Ecb, Mode::cbc(VECTOR_IV)?] {
        let cipher = Cipher::new(&key, mode);
        let ciphertext = cipher.encrypt(&plaintext)?;
        assert_eq!(cipher.decrypt(&ciphertext)?, plaintext);
    }
    Ok(())
}

#[test]
fn no_padding_policy_round_trips_aligned_input() -> Result<()> {
    let key = Key::try_from_slice(VECTOR_KEY)?;
    let cipher = Cipher::with_padding(&key, Mode::cbc(VECTOR_IV)?, Padding::None);

    let plaintext = [0x5Au8; 48];
    let ciphertext = cipher.encrypt(&plaintext)?;
    assert_eq!(ciphertext.len(), 48);
    assert_eq!(cipher.decrypt(&ciphertext)?, plaintext);

    assert!(matches!(
        cipher.encrypt(&[0u8; 10]),
        Err(Error::UnalignedPlaintext { len: 10 })
    ));
    Ok(())
}

#[test]
fn construction_rejects_invalid_config() {
    assert!(matches!(
        Key::try_from_slice(&[0u8; 20]),
        Err(Error::InvalidKeyLength { len: 20 })
    ));
    assert!(matches!(
        Mode::cbc(&[0u8; 15]),
        Err(Error::InvalidIvLength { len: 15 })
    ));
}

#[test]
fn public_codec_functions() -> Result<()> {
    let words = raes::bytes_to_words(&[8, 7, 6, 5, 4, 3, 2, 1])?;
    assert_eq!(words, [0x05060708, 0x01020304]);

    let bytes = raes::int_to_bytes(1024, 16);
    assert_eq!(bytes[14], 4);

    assert_eq!(to_hex(&parse_hex("0xB1b1b2B2")?), "b1b1b2b2");
    Ok(())
}

#[test]
fn decrypted_non_utf8_is_an_encoding_error() -> Result<()> {
    let cipher = vector_cipher()?;

    let ciphertext = cipher.encrypt(&[0xff, 0xfe, 0xfd])?;
    let hex = to_hex(&ciphertext);
    assert!(matches!(
        cipher.decrypt_hex_to_string(&hex),
        Err(Error::InvalidUtf8(_))
    ));

    // the raw-byte path is unaffected
    assert_eq!(cipher.decrypt(&parse_hex(&hex)?)?, [0xff, 0xfe, 0xfd]);
    Ok(())
}
