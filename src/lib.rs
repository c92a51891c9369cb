mod cipher;
mod codec;
mod core;
mod error;
mod key;
mod modes;
mod util;

pub use cipher::Cipher;
pub use codec::{bytes_to_words, int_to_bytes, parse_hex, to_hex};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use modes::{Mode, Padding};
pub use util::random_iv;
