//! Message protection with a sifted key.
//!
//! - **codec**: text to bits and back.
//! - **expand**: cyclic key stretching.
//! - **stream**: the XOR transform.

pub mod codec;
pub mod expand;
pub mod stream;

pub use codec::{decode, encode, to_bit_string};
pub use expand::expand_key;
pub use stream::transform;

use crate::core::errors::CipherError;

/// Encrypts a message under a sifted key.
///
/// Encodes the text, stretches the key to the encoded length, and XORs
/// the two.
///
/// # Errors
///
/// Returns a `CipherError` when the message contains a character above
/// U+00FF or the key is empty.
pub fn encrypt_message(message: &str, sifted_key: &[bool]) -> Result<Vec<bool>, CipherError> {
    let plain_bits = codec::encode(message)?;
    let key = expand::expand_key(sifted_key, plain_bits.len())?;
    stream::transform(&plain_bits, &key)
}

/// Decrypts cipher bits under an already expanded key and decodes the
/// recovered bits into text.
///
/// # Errors
///
/// Returns a `CipherError` when the lengths differ or the recovered
/// bit sequence is not a whole number of 8-bit groups.
pub fn decrypt_bits(cipher_bits: &[bool], expanded_key: &[bool]) -> Result<String, CipherError> {
    let plain_bits = stream::transform(cipher_bits, expanded_key)?;
    Ok(codec::decode(&plain_bits)?)
}
