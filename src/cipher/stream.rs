use crate::core::errors::CipherError;

/// XORs a bit sequence against an equal-length keystream.
///
/// The transform is its own inverse: applying it twice with the same
/// key restores the input.
///
/// # Errors
///
/// Returns `CipherError::LengthMismatch` when the lengths differ.
pub fn transform(bits: &[bool], key: &[bool]) -> Result<Vec<bool>, CipherError> {
    if bits.len() != key.len() {
        return Err(CipherError::LengthMismatch {
            data: bits.len(),
            key: key.len(),
        });
    }

    Ok(bits.iter().zip(key).map(|(&bit, &k)| bit ^ k).collect())
}
