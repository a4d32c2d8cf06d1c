use crate::core::errors::CipherError;

/// Stretches a sifted key to exactly `target` bits by repeating it
/// cyclically, truncating the last repetition.
///
/// A `target` of zero yields an empty key without touching the source.
///
/// # Errors
///
/// Returns `CipherError::EmptyKey` when `sifted_key` is empty, even
/// for a zero `target`.
pub fn expand_key(sifted_key: &[bool], target: usize) -> Result<Vec<bool>, CipherError> {
    if sifted_key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    if target == 0 {
        return Ok(Vec::new());
    }

    Ok(sifted_key.iter().copied().cycle().take(target).collect())
}
