use crate::core::errors::CodecError;

/// Encodes text as bits, one 8-bit group per character, most
/// significant bit first.
///
/// # Errors
///
/// Returns `CodecError::UnencodableChar` for any character above
/// U+00FF.
pub fn encode(message: &str) -> Result<Vec<bool>, CodecError> {
    let mut bits = Vec::with_capacity(message.len() * 8);

    for ch in message.chars() {
        let code = u32::from(ch);
        if code > u32::from(u8::MAX) {
            return Err(CodecError::UnencodableChar { ch });
        }

        let byte = code as u8;
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }

    Ok(bits)
}

/// Decodes a bit sequence produced by [`encode`] back into text.
///
/// # Errors
///
/// Returns `CodecError::MalformedBitLength` when the length is not a
/// multiple of 8.
pub fn decode(bits: &[bool]) -> Result<String, CodecError> {
    if bits.len() % 8 != 0 {
        return Err(CodecError::MalformedBitLength { len: bits.len() });
    }

    let mut message = String::with_capacity(bits.len() / 8);
    for group in bits.chunks(8) {
        let byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        message.push(char::from(byte));
    }

    Ok(message)
}

/// Renders a bit sequence as a string of '0' and '1' characters.
pub fn to_bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
