use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AgreementError {
    #[error("Key agreement needs at least one round")]
    NoRounds,

    #[error("Sifting kept none of the {rounds} rounds, the bases never matched")]
    EmptySiftedKey { rounds: usize },
}

#[derive(Error, Debug, Clone)]
pub enum CodecError {
    #[error("Bit sequence length {len} is not a multiple of 8")]
    MalformedBitLength { len: usize },

    #[error("Character {ch:?} does not fit in one 8-bit code unit")]
    UnencodableChar { ch: char },
}

#[derive(Error, Debug, Clone)]
pub enum CipherError {
    #[error("Cannot expand an empty key")]
    EmptyKey,

    #[error("Length mismatch: {data} data bits against {key} key bits")]
    LengthMismatch { data: usize, key: usize },

    #[error("Codec error: {0}")]
    CodecError(#[from] CodecError),
}

#[derive(Error, Debug, Clone)]
pub enum GateError {
    #[error("Matrix is not Unitary (U†U != I)")]
    NonUnitary,

    #[error("Gate matrix must be 2x2")]
    InvalidDimensions,
}

#[derive(Error, Debug, Clone)]
pub enum ExchangeError {
    #[error("Agreement error: {0}")]
    AgreementError(#[from] AgreementError),

    #[error("Cipher error: {0}")]
    CipherError(#[from] CipherError),
}
