use crate::cipher;
use crate::core::errors::{CipherError, ExchangeError};
use crate::core::oracle::ChannelOracle;
use crate::protocols::qkd::bb84::{self, BB84Result};
use rand::Rng;
use tracing::debug;

/// A driver for one complete secure-message demonstration.
///
/// The `Exchange` runs BB84 key agreement over a channel oracle, then
/// encrypts a message under the sifted key and decrypts it again,
/// returning every intermediate artifact.
#[derive(Debug, Clone)]
pub struct Exchange {
    rounds: usize,
}

impl Exchange {
    /// Number of qubits transmitted when none is configured.
    pub const DEFAULT_ROUNDS: usize = 8;

    /// Creates a new `Exchange` with the default round count.
    pub fn new() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
        }
    }

    /// Sets the number of qubits to transmit during key agreement.
    ///
    /// # Arguments
    ///
    /// * `rounds` - Qubits per run.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Runs key agreement, encrypts `message`, and decrypts it again.
    ///
    /// # Arguments
    ///
    /// * `message` - The text to protect.
    /// * `oracle` - Transmission and measurement backend.
    /// * `rng` - Source of bits and basis draws for both parties.
    ///
    /// # Errors
    ///
    /// Returns an `ExchangeError` when key agreement sifts nothing or
    /// the message cannot be encoded.
    pub fn run<O, R>(
        &self,
        message: &str,
        oracle: &mut O,
        rng: &mut R,
    ) -> Result<ExchangeResult, ExchangeError>
    where
        O: ChannelOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let agreement = bb84::run(self.rounds, oracle, rng)?;

        let plain_bits = cipher::encode(message).map_err(CipherError::from)?;
        let expanded_key = cipher::expand_key(&agreement.sifted_key, plain_bits.len())?;
        let cipher_bits = cipher::transform(&plain_bits, &expanded_key)?;
        let decrypted = cipher::decrypt_bits(&cipher_bits, &expanded_key)?;

        debug!(
            rounds = self.rounds,
            sifted = agreement.sifted_length(),
            message_bits = plain_bits.len(),
            "message exchange complete"
        );

        Ok(ExchangeResult {
            agreement,
            expanded_key,
            cipher_bits,
            decrypted,
        })
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one run produces, in transmission order.
pub struct ExchangeResult {
    /// Key agreement transcript and sifted key.
    pub agreement: BB84Result,
    /// The sifted key stretched to the message length.
    pub expanded_key: Vec<bool>,
    /// The encrypted message bits.
    pub cipher_bits: Vec<bool>,
    /// The round-tripped plaintext.
    pub decrypted: String,
}
