//! BB84 Quantum Key Distribution Protocol.
//!
//! The sender encodes random bits in random bases, the receiver
//! measures each qubit in a basis drawn independently, and sifting
//! keeps the rounds where both bases agree. On a noiseless channel the
//! kept bits are the shared key.

use crate::core::errors::AgreementError;
use crate::core::oracle::ChannelOracle;
use crate::core::symbols::{Basis, Round, SentSymbol};
use rand::Rng;
use tracing::debug;

/// BB84 results
pub struct BB84Result {
    /// Every round in transmission order.
    pub transcript: Vec<Round>,
    /// The sender's bits at the rounds where both bases matched.
    pub sifted_key: Vec<bool>,
}

impl BB84Result {
    /// Number of transmitted qubits.
    pub fn raw_length(&self) -> usize {
        self.transcript.len()
    }

    /// Number of bits that survived sifting.
    pub fn sifted_length(&self) -> usize {
        self.sifted_key.len()
    }

    /// The sender's bit per round.
    pub fn alice_bits(&self) -> Vec<bool> {
        self.transcript.iter().map(|r| r.sent.bit).collect()
    }

    /// The sender's basis per round.
    pub fn alice_bases(&self) -> Vec<Basis> {
        self.transcript.iter().map(|r| r.sent.basis).collect()
    }

    /// The receiver's basis per round, as reported by the channel.
    pub fn bob_bases(&self) -> Vec<Basis> {
        self.transcript.iter().map(|r| r.received.basis).collect()
    }

    /// The receiver's measured bit per round.
    pub fn bob_results(&self) -> Vec<bool> {
        self.transcript.iter().map(|r| r.received.bit).collect()
    }
}

/// Runs BB84 key agreement.
///
/// # Arguments
///
/// * `rounds` - Number of qubits to transmit.
/// * `oracle` - Transmission and measurement backend.
/// * `rng` - Source of the sender's bits and both basis draws.
///
/// # Errors
///
/// Returns an `AgreementError` if:
/// - `rounds` is zero.
/// - Sifting keeps no round at all.
pub fn run<O, R>(rounds: usize, oracle: &mut O, rng: &mut R) -> Result<BB84Result, AgreementError>
where
    O: ChannelOracle + ?Sized,
    R: Rng + ?Sized,
{
    if rounds == 0 {
        return Err(AgreementError::NoRounds);
    }

    let mut transcript = Vec::with_capacity(rounds);

    for _ in 0..rounds {
        // Alice prepares a qubit
        let sent = SentSymbol::random(rng);

        // Bob draws his basis independently
        let receiver_basis = Basis::random(rng);

        let received = oracle.measure(sent, receiver_basis);
        transcript.push(Round { sent, received });
    }

    // Sifting stage
    let sifted_key: Vec<bool> = transcript
        .iter()
        .filter(|round| round.bases_match())
        .map(|round| round.sent.bit)
        .collect();

    debug!(
        raw = transcript.len(),
        sifted = sifted_key.len(),
        "sifting complete"
    );

    if sifted_key.is_empty() {
        return Err(AgreementError::EmptySiftedKey { rounds });
    }

    Ok(BB84Result {
        transcript,
        sifted_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::oracle::{self, IdealChannel};
    use crate::core::symbols::ReceivedSymbol;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_rounds_is_an_error() {
        let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(matches!(
            run(0, &mut channel, &mut rng),
            Err(AgreementError::NoRounds)
        ));
    }

    #[test]
    fn an_always_matching_channel_keeps_every_bit() {
        let mut channel = oracle::from_fn(|sent: SentSymbol, _| ReceivedSymbol {
            basis: sent.basis,
            bit: sent.bit,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let result = run(40, &mut channel, &mut rng).unwrap();

        assert_eq!(result.raw_length(), 40);
        assert_eq!(result.sifted_length(), 40);
        assert_eq!(result.sifted_key, result.alice_bits());
    }

    #[test]
    fn an_always_mismatching_channel_sifts_nothing() {
        let mut channel = oracle::from_fn(|sent: SentSymbol, _| ReceivedSymbol {
            basis: sent.basis.other(),
            bit: sent.bit,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for rounds in [1, 2, 17] {
            assert!(matches!(
                run(rounds, &mut channel, &mut rng),
                Err(AgreementError::EmptySiftedKey { rounds: r }) if r == rounds
            ));
        }
    }

    #[test]
    fn sifted_key_comes_from_the_matching_rounds_in_order() {
        let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(4));
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let result = run(256, &mut channel, &mut rng).unwrap();

        let expected: Vec<bool> = result
            .transcript
            .iter()
            .filter(|round| round.bases_match())
            .map(|round| round.sent.bit)
            .collect();
        assert_eq!(result.sifted_key, expected);
    }

    #[test]
    fn matching_rounds_agree_on_the_bit_over_a_noiseless_channel() {
        let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(6));
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let result = run(256, &mut channel, &mut rng).unwrap();

        for round in &result.transcript {
            if round.bases_match() {
                assert_eq!(round.sent.bit, round.received.bit);
            }
        }
    }

    #[test]
    fn accessor_views_line_up_with_the_transcript() {
        let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(8));
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let result = run(32, &mut channel, &mut rng).unwrap();

        assert_eq!(result.alice_bits().len(), 32);
        assert_eq!(result.alice_bases().len(), 32);
        assert_eq!(result.bob_bases().len(), 32);
        assert_eq!(result.bob_results().len(), 32);

        for (i, round) in result.transcript.iter().enumerate() {
            assert_eq!(result.alice_bits()[i], round.sent.bit);
            assert_eq!(result.alice_bases()[i], round.sent.basis);
            assert_eq!(result.bob_bases()[i], round.received.basis);
            assert_eq!(result.bob_results()[i], round.received.bit);
        }
    }

    proptest! {
        #[test]
        fn every_run_sifts_exactly_the_matching_rounds(seed in any::<u64>(), rounds in 1usize..128) {
            let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(seed));
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

            match run(rounds, &mut channel, &mut rng) {
                Ok(result) => {
                    prop_assert_eq!(result.raw_length(), rounds);

                    let matched: Vec<bool> = result
                        .transcript
                        .iter()
                        .filter(|round| round.bases_match())
                        .map(|round| round.sent.bit)
                        .collect();
                    prop_assert_eq!(&result.sifted_key, &matched);

                    for round in &result.transcript {
                        if round.bases_match() {
                            prop_assert_eq!(round.sent.bit, round.received.bit);
                        }
                    }
                }
                Err(AgreementError::EmptySiftedKey { rounds: r }) => prop_assert_eq!(r, rounds),
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }
}
