//! End-to-end message exchanges over the shipped channel backends.

use qkdsim::{Exchange, IdealChannel, StateVectorChannel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn ideal_channel_round_trips_a_message() {
    let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(7));
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let result = Exchange::new()
        .with_rounds(64)
        .run("attack at dawn", &mut channel, &mut rng)
        .unwrap();

    assert_eq!(result.decrypted, "attack at dawn");
    assert_eq!(result.agreement.raw_length(), 64);
    assert_eq!(result.cipher_bits.len(), "attack at dawn".len() * 8);
}

#[test]
fn state_vector_channel_round_trips_a_message() {
    let mut channel = StateVectorChannel::new(ChaCha8Rng::seed_from_u64(13));
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    let result = Exchange::new()
        .with_rounds(64)
        .run("rendezvous at nightfall", &mut channel, &mut rng)
        .unwrap();

    assert_eq!(result.decrypted, "rendezvous at nightfall");
}

#[test]
fn latin1_text_survives_the_full_pipeline() {
    let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(19));
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    let message = "café täglich";
    let result = Exchange::new()
        .with_rounds(64)
        .run(message, &mut channel, &mut rng)
        .unwrap();

    assert_eq!(result.decrypted, message);
    assert_eq!(result.cipher_bits.len(), message.chars().count() * 8);
}

#[test]
fn identical_seeds_reproduce_the_whole_exchange() {
    let run_once = || {
        let mut channel = IdealChannel::new(ChaCha8Rng::seed_from_u64(29));
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        Exchange::new()
            .with_rounds(48)
            .run("same every time", &mut channel, &mut rng)
            .unwrap()
    };

    let first = run_once();
    let second = run_once();

    assert_eq!(first.agreement.transcript, second.agreement.transcript);
    assert_eq!(first.agreement.sifted_key, second.agreement.sifted_key);
    assert_eq!(first.expanded_key, second.expanded_key);
    assert_eq!(first.cipher_bits, second.cipher_bits);
    assert_eq!(first.decrypted, second.decrypted);
}
