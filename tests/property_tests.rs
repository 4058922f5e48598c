use bb84_protocol::{
    Basis, Bit, Participant, QuantumChannel, Result, ScriptedSource, SecureChannel, SharedKey,
    sift,
};

use proptest::prelude::*;

// Strategy for generating key bit sequences
fn key_bits() -> impl Strategy<Value = Vec<Bit>> {
    prop::collection::vec(0u8..=1, 1..64)
}

// Strategy for generating aligned bit/basis draws of one length
fn aligned_draws() -> impl Strategy<Value = (Vec<Bit>, Vec<Bit>, Vec<Bit>)> {
    (1usize..48).prop_flat_map(|n| {
        (
            prop::collection::vec(0u8..=1, n),
            prop::collection::vec(0u8..=1, n),
            prop::collection::vec(0u8..=1, n),
        )
    })
}

fn bases_of(bits: &[Bit]) -> Vec<Basis> {
    bits.iter().map(|&b| Basis::from_bit(b)).collect()
}

fn simulate(
    alice_bits: Vec<Bit>,
    alice_bases: Vec<Bit>,
    bob_bases: Vec<Bit>,
) -> Result<(Participant, Participant, QuantumChannel)> {
    let n = alice_bits.len();
    let alice = Participant::sender("Alice", alice_bits, bases_of(&alice_bases))?;
    let bob = Participant::receiver("Bob", bases_of(&bob_bases));

    // One script bit per qubit covers every possible mismatch draw.
    let mut rng = ScriptedSource::new(vec![0; n]);
    let channel = QuantumChannel::transmit(&alice, &bob, &mut rng)?;
    Ok((alice, bob, channel))
}

proptest! {
    #[test]
    fn test_round_trip_law(bits in key_bits(), plaintext in ".{0,200}") {
        let key = SharedKey::new(bits);
        let mut channel = SecureChannel::new(&key);

        let message = channel.encrypt(&plaintext, "Alice").unwrap();
        let decrypted = channel.decrypt(&message).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_packed_key_length(bits in prop::collection::vec(0u8..=1, 0..256)) {
        let key = SharedKey::new(bits.clone());
        prop_assert_eq!(key.to_bytes().len(), bits.len().div_ceil(8));
    }

    #[test]
    fn test_transmission_preserves_length(
        (alice_bits, alice_bases, bob_bases) in aligned_draws()
    ) {
        let n = alice_bits.len();
        let (_, _, channel) = simulate(alice_bits, alice_bases, bob_bases).unwrap();
        prop_assert_eq!(channel.len(), n);
    }

    #[test]
    fn test_agreement_positions_carry_the_senders_bit(
        (alice_bits, alice_bases, bob_bases) in aligned_draws()
    ) {
        let (alice, bob, channel) = simulate(alice_bits, alice_bases, bob_bases).unwrap();

        for i in 0..channel.len() {
            if alice.bases()[i] == bob.bases()[i] {
                prop_assert_eq!(channel.transmitted()[i], alice.bits()[i]);
            }
        }
    }

    #[test]
    fn test_sifted_key_matches_agreement_count(
        (alice_bits, alice_bases, bob_bases) in aligned_draws()
    ) {
        let (alice, bob, channel) = simulate(alice_bits, alice_bases, bob_bases).unwrap();
        let key = sift(&alice, &bob, &channel).unwrap();

        let agreements = alice
            .bases()
            .iter()
            .zip(bob.bases())
            .filter(|(a, b)| a == b)
            .count();
        prop_assert_eq!(key.len(), agreements);
        prop_assert!(key.len() <= channel.len());
    }
}
