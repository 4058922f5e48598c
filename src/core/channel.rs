/*!
Quantum transmission simulation for the BB84 protocol.

The channel models, at the classical level, what a receiver measures when the
sender transmits a qubit prepared in a basis and bit of their choosing. When
both parties chose the same basis the outcome is the sender's bit exactly;
when the bases differ the measurement collapses the state and the outcome is
a fresh uniform bit, independent of what was sent.
*/

use crate::core::{
    error::{Result, precondition_err},
    participant::Participant,
    random::{Bit, RandomSource},
};

/// Simulated quantum channel between two participants
#[derive(Debug, Clone)]
pub struct QuantumChannel {
    transmitted: Vec<Bit>,
}

impl QuantumChannel {
    /// Simulate the transmission of every qubit from `sender` to `receiver`.
    ///
    /// Neither participant is mutated; the output holds the per-index
    /// sequence of receiver outcomes.
    pub fn transmit<R: RandomSource + ?Sized>(
        sender: &Participant,
        receiver: &Participant,
        rng: &mut R,
    ) -> Result<Self> {
        if !sender.has_bits() {
            return precondition_err(format!(
                "participant {} has no bit sequence to transmit",
                sender.name()
            ));
        }
        if sender.bases().len() != receiver.bases().len() {
            return precondition_err(format!(
                "basis sequences must have equal length, got {} for {} and {} for {}",
                sender.bases().len(),
                sender.name(),
                receiver.bases().len(),
                receiver.name()
            ));
        }

        let n = sender.bases().len();
        let mut transmitted = Vec::with_capacity(n);
        for i in 0..n {
            if sender.bases()[i] == receiver.bases()[i] {
                transmitted.push(sender.bits()[i]);
            } else {
                transmitted.push(rng.next_bit()?);
            }
        }

        Ok(Self { transmitted })
    }

    /// Per-index receiver outcomes
    pub fn transmitted(&self) -> &[Bit] {
        &self.transmitted
    }

    /// Number of transmitted qubits
    pub fn len(&self) -> usize {
        self.transmitted.len()
    }

    /// Whether anything was transmitted
    pub fn is_empty(&self) -> bool {
        self.transmitted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::participant::Basis;
    use crate::core::random::ScriptedSource;

    fn bases_of(bits: &[Bit]) -> Vec<Basis> {
        bits.iter().map(|&b| Basis::from_bit(b)).collect()
    }

    #[test]
    fn test_agreeing_bases_carry_the_senders_bit() -> Result<()> {
        let alice = Participant::sender("Alice", vec![1, 0, 1, 1], bases_of(&[0, 0, 1, 1]))?;
        let bob = Participant::receiver("Bob", bases_of(&[0, 0, 1, 1]));

        // All bases agree, so the script is never consulted.
        let mut rng = ScriptedSource::new(vec![]);
        let channel = QuantumChannel::transmit(&alice, &bob, &mut rng)?;

        assert_eq!(channel.transmitted(), alice.bits());
        Ok(())
    }

    #[test]
    fn test_mismatched_bases_draw_a_fresh_bit() -> Result<()> {
        let alice = Participant::sender("Alice", vec![0, 0, 0, 0], bases_of(&[0, 1, 0, 1]))?;
        let bob = Participant::receiver("Bob", bases_of(&[0, 0, 0, 0]));

        // Indices 1 and 3 disagree and take their outcomes from the script.
        let mut rng = ScriptedSource::new(vec![1, 1]);
        let channel = QuantumChannel::transmit(&alice, &bob, &mut rng)?;

        assert_eq!(channel.transmitted(), &[0, 1, 0, 1]);
        assert_eq!(channel.len(), 4);
        Ok(())
    }

    #[test]
    fn test_transmission_is_deterministic_on_agreement() -> Result<()> {
        let alice = Participant::sender("Alice", vec![1, 1, 0], bases_of(&[1, 0, 1]))?;
        let bob = Participant::receiver("Bob", bases_of(&[1, 0, 1]));

        let first = QuantumChannel::transmit(&alice, &bob, &mut ScriptedSource::new(vec![]))?;
        let second = QuantumChannel::transmit(&alice, &bob, &mut ScriptedSource::new(vec![]))?;

        assert_eq!(first.transmitted(), second.transmitted());
        Ok(())
    }

    #[test]
    fn test_bitless_sender_is_rejected() {
        let alice = Participant::receiver("Alice", bases_of(&[0, 1]));
        let bob = Participant::receiver("Bob", bases_of(&[0, 1]));

        let result = QuantumChannel::transmit(&alice, &bob, &mut ScriptedSource::new(vec![]));
        assert!(matches!(result, Err(Error::PreconditionViolated(_))));
    }

    #[test]
    fn test_length_mismatch_is_rejected() -> Result<()> {
        let alice = Participant::sender("Alice", vec![1, 0], bases_of(&[0, 1]))?;
        let bob = Participant::receiver("Bob", bases_of(&[0]));

        let result = QuantumChannel::transmit(&alice, &bob, &mut ScriptedSource::new(vec![]));
        assert!(matches!(result, Err(Error::PreconditionViolated(_))));
        Ok(())
    }
}
