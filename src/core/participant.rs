/*!
Protocol participants for the BB84 protocol.

A participant is constructed already populated with its random sequences, so
an unpopulated participant is unrepresentable. Senders carry a bit sequence
and a basis sequence of equal length; receivers carry only a basis sequence.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::{
    error::{Result, invalid_argument_err},
    random::{self, Bit, RandomSource},
};

/// Measurement basis used to prepare or measure a qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Basis {
    /// Computational basis (Z)
    Rectilinear,
    /// Hadamard basis (X)
    Diagonal,
}

impl Basis {
    /// Map a random bit to a basis choice
    pub fn from_bit(bit: Bit) -> Self {
        if bit & 1 == 0 {
            Basis::Rectilinear
        } else {
            Basis::Diagonal
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Rectilinear => write!(f, "Rectilinear"),
            Basis::Diagonal => write!(f, "Diagonal"),
        }
    }
}

/// A party in a protocol run, holding its drawn sequences
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    bits: Vec<Bit>,
    bases: Vec<Basis>,
}

impl Participant {
    /// Create a sending party from already-drawn bits and bases
    pub fn sender(name: &str, bits: Vec<Bit>, bases: Vec<Basis>) -> Result<Self> {
        if bits.len() != bases.len() {
            return invalid_argument_err(format!(
                "bit and basis sequences must have equal length, got {} and {}",
                bits.len(),
                bases.len()
            ));
        }

        Ok(Self {
            name: name.to_string(),
            bits,
            bases,
        })
    }

    /// Create a receiving party from already-drawn bases.
    ///
    /// Receivers hold no bit sequence; per protocol they only choose a
    /// measurement basis per qubit.
    pub fn receiver(name: &str, bases: Vec<Basis>) -> Self {
        Self {
            name: name.to_string(),
            bits: Vec::new(),
            bases,
        }
    }

    /// Draw a fresh sending party with `n` random bits and bases
    pub fn generate_sender<R: RandomSource + ?Sized>(
        name: &str,
        n: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let bits = random::bits(rng, n)?;
        let bases = random::bases(rng, n)?;
        Self::sender(name, bits, bases)
    }

    /// Draw a fresh receiving party with `n` random bases
    pub fn generate_receiver<R: RandomSource + ?Sized>(
        name: &str,
        n: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self::receiver(name, random::bases(rng, n)?))
    }

    /// Party label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drawn bit sequence; empty for receiving parties
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Drawn basis sequence
    pub fn bases(&self) -> &[Basis] {
        &self.bases
    }

    /// Whether this party carries a bit sequence to transmit
    pub fn has_bits(&self) -> bool {
        !self.bits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::random::ScriptedSource;

    #[test]
    fn test_basis_from_bit() {
        assert_eq!(Basis::from_bit(0), Basis::Rectilinear);
        assert_eq!(Basis::from_bit(1), Basis::Diagonal);
    }

    #[test]
    fn test_sender_rejects_mismatched_lengths() {
        let result = Participant::sender("Alice", vec![1, 0], vec![Basis::Rectilinear]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_generate_sender_populates_both_sequences() -> Result<()> {
        let mut rng = ScriptedSource::new(vec![1, 0, 1, 0, 1, 1]);

        let alice = Participant::generate_sender("Alice", 3, &mut rng)?;
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.bits(), &[1, 0, 1]);
        assert_eq!(
            alice.bases(),
            &[Basis::Rectilinear, Basis::Diagonal, Basis::Diagonal]
        );
        assert!(alice.has_bits());

        Ok(())
    }

    #[test]
    fn test_generate_receiver_has_no_bits() -> Result<()> {
        let mut rng = ScriptedSource::new(vec![0, 0, 1]);

        let bob = Participant::generate_receiver("Bob", 3, &mut rng)?;
        assert_eq!(bob.bases().len(), 3);
        assert!(bob.bits().is_empty());
        assert!(!bob.has_bits());

        Ok(())
    }
}
