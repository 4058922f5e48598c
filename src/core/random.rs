/*!
Random sequence generation for the BB84 protocol.

Randomness is an explicit capability passed into every drawing operation, so
deterministic doubles can stand in for the OS entropy source when a run needs
to be reproducible.
*/

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::core::{
    error::{Error, Result, invalid_argument_err},
    participant::Basis,
};

/// A single bit value, 0 or 1
pub type Bit = u8;

/// Source of uniformly distributed random bits
pub trait RandomSource {
    /// Draw one uniformly distributed bit.
    fn next_bit(&mut self) -> Result<Bit>;
}

/// Random source backed by the operating system's entropy pool.
///
/// Words are requested through the fallible `TryRngCore` interface. An
/// entropy failure is reported as [`Error::RandomnessSource`] and never
/// replaced with a weaker generator.
#[derive(Debug, Default)]
pub struct OsRandomSource {
    word: u32,
    bits_left: u8,
}

impl OsRandomSource {
    /// Create a new OS-backed source
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for OsRandomSource {
    fn next_bit(&mut self) -> Result<Bit> {
        if self.bits_left == 0 {
            self.word = OsRng
                .try_next_u32()
                .map_err(|e| Error::RandomnessSource(e.to_string()))?;
            self.bits_left = 32;
        }
        let bit = (self.word & 1) as Bit;
        self.word >>= 1;
        self.bits_left -= 1;
        Ok(bit)
    }
}

/// Random source that replays a fixed script of bits.
///
/// Intended for deterministic tests and reproducible runs. The source fails
/// with [`Error::RandomnessSource`] when the script runs dry.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Bit>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying the given bits in order
    pub fn new(script: Vec<Bit>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_bit(&mut self) -> Result<Bit> {
        let bit = self
            .script
            .get(self.cursor)
            .copied()
            .ok_or_else(|| Error::RandomnessSource("scripted source exhausted".to_string()))?;
        self.cursor += 1;
        Ok(bit & 1)
    }
}

/// Draw `n` independent uniform bits
pub fn bits<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<Bit>> {
    if n == 0 {
        return invalid_argument_err("number of bits must be greater than zero");
    }

    let mut sequence = Vec::with_capacity(n);
    for _ in 0..n {
        sequence.push(rng.next_bit()?);
    }
    Ok(sequence)
}

/// Draw `n` independent uniform basis choices
pub fn bases<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<Basis>> {
    if n == 0 {
        return invalid_argument_err("number of bases must be greater than zero");
    }

    let mut sequence = Vec::with_capacity(n);
    for _ in 0..n {
        sequence.push(Basis::from_bit(rng.next_bit()?));
    }
    Ok(sequence)
}
