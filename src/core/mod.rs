//! Core components for the BB84 protocol.
//!
//! This module contains the building blocks of the simulation: random
//! sequence generation, the protocol participants, the quantum channel,
//! key sifting, the sifted key, the secure channel and error handling.

// Quantum transmission simulation
pub mod channel;

// Protocol constants
pub mod constants;

// Error handling
pub mod error;

// Sifted key material
pub mod key;

// Protocol participants
pub mod participant;

// Random sequence generation
pub mod random;

// Secure communication over the sifted key
pub mod secure;

// Classical key sifting
pub mod sifter;

// Re-exports for convenience
pub use self::channel::QuantumChannel;
pub use self::error::{Error, Result};
pub use self::key::SharedKey;
pub use self::participant::{Basis, Participant};
pub use self::random::{Bit, OsRandomSource, RandomSource, ScriptedSource};
pub use self::secure::{Message, SecureChannel};
