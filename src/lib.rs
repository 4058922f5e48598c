/*!
# BB84 Protocol

A simulation of the BB84 quantum key distribution protocol with a derived
secure-communication layer.

## Overview

This library provides:

- Random bit and basis generation from the OS entropy source, behind an
  injectable random-source capability
- A simulated quantum channel with basis-mismatch randomization
- Classical key sifting into a single shared key
- A symmetric XOR stream cipher driven by the sifted key, with a message log

## Security caveats

The simulation models no eavesdropper, channel noise, error reconciliation or
privacy amplification, and the stream cipher wraps a short key cyclically
(repeating-key XOR rather than a one-time pad). It demonstrates the
protocol's mechanics and is not suitable for real confidentiality.

## Example

```no_run
use bb84_protocol::{Bb84Protocol, Result};

fn main() -> Result<()> {
    let mut protocol = Bb84Protocol::new(128)?;
    protocol.run()?;

    println!("shared key: {} bits", protocol.shared_key()?.len());

    let secure = protocol.secure_channel()?;
    let message = secure.encrypt("Hello, Bob!", "Alice")?;
    let plaintext = secure.decrypt(&message)?;
    assert_eq!(plaintext, "Hello, Bob!");
    Ok(())
}
```
*/

// Core protocol components
pub mod core;

// Protocol coordination
pub mod protocol;

// Re-export commonly used types for convenience
pub use crate::core::channel::QuantumChannel;
pub use crate::core::constants::DEFAULT_KEY_BITS;
pub use crate::core::error::{Error, Result};
pub use crate::core::key::SharedKey;
pub use crate::core::participant::{Basis, Participant};
pub use crate::core::random::{Bit, OsRandomSource, RandomSource, ScriptedSource};
pub use crate::core::secure::{Message, SecureChannel};
pub use crate::core::sifter::sift;
pub use crate::protocol::{Bb84Protocol, ProtocolState};
