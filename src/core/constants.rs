/*!
Constants for the BB84 protocol.
*/

/// Default number of qubits transmitted in a protocol run
pub const DEFAULT_KEY_BITS: usize = 128;

/// Label of the transmitting party
pub const SENDER_NAME: &str = "Alice";

/// Label of the receiving party
pub const RECEIVER_NAME: &str = "Bob";
