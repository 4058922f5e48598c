/*!
A minimal key exchange demo for the BB84 protocol.

Runs the protocol at the default key length, then encrypts and decrypts a
message over the derived secure channel.
*/

use bb84_protocol::{Bb84Protocol, DEFAULT_KEY_BITS, Result};

fn main() -> Result<()> {
    let mut protocol = Bb84Protocol::new(DEFAULT_KEY_BITS)?;
    protocol.run()?;

    let key = protocol.shared_key()?;
    println!(
        "Transmitted {} qubits, sifted {} key bits",
        DEFAULT_KEY_BITS,
        key.len()
    );
    println!("Shared key: {}", key);

    let secure = protocol.secure_channel()?;
    let message = secure.encrypt("Hello, Bob!", "Alice")?;
    println!("Encrypted ({}): {}", message.sender, message.ciphertext);

    let plaintext = secure.decrypt(&message)?;
    println!("Decrypted: {}", plaintext);

    Ok(())
}
