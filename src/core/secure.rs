/*!
Secure communication over the sifted key.

The sifted key is packed into a keystream once at construction and reused for
every message, wrapping cyclically when a plaintext is longer than the packed
key. That wrap makes this a repeating-key XOR, not a one-time pad: the scheme
demonstrates the protocol's mechanics and is not suitable for real
confidentiality.
*/

use base64::{Engine as _, engine::general_purpose::STANDARD};

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::{
    error::{Result, precondition_err},
    key::SharedKey,
};

/// An encrypted message retained in the channel log
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Message {
    /// Base64-encoded ciphertext bytes
    pub ciphertext: String,
    /// Label of the party that produced the message
    pub sender: String,
}

/// Symmetric channel driven by the sifted key
#[derive(Debug, Clone)]
pub struct SecureChannel {
    key_bytes: Vec<u8>,
    messages: Vec<Message>,
}

impl SecureChannel {
    /// Initialize the channel from a sifted key.
    ///
    /// The keystream is packed here, once, and does not change for the
    /// lifetime of the channel. The message log starts empty.
    pub fn new(key: &SharedKey) -> Self {
        Self {
            key_bytes: key.to_bytes(),
            messages: Vec::new(),
        }
    }

    /// Encrypt `plaintext` and append the result to the message log
    pub fn encrypt(&mut self, plaintext: &str, sender: &str) -> Result<Message> {
        self.ensure_keystream()?;

        let cipher_bytes = self.xor_keystream(plaintext.as_bytes());
        let message = Message {
            ciphertext: STANDARD.encode(cipher_bytes),
            sender: sender.to_string(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Decrypt a message produced by [`encrypt`](Self::encrypt).
    ///
    /// Fails with [`Error::MalformedCiphertext`](crate::core::error::Error)
    /// when the stored ciphertext is not valid base64. A mismatched key is
    /// not detectable here: it yields garbage text, never an error.
    pub fn decrypt(&self, message: &Message) -> Result<String> {
        self.ensure_keystream()?;

        let cipher_bytes = STANDARD.decode(&message.ciphertext)?;
        let plain_bytes = self.xor_keystream(&cipher_bytes);
        Ok(String::from_utf8_lossy(&plain_bytes).into_owned())
    }

    /// Messages produced by this channel, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Packed keystream length in bytes
    pub fn keystream_len(&self) -> usize {
        self.key_bytes.len()
    }

    // A zero-length sifted key leaves nothing to wrap cyclically.
    fn ensure_keystream(&self) -> Result<()> {
        if self.key_bytes.is_empty() {
            return precondition_err("sifted key is empty, no keystream available");
        }
        Ok(())
    }

    fn xor_keystream(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .enumerate()
            .map(|(i, byte)| byte ^ self.key_bytes[i % self.key_bytes.len()])
            .collect()
    }
}
