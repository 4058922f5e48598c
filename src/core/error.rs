/*!
Error handling for the BB84 protocol.
*/

use thiserror::Error;

/// Result type for the BB84 protocol
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the BB84 protocol
#[derive(Error, Debug)]
pub enum Error {
    /// A caller supplied an argument outside the accepted domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The secure entropy source could not service a request
    #[error("randomness source failure: {0}")]
    RandomnessSource(String),

    /// An operation was used before its required setup step completed
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// A ciphertext failed text decoding
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(#[from] base64::DecodeError),
}

/// Convert a string to an Error::InvalidArgument
pub fn invalid_argument_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::InvalidArgument(msg.into()))
}

/// Convert a string to an Error::RandomnessSource
pub fn randomness_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::RandomnessSource(msg.into()))
}

/// Convert a string to an Error::PreconditionViolated
pub fn precondition_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::PreconditionViolated(msg.into()))
}
