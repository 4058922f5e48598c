/*!
Classical key sifting for the BB84 protocol.

Sifting is the public basis-reconciliation step: both parties compare their
basis choices over an authenticated classical channel (assumed ideal here)
and keep only the positions where the choices agree.
*/

use crate::core::{
    channel::QuantumChannel,
    error::{Result, precondition_err},
    key::SharedKey,
    participant::Participant,
};

/// Filter the transmitted bits down to positions with agreeing bases.
///
/// Deterministic given its inputs. Indices with disagreeing bases are
/// discarded entirely; the surviving bits keep their relative order.
pub fn sift(
    sender: &Participant,
    receiver: &Participant,
    channel: &QuantumChannel,
) -> Result<SharedKey> {
    let n = channel.len();
    if sender.bases().len() != n || receiver.bases().len() != n {
        return precondition_err(format!(
            "basis sequences and transmission must have equal length, got {}, {} and {}",
            sender.bases().len(),
            receiver.bases().len(),
            n
        ));
    }

    let mut bits = Vec::new();
    for i in 0..n {
        if sender.bases()[i] == receiver.bases()[i] {
            bits.push(channel.transmitted()[i]);
        }
    }

    Ok(SharedKey::new(bits))
}
