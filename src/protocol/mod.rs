/*!
Protocol coordination for the BB84 simulation.

The coordinator owns both participants, the quantum channel, the sifted key
and the secure channel, and drives a run through its states in order. A run
is atomic from the caller's point of view: on failure the run state is
restored and no shared key is set.
*/

use log::{debug, info};

use crate::core::{
    channel::QuantumChannel,
    constants::{RECEIVER_NAME, SENDER_NAME},
    error::{Result, invalid_argument_err, precondition_err},
    key::SharedKey,
    participant::Participant,
    random::{self, OsRandomSource, RandomSource},
    secure::SecureChannel,
    sifter,
};

pub mod state;

pub use self::state::ProtocolState;

/// Coordinates a BB84 key distribution run between Alice and Bob
pub struct Bb84Protocol<R: RandomSource = OsRandomSource> {
    number_of_bits: usize,
    source: R,
    state: ProtocolState,
    alice: Option<Participant>,
    bob: Option<Participant>,
    channel: Option<QuantumChannel>,
    shared_key: Option<SharedKey>,
    secure: Option<SecureChannel>,
}

impl Bb84Protocol<OsRandomSource> {
    /// Create a coordinator drawing from the OS entropy source
    pub fn new(number_of_bits: usize) -> Result<Self> {
        Self::with_source(number_of_bits, OsRandomSource::new())
    }
}

impl<R: RandomSource> Bb84Protocol<R> {
    /// Create a coordinator with an injected random source
    pub fn with_source(number_of_bits: usize, source: R) -> Result<Self> {
        if number_of_bits == 0 {
            return invalid_argument_err("number of bits must be greater than zero");
        }

        Ok(Self {
            number_of_bits,
            source,
            state: ProtocolState::Created,
            alice: None,
            bob: None,
            channel: None,
            shared_key: None,
            secure: None,
        })
    }

    /// Number of qubits transmitted per run
    pub fn number_of_bits(&self) -> usize {
        self.number_of_bits
    }

    /// Current run state
    pub fn state(&self) -> ProtocolState {
        self.state
    }

    /// Execute the protocol and initialize the secure channel.
    ///
    /// Re-running an already-run coordinator draws fresh sequences and
    /// overwrites all derived state. On failure the run state is restored
    /// to its pre-run value and no shared key is set; fields from an earlier
    /// successful run may remain populated.
    pub fn run(&mut self) -> Result<()> {
        let entry_state = self.state;
        match self.run_steps() {
            Ok(()) => Ok(()),
            Err(e) => {
                self.state = entry_state;
                Err(e)
            }
        }
    }

    fn run_steps(&mut self) -> Result<()> {
        let n = self.number_of_bits;
        info!("starting BB84 run over {} qubits", n);

        let alice_bits = random::bits(&mut self.source, n)?;
        self.state = ProtocolState::BitsGenerated;
        debug!("drew {} bits for {}", n, SENDER_NAME);

        let alice_bases = random::bases(&mut self.source, n)?;
        let bob_bases = random::bases(&mut self.source, n)?;
        let alice = Participant::sender(SENDER_NAME, alice_bits, alice_bases)?;
        let bob = Participant::receiver(RECEIVER_NAME, bob_bases);
        self.state = ProtocolState::BasesGenerated;
        debug!("drew basis sequences for {} and {}", SENDER_NAME, RECEIVER_NAME);

        let channel = QuantumChannel::transmit(&alice, &bob, &mut self.source)?;
        self.state = ProtocolState::Transmitted;

        let key = sifter::sift(&alice, &bob, &channel)?;
        self.state = ProtocolState::Sifted;
        info!("sifted {} key bits out of {} transmitted", key.len(), n);

        let secure = SecureChannel::new(&key);

        self.alice = Some(alice);
        self.bob = Some(bob);
        self.channel = Some(channel);
        self.shared_key = Some(key);
        self.secure = Some(secure);
        self.state = ProtocolState::SecureChannelReady;
        Ok(())
    }

    /// The sifted shared key, valid only after a successful run
    pub fn shared_key(&self) -> Result<&SharedKey> {
        match &self.shared_key {
            Some(key) => Ok(key),
            None => precondition_err("protocol has not completed a run"),
        }
    }

    /// The secure communication handle, valid only after a successful run
    pub fn secure_channel(&mut self) -> Result<&mut SecureChannel> {
        match &mut self.secure {
            Some(secure) => Ok(secure),
            None => precondition_err("protocol has not completed a run"),
        }
    }

    /// The transmitting party of the last run
    pub fn alice(&self) -> Result<&Participant> {
        match &self.alice {
            Some(alice) => Ok(alice),
            None => precondition_err("protocol has not completed a run"),
        }
    }

    /// The receiving party of the last run
    pub fn bob(&self) -> Result<&Participant> {
        match &self.bob {
            Some(bob) => Ok(bob),
            None => precondition_err("protocol has not completed a run"),
        }
    }

    /// The quantum channel of the last run
    pub fn channel(&self) -> Result<&QuantumChannel> {
        match &self.channel {
            Some(channel) => Ok(channel),
            None => precondition_err("protocol has not completed a run"),
        }
    }
}
