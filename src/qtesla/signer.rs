//! Stateful signer bound to one parameter set
//!
//! A [`Qtesla`] owns its DRBG and, once keys are generated or injected,
//! the key pair. Signing draws its per-message randomness from the owned
//! DRBG; verification only needs the public key.

use crate::qtesla::{
    drbg::{Drbg, ENTROPY_BYTES},
    keypair::{generate_keypair, PublicKey, SecretKey},
    params::ParameterSet,
    signature::{sign_message, SignedMessage},
    verification::verify_signature,
};
use crate::Error;

/// qTESLA signer for one parameter set
#[derive(Debug)]
pub struct Qtesla {
    set: ParameterSet,
    drbg: Drbg,
    public_key: Option<PublicKey>,
    secret_key: Option<SecretKey>,
}

impl Qtesla {
    /// Signer without keys, drawing randomness from `drbg`
    pub fn with_drbg(set: ParameterSet, drbg: Drbg) -> Self {
        Self {
            set,
            drbg,
            public_key: None,
            secret_key: None,
        }
    }

    /// Signer without keys, seeded from operating system entropy
    #[cfg(feature = "std")]
    pub fn new(set: ParameterSet) -> crate::Result<Self> {
        Ok(Self::with_drbg(set, Drbg::from_entropy()?))
    }

    /// Install existing key material
    ///
    /// Either key may be absent; a key from another set is rejected.
    pub fn with_keys(
        mut self,
        public_key: Option<PublicKey>,
        secret_key: Option<SecretKey>,
    ) -> Result<Self, Error> {
        let set = self.set;
        if public_key.as_ref().map_or(false, |pk| pk.parameter_set() != set)
            || secret_key.as_ref().map_or(false, |sk| sk.parameter_set() != set)
        {
            return Err(Error::InvalidParameter);
        }
        self.public_key = public_key;
        self.secret_key = secret_key;
        Ok(self)
    }

    /// Parameter set of this signer
    pub fn parameter_set(&self) -> ParameterSet {
        self.set
    }

    /// Generate and keep a fresh key pair, replacing any previous one
    pub fn generate_key_pair(&mut self) -> Result<&PublicKey, Error> {
        let (pk, sk) = generate_keypair(self.set, &mut self.drbg)?;
        self.secret_key = Some(sk);
        Ok(self.public_key.insert(pk))
    }

    /// Current public key, if any
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Current secret key, if any
    pub fn secret_key(&self) -> Option<&SecretKey> {
        self.secret_key.as_ref()
    }

    /// Sign `message` with the held secret key
    pub fn sign(&mut self, message: &[u8]) -> Result<SignedMessage, Error> {
        let sk = self.secret_key.as_ref().ok_or(Error::InvalidSecretKey)?;
        sign_message(sk, message, &mut self.drbg)
    }

    /// Verify `signed` against `message` with the held public key
    ///
    /// Returns `false` when no public key is held.
    pub fn verify(&self, message: &[u8], signed: &SignedMessage) -> bool {
        self.public_key
            .as_ref()
            .map_or(false, |pk| verify_signature(pk, message, signed))
    }

    /// Mix fresh entropy into the owned DRBG
    pub fn reseed(&mut self, entropy: &[u8; ENTROPY_BYTES]) {
        self.drbg.reseed(entropy, None);
    }
}
