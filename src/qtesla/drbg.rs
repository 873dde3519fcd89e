//! AES-256 CTR_DRBG (no derivation function)
//!
//! State is a 256-bit key, a 128-bit counter block V and a reseed counter.
//! The counter is informational: nothing forces a reseed when it grows,
//! callers that want fresh entropy call [`Drbg::reseed`] themselves.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes256;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Length of the seed material accepted by instantiate and reseed
pub const ENTROPY_BYTES: usize = 48;

const KEY_BYTES: usize = 32;
const BLOCK_BYTES: usize = 16;

/// Deterministic random bit generator owned by one signer
pub struct Drbg {
    key: [u8; KEY_BYTES],
    value: [u8; BLOCK_BYTES],
    reseed_counter: u64,
}

/// Increment V as a big-endian 128-bit integer, wrapping on overflow
fn increment(value: &mut [u8; BLOCK_BYTES]) {
    for byte in value.iter_mut().rev() {
        if *byte == 0xFF {
            *byte = 0;
        } else {
            *byte += 1;
            break;
        }
    }
}

impl Drbg {
    /// Instantiate from 48 bytes of entropy and an optional personalization string
    pub fn new(
        entropy: &[u8; ENTROPY_BYTES],
        personalization: Option<&[u8; ENTROPY_BYTES]>,
    ) -> Self {
        let mut drbg = Self::from_raw_state([0u8; KEY_BYTES], [0u8; BLOCK_BYTES]);
        drbg.reseed(entropy, personalization);
        drbg
    }

    /// Build a generator directly from a key and counter block
    ///
    /// The reseed counter starts at zero. Mostly useful for reproducing
    /// fixed states in tests.
    pub fn from_raw_state(key: [u8; KEY_BYTES], value: [u8; BLOCK_BYTES]) -> Self {
        Self {
            key,
            value,
            reseed_counter: 0,
        }
    }

    /// Instantiate from operating system entropy
    #[cfg(feature = "std")]
    pub fn from_entropy() -> crate::Result<Self> {
        let mut entropy = [0u8; ENTROPY_BYTES];
        rand_core::OsRng
            .try_fill_bytes(&mut entropy)
            .map_err(|_| crate::Error::RngError)?;
        let drbg = Self::new(&entropy, None);
        entropy.zeroize();
        Ok(drbg)
    }

    /// Mix fresh entropy (and optional additional input) into the state
    pub fn reseed(
        &mut self,
        entropy: &[u8; ENTROPY_BYTES],
        additional: Option<&[u8; ENTROPY_BYTES]>,
    ) {
        let mut seed_material = *entropy;
        if let Some(extra) = additional {
            for (s, a) in seed_material.iter_mut().zip(extra.iter()) {
                *s ^= a;
            }
        }
        self.update(Some(&seed_material));
        self.reseed_counter = 1;
        seed_material.zeroize();
    }

    /// CTR_DRBG update: three encrypted counter blocks, optionally XORed with
    /// `provided`, become the new key and V
    pub fn update(&mut self, provided: Option<&[u8; ENTROPY_BYTES]>) {
        let cipher = Aes256::new(GenericArray::from_slice(&self.key));
        let mut temp = [0u8; ENTROPY_BYTES];

        for chunk in temp.chunks_exact_mut(BLOCK_BYTES) {
            increment(&mut self.value);
            let mut block = GenericArray::clone_from_slice(&self.value);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }

        if let Some(data) = provided {
            for (t, d) in temp.iter_mut().zip(data.iter()) {
                *t ^= d;
            }
        }

        self.key.copy_from_slice(&temp[..KEY_BYTES]);
        self.value.copy_from_slice(&temp[KEY_BYTES..]);
        temp.zeroize();
    }

    /// Fill `output` with pseudorandom bytes, then update the state
    pub fn generate(&mut self, output: &mut [u8]) {
        let cipher = Aes256::new(GenericArray::from_slice(&self.key));

        for chunk in output.chunks_mut(BLOCK_BYTES) {
            increment(&mut self.value);
            let mut block = GenericArray::clone_from_slice(&self.value);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.update(None);
        self.reseed_counter += 1;
    }

    /// Number of generate calls since the last (re)seed, plus one
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }
}

impl RngCore for Drbg {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generate(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.generate(dest);
        Ok(())
    }
}

impl CryptoRng for Drbg {}

impl core::fmt::Debug for Drbg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Drbg")
            .field("reseed_counter", &self.reseed_counter)
            .finish_non_exhaustive()
    }
}

impl Drop for Drbg {
    fn drop(&mut self) {
        self.key.zeroize();
        self.value.zeroize();
    }
}
