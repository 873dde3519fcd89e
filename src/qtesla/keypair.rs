//! qTESLA key generation
//!
//! A key pair is t = a*s + e (mod q) for K public polynomials a_i expanded
//! from seed_a, a Gaussian secret s and K Gaussian errors e_i. Keys are kept
//! in their encoded byte form, tagged with the parameter set that made them.

use crate::qtesla::{
    gaussian::sample_gauss_poly,
    packing::{encode_public_key, encode_secret_key},
    params::*,
    poly::{add_with_correction, multiply, to_ntt, uniform_poly},
};
use crate::Error;
use rand_core::RngCore;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Encoded public key: packed t followed by seed_a
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    set: ParameterSet,
    bytes: Vec<u8>,
}

/// Encoded secret key: s, e, seed_a, seed_y and the public-key digest
///
/// Equality is constant time in the key bytes.
#[derive(Clone)]
pub struct SecretKey {
    set: ParameterSet,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wrap an encoded public key, checking its length against the set
    pub fn from_bytes(set: ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != set.public_key_len() {
            return Err(Error::InvalidPublicKey);
        }
        Ok(Self {
            set,
            bytes: bytes.to_vec(),
        })
    }

    /// Parameter set this key belongs to
    pub fn parameter_set(&self) -> ParameterSet {
        self.set
    }

    /// Wire encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl SecretKey {
    /// Wrap an encoded secret key, checking its length against the set
    pub fn from_bytes(set: ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != set.secret_key_len() {
            return Err(Error::InvalidSecretKey);
        }
        Ok(Self {
            set,
            bytes: bytes.to_vec(),
        })
    }

    /// Parameter set this key belongs to
    pub fn parameter_set(&self) -> ParameterSet {
        self.set
    }

    /// Wire encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretKey")
            .field("set", &self.set)
            .finish_non_exhaustive()
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from((self.set == other.set) as u8) & self.bytes.as_slice().ct_eq(&other.bytes)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Whether the sum of the H largest magnitudes of `poly` exceeds `bound`.
///
/// Runs H passes of a branchless bubble step so the access pattern does
/// not depend on the coefficients.
pub fn check_bound(poly: &[i32], bound: i32, p: &QteslaParams) -> bool {
    let mut list: Vec<i32> = poly.iter().map(|v| v.abs()).collect();
    let mut limit = list.len();
    let mut sum = 0i32;

    for _ in 0..p.h {
        for j in 0..limit - 1 {
            let mask = (list[j + 1] - list[j]) >> 31;
            let low = (list[j + 1] & mask) | (list[j] & !mask);
            list[j + 1] = (list[j] & mask) | (list[j + 1] & !mask);
            list[j] = low;
        }
        sum += list[limit - 1];
        limit -= 1;
    }

    list.zeroize();
    sum as u32 > bound as u32
}

/// Draw Gaussian polynomials with increasing nonces until one passes check_bound
fn sample_bounded(
    seed: &[u8],
    nonce: &mut u32,
    attempts: usize,
    p: &QteslaParams,
) -> Result<Zeroizing<Vec<i32>>, Error> {
    for _ in 0..attempts {
        *nonce += 1;
        let poly = Zeroizing::new(sample_gauss_poly(seed, *nonce, p));
        if !check_bound(&poly, p.rejection, p) {
            return Ok(poly);
        }
    }

    Err(Error::KeyGenerationFailed)
}

/// Generate a key pair for `set` with 32 bytes of randomness drawn from `rng`
pub fn generate_keypair<R: RngCore>(
    set: ParameterSet,
    rng: &mut R,
) -> Result<(PublicKey, SecretKey), Error> {
    keypair_with_attempts(set, rng, MAX_KEYGEN_ATTEMPTS)
}

fn keypair_with_attempts<R: RngCore>(
    set: ParameterSet,
    rng: &mut R,
    attempts: usize,
) -> Result<(PublicKey, SecretKey), Error> {
    let p = set.params();
    let n = p.n;

    // Step 1: Expand fresh randomness into seed_e[0..K], seed_s, seed_a, seed_y
    let mut randomness = Zeroizing::new([0u8; RANDOM_BYTES]);
    rng.try_fill_bytes(&mut randomness[..]).map_err(|_| Error::RngError)?;
    let mut seeds = Zeroizing::new(vec![0u8; SEED_BYTES * (p.k + 3)]);
    p.xof.shake(&mut seeds[..], &randomness[..]);

    // Step 2: Sample errors, then the secret, sharing one nonce counter
    let mut nonce = 0u32;
    let mut e: Zeroizing<Vec<i32>> = Zeroizing::new(Vec::with_capacity(p.k * n));
    for i in 0..p.k {
        let seed_e = &seeds[SEED_BYTES * i..SEED_BYTES * (i + 1)];
        e.extend_from_slice(&sample_bounded(seed_e, &mut nonce, attempts, p)?);
    }
    let seed_s = &seeds[SEED_BYTES * p.k..SEED_BYTES * (p.k + 1)];
    let s = sample_bounded(seed_s, &mut nonce, attempts, p)?;

    // Step 3: t_i = a_i * s + e_i in [0, q)
    let seed_a = &seeds[SEED_BYTES * (p.k + 1)..SEED_BYTES * (p.k + 2)];
    let a = uniform_poly(seed_a, p);
    let s_ntt = Zeroizing::new(to_ntt(&s, p));
    let mut t = Vec::with_capacity(p.k * n);
    for (a_i, e_i) in a.chunks_exact(n).zip(e.chunks_exact(n)) {
        let as_i = multiply(a_i, &s_ntt, p);
        t.extend(add_with_correction(&as_i, e_i, p));
    }

    // Step 4: Encode, binding the secret key to a digest of t
    let pk = encode_public_key(&t, seed_a, p);
    let mut hashed_pk = [0u8; HASHED_MSG_BYTES];
    p.xof.shake(&mut hashed_pk, &pk[..p.public_key_len - SEED_BYTES]);
    let sk = encode_secret_key(
        &s,
        &e,
        &seeds[SEED_BYTES * (p.k + 1)..SEED_BYTES * (p.k + 3)],
        &hashed_pk,
        p,
    );

    Ok((PublicKey { set, bytes: pk }, SecretKey { set, bytes: sk }))
}
