//! qTESLA signature generation
//!
//! Signing runs a rejection loop over masking polynomials y. Each attempt
//! computes v = a*y, derives the challenge c from the rounded v and the
//! message digest, and outputs z = y + s*c only when z is small enough to
//! hide s and every v_i - e_i*c rounds to the same value a verifier sees.

use crate::qtesla::{
    gaussian::sample_y,
    keypair::SecretKey,
    packing::{decode_secret_key, encode_signature},
    params::*,
    poly::{add, encode_c, multiply, sparse_mul_secret, subtract, to_ntt, uniform_poly},
};
use crate::Error;
use rand_core::RngCore;
use zeroize::Zeroize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Signature (z, c) followed by the signed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    set: ParameterSet,
    bytes: Vec<u8>,
}

impl SignedMessage {
    /// Wrap a signed message, requiring at least the fixed signature part
    pub fn from_bytes(set: ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < set.signature_len() {
            return Err(Error::InvalidSignature);
        }
        Ok(Self {
            set,
            bytes: bytes.to_vec(),
        })
    }

    /// Parameter set the signature was made with
    pub fn parameter_set(&self) -> ParameterSet {
        self.set
    }

    /// Full wire form: signature followed by message
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The fixed-size (z, c) part
    pub fn signature_bytes(&self) -> &[u8] {
        &self.bytes[..self.set.signature_len()]
    }

    /// The message carried after the signature
    pub fn message(&self) -> &[u8] {
        &self.bytes[self.set.signature_len()..]
    }

    /// Consume into the wire form
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Challenge hash c = XOF(round(v) || hashed, 32)
///
/// Each coefficient is centred into (-q/2, q/2], split as r*2^D + low with
/// low in (-2^(D-1), 2^(D-1)], and the low byte of r is absorbed.
pub fn generate_c(v: &[i32], hashed: &[u8], p: &QteslaParams) -> [u8; C_BYTES] {
    let half_q = p.q / 2;
    let d_mask = (1i32 << p.d) - 1;
    let d_half = 1i32 << (p.d - 1);

    let mut digest = Vec::with_capacity(v.len() + hashed.len());
    for &x in v {
        let mask = (half_q - x) >> 31;
        let centred = ((x - p.q) & mask) | (x & !mask);

        let mut low = centred & d_mask;
        let mask = (d_half - low) >> 31;
        low = ((low - (1 << p.d)) & mask) | (low & !mask);

        digest.push(((centred - low) >> p.d) as u8);
    }
    digest.extend_from_slice(hashed);

    let mut c = [0u8; C_BYTES];
    p.xof.shake(&mut c, &digest);
    c
}

/// True when some |z_i| exceeds B - margin
///
/// Accumulates every coefficient before deciding, so timing does not depend
/// on which coefficient failed.
pub fn test_rejection(z: &[i32], p: &QteslaParams) -> bool {
    let limit = p.b - p.rejection;
    let mut acc = 0i32;
    for &value in z {
        acc |= limit - value.abs();
    }
    (acc as u32 >> 31) != 0
}

/// True when v_i - e_i*c is too close to a rounding boundary
///
/// Returns at the first failing coefficient; only the position leaks.
pub fn test_correctness(v: &[i32], p: &QteslaParams) -> bool {
    let half_q = p.q / 2;
    let d_half = 1i32 << (p.d - 1);

    for &x in v {
        let mask = (half_q - x) >> 31;
        let centred = ((x - p.q) & mask) | (x & !mask);
        let far = (!(centred.abs() - (half_q - p.rejection))) as u32 >> 31;

        let rounded = (centred + d_half - 1) >> p.d;
        let low = centred - (rounded << p.d);
        let near = (!(low.abs() - (d_half - p.rejection))) as u32 >> 31;

        if far | near == 1 {
            return true;
        }
    }
    false
}

/// Sign `message` with `secret_key`, drawing 32 fresh bytes from `rng`
pub fn sign_message<R: RngCore>(
    secret_key: &SecretKey,
    message: &[u8],
    rng: &mut R,
) -> Result<SignedMessage, Error> {
    sign_with_attempts(secret_key, message, rng, MAX_SIGNING_ATTEMPTS)
}

fn sign_with_attempts<R: RngCore>(
    secret_key: &SecretKey,
    message: &[u8],
    rng: &mut R,
    max_attempts: usize,
) -> Result<SignedMessage, Error> {
    let set = secret_key.parameter_set();
    let p = set.params();
    let n = p.n;
    let sk = decode_secret_key(secret_key.as_bytes(), p);

    // Step 1: Per-message seed from seed_y, fresh randomness and H(m)
    let mut rand_input = [0u8; SEED_BYTES + RANDOM_BYTES + HASHED_MSG_BYTES];
    rand_input[..SEED_BYTES].copy_from_slice(sk.seed_y);
    rng.try_fill_bytes(&mut rand_input[SEED_BYTES..SEED_BYTES + RANDOM_BYTES])
        .map_err(|_| Error::RngError)?;
    p.xof.shake(&mut rand_input[SEED_BYTES + RANDOM_BYTES..], message);

    let mut randomness = [0u8; SEED_BYTES];
    p.xof.shake(&mut randomness, &rand_input);

    // Step 2: Challenge input H(m) || H(pk), and the public polynomials
    let mut hashed = [0u8; 2 * HASHED_MSG_BYTES];
    hashed[..HASHED_MSG_BYTES].copy_from_slice(&rand_input[SEED_BYTES + RANDOM_BYTES..]);
    hashed[HASHED_MSG_BYTES..].copy_from_slice(sk.hashed_pk);
    rand_input.zeroize();
    let a = uniform_poly(sk.seed_a, p);

    // Step 3: Rejection loop
    let mut nonce = 0u32;
    let mut v = vec![0i32; p.k * n];
    for _ in 0..max_attempts {
        nonce += 1;
        let mut y = sample_y(&randomness, nonce, p);
        let y_ntt = to_ntt(&y, p);
        for (v_i, a_i) in v.chunks_exact_mut(n).zip(a.chunks_exact(n)) {
            v_i.copy_from_slice(&multiply(a_i, &y_ntt, p));
        }

        let c = generate_c(&v, &hashed, p);
        let sparse = encode_c(&c, p);

        let mut sc = sparse_mul_secret(&sk.s, &sparse, p);
        let z = add(&y, &sc);
        sc.zeroize();
        y.zeroize();
        if test_rejection(&z, p) {
            continue;
        }

        let mut rejected = false;
        for (v_i, e_i) in v.chunks_exact(n).zip(sk.e.chunks_exact(n)) {
            let mut ec = sparse_mul_secret(e_i, &sparse, p);
            let mut w = subtract(v_i, &ec);
            rejected = test_correctness(&w, p);
            ec.zeroize();
            w.zeroize();
            if rejected {
                break;
            }
        }
        if rejected {
            continue;
        }

        // Step 4: Encode (z, c) and append the message
        let mut bytes = encode_signature(&c, &z, p);
        bytes.extend_from_slice(message);
        randomness.zeroize();
        v.zeroize();
        return Ok(SignedMessage { set, bytes });
    }

    randomness.zeroize();
    v.zeroize();
    Err(Error::SigningFailed)
}
