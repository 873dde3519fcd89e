//! qTESLA signature verification
//!
//! Verification recomputes w = a*z - t*c and accepts when hashing the
//! rounded w with the message and public-key digests reproduces c. All
//! inputs are public, so early exits are fine here.

use crate::qtesla::{
    keypair::PublicKey,
    packing::{decode_public_key, decode_signature},
    params::*,
    poly::{encode_c, multiply, sparse_mul_public, subtract_with_reduction, to_ntt, uniform_poly},
    signature::{generate_c, SignedMessage},
};
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// True when some |z_i| exceeds B - margin
pub fn test_z(z: &[i32], p: &QteslaParams) -> bool {
    let limit = p.b - p.rejection;
    z.iter().any(|&value| value < -limit || value > limit)
}

/// Verify `signed` against `message` under `public_key`
///
/// A signature from another parameter set, a different carried message, or
/// any mismatch in the recomputed challenge all yield `false`.
pub fn verify_signature(public_key: &PublicKey, message: &[u8], signed: &SignedMessage) -> bool {
    // Step 1: Both halves must come from the same parameter set
    if public_key.parameter_set() != signed.parameter_set() {
        return false;
    }

    verify_bytes(
        public_key.parameter_set().params(),
        public_key.as_bytes(),
        message,
        signed.as_bytes(),
    )
}

/// Verify raw encodings of a public key and a signed message
pub fn verify_bytes(p: &QteslaParams, pk: &[u8], message: &[u8], signed: &[u8]) -> bool {
    let n = p.n;

    // Step 1: Layout and carried message
    if pk.len() != p.public_key_len || signed.len() != p.signature_len + message.len() {
        return false;
    }
    let (signature, carried) = signed.split_at(p.signature_len);
    if carried != message {
        return false;
    }

    // Step 2: Decode and bound z
    let (c, z) = decode_signature(signature, p);
    if test_z(&z, p) {
        return false;
    }
    let (t, seed_a) = decode_public_key(pk, p);

    // Step 3: Challenge input H(m) || H(packed t)
    let mut hashed = [0u8; 2 * HASHED_MSG_BYTES];
    p.xof.shake(&mut hashed[..HASHED_MSG_BYTES], carried);
    p.xof.shake(&mut hashed[HASHED_MSG_BYTES..], &pk[..p.public_key_len - SEED_BYTES]);

    // Step 4: w_i = a_i*z - t_i*c
    let a = uniform_poly(seed_a, p);
    let sparse = encode_c(c, p);
    let z_ntt = to_ntt(&z, p);
    let mut w = Vec::with_capacity(p.k * n);
    for (a_i, t_i) in a.chunks_exact(n).zip(t.chunks_exact(n)) {
        let az = multiply(a_i, &z_ntt, p);
        let tc = sparse_mul_public(t_i, &sparse, p);
        w.extend(subtract_with_reduction(&az, &tc, p));
    }

    // Step 5: Recompute the challenge
    let recomputed = generate_c(&w, &hashed, p);
    recomputed[..].ct_eq(c).into()
}
