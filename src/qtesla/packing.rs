//! Bit-exact encoding of keys and signatures
//!
//! Public-key and signature coefficients are written as one contiguous
//! little-endian bit stream of fixed-width fields, serialized as 32-bit
//! little-endian words. With p-I, 32 public coefficients fill 29 words and
//! 16 signature coefficients fill 10 words; with p-III, 16 public
//! coefficients fill 15 words and 16 signature coefficients fill 11 words.
//! Fields may straddle a word boundary.
//!
//! The secret key stores s and e as raw signed bytes.

use crate::qtesla::{
    params::{QteslaParams, C_BYTES, HASHED_MSG_BYTES, SEED_BYTES},
    poly::load_u32_le,
};
use zeroize::Zeroize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Pack `values` as `width`-bit fields into `out`
///
/// `values.len() * width` must be a multiple of 32 and `out` exactly that many bits long.
pub fn pack_bits(values: &[i32], width: u32, out: &mut [u8]) {
    debug_assert_eq!(values.len() * width as usize, out.len() * 8);
    let mask = (1u64 << width) - 1;
    let mut acc = 0u64;
    let mut nbits = 0u32;
    let mut words = out.chunks_exact_mut(4);

    for &value in values {
        acc |= (value as u32 as u64 & mask) << nbits;
        nbits += width;
        while nbits >= 32 {
            if let Some(word) = words.next() {
                word.copy_from_slice(&(acc as u32).to_le_bytes());
            }
            acc >>= 32;
            nbits -= 32;
        }
    }
}

/// Unpack `count` fields of `width` bits, sign-extending when `signed`
pub fn unpack_bits(bytes: &[u8], width: u32, count: usize, signed: bool) -> Vec<i32> {
    let mask = (1u64 << width) - 1;
    let shift = 32 - width;
    let mut acc = 0u64;
    let mut nbits = 0u32;
    let mut offset = 0;
    let mut values = Vec::with_capacity(count);

    for _ in 0..count {
        while nbits < width {
            acc |= (load_u32_le(&bytes[offset..]) as u64) << nbits;
            offset += 4;
            nbits += 32;
        }
        let field = (acc & mask) as u32;
        acc >>= width;
        nbits -= width;

        values.push(if signed {
            ((field << shift) as i32) >> shift
        } else {
            field as i32
        });
    }

    values
}

/// Bytes taken by the packed t of a public key
fn packed_t_len(p: &QteslaParams) -> usize {
    p.k * p.n * p.q_log as usize / 8
}

/// Bytes taken by the packed z of a signature
fn packed_z_len(p: &QteslaParams) -> usize {
    p.n * (p.b_bits as usize + 1) / 8
}

/// Encode t (K*N residues in [0, q)) followed by seed_a
pub fn encode_public_key(t: &[i32], seed_a: &[u8], p: &QteslaParams) -> Vec<u8> {
    debug_assert_eq!(t.len(), p.k * p.n);
    debug_assert_eq!(seed_a.len(), SEED_BYTES);

    let t_len = packed_t_len(p);
    let mut pk = vec![0u8; p.public_key_len];
    pack_bits(t, p.q_log, &mut pk[..t_len]);
    pk[t_len..].copy_from_slice(seed_a);
    pk
}

/// Decode a public key into t and seed_a
pub fn decode_public_key<'a>(pk: &'a [u8], p: &QteslaParams) -> (Vec<i32>, &'a [u8]) {
    debug_assert_eq!(pk.len(), p.public_key_len);
    let t_len = packed_t_len(p);
    let t = unpack_bits(&pk[..t_len], p.q_log, p.k * p.n, false);
    (t, &pk[t_len..t_len + SEED_BYTES])
}

/// Encode z at B_BITS+1 bits per coefficient followed by c
pub fn encode_signature(c: &[u8], z: &[i32], p: &QteslaParams) -> Vec<u8> {
    debug_assert_eq!(z.len(), p.n);
    debug_assert_eq!(c.len(), C_BYTES);

    let z_len = packed_z_len(p);
    let mut sig = vec![0u8; p.signature_len];
    pack_bits(z, p.b_bits + 1, &mut sig[..z_len]);
    sig[z_len..].copy_from_slice(c);
    sig
}

/// Decode the fixed-size part of a signature into c and z
pub fn decode_signature<'a>(sig: &'a [u8], p: &QteslaParams) -> (&'a [u8], Vec<i32>) {
    debug_assert!(sig.len() >= p.signature_len);
    let z_len = packed_z_len(p);
    let z = unpack_bits(&sig[..z_len], p.b_bits + 1, p.n, true);
    (&sig[z_len..z_len + C_BYTES], z)
}

/// Encode s, e, seed_a, seed_y and the public-key digest
pub fn encode_secret_key(
    s: &[i32],
    e: &[i32],
    seeds: &[u8],
    hashed_pk: &[u8],
    p: &QteslaParams,
) -> Vec<u8> {
    debug_assert_eq!(s.len(), p.n);
    debug_assert_eq!(e.len(), p.k * p.n);
    debug_assert_eq!(seeds.len(), 2 * SEED_BYTES);
    debug_assert_eq!(hashed_pk.len(), HASHED_MSG_BYTES);

    let mut sk = Vec::with_capacity(p.secret_key_len);
    sk.extend(s.iter().map(|&v| v as u8));
    sk.extend(e.iter().map(|&v| v as u8));
    sk.extend_from_slice(seeds);
    sk.extend_from_slice(hashed_pk);
    sk
}

/// Borrowed view of a decoded secret key; s and e are wiped on drop
pub struct SecretKeyView<'a> {
    /// Secret polynomial s
    pub s: Vec<i8>,
    /// Error polynomials e_1..e_K, concatenated
    pub e: Vec<i8>,
    /// Seed for the public polynomials
    pub seed_a: &'a [u8],
    /// Seed mixed into the derivation of y
    pub seed_y: &'a [u8],
    /// Digest of the packed t
    pub hashed_pk: &'a [u8],
}

/// Decode a secret key
pub fn decode_secret_key<'a>(sk: &'a [u8], p: &QteslaParams) -> SecretKeyView<'a> {
    debug_assert_eq!(sk.len(), p.secret_key_len);
    let (s, rest) = sk.split_at(p.n);
    let (e, rest) = rest.split_at(p.k * p.n);
    let (seed_a, rest) = rest.split_at(SEED_BYTES);
    let (seed_y, hashed_pk) = rest.split_at(SEED_BYTES);

    SecretKeyView {
        s: s.iter().map(|&b| b as i8).collect(),
        e: e.iter().map(|&b| b as i8).collect(),
        seed_a,
        seed_y,
        hashed_pk,
    }
}

impl Drop for SecretKeyView<'_> {
    fn drop(&mut self) {
        self.s.zeroize();
        self.e.zeroize();
    }
}
