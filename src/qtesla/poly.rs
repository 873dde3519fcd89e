//! Polynomial arithmetic in Z_q[X]/(X^N + 1)
//!
//! Polynomials are plain `i32` slices of length N; a vector of K
//! polynomials is one contiguous slice of length K*N. Whether a slice is in
//! the coefficient or NTT domain is a calling convention: products are only
//! formed between NTT-domain operands.

use crate::qtesla::{
    keccak::{Xof, SHAKE128_RATE},
    ntt,
    params::QteslaParams,
    reduce::correct,
};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Sparse ternary polynomial c with H nonzero entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseTernary {
    /// Distinct positions in [0, N)
    pub positions: Vec<usize>,
    /// Sign (+1 or -1) at each position
    pub signs: Vec<i32>,
}

impl SparseTernary {
    /// Number of nonzero entries
    pub fn weight(&self) -> usize {
        self.positions.len()
    }

    /// Expand into a dense polynomial of length `n`
    pub fn to_dense(&self, n: usize) -> Vec<i32> {
        let mut dense = vec![0i32; n];
        for (&pos, &sign) in self.positions.iter().zip(self.signs.iter()) {
            dense[pos] = sign;
        }
        dense
    }
}

#[inline]
pub(crate) fn load_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Expand `seed` into the K public polynomials a_1..a_K, already in the NTT domain.
///
/// Candidates are little-endian words masked to Q_LOG bits; anything >= q is
/// rejected. Accepted values are scaled by R^2/N so the inverse NTT of a
/// product needs no further scaling.
pub fn uniform_poly(seed: &[u8], p: &QteslaParams) -> Vec<i32> {
    let rate = SHAKE128_RATE;
    let total = p.k * p.n;
    let word_bytes = (p.q_log as usize + 7) / 8;
    let mask = (1u32 << p.q_log) - 1;

    let mut buf = vec![0u8; rate * p.gen_a];
    let mut nblocks = p.gen_a;
    let mut dmsp: u16 = 0;
    Xof::Shake128.cshake(&mut buf, dmsp, seed);
    dmsp = dmsp.wrapping_add(1);

    let mut a = Vec::with_capacity(total);
    let mut pos = 0;
    while a.len() < total {
        if pos > rate * nblocks - 4 * word_bytes {
            nblocks = 1;
            Xof::Shake128.cshake(&mut buf[..rate], dmsp, seed);
            dmsp = dmsp.wrapping_add(1);
            pos = 0;
        }

        let mut candidates = [0u32; 4];
        for value in candidates.iter_mut() {
            *value = load_u32_le(&buf[pos..]) & mask;
            pos += word_bytes;
        }
        for &value in candidates.iter() {
            if value < p.q as u32 && a.len() < total {
                a.push(p.mont(value as i64 * p.r2_invn));
            }
        }
    }

    a
}

/// Derive the sparse ternary c from the 32-byte challenge hash.
///
/// Each draw reads two big-endian bytes of cSHAKE128 output for the
/// position (masked to N-1). A fresh position also reads a third byte whose
/// low bit is the sign; a position already taken consumes only its two bytes.
pub fn encode_c(c: &[u8], p: &QteslaParams) -> SparseTernary {
    let rate = SHAKE128_RATE;
    let mut buf = [0u8; SHAKE128_RATE];
    let mut dmsp: u16 = 0;
    Xof::Shake128.cshake(&mut buf, dmsp, c);
    dmsp = dmsp.wrapping_add(1);

    let mut taken = vec![false; p.n];
    let mut positions = Vec::with_capacity(p.h);
    let mut signs = Vec::with_capacity(p.h);
    let mut pos = 0;

    while positions.len() < p.h {
        if pos > rate - 3 {
            Xof::Shake128.cshake(&mut buf, dmsp, c);
            dmsp = dmsp.wrapping_add(1);
            pos = 0;
        }

        let index = (((buf[pos] as usize) << 8) | buf[pos + 1] as usize) & (p.n - 1);
        if !taken[index] {
            taken[index] = true;
            positions.push(index);
            signs.push(if buf[pos + 2] & 1 == 1 { -1 } else { 1 });
            pos += 3;
        } else {
            pos += 2;
        }
    }

    SparseTernary { positions, signs }
}

/// Coefficient-wise Montgomery product of two NTT-domain polynomials
pub fn pointwise_multiply(a: &[i32], b: &[i32], p: &QteslaParams) -> Vec<i32> {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| p.mont(x as i64 * y as i64))
        .collect()
}

/// Ring product of NTT-domain operands, returned in the coefficient domain
pub fn multiply(a: &[i32], b: &[i32], p: &QteslaParams) -> Vec<i32> {
    let mut c = pointwise_multiply(a, b, p);
    ntt::inverse(&mut c, p);
    c
}

/// Forward NTT of a copy of `a`
pub fn to_ntt(a: &[i32], p: &QteslaParams) -> Vec<i32> {
    let mut out = a.to_vec();
    ntt::forward(&mut out, p);
    out
}

/// Plain coefficient-wise sum
pub fn add(a: &[i32], b: &[i32]) -> Vec<i32> {
    a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect()
}

/// Sum corrected into [0, q) without branches
pub fn add_with_correction(a: &[i32], b: &[i32], p: &QteslaParams) -> Vec<i32> {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| correct(x + y, p.q))
        .collect()
}

/// Plain coefficient-wise difference
pub fn subtract(a: &[i32], b: &[i32]) -> Vec<i32> {
    a.iter().zip(b.iter()).map(|(&x, &y)| x - y).collect()
}

/// Difference followed by Barrett reduction
pub fn subtract_with_reduction(a: &[i32], b: &[i32], p: &QteslaParams) -> Vec<i32> {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| p.barrett(x as i64 - y as i64))
        .collect()
}

/// Product of a small secret polynomial (s or e_i) with c
///
/// Each nonzero entry of c adds a negacyclically shifted copy of `s`.
pub fn sparse_mul_secret(s: &[i8], c: &SparseTernary, p: &QteslaParams) -> Vec<i32> {
    let n = p.n;
    debug_assert_eq!(s.len(), n);
    let mut prod = vec![0i32; n];

    for (&pos, &sign) in c.positions.iter().zip(c.signs.iter()) {
        for i in 0..pos {
            prod[i] -= sign * s[i + n - pos] as i32;
        }
        for i in pos..n {
            prod[i] += sign * s[i - pos] as i32;
        }
    }

    prod
}

/// Product of a public polynomial t_i (coefficients in [0, q)) with c
///
/// Accumulates in 64 bits and reduces once at the end.
pub fn sparse_mul_public(t: &[i32], c: &SparseTernary, p: &QteslaParams) -> Vec<i32> {
    let n = p.n;
    debug_assert_eq!(t.len(), n);
    let mut acc = vec![0i64; n];

    for (&pos, &sign) in c.positions.iter().zip(c.signs.iter()) {
        let sign = sign as i64;
        for i in 0..pos {
            acc[i] -= sign * t[i + n - pos] as i64;
        }
        for i in pos..n {
            acc[i] += sign * t[i - pos] as i64;
        }
    }

    acc.into_iter().map(|v| p.barrett(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qtesla::params::ParameterSet;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn seed() -> [u8; 32] {
        let mut s = [0u8; 32];
        for (i, b) in s.iter_mut().enumerate() {
            *b = i as u8;
        }
        s
    }

    fn negacyclic(a: &[i64], b: &[i64]) -> Vec<i64> {
        let n = a.len();
        let mut r = vec![0i64; n];
        for i in 0..n {
            for j in 0..n {
                if i + j < n {
                    r[i + j] += a[i] * b[j];
                } else {
                    r[i + j - n] -= a[i] * b[j];
                }
            }
        }
        r
    }

    #[test]
    fn test_uniform_poly_golden_prefix() {
        let a = uniform_poly(&seed(), ParameterSet::P1.params());
        assert_eq!(a[..4], [37656219, 284845230, 263045515, 175050977]);

        let a = uniform_poly(&seed(), ParameterSet::P3.params());
        assert_eq!(a[..4], [364525349, 169346624, 329244139, 802805809]);
    }

    #[test]
    fn test_uniform_poly_shape() {
        for set in ParameterSet::ALL {
            let p = set.params();
            let a = uniform_poly(b"another seed for the public polys", p);
            assert_eq!(a.len(), p.k * p.n);
            assert!(a.iter().all(|&v| v > -p.q && v < 2 * p.q));
            // deterministic
            assert_eq!(a, uniform_poly(b"another seed for the public polys", p));
        }
    }

    #[test]
    fn test_encode_c_golden_prefix() {
        let c = encode_c(&seed(), ParameterSet::P1.params());
        assert_eq!(c.positions[..6], [822, 917, 53, 59, 879, 651]);
        assert_eq!(c.signs[..6], [-1, 1, 1, 1, -1, -1]);

        let c = encode_c(&seed(), ParameterSet::P3.params());
        assert_eq!(c.positions[..6], [822, 1941, 1077, 59, 1903, 1675]);
    }

    #[test]
    fn test_encode_c_collision_consumes_two_bytes() {
        // the third draw repeats 980; the next draw starts at byte 8, not 9
        let c = encode_c(&[64u8; 32], ParameterSet::P1.params());
        assert_eq!(c.positions[..5], [980, 110, 737, 529, 689]);
        assert_eq!(c.signs[..5], [-1, 1, -1, -1, 1]);
        assert_eq!(c.positions[24], 728);
    }

    #[test]
    fn test_encode_c_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(11);
        for set in ParameterSet::ALL {
            let p = set.params();
            for _ in 0..20 {
                let mut digest = [0u8; 32];
                rng.fill(&mut digest);
                let c = encode_c(&digest, p);
                assert_eq!(c.weight(), p.h);
                let dense = c.to_dense(p.n);
                assert_eq!(dense.iter().filter(|&&v| v != 0).count(), p.h);
                assert!(c.signs.iter().all(|&s| s == 1 || s == -1));
            }
        }
    }

    #[test]
    fn test_sparse_mul_secret_matches_negacyclic() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = ParameterSet::P1.params();
        let s: Vec<i8> = (0..p.n).map(|_| rng.gen_range(-20..=20)).collect();
        let mut digest = [0u8; 32];
        rng.fill(&mut digest);
        let c = encode_c(&digest, p);

        let got = sparse_mul_secret(&s, &c, p);
        let sv: Vec<i64> = s.iter().map(|&v| v as i64).collect();
        let cv: Vec<i64> = c.to_dense(p.n).iter().map(|&v| v as i64).collect();
        let expected = negacyclic(&cv, &sv);
        assert_eq!(got.iter().map(|&v| v as i64).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_sparse_mul_public_matches_secret_mod_q() {
        let mut rng = StdRng::seed_from_u64(4);
        for set in ParameterSet::ALL {
            let p = set.params();
            let s: Vec<i8> = (0..p.n).map(|_| rng.gen_range(-30..=30)).collect();
            let t: Vec<i32> = s.iter().map(|&v| (v as i32).rem_euclid(p.q)).collect();
            let mut digest = [0u8; 32];
            rng.fill(&mut digest);
            let c = encode_c(&digest, p);

            let small = sparse_mul_secret(&s, &c, p);
            let wide = sparse_mul_public(&t, &c, p);
            for (a, b) in small.iter().zip(wide.iter()) {
                assert_eq!(
                    (*a as i64).rem_euclid(p.q as i64),
                    (*b as i64).rem_euclid(p.q as i64)
                );
            }
        }
    }

    #[test]
    fn test_add_sub_variants() {
        let p = ParameterSet::P1.params();
        let q = p.q;
        let a = vec![q - 1, -5, 0, q / 2];
        let b = vec![q - 1, 2, -3, q / 2 + 7];

        let sum = add_with_correction(&a, &b, p);
        assert!(sum.iter().all(|&v| (0..q).contains(&v)));
        assert_eq!(sum, vec![q - 2, q - 3, q - 3, 6]);

        assert_eq!(add(&a, &b)[1], -3);
        assert_eq!(subtract(&a, &b), vec![0, -7, 3, -7]);

        let red = subtract_with_reduction(&[3 * q + 1], &[0], p);
        assert_eq!((red[0] as i64).rem_euclid(q as i64), 1);
    }

    #[test]
    fn test_multiply_by_one() {
        for set in ParameterSet::ALL {
            let p = set.params();
            let mut one = vec![0i32; p.n];
            one[0] = 1;

            // a = NTT(1) scaled like uniform_poly output
            let a: Vec<i32> = to_ntt(&one, p)
                .iter()
                .map(|&v| p.mont((v as i64).rem_euclid(p.q as i64) * p.r2_invn))
                .collect();

            let y: Vec<i32> = (0..p.n as i32).map(|i| i - 500).collect();
            let prod = multiply(&a, &to_ntt(&y, p), p);
            for (got, want) in prod.iter().zip(y.iter()) {
                assert_eq!((*got as i64 - *want as i64).rem_euclid(p.q as i64), 0);
            }
        }
    }
}
