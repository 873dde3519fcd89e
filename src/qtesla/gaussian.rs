//! Sampling of the secret, error and masking polynomials
//!
//! Secret and error polynomials come from a discrete Gaussian (sigma = 8.5)
//! sampled by a constant-time CDT walk. The masking polynomial y is uniform
//! in [-B, B]. Both samplers are deterministic functions of (seed, nonce).

use crate::qtesla::{
    params::{QteslaParams, GAUSS_CHUNK},
    poly::load_u32_le,
};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Maximum number of 31-bit limbs in a CDT row over all sets
const MAX_CDT_COLS: usize = 4;

/// CDT-based discrete Gaussian sampler for one parameter set
#[derive(Debug, Clone, Copy)]
pub struct DiscreteGaussianSampler<'a> {
    params: &'a QteslaParams,
}

impl<'a> DiscreteGaussianSampler<'a> {
    /// Create a sampler over the set's CDT
    pub fn new(params: &'a QteslaParams) -> Self {
        debug_assert!(params.cdt_cols <= MAX_CDT_COLS);
        Self { params }
    }

    /// Magnitude of one sample: the number of CDT rows below the random value.
    ///
    /// Every row is compared with a full multi-limb borrow chain; no branch
    /// depends on the value.
    fn magnitude(&self, words: &[u32]) -> i32 {
        let cols = self.params.cdt_cols;
        let mut magnitude = 0i32;

        for row in self.params.cdt.chunks_exact(cols).skip(1) {
            let mut borrow = 0u32;
            for c in (0..cols).rev() {
                let diff = (words[c] & 0x7FFF_FFFF).wrapping_sub(row[c].wrapping_add(borrow));
                borrow = diff >> 31;
            }
            magnitude += (borrow ^ 1) as i32;
        }

        magnitude
    }

    /// Sample N coefficients for the given seed and nonce
    pub fn sample_poly(&self, seed: &[u8], nonce: u32) -> Vec<i32> {
        let p = self.params;
        let cols = p.cdt_cols;
        let sample_bytes = 4 * cols;

        let mut dmsp = (nonce << 8) as u16;
        let mut buf = vec![0u8; GAUSS_CHUNK * sample_bytes];
        let mut z = Vec::with_capacity(p.n);

        while z.len() < p.n {
            p.xof.cshake(&mut buf, dmsp, seed);
            dmsp = dmsp.wrapping_add(1);

            for sample in buf.chunks_exact(sample_bytes) {
                let mut words = [0u32; MAX_CDT_COLS];
                for (c, word) in words.iter_mut().take(cols).enumerate() {
                    *word = load_u32_le(&sample[4 * c..]);
                }

                let magnitude = self.magnitude(&words);
                // sign from the top bit of the first word
                let sign = (words[0] >> 31) as i32;
                z.push((magnitude ^ -sign) + sign);
            }
        }

        z
    }
}

/// Discrete Gaussian polynomial for (seed, nonce)
pub fn sample_gauss_poly(seed: &[u8], nonce: u32, p: &QteslaParams) -> Vec<i32> {
    DiscreteGaussianSampler::new(p).sample_poly(seed, nonce)
}

/// Uniform y with coefficients in [-B, B]
///
/// Each candidate is B_BITS+1 bits taken from three little-endian bytes,
/// shifted down by B; the single value B+1 is rejected.
pub fn sample_y(seed: &[u8], nonce: u32, p: &QteslaParams) -> Vec<i32> {
    let nbytes = (p.b_bits as usize + 1 + 7) / 8;
    let rate = p.xof.rate();
    let mask = (1u32 << (p.b_bits + 1)) - 1;

    let mut dmsp = (nonce << 8) as u16;
    let mut buf = vec![0u8; p.n * nbytes];
    p.xof.cshake(&mut buf, dmsp, seed);
    dmsp = dmsp.wrapping_add(1);

    let mut nblocks = p.n;
    let mut pos = 0;
    let mut y = Vec::with_capacity(p.n);

    while y.len() < p.n {
        if pos >= nblocks * nbytes {
            nblocks = rate / nbytes;
            p.xof.cshake(&mut buf[..rate], dmsp, seed);
            dmsp = dmsp.wrapping_add(1);
            pos = 0;
        }

        let raw = u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], 0]) & mask;
        let value = raw as i32 - p.b;
        if value != 1 << p.b_bits {
            y.push(value);
        }
        pos += nbytes;
    }

    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qtesla::params::ParameterSet;

    fn seed() -> [u8; 32] {
        let mut s = [0u8; 32];
        for (i, b) in s.iter_mut().enumerate() {
            *b = i as u8;
        }
        s
    }

    #[test]
    fn test_gaussian_golden_vectors() {
        let z = sample_gauss_poly(&seed(), 1, ParameterSet::P1.params());
        assert_eq!(z[..16], [-4, -8, -16, -14, 2, 14, -10, -10, -6, -4, -1, -9, 2, 9, -1, 7]);

        let z = sample_gauss_poly(&seed(), 1, ParameterSet::P3.params());
        assert_eq!(z[..16], [-12, 4, 6, -4, 7, -18, -11, 14, 2, 7, -9, 8, 4, 4, -7, -11]);
    }

    #[test]
    fn test_uniform_y_golden_vectors() {
        let y = sample_y(&seed(), 1, ParameterSet::P1.params());
        assert_eq!(
            y[..8],
            [249371, 376750, -148074, -431280, -242202, -73791, 325890, -467648]
        );

        let y = sample_y(&seed(), 1, ParameterSet::P3.params());
        assert_eq!(
            y[..8],
            [-1111221, -785942, 1089790, 2093130, -593017, -968829, 1649711, 344136]
        );
    }

    #[test]
    fn test_gaussian_statistics() {
        for set in ParameterSet::ALL {
            let p = set.params();
            let mut samples = Vec::new();
            for nonce in 1..=8 {
                samples.extend(sample_gauss_poly(b"statistics seed", nonce, p));
            }

            let n = samples.len() as f64;
            let mean: f64 = samples.iter().map(|&x| x as f64).sum::<f64>() / n;
            let variance: f64 = samples.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n;

            assert!(mean.abs() < 0.5, "{} mean {}", set, mean);
            // sigma^2 = 72.25
            assert!((variance - 72.25).abs() < 6.0, "{} variance {}", set, variance);
            assert!(samples.iter().all(|&x| x.abs() < p.cdt_rows as i32));
        }
    }

    #[test]
    fn test_sampler_determinism_and_nonce_separation() {
        let p = ParameterSet::P1.params();
        assert_eq!(sample_gauss_poly(b"s", 3, p), sample_gauss_poly(b"s", 3, p));
        assert_ne!(sample_gauss_poly(b"s", 3, p), sample_gauss_poly(b"s", 4, p));
        assert_eq!(sample_y(b"s", 3, p), sample_y(b"s", 3, p));
        assert_ne!(sample_y(b"s", 3, p), sample_y(b"s", 4, p));
    }

    #[test]
    fn test_uniform_y_range() {
        for set in ParameterSet::ALL {
            let p = set.params();
            for nonce in 1..4 {
                let y = sample_y(b"range", nonce, p);
                assert_eq!(y.len(), p.n);
                assert!(y.iter().all(|&v| v >= -p.b && v <= p.b));
            }
        }
    }
}
