//! Number-theoretic transform over Z_q[X]/(X^N + 1)
//!
//! Forward transform: Cooley-Tukey, decimation in time, natural order in,
//! bit-reversed out. Inverse transform: Gentleman-Sande back to natural
//! order. Twiddle factors are powers of a primitive 2N-th root of unity in
//! Montgomery form and are generated at compile time.
//!
//! The inverse transform does not multiply by N^-1; that factor is folded
//! into the uniform polynomial a when it is sampled.

use crate::qtesla::params::{p1, p3, NttReduction, QteslaParams};

/// Forward twiddles for qTESLA-p-I
pub static ZETA_P_I: [i32; p1::N - 1] =
    twiddles::<{ p1::N - 1 }>(p1::Q, p1::PSI, p1::LOGN, false);

/// Inverse twiddles for qTESLA-p-I
pub static ZETA_INV_P_I: [i32; p1::N - 1] =
    twiddles::<{ p1::N - 1 }>(p1::Q, p1::PSI, p1::LOGN, true);

/// Forward twiddles for qTESLA-p-III
pub static ZETA_P_III: [i32; p3::N - 1] =
    twiddles::<{ p3::N - 1 }>(p3::Q, p3::PSI, p3::LOGN, false);

/// Inverse twiddles for qTESLA-p-III
pub static ZETA_INV_P_III: [i32; p3::N - 1] =
    twiddles::<{ p3::N - 1 }>(p3::Q, p3::PSI, p3::LOGN, true);

const fn pow_mod(base: u64, mut exp: u64, q: u64) -> u64 {
    let mut result = 1u64;
    let mut base = base % q;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % q;
        }
        base = base * base % q;
        exp >>= 1;
    }
    result
}

const fn bit_reverse(x: usize, bits: u32) -> usize {
    let mut r = 0;
    let mut i = 0;
    while i < bits {
        r = (r << 1) | ((x >> i) & 1);
        i += 1;
    }
    r
}

/// Twiddle table in the order the butterflies consume it.
///
/// Forward: psi^brv(j+1) * R. Inverse: -psi^brv(N-1-j) * R.
const fn twiddles<const LEN: usize>(q: i32, psi: u32, logn: u32, inverse: bool) -> [i32; LEN] {
    let q = q as u64;
    let r = (1u64 << 32) % q;
    let n = 1usize << logn;
    let mut table = [0i32; LEN];
    let mut j = 0;
    while j < LEN {
        let w = if inverse {
            (q - pow_mod(psi as u64, bit_reverse(n - 1 - j, logn) as u64, q)) % q
        } else {
            pow_mod(psi as u64, bit_reverse(j + 1, logn) as u64, q)
        };
        table[j] = (w * r % q) as i32;
        j += 1;
    }
    table
}

/// In-place forward NTT
pub fn forward(a: &mut [i32], p: &QteslaParams) {
    debug_assert_eq!(a.len(), p.n);
    let q = p.q;
    let mut jt = 0;
    let mut num = p.n >> 1;

    while num > 0 {
        let mut jf = 0;
        while jf < p.n {
            let w = p.zeta[jt] as i64;
            jt += 1;
            for j in jf..jf + num {
                let t = p.mont(w * a[j + num] as i64);
                match p.ntt_reduction {
                    NttReduction::ConditionalSubtract => {
                        let lo = a[j] - t;
                        a[j + num] = lo + ((lo >> 31) & q);
                        let hi = a[j] + t - q;
                        a[j] = hi + ((hi >> 31) & q);
                    }
                    NttReduction::Barrett => {
                        a[j + num] = p.barrett(a[j] as i64 - t as i64);
                        a[j] = p.barrett(t as i64 + a[j] as i64);
                    }
                }
            }
            jf += 2 * num;
        }
        num >>= 1;
    }
}

/// In-place inverse NTT (without the 1/N factor)
pub fn inverse(a: &mut [i32], p: &QteslaParams) {
    debug_assert_eq!(a.len(), p.n);
    let mut jt = 0;
    let mut num = 1;

    while num < p.n {
        let mut jf = 0;
        while jf < p.n {
            let w = p.zeta_inv[jt] as i64;
            jt += 1;
            for j in jf..jf + num {
                let t = a[j];
                a[j] = p.barrett(t as i64 + a[j + num] as i64);
                a[j + num] = p.mont(w * (t as i64 - a[j + num] as i64));
            }
            jf += 2 * num;
        }
        num <<= 1;
    }
}
