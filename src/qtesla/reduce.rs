//! Modular reduction for the two qTESLA moduli
//!
//! Montgomery reduction uses R = 2^32. Barrett reduction uses a small
//! multiplier and shift per set (floor(2^shift / q)), which leaves the
//! result within a few multiples of q rather than fully canonical.

use crate::qtesla::params::QteslaParams;

/// Montgomery reduction: a * 2^-32 mod q.
///
/// Input: |a| < q * 2^32
/// Output: r ≡ a * R^(-1) (mod q) with |r| < 2q
#[inline]
pub const fn montgomery_reduce(a: i64, q: i32, qinv: u32) -> i32 {
    // m = a * qinv mod 2^32, so that a + m*q is divisible by 2^32
    let m = (a as u32).wrapping_mul(qinv) as i64;
    ((a + m * q as i64) >> 32) as i32
}

/// Barrett reduction: a - floor(a * mult / 2^div) * q
#[inline]
pub const fn barrett_reduce(a: i64, q: i32, mult: i64, div: u32) -> i32 {
    let u = (a * mult) >> div;
    (a - u * q as i64) as i32
}

/// Branchless correction of a value in [-q, 2q) into [0, q)
#[inline]
pub const fn correct(a: i32, q: i32) -> i32 {
    let a = a + ((a >> 31) & q);
    let a = a - q;
    a + ((a >> 31) & q)
}

impl QteslaParams {
    /// Montgomery reduction with this set's modulus
    #[inline]
    pub fn mont(&self, a: i64) -> i32 {
        montgomery_reduce(a, self.q, self.qinv)
    }

    /// Barrett reduction with this set's constants
    #[inline]
    pub fn barrett(&self, a: i64) -> i32 {
        barrett_reduce(a, self.q, self.barrett_mult, self.barrett_div)
    }
}
