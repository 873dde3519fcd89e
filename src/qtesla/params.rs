//! qTESLA parameter sets and constants
//!
//! This module contains the two provably-secure parameter sets, qTESLA-p-I
//! (NIST category 1) and qTESLA-p-III (NIST category 3). Every buffer size
//! is a fixed function of the set and is exposed as a named constant.

use crate::qtesla::keccak::Xof;
use crate::qtesla::ntt;

/// Seed length in bytes (seed_e, seed_s, seed_a, seed_y)
pub const SEED_BYTES: usize = 32;

/// Length of the randomness drawn from the DRBG per operation
pub const RANDOM_BYTES: usize = 32;

/// Length of the challenge hash c
pub const C_BYTES: usize = 32;

/// Length of the message and public-key digests
pub const HASHED_MSG_BYTES: usize = 40;

/// Coefficients produced per cSHAKE call in the Gaussian sampler
pub const GAUSS_CHUNK: usize = 512;

/// Maximum Gaussian draws per polynomial during key generation
pub const MAX_KEYGEN_ATTEMPTS: usize = 1000;

/// Maximum iterations of the signing rejection loop
pub const MAX_SIGNING_ATTEMPTS: usize = 10_000;

/// qTESLA-p-I
pub mod p1 {
    use super::{C_BYTES, HASHED_MSG_BYTES, SEED_BYTES};

    /// log2 of the ring dimension
    pub const LOGN: u32 = 10;
    /// Ring dimension
    pub const N: usize = 1 << LOGN;
    /// Module rank (number of public polynomials)
    pub const K: usize = 4;
    /// Prime modulus
    pub const Q: i32 = 343_576_577;
    /// Bit width of a packed public-key coefficient
    pub const Q_LOG: u32 = 29;
    /// Number of nonzero entries of c
    pub const H: usize = 25;
    /// Bit width of B
    pub const B_BITS: u32 = 19;
    /// Bound of the uniform y coefficients
    pub const B: i32 = (1 << B_BITS) - 1;
    /// Number of rounded-off bits
    pub const D: u32 = 22;
    /// Rejection margin, also the bound on the top-H sum of s and e
    pub const REJECTION: i32 = 554;
    /// cSHAKE128 blocks squeezed for the first expansion of a
    pub const GEN_A: usize = 108;
    /// -q^-1 mod 2^32
    pub const QINV: u32 = 0x837A_8FFF;
    /// R^2 / N mod q with R = 2^32
    pub const R2_INVN: i64 = 13_632_409;
    /// Primitive 2N-th root of unity mod q
    pub const PSI: u32 = 249_751_876;
    /// Barrett multiplier
    pub const BARRETT_MULT: i64 = 3;
    /// Barrett shift
    pub const BARRETT_DIV: u32 = 30;
    /// Rows of the Gaussian CDT
    pub const CDT_ROWS: usize = 78;
    /// 31-bit limbs per CDT row
    pub const CDT_COLS: usize = 2;

    /// Public key size in bytes
    pub const PUBLIC_KEY_BYTES: usize = K * N * Q_LOG as usize / 8 + SEED_BYTES;
    /// Secret key size in bytes
    pub const SECRET_KEY_BYTES: usize = N + K * N + 2 * SEED_BYTES + HASHED_MSG_BYTES;
    /// Signature size in bytes, excluding the appended message
    pub const SIGNATURE_BYTES: usize = N * (B_BITS as usize + 1) / 8 + C_BYTES;

    /// Gaussian CDT for sigma = 8.5, 78 rows of 2 31-bit limbs (most significant first)
    pub const CDT: [u32; CDT_ROWS * CDT_COLS] = [
        0x00000000, 0x00000000,
        0x0601F22A, 0x280663D4,
        0x11F09FFA, 0x162FE23E,
        0x1DA089E9, 0x437226E8,
        0x28EAB25D, 0x04C51FE2,
        0x33AC2F26, 0x14FDBA71,
        0x3DC767DC, 0x4565C960,
        0x4724FC62, 0x3342C78A,
        0x4FB448F4, 0x5229D06D,
        0x576B8599, 0x7423407F,
        0x5E4786DA, 0x3210BAF7,
        0x644B2C92, 0x431B3947,
        0x697E90CE, 0x77C362C4,
        0x6DEE0B96, 0x2798C9CE,
        0x71A92144, 0x5765FCE4,
        0x74C16FD5, 0x1E2A0990,
        0x7749AC92, 0x0DF36EEC,
        0x7954BFA4, 0x28079289,
        0x7AF5067A, 0x2EDC2050,
        0x7C3BC17C, 0x123D5E7B,
        0x7D38AD76, 0x2A9381D9,
        0x7DF9C5DF, 0x0E868CA7,
        0x7E8B2ABA, 0x18E5C811,
        0x7EF7237C, 0x00908272,
        0x7F4637C5, 0x6DBA5126,
        0x7F7F5707, 0x4A52EDEC,
        0x7FA808CC, 0x23290599,
        0x7FC4A083, 0x69BDF2D5,
        0x7FD870CA, 0x42275558,
        0x7FE5FB5D, 0x3EF82C1B,
        0x7FEF1BFA, 0x6C03A362,
        0x7FF52D4E, 0x316C2C8C,
        0x7FF927BA, 0x12AE54AF,
        0x7FFBBA43, 0x749CC0E2,
        0x7FFD5E3D, 0x4524AD91,
        0x7FFE6664, 0x535785B5,
        0x7FFF0A41, 0x0B291681,
        0x7FFF6E81, 0x132C3D70,
        0x7FFFAAFE, 0x4DBC6BEE,
        0x7FFFCEFD, 0x7A1E2D14,
        0x7FFFE41E, 0x4C6EC115,
        0x7FFFF059, 0x319503C8,
        0x7FFFF754, 0x5DDD0D40,
        0x7FFFFB43, 0x0B9E9823,
        0x7FFFFD71, 0x76B81AE1,
        0x7FFFFEA3, 0x7E66A1EC,
        0x7FFFFF49, 0x26F6E191,
        0x7FFFFFA1, 0x2FA31694,
        0x7FFFFFCF, 0x5247BEC9,
        0x7FFFFFE7, 0x4F4127C7,
        0x7FFFFFF3, 0x6FAA69FD,
        0x7FFFFFFA, 0x0630D073,
        0x7FFFFFFD, 0x0F2957BB,
        0x7FFFFFFE, 0x4FD29432,
        0x7FFFFFFF, 0x2CFAD60E,
        0x7FFFFFFF, 0x5967A930,
        0x7FFFFFFF, 0x6E4C9DFF,
        0x7FFFFFFF, 0x77FDCCC8,
        0x7FFFFFFF, 0x7C6CE89E,
        0x7FFFFFFF, 0x7E6D116F,
        0x7FFFFFFF, 0x7F50FA31,
        0x7FFFFFFF, 0x7FB5008A,
        0x7FFFFFFF, 0x7FE04C2D,
        0x7FFFFFFF, 0x7FF2C7C1,
        0x7FFFFFFF, 0x7FFA8FE3,
        0x7FFFFFFF, 0x7FFDCB1B,
        0x7FFFFFFF, 0x7FFF1DE2,
        0x7FFFFFFF, 0x7FFFA6B7,
        0x7FFFFFFF, 0x7FFFDD39,
        0x7FFFFFFF, 0x7FFFF2A3,
        0x7FFFFFFF, 0x7FFFFAEF,
        0x7FFFFFFF, 0x7FFFFE1B,
        0x7FFFFFFF, 0x7FFFFF4D,
        0x7FFFFFFF, 0x7FFFFFBF,
        0x7FFFFFFF, 0x7FFFFFE9,
        0x7FFFFFFF, 0x7FFFFFF8,
        0x7FFFFFFF, 0x7FFFFFFD,
        0x7FFFFFFF, 0x7FFFFFFF,
    ];
}

/// qTESLA-p-III
pub mod p3 {
    use super::{C_BYTES, HASHED_MSG_BYTES, SEED_BYTES};

    /// log2 of the ring dimension
    pub const LOGN: u32 = 11;
    /// Ring dimension
    pub const N: usize = 1 << LOGN;
    /// Module rank (number of public polynomials)
    pub const K: usize = 5;
    /// Prime modulus
    pub const Q: i32 = 856_145_921;
    /// Bit width of a packed public-key coefficient
    pub const Q_LOG: u32 = 30;
    /// Number of nonzero entries of c
    pub const H: usize = 40;
    /// Bit width of B
    pub const B_BITS: u32 = 21;
    /// Bound of the uniform y coefficients
    pub const B: i32 = (1 << B_BITS) - 1;
    /// Number of rounded-off bits
    pub const D: u32 = 24;
    /// Rejection margin, also the bound on the top-H sum of s and e
    pub const REJECTION: i32 = 901;
    /// cSHAKE128 blocks squeezed for the first expansion of a
    pub const GEN_A: usize = 180;
    /// -q^-1 mod 2^32
    pub const QINV: u32 = 0x2307_BFFF;
    /// R^2 / N mod q with R = 2^32
    pub const R2_INVN: i64 = 513_161_157;
    /// Primitive 2N-th root of unity mod q
    pub const PSI: u32 = 89_095_543;
    /// Barrett multiplier
    pub const BARRETT_MULT: i64 = 5;
    /// Barrett shift
    pub const BARRETT_DIV: u32 = 32;
    /// Rows of the Gaussian CDT
    pub const CDT_ROWS: usize = 111;
    /// 31-bit limbs per CDT row
    pub const CDT_COLS: usize = 4;

    /// Public key size in bytes
    pub const PUBLIC_KEY_BYTES: usize = K * N * Q_LOG as usize / 8 + SEED_BYTES;
    /// Secret key size in bytes
    pub const SECRET_KEY_BYTES: usize = N + K * N + 2 * SEED_BYTES + HASHED_MSG_BYTES;
    /// Signature size in bytes, excluding the appended message
    pub const SIGNATURE_BYTES: usize = N * (B_BITS as usize + 1) / 8 + C_BYTES;

    /// Gaussian CDT for sigma = 8.5, 111 rows of 4 31-bit limbs (most significant first)
    pub const CDT: [u32; CDT_ROWS * CDT_COLS] = [
        0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0601F22A, 0x280663D4, 0x2E1B038C, 0x1E75FCA7,
        0x11F09FFA, 0x162FE23D, 0x403739B4, 0x3F2AA531,
        0x1DA089E9, 0x437226E8, 0x115E99C8, 0x68C472A6,
        0x28EAB25D, 0x04C51FE2, 0x13F63FD0, 0x1E56BF41,
        0x33AC2F26, 0x14FDBA70, 0x6618880F, 0x792CE93F,
        0x3DC767DC, 0x4565C95F, 0x7EAC4790, 0x163F4D99,
        0x4724FC62, 0x3342C78A, 0x390873B2, 0x13A12ACE,
        0x4FB448F4, 0x5229D06D, 0x09A6C84B, 0x1D13CB0D,
        0x576B8599, 0x7423407F, 0x1287EE2F, 0x7B908556,
        0x5E4786DA, 0x3210BAF6, 0x6881795C, 0x13DF4F59,
        0x644B2C92, 0x431B3946, 0x63F188D9, 0x22AFB6DE,
        0x697E90CE, 0x77C362C3, 0x600A627E, 0x66AEDF96,
        0x6DEE0B96, 0x2798C9CE, 0x147A98F9, 0x27427F24,
        0x71A92144, 0x5765FCE4, 0x0FF04C94, 0x74183C18,
        0x74C16FD5, 0x1E2A0990, 0x13EB545F, 0x1CD9A2AD,
        0x7749AC92, 0x0DF36EEB, 0x414629E5, 0x66610A51,
        0x7954BFA4, 0x28079289, 0x29D5B127, 0x29B69602,
        0x7AF5067A, 0x2EDC2050, 0x2B486556, 0x43BF4664,
        0x7C3BC17C, 0x123D5E7A, 0x63D4DD26, 0x3B1E3756,
        0x7D38AD76, 0x2A9381D9, 0x1D20D034, 0x77C09C55,
        0x7DF9C5DF, 0x0E868CA7, 0x23627687, 0x78864424,
        0x7E8B2ABA, 0x18E5C810, 0x7C85B42C, 0x7AC98BCD,
        0x7EF7237C, 0x00908272, 0x3D4B170E, 0x3CD572E3,
        0x7F4637C5, 0x6DBA5125, 0x5B0285EC, 0x46661EB9,
        0x7F7F5707, 0x4A52EDEB, 0x50ECECB1, 0x7384DC43,
        0x7FA808CC, 0x23290598, 0x704F7A4D, 0x08532154,
        0x7FC4A083, 0x69BDF2D4, 0x73B67B27, 0x3AE237AD,
        0x7FD870CA, 0x42275557, 0x6F2AE034, 0x4E4B0395,
        0x7FE5FB5D, 0x3EF82C1B, 0x256E2EB0, 0x09E42B11,
        0x7FEF1BFA, 0x6C03A362, 0x07334BD4, 0x22B6B15F,
        0x7FF52D4E, 0x316C2C8C, 0x1C77A4C3, 0x1C3A974E,
        0x7FF927BA, 0x12AE54AE, 0x6CC24956, 0x3BA9A3E5,
        0x7FFBBA43, 0x749CC0E2, 0x044B3068, 0x620F14DB,
        0x7FFD5E3D, 0x4524AD91, 0x31F84A1F, 0x4D23AF51,
        0x7FFE6664, 0x535785B4, 0x683C9E5E, 0x2BD857E0,
        0x7FFF0A41, 0x0B291681, 0x1CB4CE6F, 0x32B314BA,
        0x7FFF6E81, 0x132C3D6F, 0x4C8771CC, 0x67421A75,
        0x7FFFAAFE, 0x4DBC6BED, 0x4E8644D2, 0x5158A208,
        0x7FFFCEFD, 0x7A1E2D14, 0x2CF905AA, 0x79BFABDA,
        0x7FFFE41E, 0x4C6EC115, 0x2D648F1A, 0x4B01BA3E,
        0x7FFFF059, 0x319503C8, 0x2CBEB96A, 0x52FF656E,
        0x7FFFF754, 0x5DDD0D40, 0x09D07206, 0x6BF97EB5,
        0x7FFFFB43, 0x0B9E9822, 0x5B584BE0, 0x4974ED83,
        0x7FFFFD71, 0x76B81AE1, 0x3C93755C, 0x375F857B,
        0x7FFFFEA3, 0x7E66A1EC, 0x3E342087, 0x44ED1696,
        0x7FFFFF49, 0x26F6E190, 0x7E3625F9, 0x2F4F584A,
        0x7FFFFFA1, 0x2FA31694, 0x0D53F684, 0x59931C0D,
        0x7FFFFFCF, 0x5247BEC8, 0x5CC20735, 0x397CE967,
        0x7FFFFFE7, 0x4F4127C6, 0x64926788, 0x01CFEF66,
        0x7FFFFFF3, 0x6FAA69FD, 0x26A67DC3, 0x1FFA2528,
        0x7FFFFFFA, 0x0630D072, 0x7AA0C1B7, 0x7E90AAE6,
        0x7FFFFFFD, 0x0F2957BB, 0x3ADCE1E6, 0x5A311C28,
        0x7FFFFFFE, 0x4FD29431, 0x6429F9ED, 0x04653965,
        0x7FFFFFFF, 0x2CFAD60D, 0x52ED82D1, 0x26455881,
        0x7FFFFFFF, 0x5967A92F, 0x5C85AB2D, 0x188033BE,
        0x7FFFFFFF, 0x6E4C9DFE, 0x76798EAF, 0x0DC0BA65,
        0x7FFFFFFF, 0x77FDCCC8, 0x194FF9AC, 0x2C3FA856,
        0x7FFFFFFF, 0x7C6CE89E, 0x01FA1A72, 0x6C3DC40B,
        0x7FFFFFFF, 0x7E6D116E, 0x5F82B352, 0x57B67FCE,
        0x7FFFFFFF, 0x7F50FA31, 0x31856599, 0x579DC24B,
        0x7FFFFFFF, 0x7FB50089, 0x43E64BB5, 0x7F498E43,
        0x7FFFFFFF, 0x7FE04C2C, 0x56CBFAEF, 0x7FC9C160,
        0x7FFFFFFF, 0x7FF2C7C0, 0x5D509634, 0x41DCA82B,
        0x7FFFFFFF, 0x7FFA8FE3, 0x24F6020D, 0x7B594401,
        0x7FFFFFFF, 0x7FFDCB1B, 0x2D294BB3, 0x1D1631BF,
        0x7FFFFFFF, 0x7FFF1DE1, 0x5D75B704, 0x323B12FF,
        0x7FFFFFFF, 0x7FFFA6B6, 0x7E983E86, 0x23392637,
        0x7FFFFFFF, 0x7FFFDD39, 0x029CCA2C, 0x035F7017,
        0x7FFFFFFF, 0x7FFFF2A3, 0x205DBF7B, 0x173D7F90,
        0x7FFFFFFF, 0x7FFFFAEF, 0x3F79145B, 0x642F005E,
        0x7FFFFFFF, 0x7FFFFE1B, 0x23B2C7E4, 0x6CA216CF,
        0x7FFFFFFF, 0x7FFFFF4D, 0x1E959E3F, 0x4A29BB04,
        0x7FFFFFFF, 0x7FFFFFBE, 0x7C23D3D9, 0x71DC92E4,
        0x7FFFFFFF, 0x7FFFFFE8, 0x55110485, 0x0E1813E3,
        0x7FFFFFFF, 0x7FFFFFF7, 0x5EBC7B7B, 0x2DFEE923,
        0x7FFFFFFF, 0x7FFFFFFD, 0x0EDB0975, 0x0C9F1639,
        0x7FFFFFFF, 0x7FFFFFFF, 0x00DDA1A1, 0x6DE86AA0,
        0x7FFFFFFF, 0x7FFFFFFF, 0x54CF6D87, 0x023F1F47,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7186FF6A, 0x5B71BF8C,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7B375EBC, 0x767A89DC,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7E70BA89, 0x44EBCEAB,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7F7F98B5, 0x44C8E44A,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FD744C2, 0x448EE5A4,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FF34165, 0x008855D0,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFC1110, 0x754A60B6,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFECD77, 0x44BE6D4B,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFA3F4, 0x7400A73E,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFE4BD, 0x1143830B,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFF809, 0x1A385059,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFDB4, 0x41CA0794,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFF59, 0x02FFB605,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFD1, 0x18360E8D,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFF3, 0x072A0E9A,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFC, 0x3C1BFEB1,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x066EBCDE,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x5FBE171A,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x778EB81F,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7DD211FE,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7F71F071,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FDC528F,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FF7298C,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFDD73A,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFF7ACA,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFE056,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFF894,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFE49,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFF9C,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFE9,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFB,
        0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF, 0x7FFFFFFF,
    ];
}

/// Final reduction used by the forward NTT butterflies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NttReduction {
    /// Conditional subtraction of q with a sign mask
    ConditionalSubtract,
    /// Barrett reduction of both butterfly outputs
    Barrett,
}

/// Complete constant bundle of one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QteslaParams {
    /// Human readable name
    pub name: &'static str,
    /// NIST security category
    pub security_level: usize,
    /// log2 of the ring dimension
    pub logn: u32,
    /// Ring dimension
    pub n: usize,
    /// Module rank
    pub k: usize,
    /// Prime modulus
    pub q: i32,
    /// Packed width of public-key coefficients
    pub q_log: u32,
    /// Weight of c
    pub h: usize,
    /// Bound of y
    pub b: i32,
    /// Bit width of B
    pub b_bits: u32,
    /// Rounded-off bits
    pub d: u32,
    /// Rejection margin and key bound
    pub rejection: i32,
    /// Initial cSHAKE128 blocks for the expansion of a
    pub gen_a: usize,
    /// XOF for hashing and sampling
    pub xof: Xof,
    /// Forward NTT reduction variant
    pub ntt_reduction: NttReduction,
    /// -q^-1 mod 2^32
    pub qinv: u32,
    /// R^2 / N mod q
    pub r2_invn: i64,
    /// Barrett multiplier
    pub barrett_mult: i64,
    /// Barrett shift
    pub barrett_div: u32,
    /// Gaussian CDT, row major
    pub cdt: &'static [u32],
    /// Rows of the CDT
    pub cdt_rows: usize,
    /// Columns of the CDT
    pub cdt_cols: usize,
    /// Forward NTT twiddles in Montgomery form
    pub zeta: &'static [i32],
    /// Inverse NTT twiddles in Montgomery form
    pub zeta_inv: &'static [i32],
    /// Public key size in bytes
    pub public_key_len: usize,
    /// Secret key size in bytes
    pub secret_key_len: usize,
    /// Signature size in bytes, excluding the message
    pub signature_len: usize,
}

/// qTESLA-p-I parameter set (NIST security category 1)
pub static QTESLA_P_I: QteslaParams = QteslaParams {
    name: "qTESLA-p-I",
    security_level: 1,
    logn: p1::LOGN,
    n: p1::N,
    k: p1::K,
    q: p1::Q,
    q_log: p1::Q_LOG,
    h: p1::H,
    b: p1::B,
    b_bits: p1::B_BITS,
    d: p1::D,
    rejection: p1::REJECTION,
    gen_a: p1::GEN_A,
    xof: Xof::Shake128,
    ntt_reduction: NttReduction::ConditionalSubtract,
    qinv: p1::QINV,
    r2_invn: p1::R2_INVN,
    barrett_mult: p1::BARRETT_MULT,
    barrett_div: p1::BARRETT_DIV,
    cdt: &p1::CDT,
    cdt_rows: p1::CDT_ROWS,
    cdt_cols: p1::CDT_COLS,
    zeta: &ntt::ZETA_P_I,
    zeta_inv: &ntt::ZETA_INV_P_I,
    public_key_len: p1::PUBLIC_KEY_BYTES,
    secret_key_len: p1::SECRET_KEY_BYTES,
    signature_len: p1::SIGNATURE_BYTES,
};

/// qTESLA-p-III parameter set (NIST security category 3)
pub static QTESLA_P_III: QteslaParams = QteslaParams {
    name: "qTESLA-p-III",
    security_level: 3,
    logn: p3::LOGN,
    n: p3::N,
    k: p3::K,
    q: p3::Q,
    q_log: p3::Q_LOG,
    h: p3::H,
    b: p3::B,
    b_bits: p3::B_BITS,
    d: p3::D,
    rejection: p3::REJECTION,
    gen_a: p3::GEN_A,
    xof: Xof::Shake256,
    ntt_reduction: NttReduction::Barrett,
    qinv: p3::QINV,
    r2_invn: p3::R2_INVN,
    barrett_mult: p3::BARRETT_MULT,
    barrett_div: p3::BARRETT_DIV,
    cdt: &p3::CDT,
    cdt_rows: p3::CDT_ROWS,
    cdt_cols: p3::CDT_COLS,
    zeta: &ntt::ZETA_P_III,
    zeta_inv: &ntt::ZETA_INV_P_III,
    public_key_len: p3::PUBLIC_KEY_BYTES,
    secret_key_len: p3::SECRET_KEY_BYTES,
    signature_len: p3::SIGNATURE_BYTES,
};

/// Parameter set selector, fixed at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    /// qTESLA-p-I
    P1,
    /// qTESLA-p-III
    P3,
}

impl ParameterSet {
    /// Both supported sets
    pub const ALL: [ParameterSet; 2] = [ParameterSet::P1, ParameterSet::P3];

    /// Constant bundle of this set
    pub fn params(self) -> &'static QteslaParams {
        match self {
            ParameterSet::P1 => &QTESLA_P_I,
            ParameterSet::P3 => &QTESLA_P_III,
        }
    }

    /// Public key size in bytes
    pub const fn public_key_len(self) -> usize {
        match self {
            ParameterSet::P1 => p1::PUBLIC_KEY_BYTES,
            ParameterSet::P3 => p3::PUBLIC_KEY_BYTES,
        }
    }

    /// Secret key size in bytes
    pub const fn secret_key_len(self) -> usize {
        match self {
            ParameterSet::P1 => p1::SECRET_KEY_BYTES,
            ParameterSet::P3 => p3::SECRET_KEY_BYTES,
        }
    }

    /// Signature size in bytes, excluding the appended message
    pub const fn signature_len(self) -> usize {
        match self {
            ParameterSet::P1 => p1::SIGNATURE_BYTES,
            ParameterSet::P3 => p3::SIGNATURE_BYTES,
        }
    }
}

impl core::fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.params().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_sizes() {
        assert_eq!(p1::PUBLIC_KEY_BYTES, 14880);
        assert_eq!(p1::SECRET_KEY_BYTES, 5224);
        assert_eq!(p1::SIGNATURE_BYTES, 2592);

        assert_eq!(p3::PUBLIC_KEY_BYTES, 38432);
        assert_eq!(p3::SECRET_KEY_BYTES, 12392);
        assert_eq!(p3::SIGNATURE_BYTES, 5664);
    }

    #[test]
    fn test_montgomery_constants() {
        for set in ParameterSet::ALL {
            let p = set.params();
            // q * qinv == -1 mod 2^32
            assert_eq!((p.q as u32).wrapping_mul(p.qinv), u32::MAX, "{}", set);

            // r2_invn * N == R^2 mod q
            let q = p.q as i128;
            let r2 = (1i128 << 64) % q;
            assert_eq!((p.r2_invn as i128 * p.n as i128) % q, r2, "{}", set);
        }
    }

    #[test]
    fn test_q_log_covers_modulus() {
        for set in ParameterSet::ALL {
            let p = set.params();
            assert!(p.q < (1 << p.q_log));
            assert!(p.q >= (1 << (p.q_log - 1)));
            assert_eq!(p.n, 1 << p.logn);
            // packed streams fill whole 32-bit words
            assert_eq!((p.n * p.q_log as usize) % 32, 0);
            assert_eq!((p.n * (p.b_bits as usize + 1)) % 32, 0);
        }
    }

    #[test]
    fn test_cdt_shape() {
        for set in ParameterSet::ALL {
            let p = set.params();
            assert_eq!(p.cdt.len(), p.cdt_rows * p.cdt_cols);
            assert!(p.cdt[..p.cdt_cols].iter().all(|&w| w == 0));
            assert!(p.cdt.iter().all(|&w| w < (1 << 31)));

            // rows strictly increasing as multi-limb integers
            let rows: Vec<&[u32]> = p.cdt.chunks(p.cdt_cols).collect();
            for pair in rows.windows(2) {
                assert!(pair[0] < pair[1], "{} CDT not increasing", set);
            }
        }
    }

    #[test]
    fn test_parameter_set_accessors() {
        assert_eq!(ParameterSet::P1.params().n, 1024);
        assert_eq!(ParameterSet::P3.params().k, 5);
        assert_eq!(ParameterSet::P1.public_key_len(), QTESLA_P_I.public_key_len);
        assert_eq!(ParameterSet::P3.signature_len(), QTESLA_P_III.signature_len);
        assert_eq!(format!("{}", ParameterSet::P3), "qTESLA-p-III");
    }
}
