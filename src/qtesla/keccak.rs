//! Keccak-f[1600] sponge and the SHAKE / cSHAKE extendable-output functions
//!
//! All hashing, seed expansion and sampling randomness in the scheme is
//! drawn from the functions in this module. The cSHAKE variant is the
//! "simple" form used by qTESLA: an empty function name and a fixed
//! 16-bit customization value.
//!
//! The XOFs are the `sha3` crate's. The lane-level sponge below wraps the
//! same `keccak` permutation for callers that drive the state directly.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{CShake128, CShake128Core, CShake256, CShake256Core, Shake128, Shake256};

/// Number of 64-bit lanes in the Keccak state
pub const STATE_LANES: usize = 25;

/// SHAKE128 rate in bytes
pub const SHAKE128_RATE: usize = 168;

/// SHAKE256 rate in bytes
pub const SHAKE256_RATE: usize = 136;

/// Domain padding byte for SHAKE
pub const SHAKE_PAD: u8 = 0x1F;

/// Domain padding byte for cSHAKE
pub const CSHAKE_PAD: u8 = 0x04;

/// Extendable-output function selected by a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Xof {
    /// SHAKE128 / cSHAKE128
    Shake128,
    /// SHAKE256 / cSHAKE256
    Shake256,
}

impl Xof {
    /// Sponge rate in bytes
    pub const fn rate(self) -> usize {
        match self {
            Xof::Shake128 => SHAKE128_RATE,
            Xof::Shake256 => SHAKE256_RATE,
        }
    }

    /// Squeeze `output.len()` bytes of SHAKE over `input`
    pub fn shake(self, output: &mut [u8], input: &[u8]) {
        shake(self, output, input);
    }

    /// Squeeze `output.len()` bytes of cSHAKE over `input`
    pub fn cshake(self, output: &mut [u8], customization: u16, input: &[u8]) {
        cshake_simple(self, output, customization, input);
    }
}

/// Apply the 24-round Keccak-f[1600] permutation in place
#[inline]
pub fn permute(state: &mut [u64; STATE_LANES]) {
    keccak::f1600(state);
}

#[inline]
fn xor_block(state: &mut [u64; STATE_LANES], block: &[u8]) {
    for (lane, chunk) in state.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *lane ^= u64::from_le_bytes(bytes);
    }
}

/// Absorb `input` into `state` at the given rate and pad the last block
///
/// Full blocks are XORed in and permuted. The trailing partial block gets
/// `pending` after the data and `0x80` on its last byte, and is XORed in
/// without a final permutation; squeezing permutes first.
pub fn absorb(state: &mut [u64; STATE_LANES], rate: usize, input: &[u8], pending: u8) {
    debug_assert!(rate % 8 == 0 && rate < STATE_LANES * 8);

    let mut blocks = input.chunks_exact(rate);
    for block in &mut blocks {
        xor_block(state, block);
        permute(state);
    }

    let tail = blocks.remainder();
    let mut last = [0u8; STATE_LANES * 8];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = pending;
    last[rate - 1] |= 0x80;
    xor_block(state, &last[..rate]);
}

/// Permute and emit `rate` bytes per block into `output`
///
/// `output.len()` must be a multiple of `rate`.
pub fn squeeze_blocks(state: &mut [u64; STATE_LANES], rate: usize, output: &mut [u8]) {
    debug_assert!(output.len() % rate == 0);

    for block in output.chunks_exact_mut(rate) {
        permute(state);
        for (chunk, lane) in block.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
    }
}

fn read_xof<H: Update + ExtendableOutput>(mut hasher: H, output: &mut [u8], input: &[u8]) {
    hasher.update(input);
    hasher.finalize_xof().read(output);
}

/// SHAKE128 or SHAKE256 over `input`, squeezing `output.len()` bytes
pub fn shake(xof: Xof, output: &mut [u8], input: &[u8]) {
    match xof {
        Xof::Shake128 => read_xof(Shake128::default(), output, input),
        Xof::Shake256 => read_xof(Shake256::default(), output, input),
    }
}

/// Absorb the 8-byte cSHAKE header and then `input` into a fresh state
pub fn cshake_absorb(rate: usize, customization: u16, input: &[u8]) -> [u64; STATE_LANES] {
    let cust = customization.to_le_bytes();
    // left_encode(rate) || left_encode(0) || left_encode(16) || customization
    let header = [0x01, rate as u8, 0x01, 0x00, 0x01, 0x10, cust[0], cust[1]];

    let mut state = [0u64; STATE_LANES];
    state[0] = u64::from_le_bytes(header);
    permute(&mut state);

    absorb(&mut state, rate, input, CSHAKE_PAD);
    state
}

/// cSHAKE with a 16-bit customization and no function name
pub fn cshake_simple(xof: Xof, output: &mut [u8], customization: u16, input: &[u8]) {
    let cust = customization.to_le_bytes();
    match xof {
        Xof::Shake128 => {
            let hasher = CShake128::from_core(CShake128Core::new(&cust));
            read_xof(hasher, output, input)
        }
        Xof::Shake256 => {
            let hasher = CShake256::from_core(CShake256Core::new(&cust));
            read_xof(hasher, output, input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERMUTE_IN: [u64; 25] = [
        0xCE927EFC8FE97AAE, 0x61EBA9DBC3EB4EFA, 0xBAB68419488A0892, 0x522F0DECD768C980,
        0x3E1868D72EDCBDC0, 0x5FC122FB4DD2147E, 0xAABEB285C96699C7, 0xE35AE1DEFCF41C37,
        0x17CEEFC7FD747A6C, 0x2E252EA506B1657D, 0x7C100ED9646EAF47, 0xE3DA8BFE219EED93,
        0x1564E54256E3150E, 0xA3AAFF3095DB904F, 0x5856F30BF9F65C8D, 0xA80191030B7CC566,
        0xD6EA2B2AD84C655F, 0x29C5F3A8A5527B26, 0x51A01D79B0B4FF91, 0xB5DD9F2DD481665E,
        0xBEDD74D23A546428, 0x311242500467BC24, 0x3066FE39D3C516E6, 0x640C0B6D3A2DD7AC,
        0x7E049F986A5B4585,
    ];

    const PERMUTE_OUT: [u64; 25] = [
        0x541B0C845F097A4E, 0xC649D7080E30113C, 0xD4CDC391AAD178C5, 0x42C1A298213578FE,
        0x3A8A1CBEACA07D9F, 0xF4FF630CA722D540, 0xD05FCA9893178E27, 0xB6513B020CC37BA8,
        0x082CEC25D2CD9B77, 0x7F8FB63D2F522D4D, 0x52BD971AC463BC29, 0xCF69B0A81C235BCF,
        0x44DCDFDF6BA9A3B8, 0xFDF4B5E9C752CC1E, 0xEE935255F9DC006B, 0x91387086FE6121D9,
        0x366D3EB23B230EF7, 0x982013F83EFE0A78, 0x7C9EF407FDF6BE14, 0xFF98BD6EA36DEDE5,
        0x062621E400C69242, 0x0AD79365675E53FD, 0x915CC6638F11BBF7, 0x2F25AC09A66CEA27,
        0x03616200EC43BD69,
    ];

    /// Lane-path SHAKE, permuting and squeezing whole blocks
    fn lane_shake(rate: usize, output: &mut [u8], input: &[u8]) {
        let mut state = [0u64; STATE_LANES];
        absorb(&mut state, rate, input, SHAKE_PAD);
        let mut blocks = vec![0u8; (output.len() / rate + 1) * rate];
        squeeze_blocks(&mut state, rate, &mut blocks);
        output.copy_from_slice(&blocks[..output.len()]);
    }

    #[test]
    fn test_permutation_golden_vector() {
        let mut state = PERMUTE_IN;
        permute(&mut state);
        assert_eq!(state, PERMUTE_OUT);
    }

    #[test]
    fn test_absorb_and_squeeze_golden_vector() {
        let mut state = [0u64; STATE_LANES];
        absorb(&mut state, SHAKE128_RATE, b"lattice sponge absorb", SHAKE_PAD);
        assert_eq!(
            state[..4],
            [0x206563697474616C, 0x612065676E6F7073, 0x00001F62726F7362, 0]
        );
        // padding bit of the last rate byte
        assert_eq!(state[SHAKE128_RATE / 8 - 1], 0x8000_0000_0000_0000);

        let mut out = [0u8; SHAKE128_RATE];
        squeeze_blocks(&mut state, SHAKE128_RATE, &mut out);
        assert_eq!(hex::encode(&out[..16]), "e60a157e0d97917e7c969d90f1420236");
    }

    #[test]
    fn test_lane_sponge_matches_shake() {
        let input: Vec<u8> = (0..=255u8).cycle().take(500).collect();
        for &len in &[0usize, 1, 32, 135, 136, 168, 169, 400] {
            let mut lanes = vec![0u8; len];
            let mut xof = vec![0u8; len];

            lane_shake(SHAKE128_RATE, &mut lanes, &input);
            shake(Xof::Shake128, &mut xof, &input);
            assert_eq!(lanes, xof, "shake128 len {}", len);

            let msg = &input[..len.min(input.len())];
            lane_shake(SHAKE256_RATE, &mut lanes, msg);
            Xof::Shake256.shake(&mut xof, msg);
            assert_eq!(lanes, xof, "shake256 len {}", len);
        }
    }

    #[test]
    fn test_cshake_golden_vectors() {
        let mut out = [0u8; 32];
        cshake_simple(Xof::Shake128, &mut out, 0x0102, b"abc");
        assert_eq!(
            hex::encode(out),
            "ab1e8ae44a447b0d47e16a5fe0312b1ac77b5c4bb92be1683cbe6dd987ec3ada"
        );
        cshake_simple(Xof::Shake256, &mut out, 0x0100, b"abc");
        assert_eq!(
            hex::encode(out),
            "41363bd3d98e9a6257c38acb9672854a329b6dc5a33317366d83855ed0fe7e47"
        );
    }

    #[test]
    fn test_cshake_header_matches_cshake() {
        let input = [0xA5u8; 300];
        for &custom in &[0u16, 1, 0x0100, 0xFFFF] {
            for xof in [Xof::Shake128, Xof::Shake256] {
                let rate = xof.rate();
                let mut state = cshake_absorb(rate, custom, &input[..rate + 7]);
                let mut lanes = vec![0u8; 2 * rate];
                squeeze_blocks(&mut state, rate, &mut lanes);

                let mut expected = vec![0u8; 2 * rate];
                xof.cshake(&mut expected, custom, &input[..rate + 7]);
                assert_eq!(lanes, expected, "{:?} customization {:#06x}", xof, custom);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        Xof::Shake128.cshake(&mut a, 7, b"seed");
        Xof::Shake128.cshake(&mut b, 7, b"seed");
        assert_eq!(a, b);
        Xof::Shake128.cshake(&mut b, 8, b"seed");
        assert_ne!(a, b);
    }
}
