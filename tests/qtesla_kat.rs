//! Known-answer tests for qTESLA.
//!
//! Each set is driven by a DRBG instantiated from the entropy bytes
//! 00 01 .. 2F: one key pair is generated, then "hello" is signed with the
//! same DRBG. The SHA3-256 digests of the encoded public key, secret key
//! and signed message are compared with fixed values.

use qtesla::{
    generate_keypair, sign_message, verify_signature, Drbg, ParameterSet, SignedMessage,
};
use sha3::{Digest, Sha3_256};

/// Expected SHA3-256 digests of (public key, secret key, signed message)
struct KatDigests {
    set: ParameterSet,
    public_key: &'static str,
    secret_key: &'static str,
    signed_message: &'static str,
}

const KATS: [KatDigests; 2] = [
    KatDigests {
        set: ParameterSet::P1,
        public_key: "185640c67d6bb43c313dcad0326a367974719a9ff3b68f193c124856d2f3c203",
        secret_key: "106726707c05af430852716f77c32801463548e8120e6b6f320f48f05d1099ef",
        signed_message: "fd167a8b94eb9da216543fe99a1d86c9e9bde97d38e04a5c4680d97c2268d9f7",
    },
    KatDigests {
        set: ParameterSet::P3,
        public_key: "4bda81bd447a48dd647ff0e60184bac9b5eb5e522a982ecbaf77e1f22c5972ef",
        secret_key: "24e4cf0f4a5cdfdf71cda9cb4868d0b7bef59593768d83eb08658ba84bcf1cfd",
        signed_message: "572bb880be8579b50e4a35f36bf6d52672d47429b246a5a43a75195796da8737",
    },
];

fn kat_drbg() -> Drbg {
    let mut entropy = [0u8; 48];
    for (i, b) in entropy.iter_mut().enumerate() {
        *b = i as u8;
    }
    Drbg::new(&entropy, None)
}

fn sha3_hex(bytes: &[u8]) -> String {
    hex::encode(Sha3_256::digest(bytes))
}

#[test]
fn test_known_answers() {
    for kat in &KATS {
        let mut drbg = kat_drbg();
        let (pk, sk) = generate_keypair(kat.set, &mut drbg).unwrap();
        let signed = sign_message(&sk, b"hello", &mut drbg).unwrap();

        assert_eq!(sha3_hex(pk.as_bytes()), kat.public_key, "{} public key", kat.set);
        assert_eq!(sha3_hex(sk.as_bytes()), kat.secret_key, "{} secret key", kat.set);
        assert_eq!(
            sha3_hex(signed.as_bytes()),
            kat.signed_message,
            "{} signed message",
            kat.set
        );
        assert!(verify_signature(&pk, b"hello", &signed));
    }
}

#[test]
fn test_known_answer_rejects_every_region() {
    let mut drbg = kat_drbg();
    let (pk, sk) = generate_keypair(ParameterSet::P1, &mut drbg).unwrap();
    let signed = sign_message(&sk, b"hello", &mut drbg).unwrap();
    let sig_len = ParameterSet::P1.signature_len();

    // first and last byte of z, first and last byte of c
    for index in [0, sig_len - 33, sig_len - 32, sig_len - 1] {
        let mut bytes = signed.as_bytes().to_vec();
        bytes[index] ^= 0x01;
        let tampered = SignedMessage::from_bytes(ParameterSet::P1, &bytes).unwrap();
        assert!(!verify_signature(&pk, b"hello", &tampered), "byte {}", index);
    }

    // carried message altered consistently
    let mut bytes = signed.as_bytes().to_vec();
    bytes[sig_len] ^= 0x20;
    let tampered = SignedMessage::from_bytes(ParameterSet::P1, &bytes).unwrap();
    assert!(!verify_signature(&pk, b"Hello", &tampered));
}

#[test]
fn test_signing_is_deterministic_under_a_fixed_drbg() {
    let mut a = kat_drbg();
    let mut b = kat_drbg();
    let (_, sk_a) = generate_keypair(ParameterSet::P1, &mut a).unwrap();
    let (_, sk_b) = generate_keypair(ParameterSet::P1, &mut b).unwrap();
    assert_eq!(
        sign_message(&sk_a, b"replay", &mut a).unwrap(),
        sign_message(&sk_b, b"replay", &mut b).unwrap()
    );
}
