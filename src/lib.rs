#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! qTESLA: a no_std implementation of the qTESLA lattice signature scheme
//!
//! This library provides key generation, signing and verification for the
//! provably-secure parameter sets p-I and p-III, with all randomness drawn
//! from an AES-256 CTR DRBG and a Keccak-based XOF.

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod qtesla;

// Re-export main types and functions
pub use qtesla::{
    ParameterSet, Drbg, PublicKey, SecretKey, SignedMessage, Qtesla,
    generate_keypair, sign_message, verify_signature,
};

/// Common error types for the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter provided
    InvalidParameter,
    /// Key generation failed
    KeyGenerationFailed,
    /// Signature generation failed
    SigningFailed,
    /// Invalid signature format
    InvalidSignature,
    /// Invalid public key format
    InvalidPublicKey,
    /// Invalid secret key format
    InvalidSecretKey,
    /// Random number generation failed
    RngError,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidParameter => write!(f, "Invalid parameter"),
            Error::KeyGenerationFailed => write!(f, "Key generation failed"),
            Error::SigningFailed => write!(f, "Signing failed"),
            Error::InvalidSignature => write!(f, "Invalid signature"),
            Error::InvalidPublicKey => write!(f, "Invalid public key"),
            Error::InvalidSecretKey => write!(f, "Invalid secret key"),
            Error::RngError => write!(f, "Random number generation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for operations that may fail
pub type Result<T> = core::result::Result<T, Error>;
