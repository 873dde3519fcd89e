//! qTESLA implementation
//!
//! This module provides the ring-LWE based qTESLA signature scheme for the
//! provably-secure parameter sets p-I and p-III.

pub mod params;
pub mod keccak;
pub mod drbg;
pub mod reduce;
pub mod ntt;
pub mod poly;
pub mod gaussian;
pub mod packing;
pub mod keypair;
pub mod signature;
pub mod verification;
pub mod signer;

// Re-export key types and functions
pub use params::{ParameterSet, QteslaParams, QTESLA_P_I, QTESLA_P_III};
pub use drbg::Drbg;
pub use gaussian::DiscreteGaussianSampler;
pub use keypair::{generate_keypair, PublicKey, SecretKey};
pub use signature::{sign_message, SignedMessage};
pub use verification::verify_signature;
pub use signer::Qtesla;
