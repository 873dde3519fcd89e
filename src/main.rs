//! qTESLA demonstration program

use qtesla::{verify_signature, Error, ParameterSet, Qtesla, Result};

fn main() -> Result<()> {
    println!("🔐 qTESLA: Post-Quantum Lattice Signatures");
    println!("===========================================");
    println!("Provably-secure parameter sets p-I and p-III");
    println!();

    println!("🔵 Testing qTESLA-p-I:");
    test_parameter_set(ParameterSet::P1)?;
    println!();

    println!("🔴 Testing qTESLA-p-III:");
    test_parameter_set(ParameterSet::P3)?;
    println!();

    println!("✅ All demonstrations completed!");
    println!();

    display_implementation_summary();

    Ok(())
}

fn test_parameter_set(set: ParameterSet) -> Result<()> {
    let params = set.params();
    println!("  📊 Parameters:");
    println!("    • Degree (n): {}", params.n);
    println!("    • Modulus (q): {}", params.q);
    println!("    • Public polynomials (k): {}", params.k);
    println!("    • Challenge weight (h): {}", params.h);
    println!("    • NIST security category: {}", params.security_level);
    println!("    • Public key size: {} bytes", params.public_key_len);
    println!("    • Secret key size: {} bytes", params.secret_key_len);
    println!("    • Signature size: {} bytes + message", params.signature_len);
    println!();

    let mut signer = Qtesla::new(set)?;

    print!("  🔑 Generating key pair... ");
    signer.generate_key_pair()?;
    println!("✅ Success");

    let message = b"Hello from qTESLA! This is a post-quantum digital signature.";
    println!(
        "  📝 Message: \"{}\"",
        core::str::from_utf8(message).unwrap_or("<invalid utf8>")
    );

    print!("  ✍️  Signing message... ");
    let signed = signer.sign(message)?;
    println!("✅ Success");
    println!("    • Signed message size: {} bytes", signed.as_bytes().len());

    print!("  🔍 Verifying signature... ");
    if signer.verify(message, &signed) {
        println!("✅ Valid signature");
    } else {
        println!("❌ Invalid signature");
        return Err(Error::InvalidSignature);
    }

    let wrong_message = b"This is a different message that should fail";
    print!("  🔍 Testing with wrong message... ");
    if signer.verify(wrong_message, &signed) {
        println!("❌ Incorrectly accepted");
        return Err(Error::InvalidSignature);
    }
    println!("✅ Correctly rejected");

    print!("  🔍 Testing with a fresh key pair... ");
    let mut stranger = Qtesla::new(set)?;
    let other_pk = stranger.generate_key_pair()?;
    if verify_signature(other_pk, message, &signed) {
        println!("❌ Incorrectly accepted");
        return Err(Error::InvalidSignature);
    }
    println!("✅ Correctly rejected");

    Ok(())
}

fn display_implementation_summary() {
    println!("📋 Implementation Summary:");
    println!("==========================");
    println!();

    println!("✅ Components:");
    println!("  • Keccak-f[1600] sponge with SHAKE and cSHAKE");
    println!("  • AES-256 CTR_DRBG with explicit reseeding");
    println!("  • NTT over Z_q[x]/(x^n + 1) with Montgomery and Barrett reduction");
    println!("  • Constant-time CDT Gaussian sampler (sigma = 8.5)");
    println!("  • Bounded-uniform masking polynomial sampler");
    println!("  • Bit-exact key and signature encoding");
    println!("  • Rejection-sampling signing loop with iteration cap");
    println!("  • no_std compatibility with alloc");
    println!();

    println!("🔬 Security Features:");
    println!("  • Constant-time rejection and key bound checks");
    println!("  • Constant-time challenge comparison");
    println!("  • Secret polynomials and DRBG state wiped on drop");
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_main_function() {
        assert!(main().is_ok());
    }

    #[test]
    fn test_parameter_sets() {
        let p1 = ParameterSet::P1.params();
        let p3 = ParameterSet::P3.params();

        assert_eq!(p1.n, 1024);
        assert_eq!(p1.logn, 10);
        assert_eq!(p3.n, 2048);
        assert_eq!(p3.logn, 11);

        // p-III should have larger sizes
        assert!(p3.public_key_len > p1.public_key_len);
        assert!(p3.signature_len > p1.signature_len);
    }
}
