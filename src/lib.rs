//! Linkable ring signatures over alt_bn128.
//!
//! This crate implements the deterministic core of a Monero-style linkable
//! ring signature: group arithmetic on the short-Weierstrass curve
//! `y² = x³ + 3` over a 254-bit prime field, try-and-increment hash-to-curve
//! derivation of nothing-up-my-sleeve generator points, a Keccak-based
//! Fiat-Shamir transcript, and the Borromean-style one-of-many prover that
//! binds a spent output, a hidden-amount commitment, and a key image over a
//! small decoy ring.
//!
//! # Security
//!
//! The field and point arithmetic here is *not* constant-time. It is suitable
//! for generating test vectors and for verification-side recomputation, never
//! for signing with secrets an attacker can time.
//!
//! # Examples
//!
//! ```rust
//! use linkable_ring_sig::crypto::point::generator;
//! use linkable_ring_sig::{ChainedScalarRng, CurvePoint, Parameters, RingProver, ScalarRng};
//! use num_bigint::BigUint;
//!
//! let params = Parameters::new();
//! let mut rng = ChainedScalarRng::new(BigUint::from(1234u32));
//!
//! let keys: Vec<BigUint> = (0..3).map(|_| rng.next_scalar()).collect();
//! let ring = keys
//!     .iter()
//!     .map(|k| generator().mul(k))
//!     .collect::<linkable_ring_sig::Result<Vec<CurvePoint>>>()?;
//!
//! let amount = BigUint::from(100u32);
//! let output_hash = BigUint::from(7u32);
//! let proof = RingProver::new(params).prove(&ring, &keys[0], &amount, &output_hash, &mut rng)?;
//! assert_eq!(proof.funds().len(), 3);
//! # Ok::<(), linkable_ring_sig::Error>(())
//! ```

/// Cryptographic primitives: field arithmetic, the curve group, randomness.
pub mod crypto;
/// Error types.
pub mod error;
/// Protocol layer: transcript, derived generators, proof, prover.
pub mod protocol;

pub use crypto::point::CurvePoint;
pub use crypto::rng::{ChainedScalarRng, ScalarRng, SecureScalarRng};
pub use error::Error;
pub use protocol::{GeneratorChain, Parameters, RingProof, RingProver, Transcript, DEFAULT_MIXIN};

/// Convenience alias for results with the library's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
