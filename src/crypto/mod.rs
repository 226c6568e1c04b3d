//! Cryptographic primitives for the ring-signature protocol.
//!
//! - **field**: modular arithmetic over the curve and scalar prime fields
//! - **point**: the curve group element and its published constants
//! - **rng**: scalar randomness, secure and deterministic

/// Modular field arithmetic.
pub mod field;
/// Curve group element and constants.
pub mod point;
/// Scalar random number generation.
pub mod rng;

pub use point::CurvePoint;
pub use rng::{ChainedScalarRng, ScalarRng, SecureScalarRng};
