//! Scalar random number generation.
//!
//! The prover is generic over a [`ScalarRng`] so that production signing can
//! draw from the operating system while tests and vector generation use a
//! reproducible hash chain. Keeping the generator an explicit, injected value
//! (rather than process-wide state) lets independent proof constructions run
//! without interfering.

use num_bigint::{BigUint, RandBigInt};
use rand::rngs::OsRng;
use sha3::{Digest, Keccak256};

use crate::crypto::field::to_be_bytes_32;
use crate::crypto::point::group_order;

/// Source of scalars uniformly distributed in `[0, q)`.
pub trait ScalarRng {
    /// Draws the next scalar.
    fn next_scalar(&mut self) -> BigUint;
}

/// Cryptographically secure scalar generator backed by the operating system.
///
/// This is the only [`ScalarRng`] implementation suitable for signing with
/// real secrets.
pub struct SecureScalarRng {
    order: BigUint,
}

impl SecureScalarRng {
    /// Creates a new OS-backed scalar generator.
    pub fn new() -> Self {
        Self {
            order: group_order(),
        }
    }
}

impl Default for SecureScalarRng {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarRng for SecureScalarRng {
    fn next_scalar(&mut self) -> BigUint {
        OsRng.gen_biguint_below(&self.order)
    }
}

/// Deterministic scalar generator built on a Keccak re-hash chain.
///
/// Each draw replaces the internal state with `keccak256(state)` (over the
/// fixed 32-byte encoding) and returns the new state reduced mod `q`. The
/// same seed always reproduces the same scalar sequence, which is what makes
/// end-to-end proof vectors reproducible.
///
/// # Security
///
/// Acceptable only for test vectors. The full chain is recoverable from the
/// seed, so proofs signed with it leak their private responses.
pub struct ChainedScalarRng {
    state: BigUint,
    order: BigUint,
}

impl ChainedScalarRng {
    /// Creates a deterministic generator from a seed.
    pub fn new(seed: BigUint) -> Self {
        Self {
            state: seed,
            order: group_order(),
        }
    }
}

impl ScalarRng for ChainedScalarRng {
    fn next_scalar(&mut self) -> BigUint {
        let digest = Keccak256::digest(to_be_bytes_32(&self.state));
        self.state = BigUint::from_bytes_be(&digest);
        &self.state % &self.order
    }
}
