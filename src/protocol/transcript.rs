//! Fiat-Shamir transcript for non-interactive proofs.
//!
//! The transcript is a single Keccak-256 hash over the fixed-width big-endian
//! encodings of the appended items: 32 bytes per field element, points as the
//! concatenation of their x then y encodings. Fixed-width fields make the
//! encoding injective without separators, so the same item sequence always
//! yields the same challenge. That binding is what the ring proof's soundness
//! relies on.

use num_bigint::BigUint;
use sha3::{Digest, Keccak256};

use crate::crypto::field::to_be_bytes_32;
use crate::crypto::point::CurvePoint;

/// Transcript hash accumulating points and scalars in append order.
pub struct Transcript {
    hasher: Keccak256,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self {
            hasher: Keccak256::new(),
        }
    }

    /// Appends a scalar or field element (32-byte big-endian encoding).
    pub fn append_scalar(&mut self, value: &BigUint) {
        self.hasher.update(to_be_bytes_32(value));
    }

    /// Appends a curve point (x encoding followed by y encoding).
    pub fn append_point(&mut self, point: &CurvePoint) {
        self.hasher.update(to_be_bytes_32(point.x()));
        self.hasher.update(to_be_bytes_32(point.y()));
    }

    /// Consumes the transcript, returning the raw 256-bit digest as an
    /// integer.
    ///
    /// The result is unreduced; callers pick the reduction their context
    /// needs via [`Transcript::challenge`] (mod `p` to seed hash-to-curve,
    /// mod `q` for challenge scalars).
    pub fn finalize(self) -> BigUint {
        BigUint::from_bytes_be(&self.hasher.finalize())
    }

    /// Consumes the transcript, returning the digest reduced by `modulus`.
    pub fn challenge(self, modulus: &BigUint) -> BigUint {
        self.finalize() % modulus
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::point::{generator, group_order};

    #[test]
    fn challenge_is_deterministic() {
        let make = || {
            let mut t = Transcript::new();
            t.append_point(&generator());
            t.append_scalar(&BigUint::from(42u32));
            t.challenge(&group_order())
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn challenge_differs_for_different_items() {
        let mut t1 = Transcript::new();
        t1.append_scalar(&BigUint::from(1u32));
        let mut t2 = Transcript::new();
        t2.append_scalar(&BigUint::from(2u32));
        assert_ne!(t1.finalize(), t2.finalize());
    }

    #[test]
    fn challenge_is_order_sensitive() {
        let mut t1 = Transcript::new();
        t1.append_scalar(&BigUint::from(1u32));
        t1.append_scalar(&BigUint::from(2u32));
        let mut t2 = Transcript::new();
        t2.append_scalar(&BigUint::from(2u32));
        t2.append_scalar(&BigUint::from(1u32));
        assert_ne!(t1.finalize(), t2.finalize());
    }

    #[test]
    fn point_and_scalar_pair_encode_identically() {
        // A point is its coordinate encodings in order, nothing more.
        let g = generator();
        let mut as_point = Transcript::new();
        as_point.append_point(&g);
        let mut as_scalars = Transcript::new();
        as_scalars.append_scalar(g.x());
        as_scalars.append_scalar(g.y());
        assert_eq!(as_point.finalize(), as_scalars.finalize());
    }

    #[test]
    fn challenge_is_reduced() {
        let q = group_order();
        let mut t = Transcript::new();
        t.append_scalar(&BigUint::from(7u32));
        assert!(t.challenge(&q) < q);
    }
}
