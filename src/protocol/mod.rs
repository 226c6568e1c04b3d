//! The linkable ring-signature protocol.
//!
//! - **transcript**: Keccak-based Fiat-Shamir challenge hashing
//! - **generators**: hash-to-curve and the derived generator chain
//! - **gadgets**: protocol parameters and the proof aggregate
//! - **prover**: the Borromean-style one-of-many signer

/// Hash-to-curve and nothing-up-my-sleeve generator derivation.
pub mod generators;
/// Protocol parameters and the ring proof aggregate.
pub mod gadgets;
/// Ring prover.
pub mod prover;
/// Fiat-Shamir transcript hashing.
pub mod transcript;

pub use gadgets::{Parameters, RingProof, DEFAULT_MIXIN};
pub use generators::{derive_point, hash_in_point, GeneratorChain};
pub use prover::RingProver;
pub use transcript::Transcript;
