//! Error types for the ring-signature core.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A point operand is not a member of the curve group.
    #[error("Invalid curve point: {0}")]
    InvalidPoint(String),

    /// A square root was requested for a quadratic non-residue.
    #[error("No square root exists: {0}")]
    NonResidue(String),

    /// A modular inverse was requested for zero.
    #[error("Cannot invert zero: {0}")]
    DegenerateInverse(String),

    /// Invalid protocol parameters were provided.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
