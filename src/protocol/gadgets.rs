//! Protocol parameters and the ring proof aggregate.

use core::fmt;

use num_bigint::BigUint;

use crate::crypto::field::to_be_bytes_32;
use crate::crypto::point::{generator, CurvePoint};
use crate::protocol::generators::GeneratorChain;
use crate::{Error, Result};

/// Ring size of the reference construction: the signer plus two decoys.
pub const DEFAULT_MIXIN: usize = 3;

/// Public parameters for ring proof generation.
///
/// Holds the standard base point `g = (1, 2)`, the derived commitment base
/// `h` (first link of the [`GeneratorChain`]), and the ring size.
///
/// # Security
///
/// `h` is derived by hashing `g` onto the curve, so no party knows the
/// discrete log of `h` with respect to `g`. That independence is what makes
/// the commitment hiding.
#[derive(Clone, Debug)]
pub struct Parameters {
    g: CurvePoint,
    h: CurvePoint,
    mixin: usize,
}

impl Parameters {
    /// Creates parameters with the default ring size of [`DEFAULT_MIXIN`].
    pub fn new() -> Self {
        Self::with_ring_size(DEFAULT_MIXIN)
            .unwrap_or_else(|_| unreachable!("the default ring size is valid"))
    }

    /// Creates parameters with a custom ring size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] when `mixin < 2`: a ring without at
    /// least one decoy hides nothing.
    pub fn with_ring_size(mixin: usize) -> Result<Self> {
        if mixin < 2 {
            return Err(Error::InvalidParams(format!(
                "ring size must be at least 2, got {mixin}"
            )));
        }
        let mut chain = GeneratorChain::new();
        Ok(Self {
            g: generator(),
            h: chain.h().clone(),
            mixin,
        })
    }

    /// Returns the standard base point `g`.
    pub fn generator_g(&self) -> &CurvePoint {
        &self.g
    }

    /// Returns the derived commitment base `h`.
    pub fn generator_h(&self) -> &CurvePoint {
        &self.h
    }

    /// Returns the ring size.
    pub fn mixin(&self) -> usize {
        self.mixin
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}

/// A linkable ring signature proof.
///
/// Built once per signing operation by [`RingProver`](crate::RingProver) and
/// immutable afterwards. The `key_image` is identical across any two proofs
/// signed with the same private key, which is what downstream double-spend
/// detection keys on; `borromean` is the closing transcript challenge a
/// verifier re-derives to check that the challenge chain closes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RingProof {
    funds: Vec<CurvePoint>,
    key_image: CurvePoint,
    commitment: CurvePoint,
    borromean: BigUint,
    image_fund_proofs: Vec<BigUint>,
    commitment_proofs: Vec<BigUint>,
    output_hash: BigUint,
}

impl RingProof {
    pub(crate) fn new(
        funds: Vec<CurvePoint>,
        key_image: CurvePoint,
        commitment: CurvePoint,
        borromean: BigUint,
        image_fund_proofs: Vec<BigUint>,
        commitment_proofs: Vec<BigUint>,
        output_hash: BigUint,
    ) -> Self {
        Self {
            funds,
            key_image,
            commitment,
            borromean,
            image_fund_proofs,
            commitment_proofs,
            output_hash,
        }
    }

    /// The ring of candidate spent outputs; position 0 is the signer's slot.
    pub fn funds(&self) -> &[CurvePoint] {
        &self.funds
    }

    /// The signer's key image.
    pub fn key_image(&self) -> &CurvePoint {
        &self.key_image
    }

    /// The hidden-amount commitment.
    pub fn commitment(&self) -> &CurvePoint {
        &self.commitment
    }

    /// The closing transcript challenge.
    pub fn borromean(&self) -> &BigUint {
        &self.borromean
    }

    /// Per-position responses for the fund/image verification equations.
    pub fn image_fund_proofs(&self) -> &[BigUint] {
        &self.image_fund_proofs
    }

    /// Per-position responses for the commitment verification equation.
    pub fn commitment_proofs(&self) -> &[BigUint] {
        &self.commitment_proofs
    }

    /// The scalar binding the proof to its external output context.
    pub fn output_hash(&self) -> &BigUint {
        &self.output_hash
    }

    /// Serializes the proof to its canonical byte layout.
    ///
    /// Ordered concatenation of 32-byte big-endian fields, points as x then
    /// y: `funds[]`, `key_image`, `commitment`, `borromean`,
    /// `image_fund_proofs[]`, `commitment_proofs[]`, `output_hash`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let fields =
            self.funds.len() * 2 + 6 + self.image_fund_proofs.len() + self.commitment_proofs.len();
        let mut out = Vec::with_capacity(fields * 32);

        let push_scalar = |out: &mut Vec<u8>, value: &BigUint| {
            out.extend_from_slice(&to_be_bytes_32(value));
        };
        let push_point = |out: &mut Vec<u8>, point: &CurvePoint| {
            out.extend_from_slice(&to_be_bytes_32(point.x()));
            out.extend_from_slice(&to_be_bytes_32(point.y()));
        };

        for fund in &self.funds {
            push_point(&mut out, fund);
        }
        push_point(&mut out, &self.key_image);
        push_point(&mut out, &self.commitment);
        push_scalar(&mut out, &self.borromean);
        for response in &self.image_fund_proofs {
            push_scalar(&mut out, response);
        }
        for response in &self.commitment_proofs {
            push_scalar(&mut out, response);
        }
        push_scalar(&mut out, &self.output_hash);
        out
    }
}

impl fmt::Display for RingProof {
    /// Bracketed decimal text form: points as `["x", "y"]`, scalars quoted,
    /// sections in serialization order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scalar = |v: &BigUint| format!("\"{v}\"");
        let point = |p: &CurvePoint| format!("[{}, {}]", scalar(p.x()), scalar(p.y()));
        let scalars = |vs: &[BigUint]| {
            let inner: Vec<String> = vs.iter().map(&scalar).collect();
            format!("[{}]", inner.join(","))
        };

        let funds: Vec<String> = self.funds.iter().map(&point).collect();
        write!(
            f,
            "[{}], {}, {}, {}, {}, {}, {}",
            funds.join(","),
            point(&self.key_image),
            point(&self.commitment),
            scalar(&self.borromean),
            scalars(&self.image_fund_proofs),
            scalars(&self.commitment_proofs),
            scalar(&self.output_hash),
        )
    }
}
