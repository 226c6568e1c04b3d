//! The Borromean-style one-of-many ring prover.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::crypto::point::{group_order, CurvePoint};
use crate::crypto::rng::ScalarRng;
use crate::protocol::gadgets::{Parameters, RingProof};
use crate::protocol::generators::hash_in_point;
use crate::protocol::transcript::Transcript;
use crate::{Error, Result};

/// Prover for the linkable ring signature.
///
/// Builds a proof that the signer controls one of the ring's public keys
/// (position 0 in this reference construction) without revealing which
/// private key was used, while exposing a key image that is identical across
/// every signature made with that key.
///
/// # Security
///
/// - Use [`SecureScalarRng`](crate::SecureScalarRng) for real signing; the
///   deterministic chain generator is for reproducible test vectors only.
/// - The underlying point arithmetic is not constant-time, so this prover is
///   test-vector-grade and must not handle secrets an attacker can time.
pub struct RingProver {
    params: Parameters,
}

impl RingProver {
    /// Creates a prover over the given parameters.
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    /// Returns the prover's parameters.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Generates a linkable ring signature proof.
    ///
    /// The first `mixin` members of `ring` form the decoy set, with the
    /// signer's own public key at position 0 and `private_key` its discrete
    /// log. `amount` is the value hidden in the commitment and `output_hash`
    /// binds the proof to its external output context.
    ///
    /// The walk follows the standard forward-simulation shape: position 0
    /// commits with fresh randomness, every other position draws its response
    /// first and reconstructs the check values the verification equation
    /// would produce, and the signer's real response is computed last, once
    /// the challenge chain has closed back around.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] when the ring is smaller than the
    /// configured mixin, and [`Error::InvalidPoint`] when any ring member
    /// fails curve membership. Validation happens up front so a bad key can
    /// never poison a half-built signature.
    pub fn prove<R: ScalarRng>(
        &self,
        ring: &[CurvePoint],
        private_key: &BigUint,
        amount: &BigUint,
        output_hash: &BigUint,
        rng: &mut R,
    ) -> Result<RingProof> {
        let q = group_order();
        let g = self.params.generator_g();
        let mixin = self.params.mixin();

        if ring.len() < mixin {
            return Err(Error::InvalidParams(format!(
                "ring has {} members, the configured mixin needs {mixin}",
                ring.len()
            )));
        }
        for (index, key) in ring[..mixin].iter().enumerate() {
            if key.is_identity() || !key.is_on_curve() {
                return Err(Error::InvalidPoint(format!(
                    "ring member {index} {key} is not a usable public key"
                )));
            }
        }

        let funds: Vec<CurvePoint> = ring[..mixin].to_vec();
        let image_base = hash_in_point(&funds[0])?;
        let key_image = image_base.mul(private_key)?;
        let commitment = self.params.generator_h().mul(amount)?;

        // Honest opening at position 0, responses deferred until the ring
        // closes.
        let a = rng.next_scalar();
        let b = rng.next_scalar();
        let fund_check = g.mul(&a)?;
        let image_check = image_base.mul(&a)?;
        let commitment_check = g.mul(&b)?;

        let mut image_fund_proofs = vec![BigUint::zero(); mixin];
        let mut commitment_proofs = vec![BigUint::zero(); mixin];

        let mut prev_hash = link(&fund_check, &image_check, &commitment_check, output_hash, &q);

        // Forward simulation for the decoys: response first, check values
        // derived from the verification equation.
        for (index, fund) in funds.iter().enumerate().skip(1) {
            let response = rng.next_scalar();
            let commitment_response = rng.next_scalar();
            let decoy_base = hash_in_point(fund)?;

            let fund_check = fund.mul(&prev_hash)?.add(&g.mul(&response)?)?;
            let image_check = key_image
                .mul(&prev_hash)?
                .add(&decoy_base.mul(&response)?)?;
            let commitment_check = g.mul(&commitment_response)?;

            image_fund_proofs[index] = response;
            commitment_proofs[index] = commitment_response;
            prev_hash = link(&fund_check, &image_check, &commitment_check, output_hash, &q);
        }

        // Close the ring: only knowledge of the private key makes position
        // 0's response consistent with the commitment drawn up front.
        image_fund_proofs[0] = ((a + &q) - (&prev_hash * private_key) % &q) % &q;
        commitment_proofs[0] = b;

        Ok(RingProof::new(
            funds,
            key_image,
            commitment,
            prev_hash,
            image_fund_proofs,
            commitment_proofs,
            output_hash.clone(),
        ))
    }
}

/// One link of the Fiat-Shamir challenge chain.
fn link(
    fund_check: &CurvePoint,
    image_check: &CurvePoint,
    commitment_check: &CurvePoint,
    output_hash: &BigUint,
    q: &BigUint,
) -> BigUint {
    let mut transcript = Transcript::new();
    transcript.append_point(fund_check);
    transcript.append_point(image_check);
    transcript.append_point(commitment_check);
    transcript.append_scalar(output_hash);
    transcript.challenge(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::point::generator;
    use crate::crypto::rng::ChainedScalarRng;

    fn test_ring(rng: &mut ChainedScalarRng, size: usize) -> (Vec<BigUint>, Vec<CurvePoint>) {
        let g = generator();
        let keys: Vec<BigUint> = (0..size).map(|_| rng.next_scalar()).collect();
        let ring = keys.iter().map(|k| g.mul(k).unwrap()).collect();
        (keys, ring)
    }

    #[test]
    fn proof_has_expected_shape() {
        let mut rng = ChainedScalarRng::new(BigUint::from(1234u32));
        let (keys, ring) = test_ring(&mut rng, 5);
        let prover = RingProver::new(Parameters::new());
        let proof = prover
            .prove(&ring, &keys[0], &BigUint::from(100u32), &BigUint::from(7u32), &mut rng)
            .unwrap();

        assert_eq!(proof.funds().len(), 3);
        assert_eq!(proof.image_fund_proofs().len(), 3);
        assert_eq!(proof.commitment_proofs().len(), 3);
        assert_eq!(proof.funds(), &ring[..3]);
        assert!(proof.key_image().is_on_curve());
        assert!(proof.commitment().is_on_curve());
        assert!(proof.borromean() < &group_order());
    }

    #[test]
    fn proof_is_deterministic_for_a_fixed_rng() {
        let prover = RingProver::new(Parameters::new());
        let run = || {
            let mut rng = ChainedScalarRng::new(BigUint::from(42u32));
            let (keys, ring) = test_ring(&mut rng, 3);
            prover
                .prove(&ring, &keys[0], &BigUint::from(100u32), &BigUint::from(7u32), &mut rng)
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn short_ring_is_rejected() {
        let mut rng = ChainedScalarRng::new(BigUint::from(5u32));
        let (keys, ring) = test_ring(&mut rng, 2);
        let prover = RingProver::new(Parameters::new());
        let result = prover.prove(&ring, &keys[0], &BigUint::from(1u32), &BigUint::from(1u32), &mut rng);
        assert!(matches!(result, Err(Error::InvalidParams(_))));
    }

    #[test]
    fn invalid_ring_member_is_rejected_up_front() {
        let mut rng = ChainedScalarRng::new(BigUint::from(5u32));
        let (keys, mut ring) = test_ring(&mut rng, 3);
        ring[1] = CurvePoint::new(BigUint::from(5u32), BigUint::from(5u32));
        let prover = RingProver::new(Parameters::new());
        let result = prover.prove(&ring, &keys[0], &BigUint::from(1u32), &BigUint::from(1u32), &mut rng);
        assert!(matches!(result, Err(Error::InvalidPoint(_))));
    }

    #[test]
    fn key_image_is_independent_of_decoys() {
        let g = generator();
        let mut rng = ChainedScalarRng::new(BigUint::from(99u32));
        let key = rng.next_scalar();
        let public = g.mul(&key).unwrap();
        let prover = RingProver::new(Parameters::new());

        let mut proofs = Vec::new();
        for _ in 0..2 {
            let mut ring = vec![public.clone()];
            for _ in 0..2 {
                ring.push(g.mul(&rng.next_scalar()).unwrap());
            }
            proofs.push(
                prover
                    .prove(&ring, &key, &BigUint::from(100u32), &BigUint::from(7u32), &mut rng)
                    .unwrap(),
            );
        }
        assert_eq!(proofs[0].key_image(), proofs[1].key_image());
        assert_ne!(proofs[0].funds()[1], proofs[1].funds()[1]);
    }
}
