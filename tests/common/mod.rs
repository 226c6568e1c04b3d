//! Shared helpers: the ring verification equation.
//!
//! Verification is not part of the library's public surface, so the tests
//! recompute the challenge chain themselves: starting from the stored
//! closing challenge, rebuild every position's check values from the public
//! ring, key image, and responses, and confirm the chain returns to the same
//! closing value.

use linkable_ring_sig::crypto::point::{generator, group_order};
use linkable_ring_sig::protocol::generators::hash_in_point;
use linkable_ring_sig::{RingProof, Transcript};
use num_bigint::BigUint;

/// Runs the verification recomputation over a full proof.
pub fn recompute_borromean(proof: &RingProof) -> BigUint {
    let q = group_order();
    let g = generator();
    let mut challenge = proof.borromean().clone();

    for (index, fund) in proof.funds().iter().enumerate() {
        let response = &proof.image_fund_proofs()[index];
        let commitment_response = &proof.commitment_proofs()[index];
        let image_base = hash_in_point(fund).expect("ring members must be valid points");

        let fund_check = fund
            .mul(&challenge)
            .unwrap()
            .add(&g.mul(response).unwrap())
            .unwrap();
        let image_check = proof
            .key_image()
            .mul(&challenge)
            .unwrap()
            .add(&image_base.mul(response).unwrap())
            .unwrap();
        let commitment_check = g.mul(commitment_response).unwrap();

        let mut transcript = Transcript::new();
        transcript.append_point(&fund_check);
        transcript.append_point(&image_check);
        transcript.append_point(&commitment_check);
        transcript.append_scalar(proof.output_hash());
        challenge = transcript.challenge(&q);
    }
    challenge
}

/// Whether the challenge chain closes back onto the stored value.
pub fn verifies(proof: &RingProof) -> bool {
    recompute_borromean(proof) == *proof.borromean()
}
