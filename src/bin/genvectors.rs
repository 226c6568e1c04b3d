//! Deterministic test-vector generator.
//!
//! Reproduces the reference scenario: seed 1234, twenty derived keypairs, a
//! three-member ring signed by the first key, amount 100, output context
//! bound to the transcript hash of `g`.

use linkable_ring_sig::crypto::point::{generator, group_order};
use linkable_ring_sig::{ChainedScalarRng, Parameters, RingProver, ScalarRng, Transcript};
use num_bigint::BigUint;

const SEED: u32 = 1234;
const KEY_COUNT: usize = 20;
const AMOUNT: u32 = 100;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> linkable_ring_sig::Result<()> {
    let g = generator();
    let mut rng = ChainedScalarRng::new(BigUint::from(SEED));

    let mut keys = Vec::with_capacity(KEY_COUNT);
    let mut pubs = Vec::with_capacity(KEY_COUNT);
    for _ in 0..KEY_COUNT {
        let key = rng.next_scalar();
        pubs.push(g.mul(&key)?);
        keys.push(key);
    }

    let output_hash = {
        let mut transcript = Transcript::new();
        transcript.append_point(&g);
        transcript.challenge(&group_order())
    };

    let prover = RingProver::new(Parameters::new());
    let proof = prover.prove(&pubs, &keys[0], &BigUint::from(AMOUNT), &output_hash, &mut rng)?;

    println!("signer: {}", pubs[0]);
    println!();
    println!("{proof}");
    println!();
    println!("serialized: 0x{}", hex::encode(proof.to_bytes()));
    println!();
    println!("h: {}", prover.params().generator_h());
    Ok(())
}
