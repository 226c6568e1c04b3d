//! Deterministic hash-to-curve and derived generator points.
//!
//! Try-and-increment is the simplest total map from a digest to a curve
//! point: walk x-coordinates upward from the seed until `x³ + 3` is a
//! quadratic residue. Roughly half of all field elements are residues, so
//! the expected walk is about two steps, though there is no proven upper
//! bound for adversarial seeds.

use num_bigint::BigUint;
use num_traits::One;

use crate::crypto::field::mod_sqrt;
use crate::crypto::point::{field_modulus, generator, CurvePoint};
use crate::protocol::transcript::Transcript;
use crate::{Error, Result};

/// Maps a field-element seed to a curve point by try-and-increment.
///
/// Deterministic: the same seed always yields the same point, and the result
/// always satisfies the curve equation.
pub fn derive_point(seed: &BigUint) -> CurvePoint {
    let p = field_modulus();
    let mut x = seed % &p;
    loop {
        let goal = ((&x * &x % &p) * &x + BigUint::from(3u32)) % &p;
        match mod_sqrt(&goal, &p) {
            Ok(y) => return CurvePoint::new(x, y),
            Err(_) => x = (x + BigUint::one()) % &p,
        }
    }
}

/// Derives the independent image base for a public key.
///
/// The map hashes the key's serialization into a hash-to-curve seed, so each
/// key gets its own generator-like point with unknown discrete log relative
/// to `g` and to every other key's base. This map fixes the linkability
/// domain of key images: signing twice with the same private key yields the
/// same image because the base is a pure function of the public key.
///
/// # Errors
///
/// Returns [`Error::InvalidPoint`] when `key` is the identity or fails curve
/// membership.
pub fn hash_in_point(key: &CurvePoint) -> Result<CurvePoint> {
    if key.is_identity() || !key.is_on_curve() {
        return Err(Error::InvalidPoint(format!(
            "image base requested for {key}, which is not a usable public key"
        )));
    }
    let mut transcript = Transcript::new();
    transcript.append_point(key);
    Ok(derive_point(&transcript.challenge(&field_modulus())))
}

/// Append-only cache of hash-derived generator points.
///
/// The chain starts at `h`, derived from the standard generator, and each
/// further point is derived from the transcript hash of its predecessor:
/// a public, reusable sequence of nothing-up-my-sleeve commitment bases.
/// Points are computed lazily and memoized; the cache only ever grows.
pub struct GeneratorChain {
    points: Vec<CurvePoint>,
}

impl GeneratorChain {
    /// Creates an empty chain; points are derived on first access.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns the derived base point `h`, the first link of the chain.
    pub fn h(&mut self) -> &CurvePoint {
        self.nth(0)
    }

    /// Returns the `index`-th derived point, extending the chain as needed.
    pub fn nth(&mut self, index: usize) -> &CurvePoint {
        while self.points.len() <= index {
            let mut transcript = Transcript::new();
            match self.points.last() {
                Some(prev) => transcript.append_point(prev),
                None => transcript.append_point(&generator()),
            }
            let seed = transcript.challenge(&field_modulus());
            self.points.push(derive_point(&seed));
        }
        &self.points[index]
    }

    /// Number of points derived so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether any point has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for GeneratorChain {
    fn default() -> Self {
        Self::new()
    }
}
