//! Modular arithmetic over the prime fields used by the protocol.
//!
//! All functions operate on canonical (already reduced) [`BigUint`] values and
//! return canonical results.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{Error, Result};

/// Computes `base^exp mod modulus`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Computes the modular inverse `x⁻¹ mod m` via Fermat's little theorem.
///
/// The modulus must be prime; the inverse is `x^(m-2) mod m`.
///
/// # Errors
///
/// Returns [`Error::DegenerateInverse`] when `x ≡ 0 (mod m)`, which has no
/// inverse. Callers hitting this on curve arithmetic have a logic error:
/// the doubling-at-`y = 0` case must be handled before taking a slope.
pub fn mod_inverse(x: &BigUint, m: &BigUint) -> Result<BigUint> {
    if (x % m).is_zero() {
        return Err(Error::DegenerateInverse(format!("0 mod {m}")));
    }
    Ok(mod_pow(x, &(m - BigUint::from(2u32)), m))
}

/// Computes a verified square root of `x` modulo a prime `p ≡ 3 (mod 4)`.
///
/// The candidate root is `x^((p+1)/4) mod p`. For quadratic non-residues that
/// formula yields a root of `-x` instead, so the result is squared and checked
/// before being returned.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] when `p ≢ 3 (mod 4)` and
/// [`Error::NonResidue`] when `x` has no square root modulo `p`.
pub fn mod_sqrt(x: &BigUint, p: &BigUint) -> Result<BigUint> {
    if p % BigUint::from(4u32) != BigUint::from(3u32) {
        return Err(Error::InvalidParams(format!(
            "square root requires a modulus congruent to 3 mod 4, got {p}"
        )));
    }
    let exp = (p + BigUint::one()) >> 2u32;
    let root = mod_pow(x, &exp, p);
    if (&root * &root) % p != x % p {
        return Err(Error::NonResidue(format!("{x} mod {p}")));
    }
    Ok(root)
}

/// Computes `(a - b) mod m` without underflowing unsigned arithmetic.
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// Encodes a field element as a fixed-width 32-byte big-endian array.
///
/// This is the canonical transcript and wire encoding: fixed width keeps the
/// concatenation of encodings injective without separators. The value must
/// fit in 256 bits.
pub fn to_be_bytes_32(value: &BigUint) -> [u8; 32] {
    debug_assert!(value.bits() <= 256, "field element exceeds 256 bits");
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}
