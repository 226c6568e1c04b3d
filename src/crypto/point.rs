//! The curve group element and its published constants.
//!
//! Points live on the short-Weierstrass curve `y² = x³ + 3` over the 254-bit
//! prime field `p` (the alt_bn128 pairing curve's base field). The group has
//! prime order `q`, which doubles as the scalar field for private keys and
//! proof responses.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::crypto::field::{mod_inverse, mod_sub};
use crate::{Error, Result};

/// A point on the curve, or the identity element `(0, 0)`.
///
/// Points are immutable values: arithmetic produces new points and never
/// mutates operands. The identity sentinel does not satisfy the curve
/// equation and is special-cased by every operation before membership is
/// checked on the other operand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurvePoint {
    x: BigUint,
    y: BigUint,
}

impl CurvePoint {
    /// Creates a point from affine coordinates.
    ///
    /// No membership check is performed here; arithmetic validates operands
    /// and rejects non-members with [`Error::InvalidPoint`].
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Returns the identity element `(0, 0)`.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Whether this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Whether this point is a member of the group.
    ///
    /// True for the identity sentinel, or for canonical coordinates
    /// (`x, y < p`) satisfying `y² ≡ x³ + 3 (mod p)`.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let p = field_modulus();
        if self.x >= p || self.y >= p {
            return false;
        }
        let lhs = (&self.y * &self.y) % &p;
        let rhs = ((&self.x * &self.x % &p) * &self.x + BigUint::from(3u32)) % &p;
        lhs == rhs
    }

    /// Adds two points with the chord-tangent group law.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] when either operand fails curve
    /// membership, so a bad public key can never flow silently into a
    /// signature.
    pub fn add(&self, other: &CurvePoint) -> Result<CurvePoint> {
        self.check_membership("left addition operand")?;
        other.check_membership("right addition operand")?;

        if self.is_identity() {
            return Ok(other.clone());
        }
        if other.is_identity() {
            return Ok(self.clone());
        }

        let p = field_modulus();

        // Inverse pair, including the 2-torsion case y = 0: P + (-P) = O.
        if self.x == other.x && (self.y != other.y || self.y.is_zero()) {
            return Ok(CurvePoint::identity());
        }

        let slope = if self.x == other.x {
            // Doubling: tangent slope 3x² / 2y. The y = 0 branch was already
            // taken above, so the inverse is well-defined.
            let numerator = (BigUint::from(3u32) * &self.x % &p) * &self.x % &p;
            let denominator = mod_inverse(&(BigUint::from(2u32) * &self.y), &p)?;
            numerator * denominator % &p
        } else {
            let numerator = mod_sub(&other.y, &self.y, &p);
            let denominator = mod_inverse(&mod_sub(&other.x, &self.x, &p), &p)?;
            numerator * denominator % &p
        };

        let x = mod_sub(&mod_sub(&(&slope * &slope % &p), &self.x, &p), &other.x, &p);
        let y = mod_sub(&(slope * mod_sub(&self.x, &x, &p) % &p), &self.y, &p);
        Ok(CurvePoint::new(x, y))
    }

    /// Multiplies this point by a scalar with LSB-first double-and-add.
    ///
    /// Runs in O(bit-length of `scalar`) group operations. The bit pattern of
    /// the scalar is observable through timing, so this must only be used for
    /// test-vector generation and verification-side recomputation, never with
    /// production secrets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] when `self` fails curve membership.
    pub fn mul(&self, scalar: &BigUint) -> Result<CurvePoint> {
        self.check_membership("multiplication operand")?;

        let mut acc = CurvePoint::identity();
        let mut power = self.clone();
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                acc = acc.add(&power)?;
            }
            power = power.add(&power)?;
        }
        Ok(acc)
    }

    fn check_membership(&self, role: &str) -> Result<()> {
        if self.is_on_curve() {
            Ok(())
        } else {
            Err(Error::InvalidPoint(format!("{role} ({}, {})", self.x, self.y)))
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The curve field modulus `p`.
pub fn field_modulus() -> BigUint {
    parse_decimal(b"21888242871839275222246405745257275088696311157297823662689037894645226208583")
}

/// The group order `q`, which is also the scalar field modulus.
pub fn group_order() -> BigUint {
    parse_decimal(b"21888242871839275222246405745257275088548364400416034343698204186575808495617")
}

/// The standard base point `g = (1, 2)`.
pub fn generator() -> CurvePoint {
    CurvePoint::new(BigUint::from(1u32), BigUint::from(2u32))
}

fn parse_decimal(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 10)
        .unwrap_or_else(|| unreachable!("curve constants are valid decimal strings"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        assert!(generator().is_on_curve());
        assert!(!generator().is_identity());
    }

    #[test]
    fn identity_is_on_curve_by_convention() {
        let zero = CurvePoint::identity();
        assert!(zero.is_identity());
        assert!(zero.is_on_curve());
    }

    #[test]
    fn identity_is_neutral() {
        let g = generator();
        let zero = CurvePoint::identity();
        assert_eq!(g.add(&zero).unwrap(), g);
        assert_eq!(zero.add(&g).unwrap(), g);
        assert_eq!(zero.add(&zero).unwrap(), zero);
    }

    #[test]
    fn inverse_pair_sums_to_identity() {
        let g = generator();
        let neg_g = CurvePoint::new(g.x().clone(), field_modulus() - g.y());
        assert!(neg_g.is_on_curve());
        assert_eq!(g.add(&neg_g).unwrap(), CurvePoint::identity());
    }

    #[test]
    fn doubling_matches_addition() {
        let g = generator();
        let doubled = g.add(&g).unwrap();
        assert!(doubled.is_on_curve());
        assert_eq!(g.mul(&BigUint::from(2u32)).unwrap(), doubled);
    }

    #[test]
    fn small_multiples_are_consistent() {
        let g = generator();
        let mut by_addition = CurvePoint::identity();
        for k in 0u32..8 {
            assert_eq!(g.mul(&BigUint::from(k)).unwrap(), by_addition);
            by_addition = by_addition.add(&g).unwrap();
        }
    }

    #[test]
    fn multiplication_by_zero_and_one() {
        let g = generator();
        assert_eq!(g.mul(&BigUint::zero()).unwrap(), CurvePoint::identity());
        assert_eq!(g.mul(&BigUint::from(1u32)).unwrap(), g);
    }

    #[test]
    fn group_order_annihilates_generator() {
        let g = generator();
        assert_eq!(g.mul(&group_order()).unwrap(), CurvePoint::identity());
    }

    #[test]
    fn addition_rejects_non_members() {
        let g = generator();
        let bogus = CurvePoint::new(BigUint::from(5u32), BigUint::from(5u32));
        assert!(!bogus.is_on_curve());
        assert!(matches!(g.add(&bogus), Err(Error::InvalidPoint(_))));
        assert!(matches!(bogus.add(&g), Err(Error::InvalidPoint(_))));
        assert!(matches!(bogus.mul(&BigUint::from(2u32)), Err(Error::InvalidPoint(_))));
    }

    #[test]
    fn non_canonical_coordinates_are_rejected() {
        let p = field_modulus();
        // (p + 1, ...) encodes the same residue as the generator but is not canonical.
        let shifted = CurvePoint::new(&p + BigUint::from(1u32), BigUint::from(2u32));
        assert!(!shifted.is_on_curve());
    }

    #[test]
    fn commutativity() {
        let g = generator();
        let a = g.mul(&BigUint::from(5u32)).unwrap();
        let b = g.mul(&BigUint::from(11u32)).unwrap();
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }
}
