//! Ristretto255: a prime-order group abstraction over edwards25519.
//!
//! edwards25519 has cofactor 8; Ristretto quotients out that 4-torsion
//! subgroup (and fixes a canonical representative per equivalence class)
//! so that the resulting group has prime order and no cofactor-related
//! pitfalls leak into protocols built on top of it. Implemented directly
//! over this crate's own [`EdwardsPoint`]/[`FieldElement`] rather than
//! depending on `curve25519-dalek`.

use once_cell::sync::Lazy;

use crate::field::FieldElement;
use crate::point::EdwardsPoint;
use crate::scalar::Scalar;
use crate::Error;

static EDWARDS_D: Lazy<FieldElement> = Lazy::new(FieldElement::edwards_d);

/// `invsqrt(a - d)` with `a = -1`, i.e. `invsqrt(-1 - d)`. Used only by
/// [`RistrettoPoint::compress`]'s "enchanted denominator" step.
static INVSQRT_A_MINUS_D: Lazy<FieldElement> = Lazy::new(|| {
    let a_minus_d = -FieldElement::one() - *EDWARDS_D;
    FieldElement::sqrt_ratio_u_v(&FieldElement::one(), &a_minus_d).1
});

/// A point in the Ristretto255 prime-order group, represented internally
/// as one member of its edwards25519 equivalence class.
#[derive(Clone, Copy, Debug)]
pub struct RistrettoPoint(EdwardsPoint);

/// The canonical 32-byte encoding of a [`RistrettoPoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedRistretto(pub [u8; 32]);

impl RistrettoPoint {
    pub fn identity() -> Self {
        RistrettoPoint(EdwardsPoint::identity())
    }

    pub fn add(&self, other: &Self) -> Self {
        RistrettoPoint(self.0.add(&other.0))
    }

    pub fn negate(&self) -> Self {
        RistrettoPoint(self.0.negate())
    }

    pub fn scalar_mul(&self, scalar: &Scalar) -> Self {
        RistrettoPoint(self.0.scalar_mul(scalar))
    }

    /// Equality on the quotient group: two edwards25519 representatives are
    /// the same Ristretto point iff `X1·Y2 == Y1·X2` or `X1·X2 == Y1·Y2`
    /// (the four representatives of a class differ by the 4-torsion
    /// subgroup's action, which this pair of cross-products is invariant
    /// under).
    pub fn equals(&self, other: &Self) -> bool {
        let x1y2 = (self.0.x * other.0.y).reduce();
        let y1x2 = (self.0.y * other.0.x).reduce();
        let x1x2 = (self.0.x * other.0.x).reduce();
        let y1y2 = (self.0.y * other.0.y).reduce();
        x1y2 == y1x2 || x1x2 == y1y2
    }

    /// Canonical 32-byte encoding.
    pub fn compress(&self) -> CompressedRistretto {
        let p = &self.0;
        let u1 = (p.z + p.y) * (p.z - p.y);
        let u2 = p.x * p.y;
        let invsqrt = FieldElement::sqrt_ratio_u_v(&FieldElement::one(), &(u1 * u2.square())).1;
        let den1 = invsqrt * u1;
        let den2 = invsqrt * u2;
        let z_inv = den1 * den2 * p.t;
        let ix0 = p.x * FieldElement::SQRT_M1;
        let iy0 = p.y * FieldElement::SQRT_M1;
        let enchanted_denominator = den1 * *INVSQRT_A_MINUS_D;

        let rotate = (p.t * z_inv).is_negative();
        let (x, mut y, den_inv) = if rotate {
            (iy0, ix0, enchanted_denominator)
        } else {
            (p.x, p.y, den2)
        };

        if (x * z_inv).is_negative() {
            y = -y;
        }

        let mut s = den_inv * (p.z - y);
        if s.is_negative() {
            s = -s;
        }

        CompressedRistretto(s.reduce().to_bytes())
    }

    /// Decode a canonical 32-byte Ristretto255 encoding.
    ///
    /// Rejects non-canonical field encodings, negative `s`, and any
    /// intermediate value for which no square root exists — collectively
    /// these reject every byte string that is not the unique canonical
    /// encoding of some Ristretto255 group element.
    pub fn decompress(bytes: &[u8; 32]) -> Result<Self, Error> {
        let s = FieldElement::from_bytes(bytes);
        if &s.to_bytes() != bytes {
            return Err(Error::NonCanonicalRistretto);
        }
        if s.is_negative() {
            return Err(Error::NonCanonicalRistretto);
        }

        let one = FieldElement::one();
        let ss = s.square();
        let u1 = one - ss;
        let u2 = one + ss;
        let u2_sqr = u2.square();

        let v = -*EDWARDS_D * u1.square() - u2_sqr;
        let (was_square, invsqrt) = FieldElement::sqrt_ratio_u_v(&one, &(v * u2_sqr));

        let den_x = invsqrt * u2;
        let den_y = invsqrt * den_x * v;

        let mut x = (s + s) * den_x;
        if x.is_negative() {
            x = -x;
        }
        let y = u1 * den_y;
        let t = x * y;

        if !was_square || t.is_negative() || y.is_zero() {
            return Err(Error::NonCanonicalRistretto);
        }

        Ok(RistrettoPoint(EdwardsPoint {
            x,
            y,
            z: one,
            t,
        }))
    }
}

impl CompressedRistretto {
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn decompress(&self) -> Result<RistrettoPoint, Error> {
        RistrettoPoint::decompress(&self.0)
    }
}

impl PartialEq for RistrettoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
impl Eq for RistrettoPoint {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::BASE_POINT;

    #[test]
    fn identity_roundtrips() {
        let id = RistrettoPoint::identity();
        let bytes = id.compress();
        let decoded = bytes.decompress().expect("identity encodes canonically");
        assert_eq!(id, decoded);
    }

    #[test]
    fn base_point_roundtrips() {
        let p = RistrettoPoint(*BASE_POINT);
        let bytes = p.compress();
        let decoded = bytes.decompress().expect("base point encodes canonically");
        assert_eq!(p, decoded);
    }

    #[test]
    fn all_ff_is_not_canonical() {
        assert!(RistrettoPoint::decompress(&[0xffu8; 32]).is_err());
    }

    #[test]
    fn negative_s_is_rejected() {
        // A canonical field encoding whose low bit marks it "negative" under
        // this crate's sign convention must be rejected regardless of
        // whether the rest of the decode algorithm would otherwise accept it.
        let mut bytes = [0u8; 32];
        bytes[0] = 0x03; // odd => negative
        assert!(RistrettoPoint::decompress(&bytes).is_err());
    }

    #[test]
    fn scalar_mul_distributes() {
        let p = RistrettoPoint(*BASE_POINT);
        let a = Scalar::from_u64(3);
        let b = Scalar::from_u64(5);
        let lhs = p.scalar_mul(&a.add(&b));
        let rhs = p.scalar_mul(&a).add(&p.scalar_mul(&b));
        assert!(lhs.equals(&rhs));
    }
}
