//! Field element operations for edwards25519
//!
//! Implements arithmetic in `GF(2^255-19)`, the finite field underlying
//! curve25519 and its Edwards form. Elements are represented in radix
//! `2^25.5` with ten `i64` limbs (limbs alternate between 26 and 25 bits),
//! matching the libsodium `fe25519` representation byte-for-byte so that
//! this implementation's encodings interoperate with every other ed25519
//! library.
//!
//! # Operations
//!
//! add, sub, mul, neg, square, invert (Fermat, `a^(p-2)`), and a
//! `sqrt`/`sqrt_ratio` pair implementing the candidate-and-check modular
//! square root algorithm ref10 and libsodium use.

use std::ops::{Add, Mul, Neg, Sub};
use subtle::Choice;

/// Field element in `GF(2^255-19)`.
///
/// Not all representable limb combinations are canonical; call
/// [`FieldElement::reduce`] before comparing limbs directly, or use
/// [`FieldElement::equals`] / [`FieldElement::to_bytes`] which reduce
/// internally.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub [i64; 10]);

impl FieldElement {
    /// Precomputed constant `sqrt(-1) mod p`, matching libsodium's `fe_sqrtm1`.
    pub const SQRT_M1: Self = Self([
        -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
        11406482,
    ]);

    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0; 10])
    }

    #[inline]
    pub const fn one() -> Self {
        let mut fe = [0i64; 10];
        fe[0] = 1;
        FieldElement(fe)
    }

    /// Build a field element from a small non-negative integer.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self::from_bytes(&bytes)
    }

    /// The twisted Edwards curve constant `d = -121665/121666 mod p`.
    pub fn edwards_d() -> Self {
        let num = -Self::from_u64(121665);
        let den = Self::from_u64(121666);
        (num * den.invert()).reduce()
    }

    /// Load a field element from 32 little-endian bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut h = [0i64; 10];

        h[0] = (bytes[0] as i64)
            | ((bytes[1] as i64) << 8)
            | ((bytes[2] as i64) << 16)
            | (((bytes[3] as i64) & 0x3f) << 24);

        h[1] = (((bytes[3] as i64) >> 6) & 0x03)
            | ((bytes[4] as i64) << 2)
            | ((bytes[5] as i64) << 10)
            | ((bytes[6] as i64) << 18)
            | (((bytes[7] as i64) & 0x01) << 24);

        h[2] = (((bytes[7] as i64) >> 1) & 0x7f)
            | ((bytes[8] as i64) << 7)
            | ((bytes[9] as i64) << 15)
            | (((bytes[10] as i64) & 0x07) << 23);

        h[3] = (((bytes[10] as i64) >> 3) & 0x1f)
            | ((bytes[11] as i64) << 5)
            | ((bytes[12] as i64) << 13)
            | (((bytes[13] as i64) & 0x0f) << 21);

        h[4] = (((bytes[13] as i64) >> 4) & 0x0f)
            | ((bytes[14] as i64) << 4)
            | ((bytes[15] as i64) << 12)
            | (((bytes[16] as i64) & 0x3f) << 20);

        h[5] = (((bytes[16] as i64) >> 6) & 0x03)
            | ((bytes[17] as i64) << 2)
            | ((bytes[18] as i64) << 10)
            | ((bytes[19] as i64) << 18)
            | (((bytes[20] as i64) & 0x01) << 24);

        h[6] = (((bytes[20] as i64) >> 1) & 0x7f)
            | ((bytes[21] as i64) << 7)
            | ((bytes[22] as i64) << 15)
            | (((bytes[23] as i64) & 0x07) << 23);

        h[7] = (((bytes[23] as i64) >> 3) & 0x1f)
            | ((bytes[24] as i64) << 5)
            | ((bytes[25] as i64) << 13)
            | (((bytes[26] as i64) & 0x0f) << 21);

        h[8] = (((bytes[26] as i64) >> 4) & 0x0f)
            | ((bytes[27] as i64) << 4)
            | ((bytes[28] as i64) << 12)
            | (((bytes[29] as i64) & 0x3f) << 20);

        h[9] = (((bytes[29] as i64) >> 6) & 0x03)
            | ((bytes[30] as i64) << 2)
            | ((bytes[31] as i64) << 10);

        FieldElement(h)
    }

    /// Canonical little-endian byte encoding (always `< p`).
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut h = self.reduce().0;

        // Mirrors the ref10 fe_tobytes routine: one more conditional
        // subtraction of p after carry propagation guarantees canonicity.
        let mut q = (19 * h[9] + (1 << 24)) >> 25;
        q = (h[0] + q) >> 26;
        q = (h[1] + q) >> 25;
        q = (h[2] + q) >> 26;
        q = (h[3] + q) >> 25;
        q = (h[4] + q) >> 26;
        q = (h[5] + q) >> 25;
        q = (h[6] + q) >> 26;
        q = (h[7] + q) >> 25;
        q = (h[8] + q) >> 26;
        q = (h[9] + q) >> 25;

        h[0] += 19 * q;

        let mut carry = h[0] >> 26;
        h[1] += carry;
        h[0] -= carry << 26;
        carry = h[1] >> 25;
        h[2] += carry;
        h[1] -= carry << 25;
        carry = h[2] >> 26;
        h[3] += carry;
        h[2] -= carry << 26;
        carry = h[3] >> 25;
        h[4] += carry;
        h[3] -= carry << 25;
        carry = h[4] >> 26;
        h[5] += carry;
        h[4] -= carry << 26;
        carry = h[5] >> 25;
        h[6] += carry;
        h[5] -= carry << 25;
        carry = h[6] >> 26;
        h[7] += carry;
        h[6] -= carry << 26;
        carry = h[7] >> 25;
        h[8] += carry;
        h[7] -= carry << 25;
        carry = h[8] >> 26;
        h[9] += carry;
        h[8] -= carry << 26;
        carry = h[9] >> 25;
        h[9] -= carry << 25;
        h[0] += carry * 19;

        carry = h[0] >> 26;
        h[1] += carry;
        h[0] -= carry << 26;
        carry = h[1] >> 25;
        h[2] += carry;
        h[1] -= carry << 25;

        let mut output = [0u8; 32];
        output[0] = (h[0] & 0xff) as u8;
        output[1] = ((h[0] >> 8) & 0xff) as u8;
        output[2] = ((h[0] >> 16) & 0xff) as u8;
        output[3] = ((h[0] >> 24) & 0x3f) as u8 | ((h[1] << 6) & 0xc0) as u8;
        output[4] = ((h[1] >> 2) & 0xff) as u8;
        output[5] = ((h[1] >> 10) & 0xff) as u8;
        output[6] = ((h[1] >> 18) & 0xff) as u8;
        output[7] = ((h[1] >> 26) & 0x01) as u8 | ((h[2] << 1) & 0xfe) as u8;
        output[8] = ((h[2] >> 7) & 0xff) as u8;
        output[9] = ((h[2] >> 15) & 0xff) as u8;
        output[10] = ((h[2] >> 23) & 0x07) as u8 | ((h[3] << 3) & 0xf8) as u8;
        output[11] = ((h[3] >> 5) & 0xff) as u8;
        output[12] = ((h[3] >> 13) & 0xff) as u8;
        output[13] = ((h[3] >> 21) & 0x0f) as u8 | ((h[4] << 4) & 0xf0) as u8;
        output[14] = ((h[4] >> 4) & 0xff) as u8;
        output[15] = ((h[4] >> 12) & 0xff) as u8;
        output[16] = ((h[4] >> 20) & 0x3f) as u8 | ((h[5] << 6) & 0xc0) as u8;
        output[17] = ((h[5] >> 2) & 0xff) as u8;
        output[18] = ((h[5] >> 10) & 0xff) as u8;
        output[19] = ((h[5] >> 18) & 0xff) as u8;
        output[20] = ((h[5] >> 26) & 0x01) as u8 | ((h[6] << 1) & 0xfe) as u8;
        output[21] = ((h[6] >> 7) & 0xff) as u8;
        output[22] = ((h[6] >> 15) & 0xff) as u8;
        output[23] = ((h[6] >> 23) & 0x07) as u8 | ((h[7] << 3) & 0xf8) as u8;
        output[24] = ((h[7] >> 5) & 0xff) as u8;
        output[25] = ((h[7] >> 13) & 0xff) as u8;
        output[26] = ((h[7] >> 21) & 0x0f) as u8 | ((h[8] << 4) & 0xf0) as u8;
        output[27] = ((h[8] >> 4) & 0xff) as u8;
        output[28] = ((h[8] >> 12) & 0xff) as u8;
        output[29] = ((h[8] >> 20) & 0x3f) as u8 | ((h[9] << 6) & 0xc0) as u8;
        output[30] = ((h[9] >> 2) & 0xff) as u8;
        output[31] = ((h[9] >> 10) & 0xff) as u8;

        const P_BYTES: [u8; 32] = [
            0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0x7f,
        ];

        let mut needs_sub = (output[31] >> 7) & 1;
        if needs_sub == 0 {
            for i in (0..32).rev() {
                if output[i] > P_BYTES[i] {
                    needs_sub = 1;
                    break;
                } else if output[i] < P_BYTES[i] {
                    break;
                }
            }
        }

        if needs_sub == 1 {
            let mut borrow: i16 = 0;
            for i in 0..32 {
                let diff = output[i] as i16 - P_BYTES[i] as i16 - borrow;
                if diff < 0 {
                    output[i] = (diff + 256) as u8;
                    borrow = 1;
                } else {
                    output[i] = diff as u8;
                    borrow = 0;
                }
            }
        }

        output
    }

    /// Reduce to a normalized-limb representative of the same field value.
    pub fn reduce(&self) -> Self {
        let mut h = self.0;
        let mut carry: i64;

        carry = (h[0] + (1 << 25)) >> 26;
        h[1] += carry;
        h[0] -= carry << 26;
        carry = (h[4] + (1 << 25)) >> 26;
        h[5] += carry;
        h[4] -= carry << 26;
        carry = (h[1] + (1 << 24)) >> 25;
        h[2] += carry;
        h[1] -= carry << 25;
        carry = (h[5] + (1 << 24)) >> 25;
        h[6] += carry;
        h[5] -= carry << 25;
        carry = (h[2] + (1 << 25)) >> 26;
        h[3] += carry;
        h[2] -= carry << 26;
        carry = (h[6] + (1 << 25)) >> 26;
        h[7] += carry;
        h[6] -= carry << 26;
        carry = (h[3] + (1 << 24)) >> 25;
        h[4] += carry;
        h[3] -= carry << 25;
        carry = (h[7] + (1 << 24)) >> 25;
        h[8] += carry;
        h[7] -= carry << 25;
        carry = (h[8] + (1 << 25)) >> 26;
        h[9] += carry;
        h[8] -= carry << 26;

        for _ in 0..3 {
            carry = h[9] >> 25;
            h[0] += carry * 19;
            h[9] -= carry << 25;
            carry = h[0] >> 26;
            h[1] += carry;
            h[0] -= carry << 26;
            carry = h[1] >> 25;
            h[2] += carry;
            h[1] -= carry << 25;
        }

        FieldElement(h)
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    #[inline]
    pub fn square2(&self) -> Self {
        let sq = self.square();
        sq + sq
    }

    #[inline]
    fn pow2k(&self, k: u32) -> Self {
        debug_assert!(k > 0);
        let mut z = self.square().reduce();
        for _ in 1..k {
            z = z.square().reduce();
        }
        z
    }

    fn pow22501(&self) -> (Self, Self) {
        let t0 = self.square().reduce();
        let mut t1 = t0.square().reduce();
        t1 = t1.square().reduce();
        let t2 = (*self * t1).reduce();
        let t3 = (t0 * t2).reduce();
        let t4 = t3.square().reduce();
        let t5 = (t2 * t4).reduce();
        let t6 = t5.pow2k(5);
        let t7 = (t6 * t5).reduce();
        let t8 = t7.pow2k(10);
        let t9 = (t8 * t7).reduce();
        let t10 = t9.pow2k(20);
        let t11 = (t10 * t9).reduce();
        let t12 = t11.pow2k(10);
        let t13 = (t12 * t7).reduce();
        let t14 = t13.pow2k(50);
        let t15 = (t14 * t13).reduce();
        let t16 = t15.pow2k(100);
        let t17 = (t16 * t15).reduce();
        let t18 = t17.pow2k(50);
        let t19 = (t18 * t13).reduce();

        (t19, t3)
    }

    fn pow22523(&self) -> Self {
        let (t19, _) = self.pow22501();
        let t20 = t19.pow2k(2);
        (t20 * *self).reduce()
    }

    /// `self^((p-5)/8)`, the exponent used by the `sqrt_ratio` candidate step.
    #[inline]
    fn pow_p58(&self) -> Self {
        self.pow22523()
    }

    /// Candidate-and-check square root of `u/v`.
    ///
    /// Returns `(true, r)` with `r^2 == u/v` when a root exists, otherwise
    /// `(false, _)` with an unspecified `r`.
    fn sqrt_ratio(u: &Self, v: &Self) -> (bool, Self) {
        let v2 = v.square().reduce();
        let v3 = (v2 * *v).reduce();
        let v6 = v3.square().reduce();
        let v7 = (v6 * *v).reduce();

        let u_v3 = (*u * v3).reduce();
        let u_v7 = (*u * v7).reduce();

        let pow = u_v7.pow_p58();
        let mut r = (u_v3 * pow).reduce();

        let vxx = (*v * r.square()).reduce();
        let m_root_check = (vxx - *u).reduce();
        let p_root_check = (vxx + *u).reduce();
        let u_sqrt_m1 = (*u * Self::SQRT_M1).reduce();
        let f_root_check = (vxx + u_sqrt_m1).reduce();

        let has_m_root = m_root_check.is_zero();
        let has_p_root = p_root_check.is_zero();
        let has_f_root = f_root_check.is_zero();

        if has_p_root || has_f_root {
            r = (r * Self::SQRT_M1).reduce();
        }
        if has_p_root {
            r = (-r).reduce();
        }
        if r.is_negative() {
            r = (-r).reduce();
        }

        (has_m_root || has_p_root, r)
    }

    /// Euler's criterion: `true` iff `self` is a quadratic residue mod p.
    pub fn is_square(&self) -> bool {
        let a = self.reduce();
        if a.is_zero() {
            return true;
        }
        let one = FieldElement::one();
        Self::sqrt_ratio(&a, &one).0
    }

    /// `Some(r)` with `r^2 == self` if `self` is a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        let a = self.reduce();
        if a.is_zero() {
            return Some(FieldElement::zero());
        }
        let one = FieldElement::one();
        let (is_square, root) = Self::sqrt_ratio(&a, &one);
        is_square.then_some(root)
    }

    /// `u/v` with a square root, or `None` if `u/v` is not a quadratic residue.
    ///
    /// Used directly by point decoding instead of inverting `v` and taking
    /// `sqrt` separately — this shortcut computes the root without ever
    /// forming `v^-1` on its own.
    pub fn sqrt_ratio_u_v(u: &Self, v: &Self) -> (bool, Self) {
        Self::sqrt_ratio(u, v)
    }

    /// Multiplicative inverse via Fermat's little theorem (`self^(p-2)`).
    ///
    /// # Panics
    ///
    /// Never panics, but callers must not rely on a meaningful result when
    /// `self` is zero: `0^(p-2) mod p == 0`, which is not an inverse.
    pub fn invert(&self) -> Self {
        let (t19, t3) = self.pow22501();
        let t20 = t19.pow2k(5);
        (t20 * t3).reduce()
    }

    /// `true` if `self` is canonically zero.
    pub fn is_zero(&self) -> bool {
        let reduced = self.reduce();
        let bytes = reduced.to_bytes();
        bytes.iter().all(|&b| b == 0)
    }

    /// Sign convention used throughout: the parity of the canonical encoding's
    /// low bit.
    pub fn is_negative(&self) -> bool {
        let bytes = self.to_bytes();
        (bytes[0] & 1) == 1
    }

    /// Canonical equality: compares reduced byte encodings, not raw limbs.
    pub fn equals(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }

    /// Select `a` if `choice.into() == 1`, otherwise `b`, without a data
    /// dependent branch.
    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mask = -(choice.unwrap_u8() as i64);
        let mut result = [0i64; 10];
        for i in 0..10 {
            result[i] = b.0[i] ^ (mask & (a.0[i] ^ b.0[i]));
        }
        FieldElement(result)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut h = [0i64; 10];
        for i in 0..10 {
            h[i] = self.0[i] + other.0[i];
        }
        FieldElement(h)
    }
}

impl Sub for FieldElement {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut h = [0i64; 10];
        for i in 0..10 {
            h[i] = self.0[i] - other.0[i];
        }
        FieldElement(h)
    }
}

impl Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self {
        FieldElement::zero() - self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Schoolbook multiplication with interleaved reduction by 19, matching
    /// the libsodium `fe25519_mul` carry chain.
    fn mul(self, other: Self) -> Self {
        let f = self.0;
        let g = other.0;

        let f: [i128; 10] = std::array::from_fn(|i| f[i] as i128);
        let g: [i128; 10] = std::array::from_fn(|i| g[i] as i128);

        let f1_2 = 2 * f[1];
        let f3_2 = 2 * f[3];
        let f5_2 = 2 * f[5];
        let f7_2 = 2 * f[7];
        let f9_2 = 2 * f[9];

        let g1_19 = 19 * g[1];
        let g2_19 = 19 * g[2];
        let g3_19 = 19 * g[3];
        let g4_19 = 19 * g[4];
        let g5_19 = 19 * g[5];
        let g6_19 = 19 * g[6];
        let g7_19 = 19 * g[7];
        let g8_19 = 19 * g[8];
        let g9_19 = 19 * g[9];

        let mut h = [0i128; 10];

        h[0] = f[0] * g[0]
            + f1_2 * g9_19
            + f[2] * g8_19
            + f3_2 * g7_19
            + f[4] * g6_19
            + f5_2 * g5_19
            + f[6] * g4_19
            + f7_2 * g3_19
            + f[8] * g2_19
            + f9_2 * g1_19;

        h[1] = f[0] * g[1]
            + f[1] * g[0]
            + f[2] * g9_19
            + f[3] * g8_19
            + f[4] * g7_19
            + f[5] * g6_19
            + f[6] * g5_19
            + f[7] * g4_19
            + f[8] * g3_19
            + f[9] * g2_19;

        h[2] = f[0] * g[2]
            + f1_2 * g[1]
            + f[2] * g[0]
            + f3_2 * g9_19
            + f[4] * g8_19
            + f5_2 * g7_19
            + f[6] * g6_19
            + f7_2 * g5_19
            + f[8] * g4_19
            + f9_2 * g3_19;

        h[3] = f[0] * g[3]
            + f[1] * g[2]
            + f[2] * g[1]
            + f[3] * g[0]
            + f[4] * g9_19
            + f[5] * g8_19
            + f[6] * g7_19
            + f[7] * g6_19
            + f[8] * g5_19
            + f[9] * g4_19;

        h[4] = f[0] * g[4]
            + f1_2 * g[3]
            + f[2] * g[2]
            + f3_2 * g[1]
            + f[4] * g[0]
            + f5_2 * g9_19
            + f[6] * g8_19
            + f7_2 * g7_19
            + f[8] * g6_19
            + f9_2 * g5_19;

        h[5] = f[0] * g[5]
            + f[1] * g[4]
            + f[2] * g[3]
            + f[3] * g[2]
            + f[4] * g[1]
            + f[5] * g[0]
            + f[6] * g9_19
            + f[7] * g8_19
            + f[8] * g7_19
            + f[9] * g6_19;

        h[6] = f[0] * g[6]
            + f1_2 * g[5]
            + f[2] * g[4]
            + f3_2 * g[3]
            + f[4] * g[2]
            + f5_2 * g[1]
            + f[6] * g[0]
            + f7_2 * g9_19
            + f[8] * g8_19
            + f9_2 * g7_19;

        h[7] = f[0] * g[7]
            + f[1] * g[6]
            + f[2] * g[5]
            + f[3] * g[4]
            + f[4] * g[3]
            + f[5] * g[2]
            + f[6] * g[1]
            + f[7] * g[0]
            + f[8] * g9_19
            + f[9] * g8_19;

        h[8] = f[0] * g[8]
            + f1_2 * g[7]
            + f[2] * g[6]
            + f3_2 * g[5]
            + f[4] * g[4]
            + f5_2 * g[3]
            + f[6] * g[2]
            + f7_2 * g[1]
            + f[8] * g[0]
            + f9_2 * g9_19;

        h[9] = f[0] * g[9]
            + f[1] * g[8]
            + f[2] * g[7]
            + f[3] * g[6]
            + f[4] * g[5]
            + f[5] * g[4]
            + f[6] * g[3]
            + f[7] * g[2]
            + f[8] * g[1]
            + f[9] * g[0];

        let mut carry: i128;

        carry = (h[0] + (1i128 << 25)) >> 26;
        h[1] += carry;
        h[0] -= carry << 26;
        carry = (h[4] + (1i128 << 25)) >> 26;
        h[5] += carry;
        h[4] -= carry << 26;
        carry = (h[1] + (1i128 << 24)) >> 25;
        h[2] += carry;
        h[1] -= carry << 25;
        carry = (h[5] + (1i128 << 24)) >> 25;
        h[6] += carry;
        h[5] -= carry << 25;
        carry = (h[2] + (1i128 << 25)) >> 26;
        h[3] += carry;
        h[2] -= carry << 26;
        carry = (h[6] + (1i128 << 25)) >> 26;
        h[7] += carry;
        h[6] -= carry << 26;
        carry = (h[3] + (1i128 << 24)) >> 25;
        h[4] += carry;
        h[3] -= carry << 25;
        carry = (h[7] + (1i128 << 24)) >> 25;
        h[8] += carry;
        h[7] -= carry << 25;
        carry = (h[8] + (1i128 << 25)) >> 26;
        h[9] += carry;
        h[8] -= carry << 26;
        carry = (h[9] + (1i128 << 24)) >> 25;
        h[0] += carry * 19;
        h[9] -= carry << 25;
        carry = h[0] >> 26;
        h[1] += carry;
        h[0] -= carry << 26;

        let h_i64: [i64; 10] = std::array::from_fn(|i| h[i] as i64);
        FieldElement(h_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_one() {
        assert_eq!(FieldElement::zero().0[0], 0);
        assert_eq!(FieldElement::one().0[0], 1);
        assert_eq!((FieldElement::zero() + FieldElement::one()).reduce().0[0], 1);
    }

    #[test]
    fn addition_and_multiplication() {
        let one = FieldElement::one();
        let two = one + one;
        assert_eq!(two.reduce().0[0], 2);
        let four = two * two;
        assert_eq!(four.reduce().0[0], 4);
    }

    #[test]
    fn square_matches_self_mul() {
        let two = FieldElement::from_u64(2);
        assert_eq!(two.square().reduce(), (two * two).reduce());
    }

    #[test]
    fn bytes_roundtrip() {
        let one = FieldElement::one();
        assert_eq!(FieldElement::from_bytes(&one.to_bytes()).to_bytes(), one.to_bytes());

        let zero = FieldElement::zero();
        assert_eq!(FieldElement::from_bytes(&zero.to_bytes()).to_bytes(), zero.to_bytes());
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let fe = FieldElement::from_u64(5);
        let inv = fe.invert();
        assert_eq!((fe * inv).reduce(), FieldElement::one());
    }

    #[test]
    fn sqrt_of_four_is_plus_or_minus_two() {
        let four = FieldElement::from_u64(4);
        let root = four.sqrt().expect("4 is a quadratic residue");
        assert_eq!(root.square().reduce(), four.reduce());
    }

    #[test]
    fn sqrt_minus_one_matches_constant() {
        let minus_one = -FieldElement::one();
        let root = minus_one.sqrt().expect("sqrt(-1) exists in GF(2^255-19)");
        assert_eq!(root.square().reduce(), minus_one.reduce());
        assert!(root == FieldElement::SQRT_M1 || root == -FieldElement::SQRT_M1);
    }

    #[test]
    fn non_residue_has_no_sqrt() {
        // 2 is known to be a non-residue mod p = 2^255-19.
        assert!(FieldElement::from_u64(2).sqrt().is_none());
    }

    #[test]
    fn edwards_d_matches_known_encoding() {
        // d = -121665/121666 mod p, first byte of its canonical LE encoding
        // is 0xa3 in every published edwards25519 test vector.
        assert_eq!(FieldElement::edwards_d().to_bytes()[0], 0xa3);
    }
}
