//! Scalar ring arithmetic modulo `ℓ = 2^252 + 27742317777372353535851937790883648493`
//!
//! `ell` is the prime order of the edwards25519 base point's subgroup.
//! Implemented with `num-bigint`-backed modular arithmetic (`mod_add`-style
//! helpers inlined as methods) rather than a fixed-width representation,
//! since the ring's modulus is only ~253 bits and BigUint's general modpow
//! already gives a correct, reasonably fast inverse.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::Error;

static ELL: Lazy<BigUint> = Lazy::new(|| {
    let two_252 = BigUint::from(1u32) << 252u32;
    two_252 + BigUint::from(27742317777372353535851937790883648493u128)
});

/// An element of `Z/ellZ`, the scalar ring used for private keys, nonces,
/// and signature scalars.
///
/// Invariant: the internal value always satisfies `0 <= s < ell`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scalar(BigUint);

impl Scalar {
    pub fn zero() -> Self {
        Scalar(BigUint::zero())
    }

    pub fn one() -> Self {
        Scalar(BigUint::one())
    }

    /// Reduce a 32-byte little-endian integer modulo `ell`.
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        let value = BigUint::from_bytes_le(bytes);
        Scalar(value % &*ELL)
    }

    /// Reduce a 64-byte little-endian integer modulo `ell`.
    ///
    /// Used to fold a SHA-512 digest (a signing nonce or a verification
    /// challenge) into a scalar.
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        let value = BigUint::from_bytes_le(bytes);
        Scalar(value % &*ELL)
    }

    /// Parse a 32-byte little-endian integer, rejecting values `>= ell`.
    ///
    /// Signature scalars `s` must pass this check during verification:
    /// silently reducing would accept forged signatures with `s' = s + ell`.
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> Result<Self, Error> {
        let value = BigUint::from_bytes_le(bytes);
        if value >= *ELL {
            return Err(Error::NonCanonicalScalar);
        }
        Ok(Scalar(value))
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let le = self.0.to_bytes_le();
        out[..le.len()].copy_from_slice(&le);
        out
    }

    /// Lowercase hex encoding of [`Scalar::to_bytes`].
    pub fn to_hex(&self) -> String {
        hex_encode(&self.to_bytes())
    }

    /// Parse a hex string produced by [`Scalar::to_hex`].
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex_decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidLength { expected: 32, actual: bytes.len() })?;
        Self::from_canonical_bytes(&arr)
    }

    pub fn add(&self, other: &Self) -> Self {
        Scalar((&self.0 + &other.0) % &*ELL)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let ell = &*ELL;
        let a = &self.0 % ell;
        let b = &other.0 % ell;
        if a >= b {
            Scalar(a - b)
        } else {
            Scalar(ell - (b - a))
        }
    }

    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Scalar((&self.0 * &other.0) % &*ELL)
    }

    /// Multiplicative inverse mod `ell`, via Fermat's little theorem
    /// (`ell` is prime, so `self^(ell-2)` is the inverse of any nonzero
    /// element).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InverseOfZero`] if `self` is the zero scalar.
    pub fn invert(&self) -> Result<Self, Error> {
        if self.0.is_zero() {
            return Err(Error::InverseOfZero);
        }
        let ell = &*ELL;
        let exponent = ell - BigUint::from(2u32);
        Ok(Scalar(self.0.modpow(&exponent, ell)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Construct a scalar directly from a small integer, for constants and
    /// tests.
    pub fn from_u64(value: u64) -> Self {
        Scalar(BigUint::from(value))
    }

    /// The group order `ell` itself, as a 32-byte encoding (note: this is
    /// *not* a valid element of `Z/ellZ` under the ring invariant — it
    /// exists so callers can exercise the "`s == ell` must be rejected"
    /// edge case).
    pub fn modulus_as_bytes() -> [u8; 32] {
        let mut out = [0u8; 32];
        let le = ELL.to_bytes_le();
        out[..le.len()].copy_from_slice(&le);
        out
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(&mut s, "{b:02x}").expect("writing to a String cannot fail");
    }
    s
}

fn hex_decode(s: &str) -> Result<Vec<u8>, Error> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return Err(Error::InvalidHex);
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| Error::InvalidHex))
        .collect()
}
