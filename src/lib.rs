//! Pure Rust edwards25519 / Ed25519 / Ristretto255 implementation.
//!
//! No elliptic-curve dependency: the field, the group law, point
//! encoding/decoding, scalar multiplication, RFC 8032 EdDSA, and the
//! Ristretto255 prime-order group are all implemented from scratch on top
//! of this crate's own [`field::FieldElement`]. SHA-512 is the one external
//! collaborator, via `sha2`.
//!
//! This crate does not claim constant-time behavior beyond the algorithmic
//! choice of a fixed-width field representation; it performs no batch
//! verification, no key derivation beyond RFC 8032 clamping, and exposes
//! only the one-way `toX25519` projection (no X25519 key agreement).

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod debug;
pub mod eddsa;
pub mod field;
pub mod point;
pub mod ristretto;
pub mod scalar;

pub use eddsa::{get_public_key, sign, verify, Bytes32, Signature, SignatureInput};
pub use field::FieldElement;
pub use point::{EdwardsPoint, BASE_POINT};
pub use ristretto::{CompressedRistretto, RistrettoPoint};
pub use scalar::Scalar;

/// The field prime `p = 2^255 - 19`, as a 32-byte little-endian encoding.
pub const P: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x7f,
];

/// The prime subgroup order `ell = 2^252 + 27742317777372353535851937790883648493`,
/// as a 32-byte little-endian encoding.
pub const PRIME_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// Errors produced by this crate.
///
/// Four kinds, matching the error taxonomy this crate follows: malformed
/// input shape (wrong length, unparsable hex), a decode failure (a byte
/// string that is syntactically the right length but is not the canonical
/// encoding of any valid point/scalar), and an arithmetic-domain failure
/// (an operation undefined at the given input, such as inverting zero).
/// A signature that fails to verify is *not* an error — `verify` returns
/// `Ok(false)` for that case.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input had the wrong number of bytes.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// Hex input contained non-hex characters or an odd number of digits.
    #[error("invalid hex encoding")]
    InvalidHex,

    /// A scalar encoding was `>= ell` (not canonical).
    #[error("scalar encoding is not canonically reduced mod the group order")]
    NonCanonicalScalar,

    /// A point's `y` coordinate was not a canonical field encoding, or its
    /// sign bit was set despite `x == 0`.
    #[error("point encoding is not canonical")]
    NonCanonicalPoint,

    /// No square root exists for the candidate `x^2`; the encoded `y` does
    /// not correspond to any point on the curve.
    #[error("point is not on the curve")]
    PointDecompressionFailed,

    /// A Ristretto255 encoding failed canonicality or curve-membership
    /// checks during decode.
    #[error("ristretto255 encoding is not canonical")]
    NonCanonicalRistretto,

    /// Attempted to invert the zero element.
    #[error("cannot invert zero")]
    InverseOfZero,

    /// `toX25519` is undefined at `y == 1` (the point maps to the
    /// Montgomery curve's point at infinity).
    #[error("edwards point has no corresponding montgomery u-coordinate")]
    ToX25519Undefined,
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;
