//! RFC 8032 Ed25519 signing and verification.
//!
//! The clamped secret scalar and the SHA-512 hash prefix are kept in
//! `zeroize::Zeroizing`: a few intermediate buffers genuinely hold private
//! key material and should not linger in memory after use.

use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use crate::debug;
use crate::point::{EdwardsPoint, BASE_POINT};
use crate::scalar::Scalar;
use crate::Error;

/// A 32-byte value that may arrive as raw bytes or as a hex string, so
/// callers are not forced to pre-encode every key and digest as a fixed
/// byte array.
#[derive(Clone, Debug)]
pub enum Bytes32 {
    Raw([u8; 32]),
    Hex(String),
}

impl Bytes32 {
    fn resolve(&self) -> Result<[u8; 32], Error> {
        match self {
            Bytes32::Raw(bytes) => Ok(*bytes),
            Bytes32::Hex(s) => {
                let bytes = decode_hex(s)?;
                bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| Error::InvalidLength { expected: 32, actual: bytes.len() })
            }
        }
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Bytes32::Raw(bytes)
    }
}

impl From<&str> for Bytes32 {
    fn from(s: &str) -> Self {
        Bytes32::Hex(s.to_string())
    }
}

impl From<String> for Bytes32 {
    fn from(s: String) -> Self {
        Bytes32::Hex(s)
    }
}

/// A 64-byte EdDSA signature, `R || s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
}

impl Signature {
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Signature { r, s }
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = decode_hex(s)?;
        let arr: [u8; 64] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidLength { expected: 64, actual: bytes.len() })?;
        Ok(Self::from_bytes(&arr))
    }
}

/// A 64- or 32-byte signature that may arrive as raw bytes or hex.
#[derive(Clone, Debug)]
pub enum SignatureInput {
    Raw([u8; 64]),
    Hex(String),
}

impl SignatureInput {
    fn resolve(&self) -> Result<Signature, Error> {
        match self {
            SignatureInput::Raw(bytes) => Ok(Signature::from_bytes(bytes)),
            SignatureInput::Hex(s) => Signature::from_hex(s),
        }
    }
}

impl From<[u8; 64]> for SignatureInput {
    fn from(bytes: [u8; 64]) -> Self {
        SignatureInput::Raw(bytes)
    }
}

impl From<Signature> for SignatureInput {
    fn from(sig: Signature) -> Self {
        SignatureInput::Raw(sig.to_bytes())
    }
}

impl From<&str> for SignatureInput {
    fn from(s: &str) -> Self {
        SignatureInput::Hex(s.to_string())
    }
}

/// Clamp a 32-byte scalar seed per RFC 8032 §5.1.2 step 1: clear the low 3
/// bits, clear the top bit, set the second-highest bit. The clamped integer
/// is used *unreduced* as the secret exponent `a` — only `s` gets reduced
/// mod `ell`.
fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
    bytes
}

struct ExpandedSecret {
    clamped_a: [u8; 32],
    prefix: [u8; 32],
}

fn expand_secret(seed: &[u8; 32]) -> ExpandedSecret {
    let mut hasher = Sha512::new();
    hasher.update(seed);
    let digest = Zeroizing::new(hasher.finalize());

    let mut lower = [0u8; 32];
    let mut prefix = [0u8; 32];
    lower.copy_from_slice(&digest[..32]);
    prefix.copy_from_slice(&digest[32..]);

    ExpandedSecret {
        clamped_a: clamp(lower),
        prefix,
    }
}

fn hash_to_scalar_wide(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    Scalar::from_bytes_mod_order_wide(&wide)
}

/// Derive the public key `A = [a]·B` for a 32-byte secret seed.
pub fn get_public_key(seed: impl Into<Bytes32>) -> Result<[u8; 32], Error> {
    let seed = seed.into().resolve()?;
    let expanded = expand_secret(&seed);
    let a = BASE_POINT.scalar_mul_bytes(&expanded.clamped_a);
    Ok(a.compress())
}

/// Sign `message` under the secret seed.
pub fn sign(seed: impl Into<Bytes32>, message: &[u8]) -> Result<Signature, Error> {
    let seed = seed.into().resolve()?;
    let expanded = expand_secret(&seed);
    let clamped_a = Zeroizing::new(expanded.clamped_a);

    let public_key = BASE_POINT.scalar_mul_bytes(&clamped_a).compress();

    let nonce = hash_to_scalar_wide(&[&expanded.prefix, message]);
    let r_point = BASE_POINT.scalar_mul(&nonce);
    let r_bytes = r_point.compress();

    let challenge = hash_to_scalar_wide(&[&r_bytes, &public_key, message]);

    let a_scalar = Scalar::from_bytes_mod_order(&clamped_a);
    let s = nonce.add(&challenge.mul(&a_scalar));

    debug::log(|| format!("eddsa::sign produced R={}", hex_preview(&r_bytes)));

    Ok(Signature {
        r: r_bytes,
        s: s.to_bytes(),
    })
}

/// Verify `signature` over `message` under `public_key`.
///
/// Returns `Ok(false)` (not an error) when the signature equation does not
/// hold — only malformed inputs (wrong lengths, non-canonical point or
/// scalar encodings) produce an [`Error`].
pub fn verify(
    public_key: impl Into<Bytes32>,
    message: &[u8],
    signature: impl Into<SignatureInput>,
) -> Result<bool, Error> {
    let public_key_bytes = public_key.into().resolve()?;
    let signature = signature.into().resolve()?;

    let a_point = EdwardsPoint::decompress(&public_key_bytes)?;
    let r_point = EdwardsPoint::decompress(&signature.r)?;
    let s = Scalar::from_canonical_bytes(&signature.s)?;

    let challenge = hash_to_scalar_wide(&[&signature.r, &public_key_bytes, message]);

    let lhs = BASE_POINT.scalar_mul(&s);
    let rhs = r_point.add(&a_point.scalar_mul(&challenge));

    let ok = lhs.equals(&rhs);
    if !ok {
        debug::log(|| "eddsa::verify signature equation mismatch".to_string());
    }
    Ok(ok)
}

fn hex_preview(bytes: &[u8]) -> String {
    encode_hex(&bytes[..bytes.len().min(8)])
}

fn encode_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(&mut s, "{b:02x}").expect("writing to a String cannot fail");
    }
    s
}

fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return Err(Error::InvalidHex);
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| Error::InvalidHex))
        .collect()
}
