//! RFC 8032 clamping invariants: for any 32-byte seed, the clamped secret
//! exponent `a` has its bottom three bits cleared (divisible by the curve's
//! cofactor 8), its top bit cleared, and its second-highest bit set — so
//! `2^254 <= a < 2^255`.

use ed25519_ristretto::get_public_key;
use num_bigint::BigUint;
use sha2::{Digest, Sha512};

fn clamped_a_for_seed(seed: &[u8; 32]) -> [u8; 32] {
    let digest = Sha512::digest(seed);
    let mut a = [0u8; 32];
    a.copy_from_slice(&digest[..32]);
    a[0] &= 248;
    a[31] &= 127;
    a[31] |= 64;
    a
}

#[test]
fn clamped_exponent_satisfies_range_and_divisibility_invariants() {
    let two_254 = BigUint::from(1u32) << 254u32;
    let two_255 = BigUint::from(1u32) << 255u32;

    for seed_byte in [0u8, 1, 7, 42, 255] {
        let seed = [seed_byte; 32];
        let a_bytes = clamped_a_for_seed(&seed);

        assert_eq!(a_bytes[0] & 0x07, 0, "a mod 8 must be 0");
        assert_eq!(a_bytes[31] & 0x80, 0, "top bit clear (a < 2^255)");
        assert_eq!(a_bytes[31] & 0x40, 0x40, "second-highest bit set (a >= 2^254)");

        let a = BigUint::from_bytes_le(&a_bytes);
        assert!(a >= two_254 && a < two_255);
        assert_eq!(&a % 8u32, BigUint::from(0u32));

        // get_public_key must succeed for every seed, regardless of content.
        assert!(get_public_key(seed).is_ok());
    }
}
