//! Property-based tests for field, scalar, and group-law invariants.

use ed25519_ristretto::{FieldElement, Scalar, BASE_POINT};
use proptest::prelude::*;

fn arb_field_element() -> impl Strategy<Value = FieldElement> {
    any::<u64>().prop_map(FieldElement::from_u64)
}

fn arb_scalar() -> impl Strategy<Value = Scalar> {
    any::<u64>().prop_map(Scalar::from_u64)
}

proptest! {
    #[test]
    fn field_addition_is_commutative(a in arb_field_element(), b in arb_field_element()) {
        prop_assert_eq!((a + b).reduce(), (b + a).reduce());
    }

    #[test]
    fn field_multiplication_is_commutative(a in arb_field_element(), b in arb_field_element()) {
        prop_assert_eq!((a * b).reduce(), (b * a).reduce());
    }

    #[test]
    fn field_distributes(a in arb_field_element(), b in arb_field_element(), c in arb_field_element()) {
        let lhs = (a * (b + c)).reduce();
        let rhs = (a * b + a * c).reduce();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn field_invert_roundtrips_on_nonzero(a in any::<u64>().prop_filter("nonzero", |v| *v != 0)) {
        let fe = FieldElement::from_u64(a);
        let inv = fe.invert();
        prop_assert_eq!((fe * inv).reduce(), FieldElement::one());
    }

    #[test]
    fn scalar_ring_is_abelian_group_under_addition(a in arb_scalar(), b in arb_scalar(), c in arb_scalar()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        prop_assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn scalar_multiplication_distributes_over_scalar_addition(a in arb_scalar(), b in arb_scalar()) {
        let sum = a.add(&b);
        let lhs = BASE_POINT.scalar_mul(&sum);
        let rhs = BASE_POINT.scalar_mul(&a).add(&BASE_POINT.scalar_mul(&b));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn point_addition_is_associative(a in 1u64..200, b in 1u64..200, c in 1u64..200) {
        let pa = BASE_POINT.scalar_mul(&Scalar::from_u64(a));
        let pb = BASE_POINT.scalar_mul(&Scalar::from_u64(b));
        let pc = BASE_POINT.scalar_mul(&Scalar::from_u64(c));
        prop_assert_eq!(pa.add(&pb).add(&pc), pa.add(&pb.add(&pc)));
    }
}
