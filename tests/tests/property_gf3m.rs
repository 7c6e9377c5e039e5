//! Property-based tests for GF(3^97) arithmetic

use proptest::prelude::*;
use tatefield_algorithms::{Gf3, Gf3m, Gf3mElement};

const M: usize = 97;

fn field() -> Gf3m {
    Gf3m::gf3_97()
}

/// Uniform GF(3^97) elements built from 97 arbitrary trits
fn element() -> impl Strategy<Value = Gf3mElement> {
    prop::collection::vec(0u8..3, M).prop_map(|trits| field().from_trits(&trits).unwrap())
}

fn nonzero_element() -> impl Strategy<Value = Gf3mElement> {
    element().prop_filter("non-zero element", |a| !a.is_zero())
}

/// Working-form buffers longer than m, as produced mid-multiplication
fn wide_buffer() -> impl Strategy<Value = Vec<Gf3>> {
    prop::collection::vec(0u8..3, M..3 * M)
        .prop_map(|v| v.into_iter().map(Gf3::from_u8_reduced).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn addition_commutes(a in element(), b in element()) {
        let f = field();
        prop_assert_eq!(f.add(&a, &b), f.add(&b, &a));
    }

    #[test]
    fn addition_associates(a in element(), b in element(), c in element()) {
        let f = field();
        prop_assert_eq!(f.add(&f.add(&a, &b), &c), f.add(&a, &f.add(&b, &c)));
    }

    #[test]
    fn additive_identity_and_inverse(a in element()) {
        let f = field();
        prop_assert_eq!(f.add(&a, &f.zero()), a.clone());
        prop_assert_eq!(f.add(&a, &f.neg(&a)), f.zero());
        prop_assert_eq!(f.sub(&a, &a), f.zero());
    }

    #[test]
    fn multiplication_commutes(a in element(), b in element()) {
        let f = field();
        prop_assert_eq!(f.mul(&a, &b), f.mul(&b, &a));
    }

    #[test]
    fn multiplication_associates(a in element(), b in element(), c in element()) {
        let f = field();
        prop_assert_eq!(f.mul(&f.mul(&a, &b), &c), f.mul(&a, &f.mul(&b, &c)));
    }

    #[test]
    fn multiplicative_identity(a in element()) {
        let f = field();
        prop_assert_eq!(f.mul(&a, &f.one()), a);
    }

    #[test]
    fn multiplication_distributes(a in element(), b in element(), c in element()) {
        let f = field();
        prop_assert_eq!(
            f.mul(&a, &f.add(&b, &c)),
            f.add(&f.mul(&a, &b), &f.mul(&a, &c))
        );
    }

    #[test]
    fn cubing_matches_multiplication(a in element()) {
        let f = field();
        prop_assert_eq!(f.cubic(&a), f.mul(&f.mul(&a, &a), &a));
    }

    #[test]
    fn cube_root_inverts_cubing(a in element()) {
        let f = field();
        prop_assert_eq!(f.cube_root(&f.cubic(&a)), a);
    }

    #[test]
    fn inverse_multiplies_to_one(a in nonzero_element()) {
        let f = field();
        let inv = f.invert(&a).unwrap();
        prop_assert_eq!(f.mul(&a, &inv), f.one());
    }

    #[test]
    fn inverse_is_multiplicative(a in nonzero_element(), b in nonzero_element()) {
        let f = field();
        let ab_inv = f.invert(&f.mul(&a, &b)).unwrap();
        let a_inv_b_inv = f.mul(&f.invert(&a).unwrap(), &f.invert(&b).unwrap());
        prop_assert_eq!(ab_inv, a_inv_b_inv);
    }

    #[test]
    fn reduction_is_idempotent(buf in wide_buffer()) {
        let f = field();
        let once = f.reduce(buf);
        prop_assert_eq!(once.len(), M);
        prop_assert_eq!(f.reduce_element(&once), once);
    }

    #[test]
    fn reduction_respects_addition(x in wide_buffer(), y in wide_buffer()) {
        let f = field();
        let len = x.len().max(y.len());
        let mut sum: Vec<Gf3> = vec![Gf3::ZERO; len];
        tatefield_algorithms::field::gf3m::linear::add_into(&x, &y, &mut sum).unwrap();
        prop_assert_eq!(f.reduce(sum), f.add(&f.reduce(x), &f.reduce(y)));
    }

    #[test]
    fn list_round_trip(a in element()) {
        let f = field();
        prop_assert_eq!(f.element_from(&a.to_vec()).unwrap(), a);
    }

    #[test]
    fn trace_lands_in_ground_field_linearly(a in element(), b in element(), k in 0u8..3) {
        let f = field();
        let k = Gf3::from_u8_reduced(k);
        prop_assert_eq!(
            f.trace(&f.add(&f.scalar_mul(&a, k), &b)).unwrap(),
            k * f.trace(&a).unwrap() + f.trace(&b).unwrap()
        );
    }
}
