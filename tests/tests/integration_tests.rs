//! Cross-crate integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tatefield_algorithms::{Error, Gf3, Gf3m, TrinomialTable};
use tatefield_api::{Error as CoreError, FiniteField, ResultExt};
use tatefield_params::pairing::gf3m::{trinomial_middle, IRREDUCIBLE_TRINOMIALS};
use tatefield_tests::vectors::{INVERSE_VECTORS, TOP_FOLD_VECTORS};
use tatefield_tests::{element_from_index, field_order};

#[test]
fn test_inverse_vectors() {
    for &(degree, a, expected) in INVERSE_VECTORS {
        let field = Gf3m::new(degree).unwrap();
        let a = field.from_trits(a).unwrap();
        let expected = field.from_trits(expected).unwrap();
        assert_eq!(field.invert(&a).unwrap(), expected, "degree {}", degree);
    }
}

#[test]
fn test_top_fold_vectors() {
    for &(m, t) in TOP_FOLD_VECTORS {
        let field = Gf3m::new(m).unwrap();
        let mut x_m = vec![Gf3::ZERO; m + 1];
        x_m[m] = Gf3::ONE;

        let mut expected = vec![Gf3::ZERO; m];
        expected[0] = Gf3::ONE;
        expected[t] = Gf3::TWO;
        assert_eq!(field.reduce(x_m).as_slice(), &expected[..]);
    }
}

#[test]
fn test_small_fields_are_fields() {
    // Exhaustive for the two smallest table entries (243 and 2187 elements)
    for degree in [5usize, 7] {
        let field = Gf3m::new(degree).unwrap();
        let order = field_order(&field).unwrap();
        for index in 1..order {
            let a = element_from_index(&field, index);
            let inv = field.invert(&a).unwrap();
            assert!(field.mul(&a, &inv).is_one(), "degree {} element {:?}", degree, a);
        }
    }
}

#[test]
fn test_every_table_entry_inverts() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for &(m, t) in IRREDUCIBLE_TRINOMIALS {
        assert_eq!(trinomial_middle(m), Some(t));
        let field = Gf3m::new(m).unwrap();
        let a = field.random(&mut rng);
        if a.is_zero() {
            continue;
        }
        let inv = field.invert(&a).unwrap();
        assert!(field.mul(&a, &inv).is_one(), "GF(3^{})", m);
    }
}

#[test]
fn test_custom_table_registration() {
    let mut table = TrinomialTable::standard();
    assert!(Gf3m::from_table(&table, 4).is_err());

    // x^4 + x + 2 is irreducible over GF(3)
    table.register(4, 1).unwrap();
    let field = Gf3m::from_table(&table, 4).unwrap();
    for index in 1..field_order(&field).unwrap() {
        let a = element_from_index(&field, index);
        assert!(field.mul(&a, &field.invert(&a).unwrap()).is_one());
    }
}

#[test]
fn test_errors_convert_to_api_errors() {
    let field = Gf3m::gf3_97();

    let err: CoreError = field.invert(&field.zero()).unwrap_err().into();
    assert_eq!(err, CoreError::InvertZero { context: "GF(3^m) inverse" });

    let err: CoreError = Gf3m::new(10).unwrap_err().into();
    assert_eq!(err, CoreError::UnsupportedDegree { degree: 10 });

    let err = field
        .element_from(&[Gf3::ONE; 98])
        .with_context("pairing input")
        .unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidLength { context: "pairing input", expected: 97, actual: 98 }
    );

    assert!(matches!(Gf3::new(5), Err(Error::Parameter { .. })));
}

#[test]
fn test_generic_field_usage() {
    fn fermat_check<F: FiniteField>(field: &F, a: &F::Element, group_order: u64) -> bool {
        field.pow_u64(a, group_order) == field.one()
    }

    let field = Gf3m::new(7).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let a = field.random(&mut rng);
    if !a.is_zero() {
        assert!(fermat_check(&field, &a, 3u64.pow(7) - 1));
    }
}
