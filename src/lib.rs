//! # tatefield
//!
//! Arithmetic in GF(3) and its polynomial-basis extensions GF(3^m), the
//! base fields of Tate pairings on supersingular curves in characteristic
//! three.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tatefield = "0.3"
//! ```
//!
//! ```
//! use tatefield::prelude::*;
//!
//! let field = Gf3m::gf3_97();
//! let x = field.from_trits(&[0, 1]).unwrap();
//! let x_inv = field.invert(&x).unwrap();
//! assert!(field.mul(&x, &x_inv).is_one());
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and `std::error::Error` impls
//! - `alloc`: heap-backed field elements for `no_std` targets
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tatefield-api`]: the error type and the `FiniteField` trait
//! - [`tatefield-params`]: the table of irreducible trinomials
//! - [`tatefield-algorithms`]: GF(3) and GF(3^m) arithmetic

#![cfg_attr(not(feature = "std"), no_std)]

pub use tatefield_algorithms as algorithms;
pub use tatefield_api as api;
pub use tatefield_params as params;

// Re-export the crates that appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for tatefield users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::FiniteField;

    // Field types
    pub use crate::algorithms::{Gf3, Gf3m, Gf3mElement, TrinomialTable};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_prelude_round_trip() {
        let field = Gf3m::gf3_97();
        let mut rng = ChaCha20Rng::seed_from_u64(97);
        let a = field.random(&mut rng);
        let b = field.random(&mut rng);

        let quotient = field.div(&a, &b).unwrap();
        assert_eq!(field.mul(&quotient, &b), a);
    }

    #[test]
    fn test_reexported_constant_time_eq() {
        use crate::subtle::ConstantTimeEq;

        let field = Gf3m::gf3_97();
        let one = field.one();
        assert!(bool::from(one.ct_eq(&field.one())));
        assert!(!bool::from(one.ct_eq(&field.two())));
    }

    #[test]
    fn test_errors_surface_as_api_errors() {
        fn invert_generic<F: FiniteField>(field: &F) -> Result<F::Element> {
            field.invert(&field.zero())
        }

        let err = invert_generic(&Gf3m::gf3_97()).unwrap_err();
        assert!(matches!(err, Error::InvertZero { .. }));
    }
}
