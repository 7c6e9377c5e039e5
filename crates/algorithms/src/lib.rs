//! Characteristic-three field arithmetic for pairing-based cryptography
//!
//! This crate implements GF(3) and its polynomial-basis extensions GF(3^m),
//! the base fields of Tate pairings on supersingular curves in
//! characteristic three. The standard instance is GF(3^97) reduced by the
//! irreducible trinomial x^97 + x^12 + 2.
//!
//! The library is usable in `no_std` environments with an allocator.
//!
//! # Security Notes
//!
//! - Field elements are zeroized when dropped
//! - Equality can be checked in constant time via `subtle::ConstantTimeEq`
//! - The arithmetic itself (multiplication, inversion) is variable-time

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Finite field implementations
pub mod field;
pub use field::{Gf3, Gf3m, Gf3mElement, TrinomialTable};
