//! Characteristic-three finite fields
//!
//! This module provides GF(3) scalar arithmetic and polynomial-basis
//! arithmetic in the extensions GF(3^m) = GF(3)[x] / (x^m + x^t + 2)
//! used by Tate pairings over supersingular curves in characteristic three.
//! The extension layer calls into the scalar layer for every coefficient
//! operation; the scalar layer has no dependencies.

pub mod gf3;
pub mod gf3m;
pub mod trinomial;

pub use gf3::Gf3;
pub use gf3m::{Gf3m, Gf3mElement};
pub use trinomial::TrinomialTable;
