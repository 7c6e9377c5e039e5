//! GF(3^m) arithmetic in polynomial basis
//!
//! The field is GF(3)[x] / (P(x)) with the irreducible trinomial
//! P(x) = x^m + x^t + 2. A [`Gf3m`] value describes one such field
//! (degree `m`, middle exponent `t`) and carries every operation;
//! elements are plain [`Gf3mElement`] coefficient buffers.
//!
//! - Field polynomial for the standard pairing field: x^97 + x^12 + 2
//! - Cubing is a linear map (Frobenius) and costs O(m)
//! - Arithmetic is variable-time

mod element;
mod inverse;
pub mod linear;
mod mul;
mod reduce;

pub use element::Gf3mElement;

use alloc::vec;
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use tatefield_api::{FiniteField, Result as CoreResult};
use tatefield_params::pairing::gf3m::{
    trinomial_middle, GF3M_97_DEGREE, GF3M_97_TRINOMIAL_MIDDLE,
};

use super::gf3::Gf3;
use super::trinomial::TrinomialTable;
use crate::error::{validate, Error, Result};

/// 3^5 = 243: five uniform trits fit in one byte below this bound
const TRITS_PER_BYTE: usize = 5;
const BYTE_REJECTION_BOUND: u8 = 243;

/// Descriptor of the field GF(3^m) = GF(3)[x] / (x^m + x^t + 2)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gf3m {
    degree: usize,
    middle: usize,
}

impl Gf3m {
    /// The standard pairing field GF(3^97) with P(x) = x^97 + x^12 + 2
    pub const fn gf3_97() -> Self {
        Self {
            degree: GF3M_97_DEGREE,
            middle: GF3M_97_TRINOMIAL_MIDDLE,
        }
    }

    /// Field of degree `m` using the built-in trinomial table
    pub fn new(degree: usize) -> Result<Self> {
        let middle = trinomial_middle(degree).ok_or(Error::UnsupportedDegree { degree })?;
        Ok(Self { degree, middle })
    }

    /// Field of degree `m` using a caller-maintained trinomial table
    pub fn from_table(table: &TrinomialTable, degree: usize) -> Result<Self> {
        let middle = table.middle_exponent(degree)?;
        Self::with_trinomial(degree, middle)
    }

    /// Field defined by x^m + x^t + 2 for an explicit `(m, t)`
    ///
    /// Irreducibility is not checked; see [`TrinomialTable::register`].
    pub fn with_trinomial(degree: usize, middle: usize) -> Result<Self> {
        validate::trinomial(degree, middle)?;
        Ok(Self { degree, middle })
    }

    /// Extension degree m
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Middle exponent t of the reduction trinomial
    pub const fn trinomial_middle(&self) -> usize {
        self.middle
    }

    /// Coefficients of P(x) = x^m + x^t + 2, `m + 1` slots
    pub fn modulus(&self) -> Vec<Gf3> {
        let mut p = vec![Gf3::ZERO; self.degree + 1];
        p[self.degree] = Gf3::ONE;
        p[self.middle] = Gf3::ONE;
        p[0] = Gf3::TWO;
        p
    }

    /* ------------------------------------------------------------ */
    /*  Constructors                                                */
    /* ------------------------------------------------------------ */

    /// The additive identity
    pub fn zero(&self) -> Gf3mElement {
        Gf3mElement::from_coeffs(vec![Gf3::ZERO; self.degree])
    }

    /// The multiplicative identity
    pub fn one(&self) -> Gf3mElement {
        self.constant(Gf3::ONE)
    }

    /// The constant 2 ≡ −1
    pub fn two(&self) -> Gf3mElement {
        self.constant(Gf3::TWO)
    }

    /// Embed a GF(3) scalar as a constant polynomial
    pub fn constant(&self, c: Gf3) -> Gf3mElement {
        let mut coeffs = vec![Gf3::ZERO; self.degree];
        coeffs[0] = c;
        Gf3mElement::from_coeffs(coeffs)
    }

    /// Element from low-degree-first coefficients, zero-padded to m
    ///
    /// Fails with a length error if more than m coefficients are given.
    pub fn element_from(&self, values: &[Gf3]) -> Result<Gf3mElement> {
        validate::max_length("GF(3^m) element", values.len(), self.degree)?;
        let mut coeffs = Vec::with_capacity(self.degree);
        coeffs.extend_from_slice(values);
        coeffs.resize(self.degree, Gf3::ZERO);
        Ok(Gf3mElement::from_coeffs(coeffs))
    }

    /// Element from plain integer trits, each of which must be 0, 1 or 2
    pub fn from_trits(&self, trits: &[u8]) -> Result<Gf3mElement> {
        validate::max_length("GF(3^m) element", trits.len(), self.degree)?;
        let values = trits
            .iter()
            .map(|&t| Gf3::new(t))
            .collect::<Result<Vec<_>>>()?;
        self.element_from(&values)
    }

    /// Uniformly random element
    ///
    /// Each accepted byte (< 243) is split into five base-3 digits, which
    /// are independent and uniform.
    pub fn random<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Gf3mElement {
        let mut coeffs = Vec::with_capacity(self.degree);
        let mut buf = [0u8; 32];
        while coeffs.len() < self.degree {
            rng.fill_bytes(&mut buf);
            for &byte in buf.iter().filter(|&&b| b < BYTE_REJECTION_BOUND) {
                let mut digits = byte;
                for _ in 0..TRITS_PER_BYTE {
                    if coeffs.len() == self.degree {
                        break;
                    }
                    coeffs.push(Gf3::from_u8_reduced(digits % 3));
                    digits /= 3;
                }
            }
        }
        Gf3mElement::from_coeffs(coeffs)
    }

    /* ------------------------------------------------------------ */
    /*  Linear operations                                           */
    /* ------------------------------------------------------------ */

    // Inputs of any length are accepted; the result is always reduced to m
    // coefficients.

    /// Coefficient-wise sum
    pub fn add(&self, a: &Gf3mElement, b: &Gf3mElement) -> Gf3mElement {
        self.reduce(linear::add(a.as_slice(), b.as_slice()))
    }

    /// Additive inverse
    pub fn neg(&self, a: &Gf3mElement) -> Gf3mElement {
        self.reduce(linear::neg(a.as_slice()))
    }

    /// Coefficient-wise difference
    pub fn sub(&self, a: &Gf3mElement, b: &Gf3mElement) -> Gf3mElement {
        self.reduce(linear::sub(a.as_slice(), b.as_slice()))
    }
}

impl FiniteField for Gf3m {
    type Element = Gf3mElement;

    fn zero(&self) -> Gf3mElement {
        Gf3m::zero(self)
    }

    fn one(&self) -> Gf3mElement {
        Gf3m::one(self)
    }

    fn add(&self, a: &Gf3mElement, b: &Gf3mElement) -> Gf3mElement {
        Gf3m::add(self, a, b)
    }

    fn sub(&self, a: &Gf3mElement, b: &Gf3mElement) -> Gf3mElement {
        Gf3m::sub(self, a, b)
    }

    fn neg(&self, a: &Gf3mElement) -> Gf3mElement {
        Gf3m::neg(self, a)
    }

    fn mul(&self, a: &Gf3mElement, b: &Gf3mElement) -> Gf3mElement {
        Gf3m::mul(self, a, b)
    }

    fn invert(&self, a: &Gf3mElement) -> CoreResult<Gf3mElement> {
        Gf3m::invert(self, a).map_err(Into::into)
    }

    fn square(&self, a: &Gf3mElement) -> Gf3mElement {
        Gf3m::square(self, a)
    }
}
