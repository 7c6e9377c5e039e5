//! Trait describing a finite field through a descriptor value.
//!
//! Field elements in tatefield are plain coefficient buffers, so the
//! operations live on a small `Copy` descriptor (degree, modulus) rather
//! than on the elements themselves.

use crate::Result;
use zeroize::Zeroize;

/// A finite field whose operations are provided by a descriptor value.
pub trait FiniteField {
    /// The element representation handled by this field.
    type Element: Clone + PartialEq + core::fmt::Debug + Zeroize;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Field addition.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Field subtraction.
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Additive inverse.
    fn neg(&self, a: &Self::Element) -> Self::Element;

    /// Field multiplication.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Multiplicative inverse. Fails for the additive identity.
    fn invert(&self, a: &Self::Element) -> Result<Self::Element>;

    /// Field squaring.
    fn square(&self, a: &Self::Element) -> Self::Element {
        self.mul(a, a)
    }

    /// Exponentiation by a machine-word exponent (square-and-multiply, MSB first).
    fn pow_u64(&self, a: &Self::Element, exp: u64) -> Self::Element {
        let mut result = self.one();
        for bit in (0..64).rev() {
            result = self.square(&result);
            if (exp >> bit) & 1 == 1 {
                result = self.mul(&result, a);
            }
        }
        result
    }
}
