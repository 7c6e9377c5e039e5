//! GF(3^m) element representation

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Neg, Sub};

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::linear;
use crate::field::gf3::Gf3;

/// A polynomial-basis element of GF(3^m)
///
/// Index `i` holds the coefficient of x^i. Elements produced by a
/// [`Gf3m`](super::Gf3m) field are canonical: exactly `m` coefficients,
/// trailing zeros included. The buffer is zeroized on drop.
///
/// The `+`, `-` and negation operators work coefficient-wise on the stored
/// buffers; the [`Gf3m`](super::Gf3m) methods also reduce mixed-length
/// operands to the field's degree.
#[derive(Clone, PartialEq, Eq, Hash, Zeroize, ZeroizeOnDrop)]
pub struct Gf3mElement {
    coeffs: Vec<Gf3>,
}

impl Gf3mElement {
    /// Wrap a coefficient buffer. Callers guarantee the canonical length.
    pub(crate) fn from_coeffs(coeffs: Vec<Gf3>) -> Self {
        Self { coeffs }
    }

    /// Coefficients in ascending degree order
    pub fn as_slice(&self) -> &[Gf3] {
        &self.coeffs
    }

    /// Copy of the coefficients in ascending degree order
    pub fn to_vec(&self) -> Vec<Gf3> {
        self.coeffs.clone()
    }

    /// Coefficients as plain integers in {0, 1, 2}
    pub fn to_trits(&self) -> Vec<u8> {
        self.coeffs.iter().map(|c| c.value()).collect()
    }

    /// Coefficient of x^i; zero past the end of the buffer
    pub fn coefficient(&self, i: usize) -> Gf3 {
        self.coeffs.get(i).copied().unwrap_or(Gf3::ZERO)
    }

    /// Number of stored coefficients (the extension degree for canonical elements)
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Whether the buffer holds no coefficients at all
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if the element is the additive identity
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Check if the element is the multiplicative identity
    pub fn is_one(&self) -> bool {
        match self.coeffs.split_first() {
            Some((&first, rest)) => first == Gf3::ONE && rest.iter().all(|c| c.is_zero()),
            None => false,
        }
    }

    /// Degree of the represented polynomial, `None` for zero
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }
}

impl fmt::Debug for Gf3mElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf3mElement[")?;
        for c in &self.coeffs {
            write!(f, "{}", c.value())?;
        }
        write!(f, "]")
    }
}

impl ConstantTimeEq for Gf3mElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.coeffs.len() != other.coeffs.len() {
            return Choice::from(0);
        }
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl AsRef<[Gf3]> for Gf3mElement {
    fn as_ref(&self) -> &[Gf3] {
        &self.coeffs
    }
}

impl Add for &Gf3mElement {
    type Output = Gf3mElement;

    fn add(self, other: Self) -> Gf3mElement {
        Gf3mElement::from_coeffs(linear::add(&self.coeffs, &other.coeffs))
    }
}

impl Add for Gf3mElement {
    type Output = Gf3mElement;

    fn add(self, other: Self) -> Gf3mElement {
        &self + &other
    }
}

impl Sub for &Gf3mElement {
    type Output = Gf3mElement;

    fn sub(self, other: Self) -> Gf3mElement {
        Gf3mElement::from_coeffs(linear::sub(&self.coeffs, &other.coeffs))
    }
}

impl Sub for Gf3mElement {
    type Output = Gf3mElement;

    fn sub(self, other: Self) -> Gf3mElement {
        &self - &other
    }
}

impl Neg for &Gf3mElement {
    type Output = Gf3mElement;

    fn neg(self) -> Gf3mElement {
        Gf3mElement::from_coeffs(linear::neg(&self.coeffs))
    }
}

impl Neg for Gf3mElement {
    type Output = Gf3mElement;

    fn neg(self) -> Gf3mElement {
        -&self
    }
}
