//! GF(3) scalar arithmetic
//!
//! The ground field of three elements. Every operation is a lookup in a
//! 3×3 (or 3-entry) table indexed by trit values, so no operation branches
//! on its operands.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

const ADD_TABLE: [[u8; 3]; 3] = [[0, 1, 2], [1, 2, 0], [2, 0, 1]];
const SUB_TABLE: [[u8; 3]; 3] = [[0, 2, 1], [1, 0, 2], [2, 1, 0]];
const MUL_TABLE: [[u8; 3]; 3] = [[0, 0, 0], [0, 1, 2], [0, 2, 1]];
const NEG_TABLE: [u8; 3] = [0, 2, 1];

/// An element of GF(3), i.e. a trit in {0, 1, 2}
///
/// The wrapped value is always reduced; constructors that accept raw bytes
/// either validate or reduce modulo 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroize)]
pub struct Gf3(u8);

impl Gf3 {
    /// The additive identity
    pub const ZERO: Gf3 = Gf3(0);
    /// The multiplicative identity
    pub const ONE: Gf3 = Gf3(1);
    /// The element 2 ≡ −1
    pub const TWO: Gf3 = Gf3(2);

    /// Number of elements in the field
    pub const ORDER: u8 = 3;

    /// Create a trit, rejecting values outside {0, 1, 2}
    pub fn new(value: u8) -> Result<Self> {
        validate::parameter(value < Self::ORDER, "trit", "value must be 0, 1 or 2")?;
        Ok(Gf3(value))
    }

    /// Create a trit from any byte by reducing it modulo 3
    #[inline]
    pub const fn from_u8_reduced(value: u8) -> Self {
        Gf3(value % Self::ORDER)
    }

    /// The trit as a plain integer in {0, 1, 2}
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if the trit is zero
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// (a + b) mod 3
    #[inline(always)]
    pub const fn add(self, other: Self) -> Self {
        Gf3(ADD_TABLE[self.0 as usize][other.0 as usize])
    }

    /// (3 − a) mod 3, so that neg(0) = 0
    #[inline(always)]
    pub const fn neg(self) -> Self {
        Gf3(NEG_TABLE[self.0 as usize])
    }

    /// (a − b) mod 3
    #[inline(always)]
    pub const fn sub(self, other: Self) -> Self {
        Gf3(SUB_TABLE[self.0 as usize][other.0 as usize])
    }

    /// (a · b) mod 3
    #[inline(always)]
    pub const fn mul(self, other: Self) -> Self {
        Gf3(MUL_TABLE[self.0 as usize][other.0 as usize])
    }

    /// Multiplicative inverse. Both nonzero trits are their own inverse
    /// (1·1 = 1, 2·2 = 4 ≡ 1).
    pub fn invert(self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::InvertZero { context: "GF(3) inverse" });
        }
        Ok(self)
    }

    /// Sample a uniformly distributed trit
    ///
    /// Uses rejection sampling on single bytes: 255 is discarded so the
    /// remaining 255 values split evenly over the three residues.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let mut byte = [0u8; 1];
            rng.fill_bytes(&mut byte);
            if byte[0] < 255 {
                return Gf3(byte[0] % Self::ORDER);
            }
        }
    }
}

impl TryFrom<u8> for Gf3 {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Gf3::new(value)
    }
}

impl From<Gf3> for u8 {
    fn from(t: Gf3) -> u8 {
        t.0
    }
}

impl core::fmt::Display for Gf3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ConstantTimeEq for Gf3 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gf3 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gf3(u8::conditional_select(&a.0, &b.0, choice))
    }
}

impl Add for Gf3 {
    type Output = Gf3;

    fn add(self, rhs: Gf3) -> Gf3 {
        Gf3::add(self, rhs)
    }
}

impl Sub for Gf3 {
    type Output = Gf3;

    fn sub(self, rhs: Gf3) -> Gf3 {
        Gf3::sub(self, rhs)
    }
}

impl Mul for Gf3 {
    type Output = Gf3;

    fn mul(self, rhs: Gf3) -> Gf3 {
        Gf3::mul(self, rhs)
    }
}

impl Neg for Gf3 {
    type Output = Gf3;

    fn neg(self) -> Gf3 {
        Gf3::neg(self)
    }
}

impl AddAssign for Gf3 {
    fn add_assign(&mut self, rhs: Gf3) {
        *self = Gf3::add(*self, rhs);
    }
}

impl SubAssign for Gf3 {
    fn sub_assign(&mut self, rhs: Gf3) {
        *self = Gf3::sub(*self, rhs);
    }
}

impl MulAssign for Gf3 {
    fn mul_assign(&mut self, rhs: Gf3) {
        *self = Gf3::mul(*self, rhs);
    }
}
