//! Multiplicative operations in GF(3^m)

use alloc::vec;

use zeroize::Zeroize;

use super::element::Gf3mElement;
use super::linear;
use super::Gf3m;
use crate::error::{Error, Result};
use crate::field::gf3::Gf3;

impl Gf3m {
    /// Field multiplication: (a · b) mod P(x)
    ///
    /// Schoolbook shift-and-add: the running copy of `a` is multiplied by x
    /// and reduced after each digit of `b`, so both the accumulator and the
    /// scratch copy stay at canonical size. O(m²) trit operations.
    pub fn mul(&self, a: &Gf3mElement, b: &Gf3mElement) -> Gf3mElement {
        let m = self.degree;
        let a = self.canonical(a);
        let b = self.canonical(b);

        let mut acc = vec![Gf3::ZERO; m];
        // One extra slot absorbs the x^m term produced by each shift.
        let mut scratch = vec![Gf3::ZERO; m + 1];
        scratch[..m].copy_from_slice(a.as_slice());

        let digits = b.as_slice();
        for (i, &digit) in digits.iter().enumerate() {
            linear::add_scaled_assign(&mut acc, digit, &scratch[..m]);
            if i + 1 < digits.len() {
                self.mul_by_x_in_place(&mut scratch);
            }
        }

        scratch.zeroize();
        Gf3mElement::from_coeffs(acc)
    }

    /// Field squaring
    pub fn square(&self, a: &Gf3mElement) -> Gf3mElement {
        self.mul(a, a)
    }

    /// Multiply every coefficient by a GF(3) scalar
    pub fn scalar_mul(&self, a: &Gf3mElement, k: Gf3) -> Gf3mElement {
        self.reduce(linear::scale(a.as_slice(), k))
    }

    /// Cubing: a³ mod P(x)
    ///
    /// In characteristic three (Σ aᵢxⁱ)³ = Σ aᵢx³ⁱ because the cross terms
    /// carry the factors C(3,1) = C(3,2) = 3. The coefficients are spread to
    /// every third slot of a 3m − 2 buffer and reduced, which is O(m).
    pub fn cubic(&self, a: &Gf3mElement) -> Gf3mElement {
        let m = self.degree;
        let a = self.canonical(a);
        let mut spread = vec![Gf3::ZERO; 3 * m - 2];
        for (i, &c) in a.as_slice().iter().enumerate() {
            spread[3 * i] = c;
        }
        self.reduce(spread)
    }

    /// The k-th power of the Frobenius map: a^(3^k)
    ///
    /// The map has order m on GF(3^m), so `k` is taken modulo m.
    pub fn frobenius(&self, a: &Gf3mElement, k: usize) -> Gf3mElement {
        let mut result = self.canonical(a).into_owned();
        for _ in 0..(k % self.degree) {
            result = self.cubic(&result);
        }
        result
    }

    /// Cube root: the unique b with b³ = a, computed as a^(3^(m−1))
    pub fn cube_root(&self, a: &Gf3mElement) -> Gf3mElement {
        self.frobenius(a, self.degree - 1)
    }

    /// Absolute trace Tr(a) = Σ_{i<m} a^(3^i), an element of GF(3)
    ///
    /// The sum is fixed by Frobenius only when P(x) is irreducible. With a
    /// reducible trinomial a non-constant sum is reported as
    /// [`Error::Other`].
    pub fn trace(&self, a: &Gf3mElement) -> Result<Gf3> {
        let a = self.canonical(a);
        let mut sum = a.to_vec();
        let mut conj = a.into_owned();
        for _ in 1..self.degree {
            conj = self.cubic(&conj);
            linear::add_scaled_assign(&mut sum, Gf3::ONE, conj.as_slice());
        }
        let constant = sum[1..].iter().all(|c| c.is_zero());
        let t = sum[0];
        sum.zeroize();
        if !constant {
            return Err(Error::Other("trace is not in GF(3) modulo the registered trinomial"));
        }
        Ok(t)
    }

    /// Exponentiation by a big-endian byte string (square-and-multiply)
    ///
    /// Not constant-time. `pow(a, [])` and `pow(0, [0])` both give one.
    pub fn pow(&self, a: &Gf3mElement, exp_be: &[u8]) -> Gf3mElement {
        let mut result = self.one();
        for &byte in exp_be {
            for bit in (0..8).rev() {
                result = self.square(&result);
                if (byte >> bit) & 1 == 1 {
                    result = self.mul(&result, a);
                }
            }
        }
        result
    }
}
