//! Inversion in GF(3^m)
//!
//! Extended-Euclidean variant with degree bookkeeping after Kerins,
//! Popovici and Marnane. Four accumulators R, S, U, V are kept as
//! fixed `m + 1` slot buffers; slot `m` is the "top" position whose
//! coefficients drive every step. Invariants across rounds:
//!
//! - U and V stay reduced, so their top slot is always zero,
//! - slot `m` of S is zero after the elimination step, so multiplying
//!   S by x never drops a nonzero term,
//! - `d` is the degree gap between S and R; it is only decremented while
//!   positive and therefore never goes negative.
//!
//! After exactly 2m rounds R's top slot holds a unit c ∈ {1, 2} with
//! a·U ≡ c, so a⁻¹ = c·U.

use alloc::vec;
use core::mem;

use zeroize::Zeroize;

use super::element::Gf3mElement;
use super::linear;
use super::Gf3m;
use crate::error::{validate, Error, Result};
use crate::field::gf3::Gf3;

impl Gf3m {
    /// Multiplicative inverse a⁻¹ mod P(x)
    ///
    /// Fails with [`Error::InvertZero`] for the zero element. With a
    /// caller-registered reducible trinomial, zero divisors are reported
    /// as [`Error::Other`] instead of producing a wrong value.
    pub fn invert(&self, a: &Gf3mElement) -> Result<Gf3mElement> {
        let a = self.canonical(a);
        validate::nonzero(a.is_zero(), "GF(3^m) inverse")?;

        let m = self.degree;
        let mut s = self.modulus();
        let mut r = vec![Gf3::ZERO; m + 1];
        r[..m].copy_from_slice(a.as_slice());
        let mut u = vec![Gf3::ZERO; m + 1];
        u[0] = Gf3::ONE;
        let mut v = vec![Gf3::ZERO; m + 1];
        let mut d: usize = 0;

        for _ in 0..2 * m {
            let r_m = r[m];
            if r_m.is_zero() {
                // Nothing to eliminate yet: raise R one degree.
                super::reduce::shift_up(&mut r);
                self.mul_by_x_in_place(&mut u);
                d += 1;
            } else {
                // r_m is its own inverse in GF(3), so q = r_m⁻¹ · s_m.
                let q = r_m * s[m];
                linear::sub_scaled_assign(&mut s, q, &r);
                linear::sub_scaled_assign(&mut v, q, &u);
                super::reduce::shift_up(&mut s);
                if d == 0 {
                    mem::swap(&mut r, &mut s);
                    mem::swap(&mut u, &mut v);
                    self.mul_by_x_in_place(&mut u);
                    d = 1;
                } else {
                    self.div_by_x_in_place(&mut u);
                    d -= 1;
                }
            }
        }

        let lead = r[m];
        let result = if lead.is_zero() {
            Err(Error::Other("element is not invertible modulo the registered trinomial"))
        } else {
            Ok(Gf3mElement::from_coeffs(linear::scale(&u[..m], lead)))
        };

        r.zeroize();
        s.zeroize();
        u.zeroize();
        v.zeroize();
        result
    }

    /// Field division a / b
    pub fn div(&self, a: &Gf3mElement, b: &Gf3mElement) -> Result<Gf3mElement> {
        let b_inv = self.invert(b)?;
        Ok(self.mul(a, &b_inv))
    }
}
