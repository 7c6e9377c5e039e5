//! Reduction modulo the trinomial P(x) = x^m + x^t + 2
//!
//! In GF(3)[x]/(P) we have x^m ≡ −x^t − 2 ≡ −x^t + 1, so a term v·x^e
//! with e ≥ m is folded into v·x^(e−m) (constant part, added) and
//! v·x^(e−m+t) (middle part, subtracted).

use alloc::borrow::Cow;
use alloc::vec::Vec;

use super::element::Gf3mElement;
use super::Gf3m;
use crate::field::gf3::Gf3;

/// Fold every coefficient at index ≥ `m` back below `m`, in place.
///
/// Scans strictly from the top index down to `m`, so terms created by a
/// fold (always at lower indices) are picked up later in the same pass
/// whenever they still lie at or above `m`. Folded slots are cleared, which
/// leaves the buffer reusable as scratch without reallocation.
pub(crate) fn reduce_in_place(coeffs: &mut [Gf3], m: usize, t: usize) {
    for exp in (m..coeffs.len()).rev() {
        let v = coeffs[exp];
        if v.is_zero() {
            continue;
        }
        coeffs[exp] = Gf3::ZERO;
        coeffs[exp - m + t] -= v;
        coeffs[exp - m] += v;
    }
}

/// Multiply by x: move every coefficient one slot up.
///
/// The top slot is discarded, so callers keep it zero beforehand.
#[inline]
pub(crate) fn shift_up(coeffs: &mut [Gf3]) {
    debug_assert!(coeffs.last().map_or(true, |c| c.is_zero()));
    let n = coeffs.len();
    if n == 0 {
        return;
    }
    coeffs.copy_within(0..n - 1, 1);
    coeffs[0] = Gf3::ZERO;
}

/// Move every coefficient one slot down, clearing the top slot.
///
/// Exact division by x when the constant slot is zero.
#[inline]
pub(crate) fn shift_down(coeffs: &mut [Gf3]) {
    let n = coeffs.len();
    if n == 0 {
        return;
    }
    coeffs.copy_within(1..n, 0);
    coeffs[n - 1] = Gf3::ZERO;
}

impl Gf3m {
    /// Reduce a working-form buffer to a canonical element.
    ///
    /// Buffers longer than `m` are folded and truncated; shorter buffers
    /// are already reduced and only get zero-padded. Reducing an element
    /// that is already canonical returns it unchanged.
    pub fn reduce(&self, mut coeffs: Vec<Gf3>) -> Gf3mElement {
        self.reduce_slice(&mut coeffs);
        coeffs.resize(self.degree, Gf3::ZERO);
        Gf3mElement::from_coeffs(coeffs)
    }

    /// Reduce a working-form buffer in place.
    ///
    /// After the call every slot at index ≥ `m` is zero and the first `m`
    /// slots hold the reduced representative.
    pub fn reduce_slice(&self, coeffs: &mut [Gf3]) {
        reduce_in_place(coeffs, self.degree, self.middle);
    }

    /// Reduce an element (possibly from a wider working computation) again.
    pub fn reduce_element(&self, a: &Gf3mElement) -> Gf3mElement {
        self.reduce(a.to_vec())
    }

    /// Canonical representative of `a` in this field
    ///
    /// Buffers of the wrong length (from a wider computation or another
    /// degree) are folded modulo P(x) and zero-padded to `m`.
    pub(crate) fn canonical<'a>(&self, a: &'a Gf3mElement) -> Cow<'a, Gf3mElement> {
        if a.len() == self.degree {
            Cow::Borrowed(a)
        } else {
            Cow::Owned(self.reduce_element(a))
        }
    }

    /// `u ← x·u mod P` on an `m + 1` slot buffer whose top slot is zero
    #[inline]
    pub(crate) fn mul_by_x_in_place(&self, u: &mut [Gf3]) {
        shift_up(u);
        reduce_in_place(u, self.degree, self.middle);
    }

    /// `u ← u / x mod P` on an `m + 1` slot buffer whose top slot is zero
    ///
    /// Adds `u₀ · P(x)`, which clears the constant term because
    /// P(0) = 2 and u₀ + 2u₀ ≡ 0, then divides exactly by x.
    #[inline]
    pub(crate) fn div_by_x_in_place(&self, u: &mut [Gf3]) {
        let c = u[0];
        if !c.is_zero() {
            u[0] += c * Gf3::TWO;
            u[self.middle] += c;
            u[self.degree] += c;
        }
        debug_assert!(u[0].is_zero());
        shift_down(u);
    }
}
