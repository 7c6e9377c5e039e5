//! Coefficient-wise linear operations on trit sequences
//!
//! Inputs may differ in length (working-form buffers are longer than
//! canonical ones). Both operands are explicitly zero-padded to the common
//! length before the coefficient-wise operation, so nothing ever indexes
//! past the end of the shorter slice.

use alloc::vec::Vec;
use core::iter;

use crate::error::{validate, Result};
use crate::field::gf3::Gf3;

/// `a` followed by zeros, exactly `len` items long
#[inline]
fn padded(a: &[Gf3], len: usize) -> impl Iterator<Item = Gf3> + '_ {
    a.iter().copied().chain(iter::repeat(Gf3::ZERO)).take(len)
}

#[inline]
fn zip_padded(a: &[Gf3], b: &[Gf3], op: fn(Gf3, Gf3) -> Gf3) -> Vec<Gf3> {
    let len = a.len().max(b.len());
    padded(a, len).zip(padded(b, len)).map(|(x, y)| op(x, y)).collect()
}

#[inline]
fn zip_padded_into(
    context: &'static str,
    a: &[Gf3],
    b: &[Gf3],
    out: &mut [Gf3],
    op: fn(Gf3, Gf3) -> Gf3,
) -> Result<()> {
    let len = a.len().max(b.len());
    validate::min_length(context, out.len(), len)?;
    for ((slot, x), y) in out.iter_mut().zip(padded(a, len)).zip(padded(b, len)) {
        *slot = op(x, y);
    }
    Ok(())
}

/// Coefficient-wise sum, `max(len(a), len(b))` long
pub fn add(a: &[Gf3], b: &[Gf3]) -> Vec<Gf3> {
    zip_padded(a, b, Gf3::add)
}

/// Coefficient-wise difference, `max(len(a), len(b))` long
pub fn sub(a: &[Gf3], b: &[Gf3]) -> Vec<Gf3> {
    zip_padded(a, b, Gf3::sub)
}

/// Coefficient-wise negation
pub fn neg(a: &[Gf3]) -> Vec<Gf3> {
    a.iter().map(|&x| x.neg()).collect()
}

/// Write `a + b` into the first `max(len(a), len(b))` slots of `out`
///
/// Slots of `out` past that length are left untouched.
pub fn add_into(a: &[Gf3], b: &[Gf3], out: &mut [Gf3]) -> Result<()> {
    zip_padded_into("GF(3^m) add output", a, b, out, Gf3::add)
}

/// Write `a - b` into the first `max(len(a), len(b))` slots of `out`
pub fn sub_into(a: &[Gf3], b: &[Gf3], out: &mut [Gf3]) -> Result<()> {
    zip_padded_into("GF(3^m) sub output", a, b, out, Gf3::sub)
}

/// Write `-a` into the first `len(a)` slots of `out`
pub fn neg_into(a: &[Gf3], out: &mut [Gf3]) -> Result<()> {
    validate::min_length("GF(3^m) neg output", out.len(), a.len())?;
    for (slot, &x) in out.iter_mut().zip(a) {
        *slot = x.neg();
    }
    Ok(())
}

/// `acc += k · b`, coefficient-wise over the common prefix
///
/// Used with equally sized buffers only; `b` must not be longer than `acc`.
#[inline]
pub(crate) fn add_scaled_assign(acc: &mut [Gf3], k: Gf3, b: &[Gf3]) {
    debug_assert!(b.len() <= acc.len());
    if k.is_zero() {
        return;
    }
    for (c, &x) in acc.iter_mut().zip(b) {
        *c += k * x;
    }
}

/// `acc -= k · b`, coefficient-wise over the common prefix
#[inline]
pub(crate) fn sub_scaled_assign(acc: &mut [Gf3], k: Gf3, b: &[Gf3]) {
    add_scaled_assign(acc, k.neg(), b);
}

/// Multiply every coefficient by the scalar `k`
#[inline]
pub(crate) fn scale(a: &[Gf3], k: Gf3) -> Vec<Gf3> {
    a.iter().map(|&x| x * k).collect()
}
