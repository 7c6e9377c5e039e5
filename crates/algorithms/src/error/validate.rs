//! Validation utilities for field arithmetic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate a trinomial x^m + x^t + 2 shape: `m >= 2` and `0 < t < m`
#[inline(always)]
pub fn trinomial(degree: usize, middle: usize) -> Result<()> {
    parameter(degree >= 2, "degree", "extension degree must be at least 2")?;
    parameter(middle > 0, "middle", "middle exponent must be positive")?;
    parameter(middle < degree, "middle", "middle exponent must be below the degree")
}

/// Validate that a value is not the additive identity before inverting it
#[inline(always)]
pub fn nonzero(is_zero: bool, context: &'static str) -> Result<()> {
    if is_zero {
        return Err(Error::InvertZero { context });
    }
    Ok(())
}
