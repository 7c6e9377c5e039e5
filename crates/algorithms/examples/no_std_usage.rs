// This example demonstrates how the field arithmetic can be used in a no_std
// environment even though it's being compiled with std available
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tatefield_algorithms::{Error, Gf3, Gf3m, Gf3mElement};

// x · x⁻¹ = 1 in the standard pairing field
fn inversion_example() -> Result<Gf3mElement, Error> {
    let field = Gf3m::gf3_97();
    let x = field.from_trits(&[0, 1])?;
    let x_inv = field.invert(&x)?;
    Ok(field.mul(&x, &x_inv))
}

// Cubing is the Frobenius map; applying it m times is the identity
fn frobenius_example() -> Result<bool, Error> {
    let field = Gf3m::new(7)?;
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let a = field.random(&mut rng);
    Ok(field.frobenius(&a, field.degree()) == a)
}

// Traces of the first few powers of x
fn trace_example() -> Result<Vec<Gf3>, Error> {
    let field = Gf3m::gf3_97();
    let x = field.from_trits(&[0, 1])?;
    let mut power = field.one();
    let mut traces = Vec::new();
    for _ in 0..5 {
        traces.push(field.trace(&power)?);
        power = field.mul(&power, &x);
    }
    Ok(traces)
}

#[cfg(feature = "std")]
fn main() {
    let one = inversion_example().expect("x is invertible");
    println!("x · x⁻¹ is one: {}", one.is_one());

    let fixed = frobenius_example().expect("degree 7 is registered");
    println!("Frobenius^m is the identity: {}", fixed);

    let traces = trace_example().expect("trace failed");
    println!("Tr(x^i) for i < 5: {:?}", traces);
}

#[cfg(not(feature = "std"))]
fn main() {
    let _ = inversion_example();
    let _ = frobenius_example();
    let _ = trace_example();
}
