//! Testing utilities and known-answer vectors for the tatefield library

pub mod vectors;

use tatefield_algorithms::{Gf3, Gf3m, Gf3mElement};

/// Decode `index` as base-3 digits (least significant first) into an element.
///
/// Enumerating `0..3^m` with this visits every element of GF(3^m) once.
pub fn element_from_index(field: &Gf3m, mut index: u64) -> Gf3mElement {
    let mut trits = Vec::with_capacity(field.degree());
    for _ in 0..field.degree() {
        trits.push(Gf3::from_u8_reduced((index % 3) as u8));
        index /= 3;
    }
    field.reduce(trits)
}

/// Number of elements of GF(3^m), if it fits in a u64
pub fn field_order(field: &Gf3m) -> Option<u64> {
    3u64.checked_pow(field.degree() as u32)
}
