//! Known-answer vectors
//!
//! Inverses below were checked by multiplying back to one; elements are
//! written as low-degree-first trit lists.

/// `(degree, a, a⁻¹)` triples
pub const INVERSE_VECTORS: &[(usize, &[u8], &[u8])] = &[
    // GF(3^5), x^5 + x^4 + 2
    (5, &[0, 1], &[0, 0, 0, 1, 1]),
    (5, &[1, 1], &[0, 0, 0, 0, 1]),
    (5, &[2], &[2]),
    // GF(3^7), x^7 + x^2 + 2: x⁻¹ = x^6 + x
    (7, &[0, 1], &[0, 1, 0, 0, 0, 0, 1]),
];

/// `(m, t)` pairs for which x^m must reduce to 2·x^t + 1
pub const TOP_FOLD_VECTORS: &[(usize, usize)] = &[(5, 4), (7, 2), (97, 12), (193, 12)];
