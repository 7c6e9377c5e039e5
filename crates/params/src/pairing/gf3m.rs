//! Irreducible trinomials for GF(3^m)
//!
//! Each entry `(m, t)` names the trinomial P(x) = x^m + x^t + 2 over GF(3).
//! All listed degrees are prime, and for each the smallest middle exponent
//! making P(x) irreducible was taken.

/// Extension degree of the standard characteristic-three pairing field GF(3^97)
pub const GF3M_97_DEGREE: usize = 97;

/// Middle exponent of x^97 + x^12 + 2
pub const GF3M_97_TRINOMIAL_MIDDLE: usize = 12;

/// Known irreducible trinomials x^m + x^t + 2, as `(m, t)` pairs sorted by degree
pub const IRREDUCIBLE_TRINOMIALS: &[(usize, usize)] = &[
    (5, 4),
    (7, 2),
    (11, 2),
    (13, 4),
    (17, 16),
    (19, 2),
    (23, 8),
    (29, 4),
    (31, 20),
    (37, 6),
    (41, 40),
    (43, 26),
    (47, 32),
    (53, 22),
    (59, 20),
    (61, 30),
    (67, 2),
    (71, 20),
    (73, 30),
    (79, 26),
    (83, 32),
    (89, 64),
    (GF3M_97_DEGREE, GF3M_97_TRINOMIAL_MIDDLE),
    (151, 2),
    (163, 80),
    (167, 92),
    (193, 12),
    (239, 24),
];

/// Look up the middle exponent for degree `m` in [`IRREDUCIBLE_TRINOMIALS`]
pub const fn trinomial_middle(m: usize) -> Option<usize> {
    let mut i = 0;
    while i < IRREDUCIBLE_TRINOMIALS.len() {
        let (degree, middle) = IRREDUCIBLE_TRINOMIALS[i];
        if degree == m {
            return Some(middle);
        }
        i += 1;
    }
    None
}
