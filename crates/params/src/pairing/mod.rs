//! Constants for characteristic-three pairing fields

pub mod gf3m;
