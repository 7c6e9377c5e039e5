//! Arithmetic traits implemented by the tatefield field types

pub mod field;

pub use field::FiniteField;
