//! Public API traits and types for the tatefield library
//!
//! This crate provides the public API surface shared by the tatefield
//! crates: the cross-crate error type and the arithmetic traits that
//! field implementations expose.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::FiniteField;

// Re-export trait modules for direct access
pub use traits::field;
