//! Constant values for tatefield field arithmetic
//!
//! This crate provides the field parameters shared across the tatefield
//! project. It has no dependencies and is always `no_std`.

#![no_std]

pub mod pairing;
