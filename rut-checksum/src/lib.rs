// rut-checksum/src/lib.rs
//! Modulo-11 check digit engine for Chilean RUTs.
//!
//! This crate only knows about digits and weights. Separators, formatting and
//! the accepted textual layouts live in `rut-core`.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod digit;
pub mod engine;
pub mod weights;

pub use digit::{CheckDigit, InvalidCheckDigit};
pub use engine::{compute_check_digit, verify};

/// The modulus of the RUT checksum.
pub const MODULUS: u32 = 11;
