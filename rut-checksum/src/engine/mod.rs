//! The modulo-11 checksum over a RUT correlative.
//!
//! Digits are read right to left and multiplied by the repeating weights
//! 2..=7. Any non-digit byte is skipped, so `b"23.831.058"` and `b"23831058"`
//! produce the same result.

use crate::digit::CheckDigit;
use crate::weights::WeightCycle;
use crate::MODULUS;

/// Computes the check digit of a correlative given as ASCII bytes.
///
/// The running sum is kept reduced modulo 11, which leaves the result
/// unchanged and keeps arbitrarily long inputs from overflowing.
/// An input with no digits yields `0`.
pub fn compute_check_digit(correlative: &[u8]) -> CheckDigit {
    let sum = correlative
        .iter()
        .rev()
        .filter(|b| b.is_ascii_digit())
        .map(|b| u32::from(b - b'0'))
        .zip(WeightCycle::new())
        .fold(0u32, |acc, (digit, weight)| (acc + digit * weight) % MODULUS);

    CheckDigit::from_remainder_complement(MODULUS - sum)
}

/// Returns `true` when `supplied` is the check digit of `correlative`,
/// comparing `k` and `K` as equal.
pub fn verify(correlative: &[u8], supplied: char) -> bool {
    compute_check_digit(correlative).matches_char(supplied)
}
