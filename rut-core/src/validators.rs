// File: rut-core/src/validators.rs
//! Check digit computation and full RUT validation.
//!
//! Validation is two-staged: a strict layout check first, then the modulo-11
//! checksum. The layout accepts `10-8`, `50.323-1`, `2.323.434-3` and
//! `23.831.058-K`, but not `23831058-K` (a correlative longer than three
//! digits must be grouped) nor `238620` (no hyphen).
//!
//! License: MIT OR APACHE 2.0

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use rut_checksum::{compute_check_digit, verify};

use crate::sanitizers::{fully_sanitise, sanitise};

/// Shortest accepted RUT, e.g. `10-8`.
pub const MIN_RUT_LENGTH: usize = 4;
/// Longest accepted RUT, e.g. `99.999.999-9`.
pub const MAX_RUT_LENGTH: usize = 12;

// `[0-9]` instead of `\d`: the regex crate's `\d` is Unicode-aware.
static RUT_LAYOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,3}(?:\.[0-9]{3}){0,2}-[0-9kK]$")
        .expect("RUT layout pattern is a valid regex")
});

/// Computes the check digit for a correlative.
///
/// Non-digit characters (separators, a stray `K`) are ignored, so
/// `check_digit("23.831.058")` and `check_digit("23831058")` agree.
/// An empty correlative yields `'0'`. The result is always one of `0`-`9` or `K`.
pub fn check_digit(correlative: &str) -> char {
    let digits = fully_sanitise(correlative);
    compute_check_digit(digits.as_bytes()).as_char()
}

/// Returns `true` if `rut` has the dotted/hyphenated layout, without looking at
/// the checksum.
pub fn has_valid_layout(rut: &str) -> bool {
    if !(MIN_RUT_LENGTH..=MAX_RUT_LENGTH).contains(&rut.len()) {
        trace!("Rejecting RUT of length {}: outside {}..={}", rut.len(), MIN_RUT_LENGTH, MAX_RUT_LENGTH);
        return false;
    }
    if !RUT_LAYOUT.is_match(rut) {
        trace!("Rejecting RUT of length {}: layout does not match", rut.len());
        return false;
    }
    true
}

/// Splits a sanitised RUT into its correlative and its trailing check character.
///
/// Returns `None` for an empty string.
pub(crate) fn split_check_char(sanitised: &str) -> Option<(&str, char)> {
    let mut chars = sanitised.chars();
    let check = chars.next_back()?;
    Some((chars.as_str(), check))
}

/// Validates a RUT string.
///
/// The input must match the layout `X.XXX.XXX-V` (one to three leading
/// digits, up to two further groups of exactly three, a hyphen, then a digit or
/// `K`/`k`), be 4 to 12 characters long, and carry the correct check digit.
/// `k` and `K` are interchangeable.
///
/// # Returns
///
/// `true` if the RUT is well formed and its check digit matches, `false`
/// otherwise. This function never panics.
pub fn validate(rut: &str) -> bool {
    if !has_valid_layout(rut) {
        return false;
    }

    let sanitised = sanitise(rut);
    let Some((correlative, supplied)) = split_check_char(&sanitised) else {
        return false;
    };

    let is_valid = verify(correlative.as_bytes(), supplied);
    if !is_valid {
        trace!("Rejecting RUT of length {}: check digit mismatch", rut.len());
    }
    is_valid
}
