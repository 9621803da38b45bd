//! errors.rs - Custom error types for the rut-core library.
//!
//! Only the checked entry points (`Rut::parse`, `try_format`) return these.
//! `validate` reports failure as `false` and never builds an error.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `rut-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RutError {
    #[error("RUT is empty")]
    Empty,

    #[error("'{0}' is not a RUT in the form 12.345.678-9")]
    InvalidFormat(String),

    #[error("Check digit mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch { expected: char, found: char },

    #[error("Correlative '{0}' is not numeric")]
    NonNumericCorrelative(String),

    #[error("'{0}' is not a valid check digit (expected 0-9 or K)")]
    InvalidCheckDigit(char),

    #[error("Correlative {0} is outside {min}..={max}", min = crate::rut::MIN_RUT_CORRELATIVE, max = crate::rut::MAX_RUT_CORRELATIVE)]
    CorrelativeOutOfRange(u32),
}

impl From<rut_checksum::InvalidCheckDigit> for RutError {
    fn from(e: rut_checksum::InvalidCheckDigit) -> Self {
        RutError::InvalidCheckDigit(e.0)
    }
}
