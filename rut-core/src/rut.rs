//! rut.rs - The canonical, validated RUT value type.
//!
//! A [`Rut`] can only be built from input that passes validation and whose
//! canonical rendering passes validation too (or from an in-range correlative,
//! in which case the check digit is computed). Holding one is proof of a
//! well-formed, checksum-correct RUT, and its `Display` output always parses
//! back to an equal value.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::debug;
use rut_checksum::compute_check_digit;
use serde::{Deserialize, Serialize};

use crate::errors::RutError;
use crate::formatting::render;
use crate::sanitizers::sanitise;
use crate::validators::{has_valid_layout, split_check_char};

/// Smallest correlative whose canonical form (`10-8`) meets the 4 character minimum.
pub const MIN_RUT_CORRELATIVE: u32 = 10;
/// Largest correlative whose canonical form (`99.999.999-9`) meets the 12 character maximum.
pub const MAX_RUT_CORRELATIVE: u32 = 99_999_999;

/// A validated RUT: a numeric correlative plus its check character.
///
/// The check character keeps the case it was parsed with, so
/// `"13.750.460-k"` displays back with a lower-case `k`. Equality and hashing
/// only look at the correlative, since the check digit follows from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut {
    correlative: u32,
    check: char,
}

impl Rut {
    /// Parses and validates a RUT in the `12.345.678-5` layout.
    ///
    /// Input that validates but whose canonical form would not (such as
    /// `01-9`, which renders as `1-9`) is rejected with
    /// [`RutError::InvalidFormat`].
    pub fn parse(input: &str) -> Result<Self, RutError> {
        if input.is_empty() {
            return Err(RutError::Empty);
        }
        if !has_valid_layout(input) {
            return Err(RutError::InvalidFormat(input.to_string()));
        }

        let sanitised = sanitise(input);
        let (correlative, found) =
            split_check_char(&sanitised).ok_or_else(|| RutError::InvalidFormat(input.to_string()))?;

        let expected = compute_check_digit(correlative.as_bytes());
        if !expected.matches_char(found) {
            debug!("Refusing to build Rut: check digit mismatch");
            return Err(RutError::ChecksumMismatch { expected: expected.as_char(), found });
        }

        // The layout caps the correlative at eight digits, so it always fits.
        let correlative = correlative
            .parse::<u32>()
            .map_err(|_| RutError::NonNumericCorrelative(correlative.to_string()))?;

        let rut = Self { correlative, check: found };
        if !has_valid_layout(&rut.to_string()) {
            debug!("Refusing to build Rut: canonical form falls outside the accepted layout");
            return Err(RutError::InvalidFormat(input.to_string()));
        }
        Ok(rut)
    }

    /// Builds a RUT from its correlative, computing the check digit.
    ///
    /// The correlative must lie in [`MIN_RUT_CORRELATIVE`]..=[`MAX_RUT_CORRELATIVE`].
    pub fn from_correlative(correlative: u32) -> Result<Self, RutError> {
        if !(MIN_RUT_CORRELATIVE..=MAX_RUT_CORRELATIVE).contains(&correlative) {
            return Err(RutError::CorrelativeOutOfRange(correlative));
        }
        let check = compute_check_digit(correlative.to_string().as_bytes()).as_char();
        Ok(Self { correlative, check })
    }

    /// The numeric body of the RUT.
    pub fn correlative(&self) -> u32 {
        self.correlative
    }

    /// The check character, in the case it was supplied.
    pub fn check_digit(&self) -> char {
        self.check
    }

    /// The sanitised form, e.g. `23831058K`.
    pub fn to_compact(&self) -> String {
        render(&self.correlative.to_string(), self.check, false, false)
    }
}

impl PartialEq for Rut {
    fn eq(&self, other: &Self) -> bool {
        self.correlative == other.correlative
    }
}

impl Eq for Rut {}

impl Hash for Rut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.correlative.hash(state);
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.correlative.to_string(), self.check, true, true))
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rut::parse(s)
    }
}

impl TryFrom<String> for Rut {
    type Error = RutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rut::parse(&s)
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> String {
        rut.to_string()
    }
}
