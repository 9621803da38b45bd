// rut-checksum/src/digit/mod.rs
use core::fmt;

/// The single trailing character of a RUT: `0`-`9` or `K`.
///
/// The inner value is kept private and is always in `0..=10`, where `10`
/// stands for `K`. Build one with [`CheckDigit::from_digit`],
/// [`CheckDigit::from_char`] or the [`CheckDigit::K`] constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigit(u8);

/// Error returned when a character cannot be a check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCheckDigit(pub char);

impl fmt::Display for InvalidCheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid check digit (expected 0-9 or K)", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCheckDigit {}

impl CheckDigit {
    /// The letter `K`, used when the checksum evaluates to 10.
    pub const K: CheckDigit = CheckDigit(10);

    /// A decimal check digit. Returns `None` for anything above 9.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit <= 9 {
            Some(CheckDigit(digit))
        } else {
            None
        }
    }

    /// Maps `11 - (sum mod 11)` onto its character class.
    ///
    /// `11` becomes `0`, `10` becomes `K`, anything else is the digit itself.
    /// Only `1..=11` can come out of the checksum; other values are reduced
    /// modulo 11 first.
    pub fn from_remainder_complement(result: u32) -> Self {
        match result % 11 {
            0 => CheckDigit(0),
            10 => CheckDigit::K,
            n => CheckDigit(n as u8),
        }
    }

    /// Parses `0`-`9`, `k` or `K`.
    pub fn from_char(c: char) -> Result<Self, InvalidCheckDigit> {
        match c {
            '0'..='9' => Ok(CheckDigit(c as u8 - b'0')),
            'k' | 'K' => Ok(CheckDigit::K),
            other => Err(InvalidCheckDigit(other)),
        }
    }

    /// The numeric value, or `None` for `K`.
    pub fn digit(self) -> Option<u8> {
        if self.is_k() { None } else { Some(self.0) }
    }

    pub fn is_k(self) -> bool {
        self == CheckDigit::K
    }

    /// Canonical upper-case character.
    pub fn as_char(self) -> char {
        match self.digit() {
            Some(d) => (b'0' + d) as char,
            None => 'K',
        }
    }

    /// Case-insensitive comparison against a supplied character.
    pub fn matches_char(self, c: char) -> bool {
        self.as_char().eq_ignore_ascii_case(&c)
    }
}

impl TryFrom<char> for CheckDigit {
    type Error = InvalidCheckDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        CheckDigit::from_char(c)
    }
}

impl From<CheckDigit> for char {
    fn from(d: CheckDigit) -> char {
        d.as_char()
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
