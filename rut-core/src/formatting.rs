//! Display formatting for RUTs.
//!
//! `format` is a presentation transform only: it trusts that the last
//! character is the check digit and never validates. Use [`try_format`] when
//! the input comes from somewhere untrusted.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{CHECK_SEPARATOR, GROUP_SEPARATOR};
use crate::errors::RutError;
use crate::sanitizers::fully_sanitise;
use crate::validators::split_check_char;

/// Inserts `separator` every three digits, counting from the right.
///
/// `digits` is expected to be ASCII; `"1108244"` becomes `"1.108.244"`.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Reads a correlative the way a number would be read: separators ignored,
/// leading zeros dropped, and no digits at all meaning zero.
pub fn normalise_correlative(correlative: &str) -> String {
    let digits = fully_sanitise(correlative);
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Assembles a RUT from already-normalised correlative digits and a check
/// character.
pub fn render(correlative: &str, check: char, dots: bool, hyphen: bool) -> String {
    let mut out = if dots {
        group_thousands(correlative, GROUP_SEPARATOR)
    } else {
        correlative.to_string()
    };
    if hyphen {
        out.push(CHECK_SEPARATOR);
    }
    out.push(check);
    out
}

/// Formats a sanitised RUT for display.
///
/// The last character is kept as the check digit, case included; the rest is
/// the correlative, grouped with dots. An empty input gives an empty string.
///
/// # Examples
///
/// ```
/// use rut_core::format;
/// assert_eq!(format("108"), "10-8");
/// assert_eq!(format("11082440"), "1.108.244-0");
/// assert_eq!(format("13750460k"), "13.750.460-k");
/// ```
pub fn format(rut: &str) -> String {
    match split_check_char(rut) {
        Some((correlative, check)) => render(&normalise_correlative(correlative), check, true, true),
        None => String::new(),
    }
}

/// Checked variant of [`format`].
///
/// Fails when the input is empty, when the correlative holds anything besides
/// digits and separators, or when the last character cannot be a check digit.
/// Already formatted input is accepted and re-rendered.
pub fn try_format(rut: &str) -> Result<String, RutError> {
    let (correlative, check) = split_check_char(rut).ok_or(RutError::Empty)?;

    let is_numeric = correlative
        .chars()
        .all(|c| c.is_ascii_digit() || c == GROUP_SEPARATOR || c == CHECK_SEPARATOR);
    if !is_numeric {
        return Err(RutError::NonNumericCorrelative(correlative.to_string()));
    }
    rut_checksum::CheckDigit::from_char(check)?;

    Ok(render(&normalise_correlative(correlative), check, true, true))
}
