//! filters.rs - The two sanitisation passes.
//!
//! License: MIT OR APACHE 2.0

/// Returns `true` for characters that survive [`sanitise`].
fn is_rut_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'k' || c == 'K'
}

/// Keeps ASCII digits and `K`/`k`, dropping everything else.
///
/// Order and case of the surviving characters are preserved.
///
/// # Examples
///
/// ```
/// use rut_core::sanitise;
/// assert_eq!(sanitise("23.831.058-K"), "23831058K");
/// assert_eq!(sanitise("soundk"), "k");
/// ```
pub fn sanitise(input: &str) -> String {
    input.chars().filter(|&c| is_rut_char(c)).collect()
}

/// Keeps ASCII digits only. A trailing `K` check digit is dropped too.
///
/// # Examples
///
/// ```
/// use rut_core::fully_sanitise;
/// assert_eq!(fully_sanitise("23.831.058-K"), "23831058");
/// ```
pub fn fully_sanitise(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
