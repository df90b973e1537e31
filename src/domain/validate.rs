//! Character-class predicates for raw string values

const DIGITS: &str = "0123456789";

/// True if `value` is present, non-empty and made only of the ASCII digits `0-9`.
///
/// This is a narrow check, not numeric parsing: signs, decimal points and
/// exponents are all rejected.
///
/// # Examples
/// ```
/// use script_template::is_numeric;
///
/// assert!(is_numeric("123"));
/// assert!(!is_numeric("-1"));
/// assert!(!is_numeric(None::<&str>));
/// ```
pub fn is_numeric<'a>(value: impl Into<Option<&'a str>>) -> bool {
    match value.into() {
        Some(s) if !s.is_empty() => s.chars().all(|c| DIGITS.contains(c)),
        _ => false,
    }
}

/// True if `value` is present, non-empty and made only of ASCII letters.
pub fn is_alpha<'a>(value: impl Into<Option<&'a str>>) -> bool {
    match value.into() {
        Some(s) if !s.is_empty() => s.chars().all(|c| c.is_ascii_alphabetic()),
        _ => false,
    }
}
