// toolcase - core/validate.rs
//
// Input-field validation. The list-wide checks answer "is anything wrong
// with these fields?" so callers can gate a form submit on a single bool.

/// True when `s` parses as a whole integer. Leading/trailing whitespace is
/// tolerated, matching the behavior of typical GUI number fields.
pub fn is_integer(s: &str) -> bool {
    s.trim().parse::<i64>().is_ok()
}

/// True when `s` parses as a decimal number (scientific notation included).
pub fn is_decimal(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

/// True when any entry trims to the empty string.
pub fn any_blank<S: AsRef<str>>(items: &[S]) -> bool {
    items.iter().any(|s| s.as_ref().trim().is_empty())
}

/// True when any entry fails the integer check.
pub fn any_non_integer<S: AsRef<str>>(items: &[S]) -> bool {
    items.iter().any(|s| !is_integer(s.as_ref()))
}

/// True when any entry fails the decimal check.
pub fn any_non_decimal<S: AsRef<str>>(items: &[S]) -> bool {
    items.iter().any(|s| !is_decimal(s.as_ref()))
}
