// toolcase - core/strings.rs
//
// Small string helpers shared across the crate and by host applications.

/// Whether [`split`] compares the separator case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

/// Wrap a string in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// Wrap a string in single quotes.
pub fn quote_single(s: &str) -> String {
    format!("'{s}'")
}

/// Remove every `"` character.
///
/// For input without embedded quotes, `unquote(&quote(s)) == s`.
pub fn unquote(s: &str) -> String {
    s.replace('"', "")
}

/// Remove ALL whitespace: leading, trailing, and interior runs, including
/// tabs and newlines.
pub fn full_trim(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Replace `,` with `.` so locale-formatted numbers parse with the standard
/// decimal point.
pub fn normalize_decimal_separator(s: &str) -> String {
    s.replace(',', ".")
}

/// Split `s` on a separator string, optionally ignoring case.
///
/// Empty fields between adjacent separators are preserved, and an input with
/// no separator occurrence yields a single-element vector containing the
/// whole input. An empty separator never matches.
pub fn split(s: &str, separator: &str, case: CaseSensitivity) -> Vec<String> {
    if separator.is_empty() {
        return vec![s.to_string()];
    }

    if case == CaseSensitivity::Sensitive {
        return s.split(separator).map(str::to_string).collect();
    }

    // Case-insensitive matching walks chars rather than lowercasing the
    // haystack wholesale: case folding can change byte lengths, which would
    // break slicing back into the original string.
    let chars: Vec<char> = s.chars().collect();
    let sep: Vec<char> = separator.chars().collect();
    let chars_eq =
        |a: char, b: char| a.to_lowercase().collect::<String>() == b.to_lowercase().collect::<String>();

    let mut parts = Vec::new();
    let mut field_start = 0;
    let mut i = 0;
    while i + sep.len() <= chars.len() {
        if chars[i..i + sep.len()]
            .iter()
            .zip(&sep)
            .all(|(&a, &b)| chars_eq(a, b))
        {
            parts.push(chars[field_start..i].iter().collect());
            i += sep.len();
            field_start = i;
        } else {
            i += 1;
        }
    }
    parts.push(chars[field_start..].iter().collect());
    parts
}
