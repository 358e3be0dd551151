// toolcase - core/paths.rs
//
// Path text helpers. These operate on path *strings*, not std::path::Path:
// the callers shuttle paths through text fields, command lines, and config
// values where both separator styles and stray quotes show up.

use crate::core::strings;

/// Convert every `\` separator to `/`.
///
/// Idempotent: normalizing an already-normalized path returns it unchanged.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// The text after the final separator, with any `"` characters stripped.
///
/// A path with no separator is returned whole (minus quotes).
pub fn last_segment(path: &str) -> String {
    let normalized = normalize_separators(path);
    let tail = match normalized.rfind('/') {
        Some(idx) => &normalized[idx + 1..],
        None => normalized.as_str(),
    };
    strings::unquote(tail)
}

/// Like [`last_segment`], but keeps the leading `/` when one is present.
/// Useful when the result is appended to a directory path directly.
pub fn last_segment_with_separator(path: &str) -> String {
    let normalized = normalize_separators(path);
    let tail = match normalized.rfind('/') {
        Some(idx) => &normalized[idx..],
        None => normalized.as_str(),
    };
    strings::unquote(tail)
}

/// Separator normalization followed by double-quoting, for handing a path
/// to shell-like consumers in one step.
pub fn normalize_and_quote(path: &str) -> String {
    strings::quote(&normalize_separators(path))
}
