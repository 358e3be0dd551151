// toolcase - core/wildcard.rs
//
// Wildcard -> regex translation and path-list filtering.
//
// The dialect: `*` matches any sequence, `?` matches any single character,
// and a pattern containing a separator matches whole subpaths. Both `\` and
// `/` are accepted as separators so patterns written on Windows work
// unchanged on Unix and vice versa.
//
// Examples:
//   *.xml          any file ending in .xml, in any directory
//   report?.txt    report1.txt, reportA.txt, ... as a full final segment
//   /sub/*.xml     any .xml directly inside a directory named "sub",
//                  regardless of what precedes /sub/

use crate::core::paths::normalize_separators;
use regex::Regex;

/// Translate a wildcard pattern into an anchored regex.
///
/// Returns `None` for a blank (empty or whitespace-only) pattern, which
/// callers treat as "match nothing".
///
/// Translation steps, in order:
/// 1. Normalize `\` to `/` so one pattern covers both separator styles.
/// 2. Regex-escape the pattern, then substitute the escaped `\*` / `\?`
///    back to `.*` / `.` — user wildcards must survive escaping exactly
///    once, everything else (dots, parens, brackets) stays literal.
/// 3. A pattern with no leading wildcard or separator gets a `/` prefix so
///    it can only match a full final path segment.
/// 4. A pattern starting with a separator gets a `.*` prefix so it may
///    appear after any directory prefix (it is not anchored to the root).
/// 5. Anchor with `^...$` — matching is full-string, never substring.
pub fn translate(pattern: &str) -> Option<Regex> {
    if pattern.trim().is_empty() {
        return None;
    }

    let mut expr = regex::escape(&normalize_separators(pattern));
    expr = expr.replace("\\*", ".*");
    expr = expr.replace("\\?", ".");

    // `/` is not a regex metacharacter, so the escape above leaves it alone
    // and these prefix checks see it directly.
    if !expr.starts_with('/') && !expr.starts_with('.') {
        expr.insert(0, '/');
    }
    if expr.starts_with('/') {
        expr.insert_str(0, ".*");
    }

    let anchored = format!("^{expr}$");
    match Regex::new(&anchored) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!(pattern, regex = %anchored, error = %e, "Wildcard translation produced an invalid regex");
            None
        }
    }
}

/// Filter a list of paths down to those matching `pattern`.
///
/// Candidates are separator-normalized before matching so `C:\logs\a.txt`
/// and `C:/logs/a.txt` match identically; the returned entries are the
/// caller's originals, untouched. A blank pattern yields an empty list.
pub fn filter_paths<S: AsRef<str>>(paths: &[S], pattern: &str) -> Vec<String> {
    let Some(regex) = translate(pattern) else {
        return Vec::new();
    };

    paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| regex.is_match(&normalize_separators(p)))
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
