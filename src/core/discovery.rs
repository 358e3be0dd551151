// toolcase - core/discovery.rs
//
// Directory scanning with wildcard filtering.
//
// Architecture note: this module uses `walkdir` for directory traversal as
// an OS abstraction (similar to using std::path::Path). It reads only
// directory entries, never file contents; hashing and copying live in the
// platform layer.
//
// Per-entry I/O errors are non-fatal and collected as warnings; only an
// invalid scan root is a hard error.

use crate::core::wildcard;
use crate::util::constants;
use crate::util::error::DiscoveryError;
use std::path::Path;

/// Options for a scan operation.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Descend into subdirectories. When false, only the top level of the
    /// folder is scanned.
    pub recursive: bool,

    /// Maximum recursion depth for a recursive scan. Clamped to
    /// [`constants::ABSOLUTE_MAX_DEPTH`].
    pub max_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            max_depth: constants::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Collect the files under `root` whose paths match `pattern`.
///
/// Convenience wrapper over [`collect_files_with_warnings`] for callers that
/// do not care about per-entry access failures.
pub fn collect_files(
    root: &Path,
    pattern: &str,
    options: &ScanOptions,
) -> Result<Vec<String>, DiscoveryError> {
    collect_files_with_warnings(root, pattern, options).map(|(files, _)| files)
}

/// Collect the files under `root` whose paths match the wildcard `pattern`
/// (see [`crate::core::wildcard`] for the dialect).
///
/// # Non-fatal errors
/// Entries that cannot be accessed due to permission or I/O errors are
/// recorded as human-readable strings in the returned warnings vector and
/// do NOT cause the function to return `Err`. The same applies to non-UTF-8
/// file names, which cannot participate in text pattern matching.
///
/// # Fatal errors
/// Returns `Err` only when the root itself is invalid (`RootNotFound`,
/// `NotADirectory`, `PermissionDenied`).
pub fn collect_files_with_warnings(
    root: &Path,
    pattern: &str,
    options: &ScanOptions,
) -> Result<(Vec<String>, Vec<String>), DiscoveryError> {
    // Pre-flight validation. `fs::metadata()` rather than `Path::exists()` /
    // `Path::is_dir()`: those helpers map ALL errors — including
    // PermissionDenied — to `false`, making it impossible to distinguish an
    // access-denied root from a path that genuinely does not exist.
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(DiscoveryError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(DiscoveryError::PermissionDenied {
                path: root.to_path_buf(),
                source: e,
            });
        }
        Err(_) => {
            return Err(DiscoveryError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
    }

    let max_depth = if options.recursive {
        options.max_depth.min(constants::ABSOLUTE_MAX_DEPTH)
    } else {
        1
    };

    tracing::debug!(
        root = %root.display(),
        pattern,
        recursive = options.recursive,
        max_depth,
        "Scan starting"
    );

    let mut candidates: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let walker = walkdir::WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let msg = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %msg, "Scan warning");
                warnings.push(msg);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.path().to_str() {
            Some(p) => candidates.push(p.to_string()),
            None => {
                warnings.push(format!(
                    "Skipping '{}': non-UTF-8 path",
                    entry.path().display()
                ));
            }
        }
    }

    let files = wildcard::filter_paths(&candidates, pattern);

    tracing::debug!(
        candidates = candidates.len(),
        matched = files.len(),
        warnings = warnings.len(),
        "Scan complete"
    );

    Ok((files, warnings))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_temp_tree() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::write(root.join("a.xml"), "<a/>").expect("write a.xml");
        fs::write(root.join("b.txt"), "b").expect("write b.txt");

        let sub = root.join("sub");
        fs::create_dir(&sub).expect("mkdir sub");
        fs::write(sub.join("c.xml"), "<c/>").expect("write c.xml");

        dir
    }

    #[test]
    fn test_top_level_scan_ignores_subdirectories() {
        let dir = make_temp_tree();
        let files = collect_files(dir.path(), "*.xml", &ScanOptions::default()).unwrap();
        assert_eq!(files.len(), 1, "expected only the top-level a.xml: {files:?}");
        assert!(files[0].ends_with("a.xml"));
    }

    #[test]
    fn test_recursive_scan_descends() {
        let dir = make_temp_tree();
        let options = ScanOptions {
            recursive: true,
            ..Default::default()
        };
        let files = collect_files(dir.path(), "*.xml", &options).unwrap();
        assert_eq!(files.len(), 2, "expected a.xml and sub/c.xml: {files:?}");
    }

    #[test]
    fn test_subpath_pattern_within_scan() {
        let dir = make_temp_tree();
        let options = ScanOptions {
            recursive: true,
            ..Default::default()
        };
        let files = collect_files(dir.path(), "/sub/*.xml", &options).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("c.xml"));
    }

    #[test]
    fn test_blank_pattern_yields_empty() {
        let dir = make_temp_tree();
        let options = ScanOptions {
            recursive: true,
            ..Default::default()
        };
        let files = collect_files(dir.path(), "  ", &options).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_root_not_found() {
        let result = collect_files(
            Path::new("/nonexistent/path/toolcase"),
            "*.txt",
            &ScanOptions::default(),
        );
        assert!(matches!(result, Err(DiscoveryError::RootNotFound { .. })));
    }

    #[test]
    fn test_root_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "content").unwrap();
        let result = collect_files(&file, "*.txt", &ScanOptions::default());
        assert!(matches!(result, Err(DiscoveryError::NotADirectory { .. })));
    }

    #[test]
    fn test_warnings_empty_on_clean_tree() {
        let dir = make_temp_tree();
        let (_, warnings) =
            collect_files_with_warnings(dir.path(), "*.txt", &ScanOptions::default()).unwrap();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }
}
