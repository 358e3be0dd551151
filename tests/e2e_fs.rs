// toolcase - tests/e2e_fs.rs
//
// End-to-end tests for the filesystem helpers.
//
// These tests exercise the real filesystem: real directory trees created
// under a tempdir, real walkdir traversal, real copies, removals, and
// digests — no mocks, no stubs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use toolcase::core::discovery::{collect_files, ScanOptions};
use toolcase::core::wildcard::filter_paths;
use toolcase::platform::fs::{backup_file, copy_dir, remove_dir};
use toolcase::platform::hash::{hash_file, HashAlgorithm};

// =============================================================================
// Helpers
// =============================================================================

/// Build a small project-like tree and return its root.
fn make_tree(root: &Path) {
    fs::create_dir_all(root.join("data")).expect("mkdir data");
    fs::write(root.join("readme.txt"), "top-level text").expect("write readme.txt");
    fs::write(root.join("config.xml"), "<config/>").expect("write config.xml");
    fs::write(root.join("data").join("values.xml"), "<values/>").expect("write values.xml");
    fs::write(root.join("data").join("notes.txt"), "nested text").expect("write notes.txt");
}

/// Map of relative path -> content for every file under `root`, for
/// byte-identical tree comparison.
fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut map = BTreeMap::new();
    for entry in all_files(root) {
        let rel = entry
            .strip_prefix(root)
            .expect("entry under root")
            .to_string_lossy()
            .replace('\\', "/");
        map.insert(rel, fs::read(&entry).expect("read file"));
    }
    map
}

fn all_files(root: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).expect("read_dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}

// =============================================================================
// Copy / remove round trip
// =============================================================================

/// Copying a tree and then removing the copy must leave the original
/// byte-identical.
#[test]
fn e2e_copy_then_remove_copy_preserves_original() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("project");
    fs::create_dir(&source).unwrap();
    make_tree(&source);

    let before = snapshot(&source);

    let dest = dir.path().join("staging");
    fs::create_dir(&dest).unwrap();
    let copy_root = copy_dir(&source, &dest, true).unwrap();

    // The copy carries the full tree.
    assert_eq!(snapshot(&copy_root), before, "copy should mirror the source");

    remove_dir(&copy_root).unwrap();
    assert!(!copy_root.exists(), "copy should be gone");

    let after = snapshot(&source);
    assert_eq!(after, before, "original tree must be untouched");
}

// =============================================================================
// Discovery + wildcard
// =============================================================================

/// A recursive scan with a bare extension pattern finds files at every depth.
#[test]
fn e2e_recursive_scan_with_extension_pattern() {
    let dir = tempfile::tempdir().unwrap();
    make_tree(dir.path());

    let options = ScanOptions {
        recursive: true,
        ..Default::default()
    };
    let files = collect_files(dir.path(), "*.xml", &options).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|f| f.rsplit('/').next().unwrap_or(f).to_string())
        .collect();
    assert!(names.contains(&"config.xml".to_string()), "expected config.xml in {names:?}");
    assert!(names.contains(&"values.xml".to_string()), "expected values.xml in {names:?}");
    assert_eq!(files.len(), 2, "txt files must not match: {files:?}");
}

/// A subpath pattern restricts matches to a named parent directory,
/// regardless of what precedes it.
#[test]
fn e2e_subpath_pattern_restricts_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    make_tree(dir.path());

    let options = ScanOptions {
        recursive: true,
        ..Default::default()
    };
    let files = collect_files(dir.path(), "/data/*.xml", &options).unwrap();
    assert_eq!(files.len(), 1, "only data/values.xml should match: {files:?}");
    assert!(files[0].ends_with("values.xml"));
}

/// The pure filter agrees with scan-then-filter on the same inputs.
#[test]
fn e2e_filter_paths_matches_scan_results() {
    let dir = tempfile::tempdir().unwrap();
    make_tree(dir.path());

    let options = ScanOptions {
        recursive: true,
        ..Default::default()
    };
    let everything = collect_files(dir.path(), "*", &options).unwrap();
    assert_eq!(everything.len(), 4);

    // Walkdir entry order is OS-dependent; compare as sorted sets.
    let mut xml_only = filter_paths(&everything, "*.xml");
    let mut scanned = collect_files(dir.path(), "*.xml", &options).unwrap();
    xml_only.sort();
    scanned.sort();
    assert_eq!(xml_only, scanned);
}

// =============================================================================
// Hashing
// =============================================================================

/// Identical content hashes identically; different content does not.
#[test]
fn e2e_hash_detects_content_change() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    fs::write(&a, b"same content").unwrap();
    fs::write(&b, b"same content").unwrap();

    let ha = hash_file(&a, HashAlgorithm::Sha256).unwrap();
    let hb = hash_file(&b, HashAlgorithm::Sha256).unwrap();
    assert_eq!(ha, hb);

    fs::write(&b, b"same content!").unwrap();
    let hb2 = hash_file(&b, HashAlgorithm::Sha256).unwrap();
    assert_ne!(ha, hb2);
}

// =============================================================================
// Backup
// =============================================================================

/// A backup is a byte-identical sibling with the .bak suffix, verified by
/// digest rather than content read.
#[test]
fn e2e_backup_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profile.toml");
    fs::write(&file, "threshold = 42\n").unwrap();

    let backup = backup_file(&file, None).unwrap();
    assert_eq!(
        hash_file(&file, HashAlgorithm::Sha256).unwrap(),
        hash_file(&backup, HashAlgorithm::Sha256).unwrap()
    );
}
