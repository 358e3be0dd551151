// toolcase - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Crate metadata
// =============================================================================

/// Crate display name.
pub const CRATE_NAME: &str = "toolcase";

/// Current crate version.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Scan limits
// =============================================================================

/// Default directory recursion depth for recursive scans.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Hard upper bound on scan depth (prevents runaway traversal through
/// symlink-free but pathologically deep trees).
pub const ABSOLUTE_MAX_DEPTH: usize = 64;

// =============================================================================
// Hashing
// =============================================================================

/// Read chunk size in bytes for streaming file hashing.
pub const HASH_CHUNK_SIZE: usize = 8 * 1024; // 8 KiB

// =============================================================================
// Filesystem
// =============================================================================

/// Suffix appended to the target name by `backup_file`.
pub const BACKUP_SUFFIX: &str = ".bak";

// =============================================================================
// Dialogs
// =============================================================================

/// Window title for the yes/no and yes/no/cancel question dialogs.
pub const QUESTION_DIALOG_TITLE: &str = "Are you sure?";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor an explicit level is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";
