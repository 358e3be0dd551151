// toolcase - lib.rs
//
// Library entry point. Every helper is a free function with no shared
// state; host applications call them directly from wherever is convenient.
//
// Layering:
//   core     - pure logic (wildcard translation, string/path/validation
//              helpers, directory scanning via walkdir)
//   platform - OS-touching operations (tree copy/remove, hashing, dialogs)
//   util     - errors, named constants, logging setup

pub mod core;
pub mod platform;
pub mod util;

pub use crate::core::discovery::{collect_files, collect_files_with_warnings, ScanOptions};
pub use crate::core::paths::{
    last_segment, last_segment_with_separator, normalize_and_quote, normalize_separators,
};
pub use crate::core::strings::{
    full_trim, normalize_decimal_separator, quote, quote_single, split, unquote, CaseSensitivity,
};
pub use crate::core::validate::{
    any_blank, any_non_decimal, any_non_integer, is_decimal, is_integer,
};
pub use crate::core::wildcard::{filter_paths, translate};
pub use crate::platform::fs::{app_dir, backup_file, copy_dir, remove_dir};
pub use crate::platform::hash::{hash_file, HashAlgorithm};
pub use crate::util::error::{DiscoveryError, FsError, Result, ToolcaseError};
