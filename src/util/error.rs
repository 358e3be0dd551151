// toolcase - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error carries the path it refers to; I/O causes are kept as
// `source` so callers can log the full chain.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all toolcase operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ToolcaseError {
    /// Directory scanning failed.
    Discovery(DiscoveryError),

    /// A filesystem operation (copy, remove, backup, hash) failed.
    Fs(FsError),
}

impl fmt::Display for ToolcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discovery(e) => write!(f, "Scan error: {e}"),
            Self::Fs(e) => write!(f, "Filesystem error: {e}"),
        }
    }
}

impl std::error::Error for ToolcaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Discovery(e) => Some(e),
            Self::Fs(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Discovery errors
// ---------------------------------------------------------------------------

/// Errors related to directory scanning.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The scan root does not exist.
    RootNotFound { path: PathBuf },

    /// The scan root is not a directory.
    NotADirectory { path: PathBuf },

    /// Permission denied accessing the scan root.
    PermissionDenied { path: PathBuf, source: io::Error },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(f, "Scan path '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Scan path '{}' is not a directory", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DiscoveryError> for ToolcaseError {
    fn from(e: DiscoveryError) -> Self {
        Self::Discovery(e)
    }
}

// ---------------------------------------------------------------------------
// Filesystem errors
// ---------------------------------------------------------------------------

/// Errors related to tree copy/remove, backups, and hashing.
#[derive(Debug)]
pub enum FsError {
    /// The copy source is not a directory.
    SourceNotADirectory { path: PathBuf },

    /// The copy source path has no final name component to recreate.
    NoName { path: PathBuf },

    /// The copy or backup target already exists; nothing is overwritten.
    DestinationExists { path: PathBuf },

    /// Creating a directory failed.
    CreateDir { path: PathBuf, source: io::Error },

    /// Copying a single file failed.
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// Removing a directory tree failed.
    Remove { path: PathBuf, source: io::Error },

    /// Reading a directory's entries failed.
    ReadDir { path: PathBuf, source: io::Error },

    /// Opening a file for hashing failed.
    Open { path: PathBuf, source: io::Error },

    /// Reading file content during hashing failed.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotADirectory { path } => {
                write!(f, "Source '{}' is not a directory", path.display())
            }
            Self::NoName { path } => {
                write!(f, "Source '{}' has no name component", path.display())
            }
            Self::DestinationExists { path } => {
                write!(f, "Destination '{}' already exists", path.display())
            }
            Self::CreateDir { path, source } => {
                write!(f, "Cannot create directory '{}': {source}", path.display())
            }
            Self::Copy { from, to, source } => write!(
                f,
                "Cannot copy '{}' to '{}': {source}",
                from.display(),
                to.display()
            ),
            Self::Remove { path, source } => {
                write!(f, "Cannot remove '{}': {source}", path.display())
            }
            Self::ReadDir { path, source } => {
                write!(f, "Cannot read directory '{}': {source}", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "Cannot open '{}': {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::Copy { source, .. }
            | Self::Remove { source, .. }
            | Self::ReadDir { source, .. }
            | Self::Open { source, .. }
            | Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FsError> for ToolcaseError {
    fn from(e: FsError) -> Self {
        Self::Fs(e)
    }
}

/// Convenience type alias for toolcase results.
pub type Result<T> = std::result::Result<T, ToolcaseError>;
