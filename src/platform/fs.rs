// toolcase - platform/fs.rs
//
// Directory tree operations: copy, remove, backup, and the application
// directory lookup. All operations are synchronous and side-effect-local:
// they touch only the paths passed in.

use crate::util::constants;
use crate::util::error::FsError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copy the directory `from` *into* `to`, recreating it as
/// `to/<name-of-from>`. Plain files at the top level are always copied;
/// subdirectories only when `recursive` is set (they are skipped silently
/// otherwise).
///
/// Fails with [`FsError::DestinationExists`] when `to/<name-of-from>`
/// already exists — an existing tree is never merged into or overwritten.
///
/// Returns the path of the created directory.
pub fn copy_dir(from: &Path, to: &Path, recursive: bool) -> Result<PathBuf, FsError> {
    if !from.is_dir() {
        return Err(FsError::SourceNotADirectory {
            path: from.to_path_buf(),
        });
    }
    let name = from.file_name().ok_or_else(|| FsError::NoName {
        path: from.to_path_buf(),
    })?;

    let dest_root = to.join(name);
    if dest_root.exists() {
        return Err(FsError::DestinationExists { path: dest_root });
    }
    fs::create_dir(&dest_root).map_err(|e| FsError::CreateDir {
        path: dest_root.clone(),
        source: e,
    })?;

    tracing::debug!(
        from = %from.display(),
        to = %dest_root.display(),
        recursive,
        "Copying directory"
    );

    let entries = fs::read_dir(from).map_err(|e| FsError::ReadDir {
        path: from.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| FsError::ReadDir {
            path: from.to_path_buf(),
            source: e,
        })?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(|e| FsError::ReadDir {
            path: entry_path.clone(),
            source: e,
        })?;

        if file_type.is_file() {
            let dest_file = dest_root.join(entry.file_name());
            fs::copy(&entry_path, &dest_file).map_err(|e| FsError::Copy {
                from: entry_path.clone(),
                to: dest_file,
                source: e,
            })?;
        } else if recursive && file_type.is_dir() {
            copy_dir(&entry_path, &dest_root, recursive)?;
        }
    }

    Ok(dest_root)
}

/// Remove a directory tree. A path that does not exist is success — the
/// caller's goal (the tree is gone) is already met.
pub fn remove_dir(path: &Path) -> Result<(), FsError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Copy `file` to a sibling backup named `<new_name>.bak`, where `new_name`
/// defaults to the file itself. An existing backup is never overwritten.
///
/// Returns the backup path.
pub fn backup_file(file: &Path, new_name: Option<&Path>) -> Result<PathBuf, FsError> {
    let base = new_name.unwrap_or(file);
    let mut backup_os = base.as_os_str().to_os_string();
    backup_os.push(constants::BACKUP_SUFFIX);
    let backup = PathBuf::from(backup_os);

    if backup.exists() {
        return Err(FsError::DestinationExists { path: backup });
    }

    fs::copy(file, &backup).map_err(|e| FsError::Copy {
        from: file.to_path_buf(),
        to: backup.clone(),
        source: e,
    })?;

    Ok(backup)
}

/// The directory the application should treat as its own.
///
/// On macOS, when the running executable lives inside a `.app` bundle, this
/// is the directory *containing* the bundle. Everywhere else it is the
/// process working directory.
pub fn app_dir() -> io::Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let exe = std::env::current_exe()?;
        if let Some(bundle) = exe
            .ancestors()
            .find(|p| p.extension().is_some_and(|ext| ext == "app"))
        {
            if let Some(parent) = bundle.parent() {
                return Ok(parent.to_path_buf());
            }
        }
    }
    std::env::current_dir()
}

// =============================================================================
// Tests
// =============================================================================
